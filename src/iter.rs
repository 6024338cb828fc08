pub struct PairwiseSwapped<I: Iterator> {
    inner: I,
    pending: Option<I::Item>,
}

impl<I: Iterator> Iterator for PairwiseSwapped<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(first) = self.pending.take() {
            return Some(first);
        }
        let first = self.inner.next()?;
        match self.inner.next() {
            // Trailing unpaired element, passed through unchanged.
            None => Some(first),
            Some(second) => {
                self.pending = Some(first);
                Some(second)
            }
        }
    }
}

pub trait PairwiseSwap: Iterator + Sized {
    /// Yields the elements with every adjacent pair exchanged.
    fn pairwise_swapped(self) -> PairwiseSwapped<Self>;
}

impl<I: Iterator> PairwiseSwap for I {
    fn pairwise_swapped(self) -> PairwiseSwapped<I> {
        PairwiseSwapped {
            inner: self,
            pending: None,
        }
    }
}
