use itertools::Itertools;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::col::{map_with_capacity, HashMap};
use crate::iter::PairwiseSwap;
use crate::list::List;
use crate::primitives::Value;
use crate::swap::{pairwise_swap_relink, pairwise_swap_values};

fn value_counts(values: impl Iterator<Item = Value>, capacity: usize) -> HashMap<Value, usize> {
    let mut counts = map_with_capacity(capacity);
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

pub fn run(seed: u64) {
    let max_len = 257;
    let value_range = -1_000..1_000;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let len = rng.gen_range(0..max_len);
    let values = (0..len)
        .map(|_| rng.gen_range(value_range.clone()))
        .collect_vec();
    debug!("Seed {}: list of length {}", seed, len);

    let expected = values.iter().copied().pairwise_swapped().collect_vec();

    // Value strategy: payloads move, topology stays.
    let mut list = List::from_values(values.iter().copied());
    let order_before = list.traverse().collect_vec();
    pairwise_swap_values(&mut list);
    assert_eq!(list.num_nodes(), values.len(), "Seed {}", seed);
    assert_eq!(list.values().collect_vec(), expected, "Seed {}", seed);
    assert_eq!(
        list.traverse().collect_vec(),
        order_before,
        "Seed {}: value swap must not relink",
        seed
    );
    pairwise_swap_values(&mut list);
    assert_eq!(
        list.values().collect_vec(),
        values,
        "Seed {}: double swap must restore the input",
        seed
    );

    // Relink strategy: topology moves, payloads stay.
    let mut list = List::from_values(values.iter().copied());
    let order_before = list.traverse().collect_vec();
    pairwise_swap_relink(&mut list);
    list.validate().unwrap_or_else(|err| {
        panic!("Seed {}: list invalid after relink: {:?}", seed, err);
    });
    assert_eq!(list.values().collect_vec(), expected, "Seed {}", seed);
    assert_eq!(
        value_counts(list.values(), values.len()),
        value_counts(values.iter().copied(), values.len()),
        "Seed {}: value multiset changed",
        seed
    );
    assert_eq!(
        list.traverse().collect_vec(),
        order_before.iter().copied().pairwise_swapped().collect_vec(),
        "Seed {}: node identities must swap pairwise",
        seed
    );
    pairwise_swap_relink(&mut list);
    list.validate().unwrap_or_else(|err| {
        panic!("Seed {}: list invalid after double relink: {:?}", seed, err);
    });
    assert_eq!(
        list.traverse().collect_vec(),
        order_before,
        "Seed {}: double relink must restore every node position",
        seed
    );
}

pub fn run_samples(num_samples: u64) {
    (0..num_samples).into_par_iter().for_each(run);
    info!("All {} random samples passed", num_samples);
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::*;

    #[test]
    fn test_random_samples() {
        env_logger::builder().filter_level(LevelFilter::Info).init();
        run_samples(200);
    }
}
