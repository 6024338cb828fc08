use std::fmt::Debug;

use itertools::Itertools;

use crate::col::set_with_capacity;
use crate::primitives::Value;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIdx(pub u32);

impl Debug for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("n#{}", self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePayload {
    pub value: Value,
    pub next: Option<NodeIdx>,
}

/// A singly linked list backed by an arena of nodes addressed by index.
/// `None` is the end-of-list sentinel; node slots never move once allocated.
#[derive(Debug, Clone)]
pub struct List {
    nodes: Vec<NodePayload>,
    head: Option<NodeIdx>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FromRawError {
    HeadOutOfRange { head: NodeIdx },
    NextOutOfRange { node_idx: NodeIdx, next: NodeIdx },
    VisitedTwice { node_idx: NodeIdx },
    Unreachable { node_idx: NodeIdx },
}

impl List {
    pub fn new() -> Self {
        List {
            nodes: vec![],
            head: None,
        }
    }

    /// Builds a list whose traversal order equals the order of `values`.
    /// Construction is prepend-based: the sequence is consumed back to front.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut list = List::new();
        for value in values.into_iter().rev() {
            list.prepend(value);
        }
        list
    }

    /// Allocates a node in front of the current head and makes it the head.
    pub fn prepend(&mut self, value: Value) -> NodeIdx {
        let node_idx = NodeIdx(self.nodes.len().try_into().unwrap());
        self.nodes.push(NodePayload {
            value,
            next: self.head,
        });
        self.head = Some(node_idx);
        node_idx
    }

    pub fn head(&self) -> Option<NodeIdx> {
        self.head
    }

    pub fn set_head(&mut self, head: Option<NodeIdx>) {
        self.head = head;
    }

    pub fn node(&self, node_idx: NodeIdx) -> &NodePayload {
        &self.nodes[node_idx.0 as usize]
    }

    pub fn node_mut(&mut self, node_idx: NodeIdx) -> &mut NodePayload {
        &mut self.nodes[node_idx.0 as usize]
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks the list front to back, yielding node indices. The walk is
    /// bounded by the arena size; exceeding it means a `next` cycle was
    /// linked in by hand, which violates the list precondition.
    pub fn traverse(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        let mut cur = self.head;
        let mut steps = 0usize;
        std::iter::from_fn(move || {
            let node_idx = cur?;
            steps += 1;
            assert!(
                steps <= self.nodes.len(),
                "Traversal took more steps than the arena has nodes, cycle through {:?}",
                node_idx
            );
            cur = self.node(node_idx).next;
            Some(node_idx)
        })
    }

    /// The values in traversal order.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.traverse().map(|node_idx| self.node(node_idx).value)
    }

    pub fn describe(&self) -> String {
        self.values().join(" -> ")
    }

    /// Checks the list invariants: head and all `next` indices in range,
    /// no node reached twice (cycles, double ownership), no orphaned
    /// arena slot.
    pub fn validate(&self) -> Result<(), FromRawError> {
        if let Some(head) = self.head {
            if head.0 as usize >= self.nodes.len() {
                return Err(FromRawError::HeadOutOfRange { head });
            }
        }

        let mut seen = set_with_capacity(self.nodes.len());
        let mut cur = self.head;
        while let Some(node_idx) = cur {
            if !seen.insert(node_idx) {
                return Err(FromRawError::VisitedTwice { node_idx });
            }
            let next = self.node(node_idx).next;
            if let Some(next) = next {
                if next.0 as usize >= self.nodes.len() {
                    return Err(FromRawError::NextOutOfRange { node_idx, next });
                }
            }
            cur = next;
        }

        if seen.len() < self.nodes.len() {
            let node_idx = (0..self.nodes.len() as u32)
                .map(NodeIdx)
                .find(|it| !seen.contains(it))
                .unwrap();
            return Err(FromRawError::Unreachable { node_idx });
        }
        Ok(())
    }

    /// Assembles a list from raw arena parts, accepting it only if the
    /// invariants hold.
    pub fn try_from_raw(
        nodes: Vec<NodePayload>,
        head: Option<NodeIdx>,
    ) -> Result<Self, FromRawError> {
        let list = List { nodes, head };
        list.validate()?;
        Ok(list)
    }
}
