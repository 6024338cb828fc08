use std::time::Duration;

use clap::ValueEnum;

use crate::list::{List, NodeIdx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Exchange the payload values of each pair; the link structure is untouched.
    Values,
    /// Relink each pair so the second node precedes the first, preserving node identity.
    Relink,
}

impl Strategy {
    pub fn apply(self, list: &mut List) -> Option<NodeIdx> {
        match self {
            Strategy::Values => pairwise_swap_values(list),
            Strategy::Relink => pairwise_swap_relink(list),
        }
    }
}

#[derive(Debug)]
pub struct SwapStats {
    pub strategy: Strategy,
    pub num_nodes: usize,
    /// Complete pairs exchanged; a trailing unpaired node is not counted.
    pub num_pairs: usize,
    pub computation_time: Duration,
}

/// Exchanges the two payload values of each adjacent pair, front to back.
/// A list with fewer than two remaining nodes is left as is, so empty and
/// single-node lists pass through unchanged. Returns the head, which this
/// strategy never moves.
pub fn pairwise_swap_values(list: &mut List) -> Option<NodeIdx> {
    let mut cur = list.head();
    while let Some(first) = cur {
        let Some(second) = list.node(first).next else {
            break;
        };
        let first_value = list.node(first).value;
        list.node_mut(first).value = list.node(second).value;
        list.node_mut(second).value = first_value;
        cur = list.node(second).next;
    }
    list.head()
}

/// Relinks each adjacent pair so the second node precedes the first,
/// front to back. `prev_tail` tracks the tail of the previously swapped
/// pair; `None` marks the first pair, whose second node becomes the new
/// head. Returns the new head.
pub fn pairwise_swap_relink(list: &mut List) -> Option<NodeIdx> {
    let mut prev_tail: Option<NodeIdx> = None;
    let mut cur = list.head();
    while let Some(first) = cur {
        let Some(second) = list.node(first).next else {
            break;
        };
        let after_pair = list.node(second).next;

        // Reverse the pair and reattach it to what precedes and follows.
        list.node_mut(second).next = Some(first);
        list.node_mut(first).next = after_pair;
        match prev_tail {
            None => list.set_head(Some(second)),
            Some(tail) => list.node_mut(tail).next = Some(second),
        }

        prev_tail = Some(first);
        cur = after_pair;
    }
    list.head()
}
