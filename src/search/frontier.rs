//! Open lists for the search engines. Each frontier fixes the order in which
//! pending nodes are handed back to the shared expansion loop.

use crate::search::{Cost, NodeId, SearchNode};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;
use std::fmt::Debug;

pub trait Frontier: Debug {
    fn push(&mut self, node: &SearchNode);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.queue.push_back(node.get_node_id());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.stack.push(node.get_node_id());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Lowest f-value first. Ties go to the node pushed earliest, using a
/// sequence number stored next to the f-value, so the pop order does not
/// depend on how the underlying heap breaks ties.
#[derive(Debug)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(Cost, u64)>>,
    next_sequence: u64,
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: &SearchNode) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue
            .push(node.get_node_id(), Reverse((node.get_f(), sequence)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
