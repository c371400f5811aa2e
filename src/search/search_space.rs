use crate::search::{
    generate_successors, Action, Cost, Heuristic, HeuristicValue, NodeId, Plan, SearchNode,
    Solution, TaxiState, NO_NODE,
};
use segvec::{Linear, SegVec};
use std::collections::HashSet;

/// A [`SearchSpace`] owns every node created during one search run, together
/// with the set of states explored so far. Nodes are addressed by
/// [`NodeId`] and refer to their parent by id, so the ancestry of any node
/// can be walked without reference cycles.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    explored: HashSet<TaxiState>,
}

impl SearchSpace {
    pub fn new(initial_state: TaxiState, heuristic: &dyn Heuristic) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(
            root_node_id,
            initial_state,
            heuristic.evaluate(&initial_state),
        ));

        Self {
            root_node_id,
            nodes,
            explored: HashSet::new(),
        }
    }

    /// Create a child of `parent_id`. Its g-value is the parent's plus
    /// `step_cost`, its f-value adds the heuristic estimate of `state`.
    pub fn insert_node(
        &mut self,
        state: TaxiState,
        parent_id: NodeId,
        action: Action,
        step_cost: Cost,
        heuristic: &dyn Heuristic,
    ) -> NodeId {
        let h = heuristic.evaluate(&state);
        self.push_child(state, parent_id, action, step_cost, h)
    }

    fn push_child(
        &mut self,
        state: TaxiState,
        parent_id: NodeId,
        action: Action,
        step_cost: Cost,
        h: HeuristicValue,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_with_parent(
            node_id,
            state,
            self.get_node(parent_id),
            action,
            step_cost,
            h,
        );
        self.nodes.push(node);
        node_id
    }

    /// Generate one child per action, legal or not, in action order. Illegal
    /// actions produce a child with an unchanged state and the penalty cost.
    pub fn expand(&mut self, node_id: NodeId, heuristic: &dyn Heuristic) -> Vec<NodeId> {
        let state = *self.get_node(node_id).get_state();
        let successors: Vec<_> = generate_successors(&state).collect();
        let child_states: Vec<TaxiState> = successors
            .iter()
            .map(|(_, successor)| successor.state)
            .collect();
        let h_values = heuristic.evaluate_batch(&child_states);

        successors
            .into_iter()
            .zip(h_values)
            .map(|((action, successor), h)| {
                self.push_child(successor.state, node_id, action, successor.cost(), h)
            })
            .collect()
    }

    /// Mark a state as explored. Returns `false` if it already was.
    pub fn mark_explored(&mut self, state: TaxiState) -> bool {
        self.explored.insert(state)
    }

    pub fn is_explored(&self, state: &TaxiState) -> bool {
        self.explored.contains(state)
    }

    pub fn num_explored(&self) -> usize {
        self.explored.len()
    }

    /// Walk the parent ids from `goal_id` back to the root and return the
    /// actions in execution order, with the total reward of the path.
    pub fn extract_solution(&self, goal_id: NodeId) -> Solution {
        let goal_node = self.get_node(goal_id);
        let mut steps = vec![];
        let mut current_node = goal_node;
        while NO_NODE != current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action);
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Solution::new(Plan::new(steps), -goal_node.get_g())
    }

    pub fn get_root_node(&self) -> &SearchNode {
        self.get_node(self.root_node_id)
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
