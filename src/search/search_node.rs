use crate::search::{Action, Cost, HeuristicValue, TaxiState};

/// Index of a node in its [`SearchSpace`](crate::search::SearchSpace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Sentinel parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is a node in the search tree. It records the state, how
/// it was reached and what it cost to get there. Nodes are never modified
/// once created; a child points to its parent by id and parents do not know
/// their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Unique identifier of the node within its search space
    node_id: NodeId,
    state: TaxiState,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
    /// Action that led to this node, `None` for the root
    action: Option<Action>,
    /// G-value of the node, i.e. the accumulated path cost.
    g: Cost,
    /// F-value of the node, the g-value plus the heuristic estimate. Equal to
    /// the g-value when searching without a heuristic.
    f: Cost,
}

impl SearchNode {
    /// Create the root node of a search. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId, state: TaxiState, h: HeuristicValue) -> Self {
        Self {
            node_id,
            state,
            parent_id: NO_NODE,
            action: None,
            g: 0,
            f: h,
        }
    }

    /// Create a child of `parent` reached via `action` with the given step
    /// cost.
    pub fn new_with_parent(
        node_id: NodeId,
        state: TaxiState,
        parent: &SearchNode,
        action: Action,
        step_cost: Cost,
        h: HeuristicValue,
    ) -> Self {
        let g = parent.g + step_cost;
        Self {
            node_id,
            state,
            parent_id: parent.node_id,
            action: Some(action),
            g,
            f: g + h,
        }
    }

    pub fn reached_goal(&self) -> bool {
        self.state.is_goal()
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &TaxiState {
        &self.state
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }

    pub fn get_action(&self) -> Option<Action> {
        self.action
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_f(&self) -> Cost {
        self.f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_accumulate() {
        let root_state = TaxiState::new(0, 0, 1, 0).unwrap();
        let root = SearchNode::new_without_parent(NodeId::new(0), root_state, 4);
        assert!(root.is_root());
        assert_eq!(root.get_g(), 0);
        assert_eq!(root.get_f(), 4);

        let child_state = TaxiState::new(1, 0, 1, 0).unwrap();
        let child =
            SearchNode::new_with_parent(NodeId::new(1), child_state, &root, Action::Right, 1, 3);
        assert_eq!(child.get_parent_id(), NodeId::new(0));
        assert_eq!(child.get_action(), Some(Action::Right));
        assert_eq!(child.get_g(), 1);
        assert_eq!(child.get_f(), 4);

        let penalised =
            SearchNode::new_with_parent(NodeId::new(2), child_state, &child, Action::PickUp, 10, 0);
        assert_eq!(penalised.get_g(), 11);
        assert_eq!(penalised.get_f(), 11);
    }

    #[test]
    fn goal_test_uses_state() {
        let state = TaxiState::new(2, 2, 3, 3).unwrap();
        let root = SearchNode::new_without_parent(NodeId::new(0), state, 0);
        assert!(root.reached_goal());
    }
}
