//! Arena-based lookahead tree.
//!
//! Nodes live in a flat `Vec` referenced by `NodeId`. Expansion is the full
//! cross product of both seats' cached move lists, so it is bounded by an
//! explicit depth and a node cap rather than any pruning. Between rounds the
//! root is rebased onto the child matching the observed state, preserving
//! the already-expanded subtree.

use crate::core::{GameState, Seat, SeatMap};
use crate::rules::Engine;

use super::config::SearchConfig;
use super::node::{NodeId, SearchNode};

/// Arena-based game tree over joint actions.
#[derive(Clone, Debug)]
pub struct LookaheadTree {
    nodes: Vec<SearchNode>,
    root: Option<NodeId>,
    max_nodes: usize,
}

impl LookaheadTree {
    /// Create an empty tree with the given node cap.
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            max_nodes: config.max_nodes,
        }
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Get a node by ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// The root node, if any.
    #[must_use]
    pub fn root_node(&self) -> Option<&SearchNode> {
        self.root.map(|id| self.get(id))
    }

    /// The root state, if any.
    #[must_use]
    pub fn root_state(&self) -> Option<&GameState> {
        self.root_node().map(|node| &node.state)
    }

    /// Rebase the tree onto a newly observed round state.
    ///
    /// The observed state is matched (by [`GameState::same_position`])
    /// against the current root and its children; a hit promotes the match
    /// to root and keeps its subtree, a miss discards everything and starts
    /// a fresh root. Returns whether previous work was reused.
    pub fn rebase(&mut self, engine: &Engine<'_>, observed: &GameState) -> bool {
        if let Some(root_id) = self.root {
            if self.get(root_id).state.same_position(observed) {
                return true;
            }

            let matching_child = self
                .get(root_id)
                .children
                .iter()
                .copied()
                .find(|&child| self.get(child).state.same_position(observed));

            if let Some(child) = matching_child {
                self.promote(child);
                return true;
            }
        }

        self.nodes.clear();
        let root = self.make_node(engine, NodeId::NONE, 0, observed.clone());
        self.nodes.push(root);
        self.root = Some(NodeId::new(0));
        false
    }

    /// Expand the tree below the root to `depth` rounds. Respects the node
    /// cap and never expands past the final day.
    pub fn expand(&mut self, engine: &Engine<'_>, depth: u16) {
        if let Some(root) = self.root {
            self.expand_node(engine, root, depth);
        }
    }

    fn expand_node(&mut self, engine: &Engine<'_>, id: NodeId, remaining: u16) {
        if remaining == 0 || self.get(id).is_terminal() {
            return;
        }

        if !self.get(id).is_expanded() {
            if self.nodes.len() + self.get(id).branching() > self.max_nodes {
                return;
            }
            let node = self.get(id);
            let depth = node.depth + 1;
            let state = node.state.clone();
            let moves = node.moves.clone();

            let mut children = Vec::with_capacity(self.get(id).branching());
            for &player_move in &moves[Seat::Player] {
                for &opponent_move in &moves[Seat::Opponent] {
                    let next = engine.apply(&state, player_move, opponent_move);
                    let child = self.make_node(engine, id, depth, next);
                    let child_id = NodeId::new(self.nodes.len() as u32);
                    self.nodes.push(child);
                    children.push(child_id);
                }
            }
            self.nodes[id.0 as usize].children = children;
        }

        let children = self.get(id).children.clone();
        for child in children {
            self.expand_node(engine, child, remaining - 1);
        }
    }

    /// Build an unexpanded node, caching both seats' legal moves.
    fn make_node(
        &self,
        engine: &Engine<'_>,
        parent: NodeId,
        depth: u16,
        state: GameState,
    ) -> SearchNode {
        let moves = SeatMap::from_fn(|seat| engine.legal_actions(&state, seat));
        SearchNode::new(parent, depth, state, moves)
    }

    /// Promote a node to root, compacting the arena to its subtree.
    fn promote(&mut self, new_root: NodeId) {
        let mut compacted = Vec::with_capacity(self.nodes.len());
        self.copy_subtree(new_root, NodeId::NONE, 0, &mut compacted);
        self.nodes = compacted;
        self.root = Some(NodeId::new(0));
    }

    fn copy_subtree(
        &self,
        old_id: NodeId,
        new_parent: NodeId,
        depth: u16,
        out: &mut Vec<SearchNode>,
    ) -> NodeId {
        let old = self.get(old_id);
        let new_id = NodeId::new(out.len() as u32);
        out.push(SearchNode::new(new_parent, depth, old.state.clone(), old.moves.clone()));

        let old_children = self.get(old_id).children.clone();
        let mut new_children = Vec::with_capacity(old_children.len());
        for child in old_children {
            new_children.push(self.copy_subtree(child, new_id, depth + 1, out));
        }
        out[new_id.0 as usize].children = new_children;
        new_id
    }

    /// Statistics about the current tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal()).count(),
            expanded_count: self.nodes.iter().filter(|n| n.is_expanded()).count(),
        }
    }
}

/// Statistics about the lookahead tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total nodes in the arena.
    pub node_count: usize,

    /// Maximum depth below the root.
    pub max_depth: u16,

    /// Nodes whose state is terminal.
    pub terminal_count: usize,

    /// Nodes whose children have been materialized.
    pub expanded_count: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            (self.node_count - 1) as f64 / self.expanded_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{arena, Board, CellId};
    use crate::core::{Action, Seat, FINAL_DAY};

    fn board() -> Board {
        Board::from_records(&arena::standard_records())
    }

    fn small_state() -> GameState {
        let mut state = GameState::empty();
        state.add_tree(Seat::Player, CellId::new(0), 1, false);
        state.add_tree(Seat::Opponent, CellId::new(4), 1, false);
        state.sun = SeatMap::with_value(4);
        state.nutrients = 20;
        state
    }

    #[test]
    fn test_first_observation_builds_root() {
        let board = board();
        let engine = Engine::new(&board);
        let mut tree = LookaheadTree::new(&SearchConfig::default());

        let reused = tree.rebase(&engine, &small_state());
        assert!(!reused);
        assert_eq!(tree.len(), 1);
        assert!(tree.root_state().unwrap().same_position(&small_state()));
    }

    #[test]
    fn test_expansion_is_cross_product() {
        let board = board();
        let engine = Engine::new(&board);
        let mut tree = LookaheadTree::new(&SearchConfig::default());
        tree.rebase(&engine, &small_state());

        tree.expand(&engine, 1);

        let root = tree.root_node().unwrap();
        assert_eq!(root.children.len(), root.branching());
        assert_eq!(tree.len(), 1 + root.branching());
    }

    #[test]
    fn test_rebase_reuses_matching_child() {
        let board = board();
        let engine = Engine::new(&board);
        let mut tree = LookaheadTree::new(&SearchConfig::default());
        let state = small_state();
        tree.rebase(&engine, &state);
        tree.expand(&engine, 2);

        // Play a real round: both grow.
        let observed = engine.apply(
            &state,
            Action::Grow { cell: CellId::new(0) },
            Action::Grow { cell: CellId::new(4) },
        );

        let before = tree.stats();
        let reused = tree.rebase(&engine, &observed);
        assert!(reused);
        assert!(tree.root_state().unwrap().same_position(&observed));
        // The promoted subtree keeps its expanded children.
        assert!(tree.root_node().unwrap().is_expanded());
        assert!(tree.len() < before.node_count);
    }

    #[test]
    fn test_rebase_miss_starts_fresh() {
        let board = board();
        let engine = Engine::new(&board);
        let mut tree = LookaheadTree::new(&SearchConfig::default());
        tree.rebase(&engine, &small_state());
        tree.expand(&engine, 1);

        // A state the expansion could not have produced.
        let mut foreign = small_state();
        foreign.sun[Seat::Player] = 99;

        let reused = tree.rebase(&engine, &foreign);
        assert!(!reused);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_no_expansion_past_final_day() {
        let board = board();
        let engine = Engine::new(&board);
        let mut tree = LookaheadTree::new(&SearchConfig::default());

        let mut state = small_state();
        state.day = FINAL_DAY;
        tree.rebase(&engine, &state);
        tree.expand(&engine, 3);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.stats().terminal_count, 1);
    }

    #[test]
    fn test_node_cap_respected() {
        let board = board();
        let engine = Engine::new(&board);
        let config = SearchConfig::default().with_max_nodes(3);
        let mut tree = LookaheadTree::new(&config);
        tree.rebase(&engine, &small_state());

        tree.expand(&engine, 2);

        // Root branching alone exceeds the cap, so nothing was expanded.
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_depth_two_expansion() {
        let board = board();
        let engine = Engine::new(&board);

        // Keep the position narrow: broke players can only wait.
        let mut state = GameState::empty();
        state.add_tree(Seat::Player, CellId::new(0), 1, false);
        state.sun = SeatMap::with_value(0);

        let mut tree = LookaheadTree::new(&SearchConfig::default());
        tree.rebase(&engine, &state);
        tree.expand(&engine, 2);

        // Wait x Wait at each level: three nodes in a chain.
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.stats().max_depth, 2);
        let child = tree.get(tree.root_node().unwrap().children[0]);
        assert_eq!(child.state.day, 1);
    }
}
