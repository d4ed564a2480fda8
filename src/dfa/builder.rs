use super::{DfaEdge, DfaPool, DfaState, EdgeHandle, StateHandle, MAX_EDGES, MAX_STATES};
use crate::{BuilderError, EdgePredicate, TokenKind};

impl DfaPool {
    /// Create an empty pool. Arena capacity is reserved up front; handles stay
    /// stable across every builder call.
    pub fn new() -> Self {
        Self {
            states: Vec::with_capacity(MAX_STATES),
            edges: Vec::with_capacity(MAX_EDGES),
        }
    }

    /// Allocate a state in the state arena.
    ///
    /// A state with `accepting` other than [TokenKind::Invalid] marks the
    /// consumed prefix as a valid token of that kind when the walk reaches it.
    pub fn add_state(&mut self, accepting: TokenKind) -> Result<StateHandle, BuilderError> {
        if self.states.len() >= MAX_STATES {
            return Err(BuilderError::StateCapacity);
        }
        let handle = StateHandle(self.states.len());
        self.states.push(DfaState {
            accepting,
            edges: Vec::new(),
            default_edge: None,
        });
        Ok(handle)
    }

    /// Append an edge matching exactly `byte` to `from`.
    ///
    /// Edges are consulted in insertion order during tokenization; the first
    /// edge whose predicate fires wins a tie.
    pub fn add_edge(
        &mut self,
        from: StateHandle,
        to: StateHandle,
        byte: u8,
    ) -> Result<EdgeHandle, BuilderError> {
        self.add_edge_with_predicate(from, to, EdgePredicate::Exact(byte))
    }

    /// Append an edge carrying a class predicate to `from`.
    pub fn add_edge_with_predicate(
        &mut self,
        from: StateHandle,
        to: StateHandle,
        predicate: EdgePredicate,
    ) -> Result<EdgeHandle, BuilderError> {
        if self.edges.len() >= MAX_EDGES {
            return Err(BuilderError::EdgeCapacity);
        }
        debug_assert!(from.0 < self.states.len() && to.0 < self.states.len());
        let handle = EdgeHandle(self.edges.len());
        self.edges.push(DfaEdge {
            predicate,
            target: to,
        });
        self.states[from.0].edges.push(handle);
        Ok(handle)
    }

    /// Set the fall-through edge of `from`, taken when no ordinary edge fires.
    /// A state carries at most one default edge.
    pub fn add_default_edge(
        &mut self,
        from: StateHandle,
        to: StateHandle,
    ) -> Result<(), BuilderError> {
        debug_assert!(from.0 < self.states.len() && to.0 < self.states.len());
        let state = &mut self.states[from.0];
        if state.default_edge.is_some() {
            return Err(BuilderError::DuplicateDefaultEdge);
        }
        state.default_edge = Some(to);
        Ok(())
    }

    /// Tear down the automaton rooted at `root`.
    ///
    /// Partial deletion is not supported: the whole pool resets and every
    /// previously returned handle is invalidated. The next
    /// [add_state](DfaPool::add_state) returns the handle `root` had.
    pub fn delete_state_and_children(&mut self, root: StateHandle) {
        debug_assert!(root.0 < self.states.len());
        self.states.clear();
        self.edges.clear();
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The accepting kind of a state; [TokenKind::Invalid] for non-accepting states.
    pub fn accepting_kind(&self, state: StateHandle) -> TokenKind {
        self.states[state.0].accepting
    }

    /// Follow the exact-char edge for `byte` out of `from`, ignoring class
    /// predicates and the default edge. Used to look up symbol-trie states.
    pub(crate) fn follow_exact(&self, from: StateHandle, byte: u8) -> Option<StateHandle> {
        self.states[from.0].edges.iter().find_map(|handle| {
            let edge = &self.edges[handle.0];
            match edge.predicate {
                EdgePredicate::Exact(expected) if expected == byte => Some(edge.target),
                _ => None,
            }
        })
    }
}

impl Default for DfaPool {
    fn default() -> Self {
        Self::new()
    }
}
