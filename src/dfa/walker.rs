use super::{DfaPool, StateHandle};
use crate::{Code, Token, TokenKind};

impl DfaPool {
    /// Read one token from `code` at byte offset `pointer`, starting the walk
    /// at `start`.
    ///
    /// The walk keeps a record of the last accepting state reached and the
    /// offset at which it was reached. At every step the outgoing edges of the
    /// current state are tried in insertion order and the first edge whose
    /// predicate fires is taken; when none fires the default edge, if any, is
    /// taken instead. Either way exactly one character is consumed, so the walk
    /// is a plain loop and terminates when the buffer (or a NUL byte) ends or
    /// no edge applies.
    ///
    /// The returned token is the longest accepted prefix. When no accepting
    /// state was reached the token's kind is [TokenKind::Invalid] and its
    /// length is the distance the walker advanced before it stopped; callers
    /// deciding to skip past the failure must advance by at least one byte.
    pub fn read_token<'c>(&self, start: StateHandle, code: &Code<'c>, pointer: usize) -> Token<'c> {
        let mut best_kind = TokenKind::Invalid;
        let mut best_length = 0;

        let mut current = start;
        let mut offset = 0;
        loop {
            let state = &self.states[current.0];
            if state.accepting != TokenKind::Invalid {
                best_kind = state.accepting;
                best_length = offset;
            }

            let byte = match code.value.get(pointer + offset) {
                Some(&byte) if byte != 0 => byte,
                _ => {
                    // End of buffer behaves as NUL.
                    if best_kind == TokenKind::Invalid {
                        best_length = offset;
                    }
                    break;
                }
            };

            let matched = state
                .edges
                .iter()
                .map(|handle| &self.edges[handle.0])
                .find(|edge| edge.predicate.accepts(byte))
                .map(|edge| edge.target);

            match matched.or(state.default_edge) {
                Some(next) => {
                    current = next;
                    offset += 1;
                }
                None => {
                    if best_kind == TokenKind::Invalid {
                        best_length = offset;
                    }
                    break;
                }
            }
        }

        Token::new(
            best_kind,
            code.text(pointer, pointer + best_length),
            pointer,
        )
    }
}
