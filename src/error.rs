use crate::{BuilderError, ParseError};
use std::fmt::{Display, Formatter};

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuilderError::StateCapacity => {
                write!(f, "BuilderError: the state arena is exhausted")
            }
            BuilderError::EdgeCapacity => {
                write!(f, "BuilderError: the edge arena is exhausted")
            }
            BuilderError::DuplicateDefaultEdge => {
                write!(f, "BuilderError: the state already carries a default edge")
            }
        }
    }
}

impl ParseError {
    pub fn new(pointer: usize, message: String) -> Self {
        Self { pointer, message }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SyntaxError: {}", self.message)
    }
}
