use std::num::ParseIntError;
use thiserror::Error;

/// Why an input could not be turned into a [`GameSet`](crate::GameSet).
///
/// Each variant carries the 1-based line number it was raised on and wraps the
/// lower level error, so rendering the `source` chain names every layer.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: invalid game line `{text}`, expected `Game <id>: <moves>`")]
    Structure { line: usize, text: String },
    #[error("line {line}: cannot parse game id from `{header}`")]
    Identifier {
        line: usize,
        header: String,
        #[source]
        source: IdError,
    },
    #[error("line {line}: cannot parse move `{text}`")]
    Move {
        line: usize,
        text: String,
        #[source]
        source: MoveError,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Structure { line, .. }
            | ParseError::Identifier { line, .. }
            | ParseError::Move { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum IdError {
    #[error("expected 2 tokens, found {found}")]
    TokenCount { found: usize },
    #[error("invalid id `{token}`")]
    Number {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
#[error("cannot parse cube `{cube}`")]
pub struct MoveError {
    pub cube: String,
    #[source]
    pub source: CubeError,
}

#[derive(Debug, Error)]
pub enum CubeError {
    #[error("expected `<count> <color>`, found `{0}`")]
    Shape(String),
    #[error("invalid count `{token}`")]
    Count {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid color `{0}`")]
    Color(String),
}
