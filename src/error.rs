use thiserror::Error;

/// Everything the library can fail with. Builders never fail; only lookups do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Sorry, we don't have this kind of pizza: {0}")]
    UnsupportedPizza(String),

    #[error("unknown {kind}: '{value}'")]
    UnknownChoice { kind: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
