use thiserror::Error;

/// A string did not match the `MAJOR.MINOR.PATCH[-beta.N]` grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version `{input}`: expected MAJOR.MINOR.PATCH with an optional -beta.N suffix")]
pub struct ParseVersionError {
    input: String,
}

impl ParseVersionError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}
