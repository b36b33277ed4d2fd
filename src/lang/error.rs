//! Errors raised while preparing entities for rendering.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangError {
    /// Declaration or example source could not be laid out.
    #[error("unable to format {what}: source is empty")]
    EmptySource { what: &'static str },
}
