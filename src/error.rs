//! Error types for rule registration and SQL rendering.

use thiserror::Error;

use crate::expr::FunctionKind;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering an expression to SQL.
///
/// These are developer-facing defects in a rule's template, not runtime
/// conditions to recover from. They surface when the query using the
/// affected function is compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A template referenced a substitution key that was never provided.
    #[error("template placeholder `%({0})s` has no value")]
    MissingTemplateKey(String),
}

/// Errors that can occur while installing dialect rules.
///
/// Surfaced at backend initialization, before any query compiles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The host was asked to supply an expression kind it does not expose.
    /// Usually means the host version is older than the rules require.
    #[error("host does not expose the `{0}` expression kind")]
    MissingFunctionKind(FunctionKind),
}
