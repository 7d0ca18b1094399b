//! Vendor tags and dialect rendering rules.
//!
//! A [`Vendor`] is the identifier the host compiler dispatches on when it
//! picks a backend-specific rendering for an expression node. The rule sets
//! live in per-vendor submodules; [`crate::registry::FunctionRegistry`]
//! associates them with expression kinds.

pub mod helpers;
pub mod mysql;
pub mod snowflake;

use std::fmt;

/// Vendor tag of a backend dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vendor {
    /// Vendor-neutral baseline; no rules are registered for it, so every
    /// node renders through its generic template.
    #[default]
    Ansi,
    MySql,
    Snowflake,
}

impl Vendor {
    /// The lowercase dispatch identifier.
    pub fn tag(&self) -> &'static str {
        match self {
            Vendor::Ansi => "ansi",
            Vendor::MySql => "mysql",
            Vendor::Snowflake => "snowflake",
        }
    }

    /// Quote an identifier (table, column, alias) for this vendor.
    pub fn quote_identifier(&self, ident: &str) -> String {
        match self {
            Vendor::Ansi | Vendor::Snowflake => helpers::quote_double(ident),
            Vendor::MySql => helpers::quote_backtick(ident),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_display() {
        assert_eq!(Vendor::Ansi.to_string(), "ansi");
        assert_eq!(Vendor::MySql.to_string(), "mysql");
        assert_eq!(Vendor::Snowflake.to_string(), "snowflake");
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(Vendor::Snowflake.quote_identifier("users"), "\"users\"");
        assert_eq!(Vendor::Ansi.quote_identifier("users"), "\"users\"");
        assert_eq!(Vendor::MySql.quote_identifier("users"), "`users`");
    }

    #[test]
    fn test_quote_identifier_escaping() {
        assert_eq!(
            Vendor::Snowflake.quote_identifier("weird\"name"),
            "\"weird\"\"name\""
        );
        assert_eq!(Vendor::MySql.quote_identifier("weird`name"), "`weird``name`");
    }
}
