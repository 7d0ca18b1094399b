//! The dialect function registry.
//!
//! An explicit table from `(expression kind, vendor tag)` to rendering rule.
//! The host compiler's dispatch (modeled by [`crate::compiler::SqlCompiler`])
//! consults it for every function node; a miss falls back to the generic
//! renderer.
//!
//! Registration runs once at backend initialization, before any query
//! compiles. It is not safe to race with itself, but the installed rules are
//! plain `fn` pointers: pure, reentrant, and freely shared afterwards.

use std::collections::HashMap;

use crate::compat::{Compat, NodeCatalogue};
use crate::compiler::{Connection, SqlCompiler};
use crate::dialect::{mysql, snowflake, Vendor};
use crate::error::{RegistryError, RenderResult};
use crate::expr::{FuncCall, FunctionKind, Sql, SqlOverrides};

/// A dialect rendering rule.
///
/// Takes the node being overridden, the compiler/connection context, and the
/// caller's partially filled overrides; returns the same `(sql, params)`
/// shape as the generic renderer.
pub type RenderRule =
    fn(&FuncCall, &SqlCompiler<'_>, &Connection, &SqlOverrides) -> RenderResult<Sql>;

/// Registration table the compiler dispatches through.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    rules: HashMap<(FunctionKind, Vendor), RenderRule>,
}

impl FunctionRegistry {
    /// Empty registry; every node renders generically.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the Snowflake rules already installed.
    pub fn snowflake(compat: &Compat, catalogue: &NodeCatalogue) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_snowflake(compat, catalogue)?;
        Ok(registry)
    }

    /// Look up the rule for a node kind under a vendor tag.
    pub fn rule(&self, kind: FunctionKind, vendor: Vendor) -> Option<RenderRule> {
        self.rules.get(&(kind, vendor)).copied()
    }

    /// Associate a rule with a node kind and vendor tag. Last write wins.
    pub fn insert(&mut self, kind: FunctionKind, vendor: Vendor, rule: RenderRule) {
        self.rules.insert((kind, vendor), rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Install the Snowflake rule set.
    ///
    /// Ceil, ConcatPair and StrIndex are always registered; Collate, Random
    /// and the SHA-2 family only when `compat` says the host ships those
    /// expression classes. Every kind to be registered must appear in the
    /// injected `catalogue` — a miss is an initialization-time
    /// incompatibility and aborts before anything is installed.
    ///
    /// Idempotent: registering twice leaves the same associations as once.
    pub fn register_snowflake(
        &mut self,
        compat: &Compat,
        catalogue: &NodeCatalogue,
    ) -> Result<(), RegistryError> {
        let mut rules: Vec<(FunctionKind, RenderRule)> = vec![
            (FunctionKind::Ceil, snowflake::ceil),
            (FunctionKind::ConcatPair, snowflake::concat_pair),
            (FunctionKind::StrIndex, snowflake::str_index),
        ];
        if compat.has_collate {
            rules.push((FunctionKind::Collate, snowflake::collate));
        }
        if compat.has_random {
            rules.push((FunctionKind::Random, snowflake::random));
        }
        if compat.has_sha2 {
            // Snowflake's SHA2 syntax matches MySQL's, so the MySQL rule is
            // reused as-is.
            for kind in FunctionKind::SHA2 {
                rules.push((kind, mysql::sha2));
            }
        }

        for (kind, _) in &rules {
            if !catalogue.contains(*kind) {
                return Err(RegistryError::MissingFunctionKind(*kind));
            }
        }
        for (kind, rule) in rules {
            self.insert(kind, Vendor::Snowflake, rule);
            tracing::debug!(kind = %kind, vendor = %Vendor::Snowflake, "registered dialect rendering rule");
        }
        Ok(())
    }
}
