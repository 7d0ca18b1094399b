//! # snowflake-functions
//!
//! Snowflake dialect rendering rules for ORM function expressions.
//!
//! The host ORM's SQL compiler renders function expressions through a
//! per-backend dispatch: for each node it looks for a rendering keyed by the
//! active connection's vendor tag and falls back to the node's generic
//! template. This crate supplies the Snowflake entries for that dispatch as
//! an explicit registration table instead of patching host classes:
//!
//! ```text
//! function node ──▶ SqlCompiler ──▶ FunctionRegistry lookup
//!                        │                 │  hit: dialect rule
//!                        │                 ▼
//!                        └──── miss ──▶ generic as_sql()
//! ```
//!
//! Registration happens once at backend initialization, gated on the host
//! version's capabilities:
//!
//! ```
//! use snowflake_functions::prelude::*;
//!
//! let version = Version::new(4, 2);
//! let compat = Compat::for_host_version(version);
//! let catalogue = NodeCatalogue::for_version(version);
//! let registry = FunctionRegistry::snowflake(&compat, &catalogue).unwrap();
//!
//! let compiler = SqlCompiler::new(&registry);
//! let conn = Connection::new(Vendor::Snowflake);
//! let (sql, params) = compiler.compile(&ceiling(col("price")), &conn).unwrap();
//! assert_eq!(sql, "CEIL(\"price\")");
//! assert!(params.is_empty());
//! ```
//!
//! The rules themselves are pure `fn` pointers: once the registry is built
//! they may be invoked concurrently by any number of query compilations.

pub mod compat;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod registry;
pub mod template;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compat::{Compat, NodeCatalogue, Version, FUNCTIONS_MIN_VERSION};
    pub use crate::compiler::{Connection, SqlCompiler};
    pub use crate::dialect::Vendor;
    pub use crate::error::{RegistryError, RenderError};
    pub use crate::expr::{
        // Constructors
        ceiling,
        coalesce,
        col,
        collate,
        concat_pair,
        lit_bool,
        lit_float,
        lit_int,
        lit_null,
        lit_str,
        random,
        sha224,
        sha256,
        sha384,
        sha512,
        str_index,
        table_col,
        // Types
        Expr,
        FuncCall,
        FunctionKind,
        Sql,
        SqlOverrides,
        Value,
    };
    pub use crate::registry::{FunctionRegistry, RenderRule};
}

// Also export the main entry points at the crate root.
pub use compat::{Compat, NodeCatalogue, Version};
pub use compiler::{Connection, SqlCompiler};
pub use dialect::Vendor;
pub use registry::{FunctionRegistry, RenderRule};
