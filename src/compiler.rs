//! The dispatch adapter between expressions and dialect rules.
//!
//! Mirrors the host compiler's contract: when a function node is compiled,
//! look for a rendering rule registered under the connection's vendor tag
//! and fall back to the node's generic renderer when there is none.

use crate::dialect::Vendor;
use crate::error::RenderResult;
use crate::expr::{Expr, Sql, SqlOverrides};
use crate::registry::FunctionRegistry;

/// Read-only call-time context: the vendor tag of the active backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub vendor: Vendor,
}

impl Connection {
    pub fn new(vendor: Vendor) -> Self {
        Self { vendor }
    }
}

/// Compiles expressions to SQL fragments.
///
/// Borrows the registry built at initialization; compilation itself is pure
/// and reentrant, so one compiler may serve concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct SqlCompiler<'a> {
    registry: &'a FunctionRegistry,
}

impl<'a> SqlCompiler<'a> {
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    /// Render `expr` for the connection's vendor.
    pub fn compile(&self, expr: &Expr, conn: &Connection) -> RenderResult<Sql> {
        match expr {
            Expr::Column { table, column } => {
                let sql = match table {
                    Some(t) => format!(
                        "{}.{}",
                        conn.vendor.quote_identifier(t),
                        conn.vendor.quote_identifier(column)
                    ),
                    None => conn.vendor.quote_identifier(column),
                };
                Ok((sql, vec![]))
            }

            Expr::Value(value) => Ok(("%s".into(), vec![value.clone()])),

            Expr::Func(call) => match self.registry.rule(call.kind, conn.vendor) {
                Some(rule) => rule(call, self, conn, &SqlOverrides::default()),
                None => call.as_sql(self, conn, &SqlOverrides::default()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{col, lit_str, table_col, Value};

    #[test]
    fn test_column_quoting_per_vendor() {
        let registry = FunctionRegistry::new();
        let compiler = SqlCompiler::new(&registry);

        let (sql, _) = compiler
            .compile(&col("name"), &Connection::new(Vendor::Snowflake))
            .unwrap();
        assert_eq!(sql, "\"name\"");

        let (sql, _) = compiler
            .compile(&col("name"), &Connection::new(Vendor::MySql))
            .unwrap();
        assert_eq!(sql, "`name`");
    }

    #[test]
    fn test_qualified_column() {
        let registry = FunctionRegistry::new();
        let compiler = SqlCompiler::new(&registry);

        let (sql, _) = compiler
            .compile(&table_col("u", "name"), &Connection::new(Vendor::Ansi))
            .unwrap();
        assert_eq!(sql, "\"u\".\"name\"");
    }

    #[test]
    fn test_value_is_bound_not_inlined() {
        let registry = FunctionRegistry::new();
        let compiler = SqlCompiler::new(&registry);

        let (sql, params) = compiler
            .compile(&lit_str("O'Brien"), &Connection::new(Vendor::Snowflake))
            .unwrap();
        assert_eq!(sql, "%s");
        assert_eq!(params, vec![Value::Text("O'Brien".into())]);
    }
}
