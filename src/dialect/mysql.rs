//! MySQL renderings shared with other dialects.
//!
//! Only the SHA-2 rule lives here: Snowflake's hashing syntax coincides with
//! MySQL's, so the Snowflake registration reuses this rule verbatim.

use crate::compiler::{Connection, SqlCompiler};
use crate::error::RenderResult;
use crate::expr::{FuncCall, Sql, SqlOverrides};

/// SHA2(<expr>, <bits>) — digest size taken from the numeric suffix of the
/// node's function name (SHA224 -> 224).
pub fn sha2(
    node: &FuncCall,
    compiler: &SqlCompiler<'_>,
    conn: &Connection,
    overrides: &SqlOverrides,
) -> RenderResult<Sql> {
    let bits = node
        .function
        .trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let template = format!("SHA2(%(expressions)s, {})", bits);
    node.as_sql(compiler, conn, &overrides.with_template(&template))
}
