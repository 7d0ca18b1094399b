//! Snowflake renderings for function expressions.
//!
//! Each rule has the registry's rule signature and produces the same
//! `(sql, params)` shape as the generic renderer, adjusted for Snowflake's
//! syntax:
//!
//! - `CEIL` instead of `CEILING`
//! - function-style `COLLATE` with a single-quoted collation name
//! - NULL-safe concatenation via `COALESCE`
//! - `UNIFORM(0, 0.99999999999999999, RANDOM())` for a random float
//! - `POSITION` with its arguments reversed relative to `INSTR`
//!
//! Rules never mutate the node they receive; where a transformed node is
//! needed they render a rebuilt copy.

use crate::compiler::{Connection, SqlCompiler};
use crate::dialect::helpers;
use crate::error::RenderResult;
use crate::expr::{FuncCall, Sql, SqlOverrides};

/// Snowflake spells the one-argument ceiling function `CEIL`.
pub fn ceil(
    node: &FuncCall,
    compiler: &SqlCompiler<'_>,
    conn: &Connection,
    overrides: &SqlOverrides,
) -> RenderResult<Sql> {
    node.as_sql(compiler, conn, &overrides.with_function("CEIL"))
}

/// COLLATE(<string_expression>, '<collation_specification>')
///
/// Snowflake requires single quotes around the collation name where the
/// generic rendering double-quotes it.
/// <https://docs.snowflake.com/en/sql-reference/functions/collate.html>
pub fn collate(
    node: &FuncCall,
    compiler: &SqlCompiler<'_>,
    conn: &Connection,
    overrides: &SqlOverrides,
) -> RenderResult<Sql> {
    let mut overrides = overrides.with_template("%(function)s(%(expressions)s, %(collation)s)");
    if let Some(name) = &node.collation {
        overrides = overrides.with_extra("collation", &helpers::quote_string_single(name));
    }
    node.as_sql(compiler, conn, &overrides)
}

/// COALESCE each operand so concatenation with a NULL yields the other
/// operand instead of NULL.
pub fn concat_pair(
    node: &FuncCall,
    compiler: &SqlCompiler<'_>,
    conn: &Connection,
    overrides: &SqlOverrides,
) -> RenderResult<Sql> {
    node.coalesced().as_sql(compiler, conn, overrides)
}

/// Random float driven by Snowflake's RANDOM() integer source.
///
/// The upper bound approximates the open interval [0, 1); exact parity with
/// other backends' random semantics is a documented deviation.
pub fn random(
    node: &FuncCall,
    compiler: &SqlCompiler<'_>,
    conn: &Connection,
    overrides: &SqlOverrides,
) -> RenderResult<Sql> {
    node.as_sql(
        compiler,
        conn,
        &overrides.with_template("UNIFORM(0, 0.99999999999999999, RANDOM())"),
    )
}

/// POSITION takes its arguments in the opposite order of INSTR, so render a
/// copy of the node with the two source expressions swapped.
/// <https://docs.snowflake.com/en/sql-reference/functions/position.html>
pub fn str_index(
    node: &FuncCall,
    compiler: &SqlCompiler<'_>,
    conn: &Connection,
    overrides: &SqlOverrides,
) -> RenderResult<Sql> {
    let swapped = FuncCall {
        args: vec![node.args[1].clone(), node.args[0].clone()],
        ..node.clone()
    };
    swapped.as_sql(compiler, conn, &overrides.with_function("POSITION"))
}
