//! Function-expression nodes and their generic SQL rendering.
//!
//! This is the slice of the host ORM's expression AST that dialect rules
//! touch: column references, parameter-bound values, and function calls.
//! In production the host compiler owns and constructs these nodes; the
//! constructors here mirror its defaults so rules are exercisable without
//! the host.

use std::collections::BTreeMap;
use std::fmt;

use crate::compiler::{Connection, SqlCompiler};
use crate::dialect::helpers;
use crate::error::RenderResult;
use crate::template;

/// A rendered SQL fragment plus its bound parameters, in placeholder order.
pub type Sql = (String, Vec<Value>);

/// Default rendering template shared by most function nodes.
pub const DEFAULT_TEMPLATE: &str = "%(function)s(%(expressions)s)";

/// Default template for collation nodes: `expr COLLATE "name"`.
pub const COLLATE_TEMPLATE: &str = "%(expressions)s %(function)s %(collation)s";

/// An owned literal value, bound as a query parameter at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
}

/// A SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column reference: optional_table.column
    Column {
        table: Option<String>,
        column: String,
    },

    /// Literal value, rendered as a `%s` placeholder with the value bound.
    Value(Value),

    /// Function call node.
    Func(FuncCall),
}

/// The fixed catalogue of function-expression kinds dialect rules can be
/// registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Ceil,
    Coalesce,
    Collate,
    ConcatPair,
    Random,
    StrIndex,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl FunctionKind {
    /// The SHA-2 family, which shares one rendering rule.
    pub const SHA2: [FunctionKind; 4] = [
        FunctionKind::Sha224,
        FunctionKind::Sha256,
        FunctionKind::Sha384,
        FunctionKind::Sha512,
    ];
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FunctionKind::Ceil => "ceil",
            FunctionKind::Coalesce => "coalesce",
            FunctionKind::Collate => "collate",
            FunctionKind::ConcatPair => "concat_pair",
            FunctionKind::Random => "random",
            FunctionKind::StrIndex => "str_index",
            FunctionKind::Sha224 => "sha224",
            FunctionKind::Sha256 => "sha256",
            FunctionKind::Sha384 => "sha384",
            FunctionKind::Sha512 => "sha512",
        };
        write!(f, "{}", name)
    }
}

/// One function call in the expression tree.
///
/// Carries the generic (vendor-neutral) rendering defaults: the SQL function
/// name, the template it is spliced into, and the argument joiner. Dialect
/// rules override these per call via [`SqlOverrides`] rather than mutating
/// the node.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub kind: FunctionKind,
    /// Vendor-neutral SQL function name (e.g. `CEILING`).
    pub function: String,
    /// Rendering template; see [`crate::template`] for the placeholder form.
    pub template: String,
    /// Separator between rendered arguments.
    pub arg_joiner: String,
    pub args: Vec<Expr>,
    /// Collation name; set only on `Collate` nodes.
    pub collation: Option<String>,
}

impl FuncCall {
    pub fn new(kind: FunctionKind, function: &str, args: Vec<Expr>) -> Self {
        Self {
            kind,
            function: function.into(),
            template: DEFAULT_TEMPLATE.into(),
            arg_joiner: ", ".into(),
            args,
            collation: None,
        }
    }

    /// Generic rendering, shared by every dialect that has no rule for this
    /// node kind.
    ///
    /// Arguments are rendered through `compiler` (so nested function nodes
    /// still get their dialect rules), joined with `arg_joiner`, and spliced
    /// into the template along with the function name and any extra context.
    /// Caller overrides are applied last and win over the node's defaults.
    pub fn as_sql(
        &self,
        compiler: &SqlCompiler<'_>,
        conn: &Connection,
        overrides: &SqlOverrides,
    ) -> RenderResult<Sql> {
        let mut params = Vec::new();
        let mut rendered = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            let (sql, mut arg_params) = compiler.compile(arg, conn)?;
            rendered.push(sql);
            params.append(&mut arg_params);
        }

        let mut context: BTreeMap<String, String> = BTreeMap::new();
        context.insert(
            "function".into(),
            overrides
                .function
                .clone()
                .unwrap_or_else(|| self.function.clone()),
        );
        context.insert("expressions".into(), rendered.join(&self.arg_joiner));
        if let Some(name) = &self.collation {
            // Vendor-neutral default; dialect rules override the quoting.
            context.insert("collation".into(), helpers::quote_double(name));
        }
        for (key, value) in &overrides.extra {
            context.insert(key.clone(), value.clone());
        }

        let template = overrides.template.as_deref().unwrap_or(&self.template);
        let sql = template::fill(template, &context)?;
        Ok((sql, params))
    }

    /// Copy of this node with every argument wrapped in `COALESCE(arg, '')`,
    /// so a NULL operand contributes an empty string instead of nulling the
    /// whole result.
    pub fn coalesced(&self) -> FuncCall {
        let args = self
            .args
            .iter()
            .cloned()
            .map(|arg| {
                Expr::Func(FuncCall::new(
                    FunctionKind::Coalesce,
                    "COALESCE",
                    vec![arg, Expr::Value(Value::Text(String::new()))],
                ))
            })
            .collect();
        FuncCall {
            args,
            ..self.clone()
        }
    }
}

/// Caller-supplied overrides for one generic rendering.
///
/// This is the open-ended keyword context of the host contract: the caller
/// (a dialect rule, or the host compiler itself) may have partially filled
/// it before the rule runs, so rules extend it instead of replacing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlOverrides {
    /// Replacement SQL function name.
    pub function: Option<String>,
    /// Replacement rendering template.
    pub template: Option<String>,
    /// Extra substitution keys, applied after the node's own context.
    pub extra: BTreeMap<String, String>,
}

impl SqlOverrides {
    pub fn with_function(&self, function: &str) -> Self {
        let mut overrides = self.clone();
        overrides.function = Some(function.into());
        overrides
    }

    pub fn with_template(&self, template: &str) -> Self {
        let mut overrides = self.clone();
        overrides.template = Some(template.into());
        overrides
    }

    pub fn with_extra(&self, key: &str, value: &str) -> Self {
        let mut overrides = self.clone();
        overrides.extra.insert(key.into(), value.into());
        overrides
    }
}

// =============================================================================
// Expression Constructors
// =============================================================================

/// Create a column reference.
pub fn col(name: &str) -> Expr {
    Expr::Column {
        table: None,
        column: name.into(),
    }
}

/// Create a qualified column reference (table.column).
pub fn table_col(table: &str, column: &str) -> Expr {
    Expr::Column {
        table: Some(table.into()),
        column: column.into(),
    }
}

/// Create a string literal.
pub fn lit_str(s: &str) -> Expr {
    Expr::Value(Value::Text(s.into()))
}

/// Create an integer literal.
pub fn lit_int(n: i64) -> Expr {
    Expr::Value(Value::Int(n))
}

/// Create a float literal.
pub fn lit_float(f: f64) -> Expr {
    Expr::Value(Value::Float(f))
}

/// Create a boolean literal.
pub fn lit_bool(b: bool) -> Expr {
    Expr::Value(Value::Bool(b))
}

/// Create a NULL literal.
pub fn lit_null() -> Expr {
    Expr::Value(Value::Null)
}

/// CEILING(expr)
pub fn ceiling(expr: Expr) -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::Ceil, "CEILING", vec![expr]))
}

/// COALESCE(args...)
pub fn coalesce(args: Vec<Expr>) -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::Coalesce, "COALESCE", args))
}

/// expr COLLATE "name"
pub fn collate(expr: Expr, collation: &str) -> Expr {
    let mut call = FuncCall::new(FunctionKind::Collate, "COLLATE", vec![expr]);
    call.template = COLLATE_TEMPLATE.into();
    call.collation = Some(collation.into());
    Expr::Func(call)
}

/// CONCAT(a, b) — the two-operand node larger concatenations reduce to.
pub fn concat_pair(a: Expr, b: Expr) -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::ConcatPair, "CONCAT", vec![a, b]))
}

/// RANDOM() — random float in [0, 1).
pub fn random() -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::Random, "RANDOM", vec![]))
}

/// INSTR(string, substring) — 1-based position of substring, 0 if absent.
pub fn str_index(string: Expr, substring: Expr) -> Expr {
    Expr::Func(FuncCall::new(
        FunctionKind::StrIndex,
        "INSTR",
        vec![string, substring],
    ))
}

/// SHA224(expr)
pub fn sha224(expr: Expr) -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::Sha224, "SHA224", vec![expr]))
}

/// SHA256(expr)
pub fn sha256(expr: Expr) -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::Sha256, "SHA256", vec![expr]))
}

/// SHA384(expr)
pub fn sha384(expr: Expr) -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::Sha384, "SHA384", vec![expr]))
}

/// SHA512(expr)
pub fn sha512(expr: Expr) -> Expr {
    Expr::Func(FuncCall::new(FunctionKind::Sha512, "SHA512", vec![expr]))
}

// =============================================================================
// Tests
// =============================================================================
