//! End-to-end rendering through the registry and compiler, the way the host
//! dispatch would drive it.

use snowflake_functions::prelude::*;

fn snowflake_registry() -> FunctionRegistry {
    let version = Version::new(4, 2);
    let compat = Compat::for_host_version(version);
    let catalogue = NodeCatalogue::for_version(version);
    FunctionRegistry::snowflake(&compat, &catalogue).unwrap()
}

fn compile(registry: &FunctionRegistry, expr: &Expr, vendor: Vendor) -> Sql {
    let compiler = SqlCompiler::new(registry);
    compiler
        .compile(expr, &Connection::new(vendor))
        .expect("rendering succeeds")
}

#[test]
fn test_ceiling_renders_ceil_with_identical_params() {
    let registry = snowflake_registry();
    let inner = lit_float(2.5);

    let (inner_sql, inner_params) = compile(&registry, &inner, Vendor::Snowflake);
    let (sql, params) = compile(&registry, &ceiling(inner.clone()), Vendor::Snowflake);

    assert_eq!(sql, format!("CEIL({})", inner_sql));
    assert_eq!(params, inner_params);
}

#[test]
fn test_ceiling_generic_name_untouched_for_other_vendors() {
    let registry = snowflake_registry();
    let (sql, _) = compile(&registry, &ceiling(col("price")), Vendor::Ansi);
    assert_eq!(sql, "CEILING(\"price\")");
}

#[test]
fn test_collate_single_quoted_never_double_quoted() {
    let registry = snowflake_registry();
    let (sql, params) = compile(&registry, &collate(col("name"), "en-ci"), Vendor::Snowflake);

    insta::assert_snapshot!(sql, @r#"COLLATE("name", 'en-ci')"#);
    assert!(sql.contains("'en-ci'"));
    assert!(!sql.contains("\"en-ci\""));
    assert!(params.is_empty());
}

#[test]
fn test_concat_pair_null_coalescing_wrapper() {
    let registry = snowflake_registry();
    let (sql, params) = compile(
        &registry,
        &concat_pair(col("first"), col("last")),
        Vendor::Snowflake,
    );

    insta::assert_snapshot!(sql, @r#"CONCAT(COALESCE("first", %s), COALESCE("last", %s))"#);
    assert_eq!(
        params,
        vec![Value::Text(String::new()), Value::Text(String::new())]
    );

    // The generic rendering propagates NULL; only Snowflake coalesces.
    let (ansi_sql, _) = compile(&registry, &concat_pair(col("first"), col("last")), Vendor::Ansi);
    assert_eq!(ansi_sql, "CONCAT(\"first\", \"last\")");
}

#[test]
fn test_random_exact_text_no_params() {
    let registry = snowflake_registry();
    let (sql, params) = compile(&registry, &random(), Vendor::Snowflake);

    assert_eq!(sql, "UNIFORM(0, 0.99999999999999999, RANDOM())");
    assert!(params.is_empty());
}

#[test]
fn test_str_index_swaps_arguments_under_position() {
    let registry = snowflake_registry();
    let haystack = col("name");
    let needle = lit_str("a");

    let (sql, params) = compile(
        &registry,
        &str_index(haystack.clone(), needle.clone()),
        Vendor::Snowflake,
    );
    insta::assert_snapshot!(sql, @r#"POSITION(%s, "name")"#);
    assert_eq!(params, vec![Value::Text("a".into())]);

    // Generic order for comparison: INSTR(string, substring).
    let (ansi_sql, _) = compile(&registry, &str_index(haystack, needle), Vendor::Ansi);
    assert_eq!(ansi_sql, "INSTR(\"name\", %s)");
}

#[test]
fn test_sha2_family_renders_mysql_shape() {
    let registry = snowflake_registry();

    let (sql, _) = compile(&registry, &sha224(col("email")), Vendor::Snowflake);
    assert_eq!(sql, "SHA2(\"email\", 224)");
    let (sql, _) = compile(&registry, &sha256(col("email")), Vendor::Snowflake);
    assert_eq!(sql, "SHA2(\"email\", 256)");
    let (sql, _) = compile(&registry, &sha384(col("email")), Vendor::Snowflake);
    assert_eq!(sql, "SHA2(\"email\", 384)");
    let (sql, _) = compile(&registry, &sha512(col("email")), Vendor::Snowflake);
    assert_eq!(sql, "SHA2(\"email\", 512)");

    // Other vendors keep the per-digest function names.
    let (sql, _) = compile(&registry, &sha256(col("email")), Vendor::Ansi);
    assert_eq!(sql, "SHA256(\"email\")");
}

#[test]
fn test_nested_nodes_dispatch_through_rules() {
    let registry = snowflake_registry();
    let expr = concat_pair(ceiling(col("a")), col("b"));

    let (sql, _) = compile(&registry, &expr, Vendor::Snowflake);
    insta::assert_snapshot!(sql, @r#"CONCAT(COALESCE(CEIL("a"), %s), COALESCE("b", %s))"#);
}
