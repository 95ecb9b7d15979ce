use super::*;
use crate::aggregate::build_aggregate;
use crate::resolver::resolve;
use crate::select::build_select;
use crate::test_utils::shop_mapping;
use crate::update::{denormalize, DenormalizedColumn};
use jp_core::test_utils::{items_hop, orders_hop, tags_hop};
use jp_core::{ColumnName, EntityName};

fn plain() -> Renderer {
    Renderer::unquoted(SqlParser::duckdb())
}

fn expr(sql: &str) -> sqlparser::ast::Expr {
    SqlParser::duckdb().parse_expr(sql).unwrap()
}

#[test]
fn test_single_hop_count_scenario() {
    let query = build_aggregate(expr("count(orders.id)"), &[orders_hop()]).unwrap();
    assert_eq!(
        plain().aggregate(&query),
        "SELECT count(orders.id) FROM orders WHERE orders.customer_id = customers.id"
    );
}

#[test]
fn test_two_hop_sum_scenario() {
    let mapping = shop_mapping();
    let path = resolve(&mapping, &EntityName::new("Customer"), "orders.items").unwrap();
    let query = build_aggregate(expr("sum(items.price)"), path.hops()).unwrap();
    assert_eq!(
        plain().aggregate(&query),
        "SELECT sum(items.price) FROM orders \
         JOIN customers ON orders.customer_id = customers.id \
         WHERE orders.id = items.order_id"
    );
}

#[test]
fn test_chained_join_inserts_junction_first() {
    let select = build_select(vec![expr("tags.name")], &[tags_hop()]).unwrap();
    assert_eq!(
        plain().select(&select),
        "SELECT tags.name FROM tags \
         JOIN post_tags ON post_tags.tag_id = tags.id \
         JOIN posts ON post_tags.post_id = posts.id"
    );
}

#[test]
fn test_empty_projection_selects_star() {
    let select = build_select(vec![], &[items_hop()]).unwrap();
    assert_eq!(
        plain().select(&select),
        "SELECT * FROM items JOIN orders ON orders.id = items.order_id"
    );
}

#[test]
fn test_quoted_identifiers() {
    let query = build_aggregate(expr("count(orders.id)"), &[orders_hop()]).unwrap();
    let renderer = Renderer::quoted(SqlParser::postgres());
    assert_eq!(
        renderer.aggregate(&query),
        r#"SELECT count("orders"."id") FROM "orders" WHERE "orders"."customer_id" = "customers"."id""#
    );
}

#[test]
fn test_default_quotes_only_where_required() {
    let query = build_aggregate(expr("count(orders.id)"), &[orders_hop()]).unwrap();
    let renderer = Renderer::for_dialect(jp_core::Dialect::DuckDb);
    assert_eq!(renderer.quoting(), Quoting::WhenRequired);
    assert_eq!(
        renderer.aggregate(&query),
        "SELECT count(orders.id) FROM orders WHERE orders.customer_id = customers.id"
    );
}

#[test]
fn test_snowflake_expression_matches_from_clause() {
    let mapping = shop_mapping();
    let column = DenormalizedColumn {
        entity: EntityName::new("Customer"),
        column: ColumnName::new("order_count"),
        path: "orders".to_string(),
        aggregate: SqlParser::snowflake()
            .parse_expr(r#"count("orders".id)"#)
            .unwrap(),
        filter: Some(SqlParser::snowflake().parse_expr("customers.id > 0").unwrap()),
    };
    let update = denormalize(&mapping, &column).unwrap();

    let required = Renderer::for_dialect(jp_core::Dialect::Snowflake);
    assert_eq!(
        required.update(&update),
        "UPDATE customers SET order_count = (\
         SELECT count(orders.id) FROM orders \
         WHERE orders.customer_id = customers.id) \
         WHERE customers.id > 0"
    );

    let quoted = Renderer::quoted(SqlParser::snowflake());
    assert_eq!(
        quoted.update(&update),
        r#"UPDATE "customers" SET "order_count" = (SELECT count("orders"."id") FROM "orders" WHERE "orders"."customer_id" = "customers"."id") WHERE "customers"."id" > 0"#
    );
}

#[test]
fn test_postgres_mixed_case_table_quoted_everywhere() {
    let shipment = jp_core::test_utils::entity("Shipment", "Shipments");
    let hop = jp_core::test_utils::hop(
        "shipments",
        jp_core::test_utils::customer(),
        shipment,
        jp_core::test_utils::eq(("Shipments", "customer_id"), ("customers", "id")),
    );
    let query = build_aggregate(
        SqlParser::postgres().parse_expr("max(Shipments.sent_at)").unwrap(),
        &[hop],
    )
    .unwrap();
    assert_eq!(
        Renderer::for_dialect(jp_core::Dialect::Postgres).aggregate(&query),
        r#"SELECT max("Shipments".sent_at) FROM "Shipments" WHERE "Shipments".customer_id = customers.id"#
    );
}

#[test]
fn test_unquoted_leaves_expressions_as_written() {
    let query = build_aggregate(expr(r#"count("orders".id)"#), &[orders_hop()]).unwrap();
    assert_eq!(
        plain().aggregate(&query),
        r#"SELECT count("orders".id) FROM orders WHERE orders.customer_id = customers.id"#
    );
}

#[test]
fn test_update_with_filter() {
    let mapping = shop_mapping();
    let column = DenormalizedColumn {
        entity: EntityName::new("Customer"),
        column: ColumnName::new("lifetime_value"),
        path: "orders.items".to_string(),
        aggregate: expr("sum(items.price)"),
        filter: Some(expr("customers.id = 7")),
    };
    let update = denormalize(&mapping, &column).unwrap();
    assert_eq!(
        plain().update(&update),
        "UPDATE customers SET lifetime_value = (\
         SELECT sum(items.price) FROM items \
         JOIN orders ON orders.id = items.order_id \
         WHERE orders.customer_id = customers.id) \
         WHERE customers.id = 7"
    );
}

#[test]
fn test_rendered_sql_parses_in_every_dialect() {
    let mapping = shop_mapping();
    let column = DenormalizedColumn {
        entity: EntityName::new("Author"),
        column: ColumnName::new("tag_count"),
        path: "posts.tags".to_string(),
        aggregate: expr("count(DISTINCT tags.id)"),
        filter: None,
    };
    let update = denormalize(&mapping, &column).unwrap();

    for dialect in [
        jp_core::Dialect::DuckDb,
        jp_core::Dialect::Snowflake,
        jp_core::Dialect::Postgres,
    ] {
        let renderer = Renderer::for_dialect(dialect);
        let sql = renderer.update(&update);
        let stmt = renderer
            .to_statement(&sql)
            .unwrap_or_else(|e| panic!("{dialect}: {e}\n{sql}"));
        assert!(stmt.to_string().starts_with("UPDATE authors"));
    }
}

#[test]
fn test_composite_predicate_rendering() {
    let predicate = crate::predicate::parse_join_predicate(
        &SqlParser::duckdb(),
        "lines.order_id = orders.id AND lines.region = orders.region",
    )
    .unwrap();
    assert_eq!(
        plain().predicate(&predicate),
        "lines.order_id = orders.id AND lines.region = orders.region"
    );
}

#[test]
fn test_schema_qualified_tables_quoted_per_part() {
    let mapping = crate::mapping::Mapping::from_yaml(
        r#"
entities:
  - name: Customer
    table: crm.customers
    relationships:
      - name: orders
        target: Order
        primary_join: "sales.orders.customer_id = crm.customers.id"
  - name: Order
    table: sales.orders
"#,
        &SqlParser::duckdb(),
    )
    .unwrap();
    let column = DenormalizedColumn {
        entity: EntityName::new("Customer"),
        column: ColumnName::new("order_count"),
        path: "orders".to_string(),
        aggregate: expr("count(sales.orders.id)"),
        filter: None,
    };
    let update = denormalize(&mapping, &column).unwrap();

    assert_eq!(
        Renderer::for_dialect(jp_core::Dialect::DuckDb).update(&update),
        "UPDATE crm.customers SET order_count = (\
         SELECT count(sales.orders.id) FROM sales.orders \
         WHERE sales.orders.customer_id = crm.customers.id)"
    );
    let quoted = Renderer::quoted(SqlParser::duckdb());
    let sql = quoted.update(&update);
    assert!(sql.starts_with(r#"UPDATE "crm"."customers" SET"#));
    assert!(sql.contains(r#"count("sales"."orders"."id") FROM "sales"."orders""#));
    quoted.to_statement(&sql).unwrap();
}
