use super::*;
use crate::error::SqlError;
use crate::test_utils::shop_mapping;
use jp_core::test_utils::{eq, orders_hop, tags_hop};
use jp_core::HopKind;

#[test]
fn test_lookup_direct_relationship() {
    let mapping = shop_mapping();
    let hop = mapping
        .lookup_relationship(&EntityName::new("Customer"), "orders")
        .unwrap();
    assert_eq!(hop, orders_hop());
    assert_eq!(hop.kind(), HopKind::Direct);
}

#[test]
fn test_lookup_many_to_many_relationship() {
    let mapping = shop_mapping();
    let hop = mapping
        .lookup_relationship(&EntityName::new("Post"), "tags")
        .unwrap();
    assert_eq!(hop, tags_hop());
    assert_eq!(hop.kind(), HopKind::ManyToMany);
}

#[test]
fn test_lookup_unknown_relationship() {
    let mapping = shop_mapping();
    let err = mapping
        .lookup_relationship(&EntityName::new("Order"), "bogus")
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::UnknownRelationship { ref entity, ref relationship }
            if entity == "Order" && relationship == "bogus"
    ));
}

#[test]
fn test_lookup_unknown_entity() {
    let mapping = shop_mapping();
    let err = mapping.entity(&EntityName::new("Invoice")).unwrap_err();
    assert!(matches!(err, CoreError::UnknownEntity { .. }));
    let err = mapping
        .lookup_relationship(&EntityName::new("Invoice"), "lines")
        .unwrap_err();
    assert!(matches!(err, CoreError::UnknownEntity { .. }));
}

#[test]
fn test_entities_sorted_and_relationships_ordered() {
    let mapping = shop_mapping();
    let names: Vec<&str> = mapping.entities().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Author", "Customer", "Item", "Order", "Post", "Tag"]
    );

    let rels: Vec<&str> = mapping
        .relationships(&EntityName::new("Order"))
        .unwrap()
        .iter()
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(rels, vec!["items", "customer"]);
}

#[test]
fn test_duplicate_entity_rejected() {
    let yaml = r#"
entities:
  - name: Customer
    table: customers
  - name: Customer
    table: clients
"#;
    let err = Mapping::from_yaml(yaml, &SqlParser::duckdb()).unwrap_err();
    assert!(matches!(
        err,
        SqlError::Core(CoreError::DuplicateEntity { .. })
    ));
}

#[test]
fn test_duplicate_relationship_rejected() {
    let yaml = r#"
entities:
  - name: Customer
    table: customers
    relationships:
      - name: orders
        target: Order
        primary_join: "orders.customer_id = customers.id"
      - name: orders
        target: Order
        primary_join: "orders.buyer_id = customers.id"
  - name: Order
    table: orders
"#;
    let err = Mapping::from_yaml(yaml, &SqlParser::duckdb()).unwrap_err();
    assert!(matches!(
        err,
        SqlError::Core(CoreError::DuplicateRelationship { .. })
    ));
}

#[test]
fn test_dangling_target_rejected() {
    let yaml = r#"
entities:
  - name: Customer
    table: customers
    relationships:
      - name: invoices
        target: Invoice
        primary_join: "invoices.customer_id = customers.id"
"#;
    let err = Mapping::from_yaml(yaml, &SqlParser::duckdb()).unwrap_err();
    assert!(matches!(
        err,
        SqlError::Core(CoreError::UnknownEntity { ref entity }) if entity == "Invoice"
    ));
}

#[test]
fn test_invalid_predicate_rejected() {
    let yaml = r#"
entities:
  - name: Customer
    table: customers
    relationships:
      - name: orders
        target: Order
        primary_join: "customer_id = id"
  - name: Order
    table: orders
"#;
    let err = Mapping::from_yaml(yaml, &SqlParser::duckdb()).unwrap_err();
    assert!(matches!(err, SqlError::InvalidPredicate { .. }));
}

#[test]
fn test_composite_primary_join() {
    let yaml = r#"
entities:
  - name: Order
    table: orders
    relationships:
      - name: lines
        target: Line
        primary_join: "orders.id = lines.order_id AND orders.region = lines.region"
  - name: Line
    table: lines
"#;
    let mapping = Mapping::from_yaml(yaml, &SqlParser::duckdb()).unwrap();
    let hop = mapping
        .lookup_relationship(&EntityName::new("Order"), "lines")
        .unwrap();
    assert_eq!(hop.primary_join.terms().len(), 2);
}

#[test]
fn test_load_merges_files() {
    let dir = tempfile::tempdir().unwrap();
    let sales = dir.path().join("sales.yml");
    let blog = dir.path().join("blog.yml");
    std::fs::write(
        &sales,
        r#"
entities:
  - name: Customer
    table: customers
    relationships:
      - name: orders
        target: Order
        primary_join: "orders.customer_id = customers.id"
"#,
    )
    .unwrap();
    std::fs::write(&blog, "entities:\n  - name: Order\n    table: orders\n").unwrap();

    let mapping = Mapping::load(&[sales, blog], &SqlParser::duckdb()).unwrap();
    let hop = mapping
        .lookup_relationship(&EntityName::new("Customer"), "orders")
        .unwrap();
    assert_eq!(
        hop.primary_join,
        eq(("orders", "customer_id"), ("customers", "id"))
    );
}
