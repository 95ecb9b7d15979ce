use super::*;
use std::io::Write;

const SHOP: &str = r#"
entities:
  - name: Customer
    table: customers
    relationships:
      - name: orders
        target: Order
        primary_join: "orders.customer_id = customers.id"
  - name: Order
    table: orders
  - name: Post
    table: posts
    relationships:
      - name: tags
        target: Tag
        primary_join: "post_tags.post_id = posts.id"
        junction:
          table: post_tags
          join: "post_tags.tag_id = tags.id"
  - name: Tag
    table: tags
"#;

#[test]
fn test_parse_mapping() {
    let mapping = MappingFile::from_yaml(SHOP).unwrap();
    assert_eq!(mapping.entities.len(), 4);

    let customer = &mapping.entities[0];
    assert_eq!(customer.name, "Customer");
    assert_eq!(customer.table, "customers");
    assert_eq!(customer.relationships[0].target, "Order");
    assert!(customer.relationships[0].junction.is_none());

    let tags = &mapping.entities[2].relationships[0];
    let junction = tags.junction.as_ref().unwrap();
    assert_eq!(junction.table, "post_tags");
    assert_eq!(junction.join, "post_tags.tag_id = tags.id");
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = r#"
entities:
  - name: Customer
    table: customers
    tabel: typo
"#;
    assert!(MappingFile::from_yaml(yaml).is_err());
}

#[test]
fn test_key_columns_not_part_of_format() {
    // Keys live in the join predicates, not on the entity
    let yaml = r#"
entities:
  - name: Customer
    table: customers
    primary_key: [id]
"#;
    assert!(MappingFile::from_yaml(yaml).is_err());
}

#[test]
fn test_dotted_entity_name_rejected() {
    let yaml = r#"
entities:
  - name: shop.Customer
    table: customers
"#;
    assert!(MappingFile::from_yaml(yaml).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHOP.as_bytes()).unwrap();
    let mapping = MappingFile::load(file.path()).unwrap();
    assert_eq!(mapping.entities.len(), 4);
}

#[test]
fn test_load_missing_file() {
    let result = MappingFile::load(Path::new("/nonexistent/mapping.yml"));
    assert!(matches!(result, Err(CoreError::ConfigNotFound { .. })));
}

#[test]
fn test_load_invalid_yaml_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"entities: [unterminated").unwrap();
    let err = MappingFile::load(file.path()).unwrap_err();
    match err {
        CoreError::ConfigParseError { path, .. } => {
            assert_eq!(path, file.path().display().to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_merge_keeps_order() {
    let mut a = MappingFile::from_yaml("entities:\n  - name: A\n    table: a\n").unwrap();
    let b = MappingFile::from_yaml("entities:\n  - name: B\n    table: b\n").unwrap();
    a.merge(b);
    let names: Vec<&str> = a.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}
