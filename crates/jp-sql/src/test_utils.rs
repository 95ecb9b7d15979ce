//! Shared test fixtures for jp-sql

use crate::mapping::Mapping;
use crate::parser::SqlParser;

/// Shop and blog mapping used across tests.
///
/// `Customer -orders-> Order -items-> Item`, `Order -customer-> Customer`,
/// `Author -posts-> Post -tags-> Tag` with `tags` going through `post_tags`.
pub const SHOP_MAPPING: &str = r#"
entities:
  - name: Customer
    table: customers
    relationships:
      - name: orders
        target: Order
        primary_join: "orders.customer_id = customers.id"
  - name: Order
    table: orders
    relationships:
      - name: items
        target: Item
        primary_join: "orders.id = items.order_id"
      - name: customer
        target: Customer
        primary_join: "orders.customer_id = customers.id"
  - name: Item
    table: items
  - name: Author
    table: authors
    relationships:
      - name: posts
        target: Post
        primary_join: "posts.author_id = authors.id"
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

/// Build the shop mapping with the DuckDB dialect
pub fn shop_mapping() -> Mapping {
    Mapping::from_yaml(SHOP_MAPPING, &SqlParser::duckdb())
        .unwrap_or_else(|e| panic!("shop mapping fixture is invalid: {e}"))
}
