//! Shared hop fixtures for tests
//!
//! The fixtures model a small shop and blog:
//! `Customer -orders-> Order -items-> Item` (one-to-many foreign keys) and
//! `Post -tags-> Tag` through the `post_tags` junction table.

use crate::column_name::ColumnName;
use crate::entity_name::EntityName;
use crate::hop::{EntityRef, Hop, Junction};
use crate::predicate::{ColumnRef, JoinPredicate};
use crate::relationship_name::RelationshipName;
use crate::table_name::TableName;

/// Shorthand for an entity mapped to a table
pub fn entity(name: &str, table: &str) -> EntityRef {
    EntityRef::new(EntityName::new(name), TableName::new(table))
}

/// Shorthand for a qualified column
pub fn col(table: &str, column: &str) -> ColumnRef {
    ColumnRef::new(TableName::new(table), ColumnName::new(column))
}

/// Shorthand for `left_table.left_col = right_table.right_col`
pub fn eq(left: (&str, &str), right: (&str, &str)) -> JoinPredicate {
    JoinPredicate::single(col(left.0, left.1), col(right.0, right.1))
}

/// A foreign-key hop
pub fn hop(name: &str, owning: EntityRef, target: EntityRef, on: JoinPredicate) -> Hop {
    Hop {
        name: RelationshipName::new(name),
        owning,
        target,
        primary_join: on,
        junction: None,
    }
}

/// A many-to-many hop through `junction_table`
pub fn m2m_hop(
    name: &str,
    owning: EntityRef,
    target: EntityRef,
    on: JoinPredicate,
    junction_table: &str,
    junction_join: JoinPredicate,
) -> Hop {
    Hop {
        name: RelationshipName::new(name),
        owning,
        target,
        primary_join: on,
        junction: Some(Junction {
            table: TableName::new(junction_table),
            junction_join,
        }),
    }
}

pub fn customer() -> EntityRef {
    entity("Customer", "customers")
}

pub fn order() -> EntityRef {
    entity("Order", "orders")
}

pub fn item() -> EntityRef {
    entity("Item", "items")
}

pub fn post() -> EntityRef {
    entity("Post", "posts")
}

pub fn tag() -> EntityRef {
    entity("Tag", "tags")
}

/// `Customer.orders`: `orders.customer_id = customers.id`
pub fn orders_hop() -> Hop {
    hop(
        "orders",
        customer(),
        order(),
        eq(("orders", "customer_id"), ("customers", "id")),
    )
}

/// `Order.items`: `orders.id = items.order_id`
pub fn items_hop() -> Hop {
    hop(
        "items",
        order(),
        item(),
        eq(("orders", "id"), ("items", "order_id")),
    )
}

/// `Post.tags` through `post_tags`
pub fn tags_hop() -> Hop {
    m2m_hop(
        "tags",
        post(),
        tag(),
        eq(("post_tags", "post_id"), ("posts", "id")),
        "post_tags",
        eq(("post_tags", "tag_id"), ("tags", "id")),
    )
}
