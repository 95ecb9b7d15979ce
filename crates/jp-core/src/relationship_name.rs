//! Strongly-typed relationship name.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// The attribute name of a relationship on its owning entity (e.g. `orders`).
    pub struct RelationshipName;
}
