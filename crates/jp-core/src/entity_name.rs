//! Strongly-typed entity name.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// The name of a mapped entity type (e.g. `Customer`).
    pub struct EntityName;
}
