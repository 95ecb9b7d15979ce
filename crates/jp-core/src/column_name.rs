//! Strongly-typed column name.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// An unqualified column name.
    pub struct ColumnName;
}
