//! Strongly-typed table name.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// The database table an entity or junction is stored in.
    ///
    /// Prevents accidental mixing of table names with entity names, which
    /// usually differ (`Order` is stored in `orders`). May be qualified with
    /// a schema or catalog (`raw.orders`).
    pub struct TableName;
    check = qualified_violation;
}

impl TableName {
    /// Dot-separated parts, schema first
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_display() {
        let name = TableName::new("post_tags");
        assert_eq!(format!("{}", name), "post_tags");
    }

    #[test]
    fn test_table_name_deref() {
        let name = TableName::new("orders");
        assert!(name.starts_with("ord"));
        assert_eq!(&*name, "orders");
    }

    #[test]
    fn test_table_name_try_from() {
        assert!(TableName::try_from("orders").is_ok());
        assert_eq!(TableName::try_from(""), Err("must not be empty"));
        assert!(TableName::try_from("raw.orders".to_string()).is_ok());
        assert_eq!(
            TableName::try_from("raw..orders"),
            Err("must not contain an empty segment")
        );
        assert!(TableName::try_from(".orders").is_err());
    }

    #[test]
    fn test_schema_qualified_parts() {
        let name = TableName::new("analytics.raw.orders");
        assert_eq!(name.parts().collect::<Vec<_>>(), vec!["analytics", "raw", "orders"]);
        assert_eq!(TableName::new("orders").parts().count(), 1);

        let parsed: TableName = serde_yaml::from_str("raw.orders").unwrap();
        assert_eq!(parsed, "raw.orders");
        assert!(serde_yaml::from_str::<TableName>("raw.").is_err());
    }

    #[test]
    fn test_table_name_equality() {
        let name = TableName::new("orders");
        assert_eq!(name, "orders");
        assert_eq!(name, *"orders");
        assert_eq!(name, "orders".to_string());
    }
}
