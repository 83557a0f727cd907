//! Field type catalog
//!
//! The catalog is the analyzer's view of index metadata: for an index or
//! alias name it supplies the type of every field, nested fields named with
//! dots. How the metadata is stored or fetched is up to the implementor.

use indexmap::IndexMap;
use searchql_types::ExprType;
use std::collections::HashMap;

/// Source of field types for an index
pub trait FieldCatalog {
    /// Field name to type mapping of an index, or None if the index is unknown
    fn field_types(&self, index: &str) -> Option<IndexMap<String, ExprType>>;
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    indices: HashMap<String, IndexMap<String, ExprType>>,
}

impl StaticCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an index with its fields
    pub fn with_index<S: Into<String>>(
        mut self,
        index: impl Into<String>,
        fields: impl IntoIterator<Item = (S, ExprType)>,
    ) -> Self {
        self.insert(index, fields);
        self
    }

    /// Add or replace an index
    pub fn insert<S: Into<String>>(
        &mut self,
        index: impl Into<String>,
        fields: impl IntoIterator<Item = (S, ExprType)>,
    ) {
        let fields = fields
            .into_iter()
            .map(|(name, ty)| (name.into(), ty))
            .collect();
        self.indices.insert(index.into(), fields);
    }
}

impl FieldCatalog for StaticCatalog {
    fn field_types(&self, index: &str) -> Option<IndexMap<String, ExprType>> {
        self.indices.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog() {
        let catalog = StaticCatalog::new().with_index(
            "accounts",
            [("age", ExprType::Integer), ("address.city", ExprType::String)],
        );
        let fields = catalog.field_types("accounts").unwrap();
        assert_eq!(fields.get("address.city"), Some(&ExprType::String));
        assert!(catalog.field_types("orders").is_none());
    }
}
