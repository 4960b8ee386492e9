use crate::core::catalog::Catalog;
use crate::domain::model::{CatalogItem, ProductId};
use std::collections::HashMap;
use std::sync::Arc;

/// Directed "goes well with" edges between products. Not symmetric.
#[derive(Debug, Clone, Default)]
pub struct SuggestionTable {
    edges: HashMap<ProductId, Vec<ProductId>>,
}

impl SuggestionTable {
    pub fn new(edges: HashMap<ProductId, Vec<ProductId>>) -> Self {
        Self { edges }
    }

    pub fn targets(&self, id: ProductId) -> &[ProductId] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolves the complementary products for `id` in table order. Ids that
    /// no longer exist in the catalog are skipped.
    pub fn suggestions_for(&self, id: ProductId, catalog: &Catalog) -> Vec<Arc<CatalogItem>> {
        self.targets(id)
            .iter()
            .filter_map(|target| {
                let item = catalog.get(*target).cloned();
                if item.is_none() {
                    tracing::warn!("Suggestion {} -> {} points at a missing product", id, target);
                }
                item
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    fn catalog() -> Catalog {
        let item = |id: ProductId, name: &str| CatalogItem {
            id,
            name: name.to_string(),
            brand: "Local".to_string(),
            quantity: "1pc".to_string(),
            price: 10,
            category: Category::Pantry,
            image: String::new(),
            keywords: vec![name.to_lowercase()],
        };
        Catalog::new(vec![item(1, "Tea"), item(2, "Biscuits"), item(3, "Sugar")])
    }

    #[test]
    fn test_table_order_is_preserved() {
        let table = SuggestionTable::new(HashMap::from([(1, vec![3, 2])]));
        let names: Vec<_> = table
            .suggestions_for(1, &catalog())
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, vec!["Sugar", "Biscuits"]);
    }

    #[test]
    fn test_missing_entry_yields_empty() {
        let table = SuggestionTable::new(HashMap::from([(1, vec![2])]));
        assert!(table.suggestions_for(3, &catalog()).is_empty());
    }

    #[test]
    fn test_dangling_ids_are_skipped() {
        let table = SuggestionTable::new(HashMap::from([(1, vec![42, 2])]));
        let ids: Vec<_> = table
            .suggestions_for(1, &catalog())
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }
}
