use crate::domain::model::{CatalogItem, Category, ProductId};
use std::sync::Arc;

/// Read-only product registry. Iteration order is load order, which is also
/// the keyword-matching priority.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Arc<CatalogItem>>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items: items.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn items(&self) -> &[Arc<CatalogItem>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Arc<CatalogItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// 第一個出現在文字中的關鍵字勝出，依目錄順序、再依關鍵字順序
    pub fn find_by_keyword(&self, text: &str) -> Option<&Arc<CatalogItem>> {
        self.items.iter().find(|item| {
            item.keywords
                .iter()
                .any(|keyword| !keyword.is_empty() && text.contains(keyword.as_str()))
        })
    }

    /// Categories in order of first appearance.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        categories
    }

    /// Products in `category` (all when `None`) whose name contains `search`,
    /// ignoring case. An empty search term matches everything.
    pub fn filter(&self, category: Option<Category>, search: &str) -> Vec<Arc<CatalogItem>> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
