use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub type ProductId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dairy,
    Fruits,
    Bakery,
    Snacks,
    Pantry,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Fruits => "Fruits",
            Category::Bakery => "Bakery",
            Category::Snacks => "Snacks",
            Category::Pantry => "Pantry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dairy" => Ok(Category::Dairy),
            "fruits" => Ok(Category::Fruits),
            "bakery" => Ok(Category::Bakery),
            "snacks" => Ok(Category::Snacks),
            "pantry" => Ok(Category::Pantry),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// A purchasable product. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Package size as printed on the card, e.g. "500ml" or "12 pieces".
    pub quantity: String,
    /// Unit price in whole currency units.
    pub price: u64,
    pub category: Category,
    #[serde(default)]
    pub image: String,
    /// Lowercase aliases in matching order, possibly in more than one script.
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Remove,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    pub action: Action,
    pub item: Option<Arc<CatalogItem>>,
    pub quantity: u32,
    /// Utterance left over after action and quantity tokens are stripped.
    pub query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: Arc<CatalogItem>,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        self.item.price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "hi-IN")]
    HindiIndia,
}

impl Language {
    pub fn tag(&self) -> &'static str {
        match self {
            Language::EnglishUs => "en-US",
            Language::HindiIndia => "hi-IN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" | "en" => Ok(Language::EnglishUs),
            "hi-IN" | "hi" => Ok(Language::HindiIndia),
            other => Err(format!("unsupported language tag: {}", other)),
        }
    }
}

/// What a recognizer yields for one capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Transcript(String),
    Failed(String),
    NoResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip_through_tag() {
        assert_eq!("hi-IN".parse::<Language>().unwrap(), Language::HindiIndia);
        assert_eq!(Language::default().tag(), "en-US");
        assert!("fr-FR".parse::<Language>().is_err());
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("bakery".parse::<Category>().unwrap(), Category::Bakery);
        assert_eq!("Snacks".parse::<Category>().unwrap(), Category::Snacks);
        assert!("Frozen".parse::<Category>().is_err());
    }
}
