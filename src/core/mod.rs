pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod executor;
pub mod parser;
pub mod session;
pub mod suggestions;

pub use crate::domain::model::{Action, CartLine, CatalogItem, Category, Language, ParsedCommand};
pub use crate::domain::ports::{CatalogSource, SpeechRecognizer};
pub use crate::utils::error::Result;
