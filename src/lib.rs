pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::StoreConfig;
pub use crate::core::{
    assistant::{AssistantSnapshot, ShoppingAssistant},
    cart::Cart,
    catalog::Catalog,
    executor::{execute, ExecutionOutcome},
    parser::CommandParser,
    session::{CaptureSession, SessionOutcome, SessionState, Surface},
    suggestions::SuggestionTable,
};
pub use utils::error::{AssistantError, Result};
