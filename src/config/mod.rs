pub mod builtin;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::config::toml_config::StoreConfig;
    use crate::domain::model::Language;
    use crate::domain::ports::CatalogSource;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "talk2shop")]
    #[command(about = "Voice and text driven shopping assistant")]
    pub struct CliConfig {
        /// TOML store file; the built-in grocery store is used when omitted
        #[arg(short, long)]
        pub store: Option<String>,

        /// Recognition language (en-US or hi-IN), overrides the store default
        #[arg(short, long)]
        pub language: Option<Language>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log as JSON lines")]
        pub json_logs: bool,

        #[arg(long, help = "Print the state after each command as JSON")]
        pub snapshot_json: bool,
    }

    impl CatalogSource for CliConfig {
        fn load(&self) -> Result<StoreConfig> {
            let store = match &self.store {
                Some(path) => {
                    tracing::info!("📁 Loading store from: {}", path);
                    StoreConfig::from_file(path)?
                }
                None => StoreConfig::builtin(),
            };
            store.validate()?;
            Ok(store)
        }
    }

}
