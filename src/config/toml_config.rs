use crate::config::builtin;
use crate::core::catalog::Catalog;
use crate::core::parser::{
    CommandParser, DEFAULT_ADD_TRIGGERS, DEFAULT_QUANTITY_UNITS, DEFAULT_REMOVE_TRIGGERS,
};
use crate::core::suggestions::SuggestionTable;
use crate::domain::model::{CatalogItem, Language, ProductId};
use crate::utils::error::{AssistantError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: Option<StoreSection>,
    pub triggers: Option<TriggerConfig>,
    pub quantity: Option<QuantityConfig>,
    pub products: Option<Vec<CatalogItem>>,
    /// 以商品 id 為 key 的推薦清單，TOML key 必須是字串
    pub suggestions: Option<HashMap<String, Vec<ProductId>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub default_language: Option<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub add: Option<Vec<String>>,
    pub remove: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityConfig {
    pub units: Option<Vec<String>>,
}

impl StoreConfig {
    /// 內建商店資料
    pub fn builtin() -> Self {
        Self {
            store: Some(StoreSection {
                name: Some("Talk2Shop".to_string()),
                currency: Some("₹".to_string()),
                default_language: Some(Language::EnglishUs),
            }),
            triggers: None,
            quantity: None,
            products: Some(builtin::products()),
            suggestions: Some(
                builtin::suggestion_edges()
                    .into_iter()
                    .map(|(id, targets)| (id.to_string(), targets))
                    .collect(),
            ),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AssistantError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AssistantError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STORE_NAME})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn store_name(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or("Talk2Shop")
    }

    pub fn currency(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|s| s.currency.as_deref())
            .unwrap_or("₹")
    }

    pub fn default_language(&self) -> Language {
        self.store
            .as_ref()
            .and_then(|s| s.default_language)
            .unwrap_or_default()
    }

    pub fn add_triggers(&self) -> Vec<String> {
        self.triggers
            .as_ref()
            .and_then(|t| t.add.clone())
            .unwrap_or_else(|| to_strings(DEFAULT_ADD_TRIGGERS))
    }

    pub fn remove_triggers(&self) -> Vec<String> {
        self.triggers
            .as_ref()
            .and_then(|t| t.remove.clone())
            .unwrap_or_else(|| to_strings(DEFAULT_REMOVE_TRIGGERS))
    }

    pub fn quantity_units(&self) -> Vec<String> {
        self.quantity
            .as_ref()
            .and_then(|q| q.units.clone())
            .unwrap_or_else(|| to_strings(DEFAULT_QUANTITY_UNITS))
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.products.clone().unwrap_or_default())
    }

    /// Keys that are not product ids are skipped; `validate` reports them.
    pub fn suggestion_table(&self) -> SuggestionTable {
        let edges = self
            .suggestions
            .iter()
            .flatten()
            .filter_map(|(key, targets)| key.trim().parse::<ProductId>().ok().map(|id| (id, targets.clone())))
            .collect();
        SuggestionTable::new(edges)
    }

    pub fn parser(&self) -> Result<CommandParser> {
        CommandParser::new(self.add_triggers(), self.remove_triggers(), &self.quantity_units())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let products = validation::validate_required_field("products", &self.products)?;

        validation::validate_unique("products.id", products.iter().map(|p| p.id))?;

        let mut keyword_owners: HashMap<&str, ProductId> = HashMap::new();
        for product in products {
            validation::validate_non_empty_string("products.name", &product.name)?;
            validation::validate_positive_number("products.price", product.price, 1)?;

            if product.keywords.is_empty() {
                return Err(AssistantError::InvalidConfigValueError {
                    field: "products.keywords".to_string(),
                    value: product.id.to_string(),
                    reason: "Every product needs at least one keyword".to_string(),
                });
            }

            for keyword in &product.keywords {
                validation::validate_lowercase("products.keywords", keyword)?;
                if let Some(owner) = keyword_owners.insert(keyword.as_str(), product.id) {
                    if owner != product.id {
                        return Err(AssistantError::InvalidConfigValueError {
                            field: "products.keywords".to_string(),
                            value: keyword.clone(),
                            reason: format!("Keyword shared by products {} and {}", owner, product.id),
                        });
                    }
                }
            }
        }

        for trigger in self.add_triggers().iter().chain(self.remove_triggers().iter()) {
            validation::validate_lowercase("triggers", trigger)?;
        }

        for unit in self.quantity_units() {
            validation::validate_non_empty_string("quantity.units", &unit)?;
        }
        self.parser()?;

        let known: HashSet<ProductId> = products.iter().map(|p| p.id).collect();
        for (key, targets) in self.suggestions.iter().flatten() {
            if key.trim().parse::<ProductId>().is_err() {
                return Err(AssistantError::InvalidConfigValueError {
                    field: "suggestions".to_string(),
                    value: key.clone(),
                    reason: "Suggestion keys must be product ids".to_string(),
                });
            }
            // 懸空的 id 只警告，解析時會略過
            for target in targets.iter().filter(|t| !known.contains(*t)) {
                tracing::warn!("Suggestion {} -> {} refers to an unknown product", key, target);
            }
        }

        Ok(())
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
