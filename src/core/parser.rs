use crate::core::catalog::Catalog;
use crate::domain::model::{Action, ParsedCommand};
use crate::utils::error::{AssistantError, Result};
use regex::Regex;

pub const DEFAULT_ADD_TRIGGERS: &[&str] = &[
    "add", "i need", "buy", "get", "want", "joड़ें", "chahiye", "खरीदना", "जोड़ें", "चाहिए",
];

pub const DEFAULT_REMOVE_TRIGGERS: &[&str] = &["remove", "delete", "take off", "हटाएं", "हटाओ"];

pub const DEFAULT_QUANTITY_UNITS: &[&str] = &["kg", "kgs", "liter", "liters", "dozen"];

/// Turns a raw utterance into a [`ParsedCommand`].
///
/// Matching is plain substring containment over the lowercased text, for
/// trigger phrases and keywords alike. A short keyword inside an unrelated
/// word still matches ("tea" in "steak").
#[derive(Debug, Clone)]
pub struct CommandParser {
    add_triggers: Vec<String>,
    remove_triggers: Vec<String>,
    quantity_pattern: Regex,
}

impl CommandParser {
    pub fn new(add_triggers: Vec<String>, remove_triggers: Vec<String>, units: &[String]) -> Result<Self> {
        let alternatives: Vec<String> = units.iter().map(|u| regex::escape(u)).collect();
        let pattern = if alternatives.is_empty() {
            r"([0-9]+)".to_string()
        } else {
            format!(r"([0-9]+)\s*({})?", alternatives.join("|"))
        };

        let quantity_pattern = Regex::new(&pattern).map_err(|e| AssistantError::ConfigValidationError {
            field: "quantity.units".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            add_triggers,
            remove_triggers,
            quantity_pattern,
        })
    }

    pub fn add_triggers(&self) -> &[String] {
        &self.add_triggers
    }

    pub fn remove_triggers(&self) -> &[String] {
        &self.remove_triggers
    }

    pub fn parse(&self, utterance: &str, catalog: &Catalog) -> ParsedCommand {
        let normalized = utterance.to_lowercase();
        let normalized = normalized.trim();
        let mut residual = normalized.to_string();

        // 先找新增，再找移除；每個清單只取第一個命中的觸發詞
        let mut action = Action::Unknown;
        if let Some(trigger) = first_contained(&self.add_triggers, normalized) {
            action = Action::Add;
            residual = residual.replace(trigger, "");
        } else if let Some(trigger) = first_contained(&self.remove_triggers, normalized) {
            action = Action::Remove;
            residual = residual.replace(trigger, "");
        }

        if action == Action::Unknown {
            action = Action::Add;
        }

        let quantity_match = self.quantity_pattern.captures(&residual).map(|found| {
            let span = found.get(0).map(|m| m.range()).unwrap_or(0..0);
            // 0 或超出 u32 的數字視為未指定數量
            let parsed = found
                .get(1)
                .and_then(|digits| digits.as_str().parse::<u32>().ok())
                .filter(|q| *q > 0)
                .unwrap_or(1);
            (span, parsed)
        });

        let mut quantity = 1;
        if let Some((span, parsed)) = quantity_match {
            quantity = parsed;
            residual.replace_range(span, "");
        }
        let residual = residual.trim().to_string();

        let item = catalog.find_by_keyword(&residual).cloned();

        tracing::debug!(
            "Parsed {:?} -> action={:?} quantity={} item={:?} query={:?}",
            utterance,
            action,
            quantity,
            item.as_ref().map(|i| i.id),
            residual
        );

        ParsedCommand {
            action,
            item,
            quantity,
            query: residual,
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        let units: Vec<String> = DEFAULT_QUANTITY_UNITS.iter().map(|u| u.to_string()).collect();
        Self::new(
            DEFAULT_ADD_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            DEFAULT_REMOVE_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            &units,
        )
        .expect("built-in quantity pattern is valid")
    }
}

fn first_contained<'a>(triggers: &'a [String], text: &str) -> Option<&'a str> {
    triggers
        .iter()
        .map(String::as_str)
        .find(|trigger| !trigger.is_empty() && text.contains(trigger))
}
