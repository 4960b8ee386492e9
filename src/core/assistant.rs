use crate::config::toml_config::StoreConfig;
use crate::core::cart::Cart;
use crate::core::catalog::Catalog;
use crate::core::executor::{self, ExecutionOutcome};
use crate::core::parser::CommandParser;
use crate::core::session::{CaptureSession, SessionOutcome, SessionTicket, Surface};
use crate::core::suggestions::SuggestionTable;
use crate::domain::model::{CatalogItem, Category, Language, ProductId};
use crate::domain::ports::SpeechRecognizer;
use crate::utils::error::{AssistantError, Result};
use serde::Serialize;
use std::sync::Arc;

pub const INITIAL_MESSAGE: &str = "Tap the mic or use the search bar";
pub const LISTENING_MESSAGE: &str = "Listening...";
pub const LANGUAGE_LOCKED_MESSAGE: &str = "Can't change language while listening";

/// 單一控制器：持有購物車、狀態訊息、建議清單與兩個麥克風 session
pub struct ShoppingAssistant {
    catalog: Catalog,
    suggestion_table: SuggestionTable,
    parser: CommandParser,
    currency: String,
    cart: Cart,
    message: String,
    suggestions: Vec<Arc<CatalogItem>>,
    search_term: String,
    selected_category: Option<Category>,
    language: Language,
    cart_mic: CaptureSession,
    search_mic: CaptureSession,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotLine {
    pub id: ProductId,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub subtotal: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionView {
    pub id: ProductId,
    pub name: String,
}

/// Everything the rendering side needs after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantSnapshot {
    pub lines: Vec<SnapshotLine>,
    pub total: u64,
    pub item_count: usize,
    pub currency: String,
    pub status: String,
    pub suggestions: Vec<SuggestionView>,
    pub search_term: String,
    pub selected_category: Option<Category>,
    pub language: Language,
    pub listening: Vec<Surface>,
}

impl ShoppingAssistant {
    pub fn new(catalog: Catalog, suggestion_table: SuggestionTable, parser: CommandParser) -> Self {
        Self {
            catalog,
            suggestion_table,
            parser,
            currency: "₹".to_string(),
            cart: Cart::new(),
            message: INITIAL_MESSAGE.to_string(),
            suggestions: Vec::new(),
            search_term: String::new(),
            selected_category: None,
            language: Language::default(),
            cart_mic: CaptureSession::new(Surface::CartCommand),
            search_mic: CaptureSession::new(Surface::Search),
        }
    }

    pub fn from_store(store: &StoreConfig) -> Result<Self> {
        let mut assistant = Self::new(store.catalog(), store.suggestion_table(), store.parser()?);
        assistant.currency = store.currency().to_string();
        assistant.language = store.default_language();
        Ok(assistant)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn suggestions(&self) -> &[Arc<CatalogItem>] {
        &self.suggestions
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Parses and applies one utterance from the cart-command surface or the
    /// keyboard.
    pub fn handle_utterance(&mut self, utterance: &str) -> ExecutionOutcome {
        let command = self.parser.parse(utterance, &self.catalog);
        let outcome = executor::execute(&command, &mut self.cart, &self.catalog, &self.suggestion_table);
        self.message = outcome.message.clone();
        self.suggestions = outcome.suggestions.clone();
        outcome
    }

    /// "ADD" on a product card or a suggestion pill: one unit, fresh
    /// suggestions, status message untouched.
    pub fn add_product(&mut self, id: ProductId) -> Result<()> {
        let item = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(AssistantError::UnknownProduct { id })?;
        tracing::info!("🛒 Added 1 x {} (id {})", item.name, item.id);
        self.cart.add(item, 1);
        self.suggestions = self.suggestion_table.suggestions_for(id, &self.catalog);
        Ok(())
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        self.cart.set_quantity(id, quantity);
    }

    /// Stepper "+". Lines not in the cart are left alone.
    pub fn increment(&mut self, id: ProductId) {
        if let Some(current) = self.cart.quantity_of(id) {
            self.cart.set_quantity(id, i64::from(current) + 1);
        }
    }

    /// Stepper "-". Stepping below one removes the line.
    pub fn decrement(&mut self, id: ProductId) {
        if let Some(current) = self.cart.quantity_of(id) {
            self.cart.set_quantity(id, i64::from(current) - 1);
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    pub fn categories(&self) -> Vec<Category> {
        self.catalog.categories()
    }

    pub fn visible_products(&self) -> Vec<Arc<CatalogItem>> {
        self.catalog.filter(self.selected_category, &self.search_term)
    }

    /// Language can't change while the cart mic is open.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.cart_mic.is_listening() {
            tracing::warn!("Language change to {} refused while listening", language);
            self.message = LANGUAGE_LOCKED_MESSAGE.to_string();
            return false;
        }
        self.language = language;
        true
    }

    pub fn is_listening(&self) -> bool {
        self.cart_mic.is_listening() || self.search_mic.is_listening()
    }

    pub fn status_line(&self) -> &str {
        if self.is_listening() {
            LISTENING_MESSAGE
        } else {
            &self.message
        }
    }

    /// Opens a capture session on `surface`, cancelling one already in flight
    /// there. Returns `None` when the recognizer is unsupported.
    pub fn begin_listening(
        &mut self,
        surface: Surface,
        recognizer: &dyn SpeechRecognizer,
    ) -> Option<SessionTicket> {
        if !recognizer.is_supported() {
            tracing::warn!("Speech recognition unsupported for {:?}", surface);
            self.message = AssistantError::RecognitionUnsupported.user_friendly_message();
            return None;
        }
        let language = self.language;
        Some(self.session_mut(surface).start(language))
    }

    pub fn cancel_listening(&mut self, surface: Surface) {
        let session = self.session_mut(surface);
        session.cancel();
        session.reset();
    }

    /// Applies a recognizer result. Stale tickets are dropped without any
    /// state change.
    pub fn complete_listening(
        &mut self,
        ticket: SessionTicket,
        outcome: crate::domain::model::RecognitionOutcome,
    ) -> Option<SessionOutcome> {
        let surface = ticket.surface();
        let session = self.session_mut(surface);
        let result = session.finish(ticket, outcome)?;
        session.reset();

        match (&result, surface) {
            (SessionOutcome::Transcript(text), Surface::CartCommand) => {
                tracing::info!("🎙️ Heard {:?}", text);
                self.handle_utterance(text);
            }
            (SessionOutcome::Transcript(text), Surface::Search) => {
                tracing::info!("🔍 Search by voice: {:?}", text);
                self.search_term = text.clone();
            }
            (SessionOutcome::Failed(reason), _) => {
                tracing::error!("❌ Speech recognition error: {}", reason);
                self.message = AssistantError::RecognitionError {
                    reason: reason.clone(),
                }
                .to_string();
            }
            (SessionOutcome::Ended, _) => {
                tracing::debug!("🎙️ {:?} ended without a result", surface);
            }
        }

        Some(result)
    }

    /// One full capture session: start, await the recognizer, apply.
    pub async fn listen(
        &mut self,
        surface: Surface,
        recognizer: &dyn SpeechRecognizer,
    ) -> Option<SessionOutcome> {
        let ticket = self.begin_listening(surface, recognizer)?;
        let outcome = recognizer.recognize(self.language).await;
        self.complete_listening(ticket, outcome)
    }

    pub fn snapshot(&self) -> AssistantSnapshot {
        let mut listening = Vec::new();
        if self.cart_mic.is_listening() {
            listening.push(Surface::CartCommand);
        }
        if self.search_mic.is_listening() {
            listening.push(Surface::Search);
        }

        AssistantSnapshot {
            lines: self
                .cart
                .lines()
                .iter()
                .map(|line| SnapshotLine {
                    id: line.item.id,
                    name: line.item.name.clone(),
                    unit_price: line.item.price,
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
                .collect(),
            total: self.cart.total(),
            item_count: self.cart.item_count(),
            currency: self.currency.clone(),
            status: self.status_line().to_string(),
            suggestions: self
                .suggestions
                .iter()
                .map(|item| SuggestionView {
                    id: item.id,
                    name: item.name.clone(),
                })
                .collect(),
            search_term: self.search_term.clone(),
            selected_category: self.selected_category,
            language: self.language,
            listening,
        }
    }

    fn session_mut(&mut self, surface: Surface) -> &mut CaptureSession {
        match surface {
            Surface::CartCommand => &mut self.cart_mic,
            Surface::Search => &mut self.search_mic,
        }
    }
}

impl Default for ShoppingAssistant {
    fn default() -> Self {
        Self::new(
            crate::config::builtin::catalog(),
            crate::config::builtin::suggestion_table(),
            CommandParser::default(),
        )
    }
}
