use crate::core::cart::Cart;
use crate::core::catalog::Catalog;
use crate::core::suggestions::SuggestionTable;
use crate::domain::model::{Action, CatalogItem, ParsedCommand};
use std::sync::Arc;

/// Status message plus the suggestions to show after a command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    pub message: String,
    pub suggestions: Vec<Arc<CatalogItem>>,
}

/// Applies a parsed command to the cart. Never fails: an unmatched item
/// becomes a "not found" message and leaves the cart alone.
pub fn execute(
    command: &ParsedCommand,
    cart: &mut Cart,
    catalog: &Catalog,
    table: &SuggestionTable,
) -> ExecutionOutcome {
    let Some(item) = command.item.as_ref() else {
        tracing::info!("🔍 No product matched {:?}", command.query);
        return ExecutionOutcome {
            message: format!("Sorry, couldn't find \"{}\" in our store.", command.query),
            suggestions: Vec::new(),
        };
    };

    match command.action {
        Action::Add | Action::Unknown => {
            cart.add(Arc::clone(item), command.quantity);
            tracing::info!("🛒 Added {} x {} (id {})", command.quantity, item.name, item.id);
            ExecutionOutcome {
                message: format!("Added {} of {} to cart.", command.quantity, item.name),
                suggestions: table.suggestions_for(item.id, catalog),
            }
        }
        Action::Remove => {
            cart.remove_all(item.id);
            tracing::info!("🗑️ Removed {} (id {})", item.name, item.id);
            ExecutionOutcome {
                message: format!("Removed {} from cart.", item.name),
                suggestions: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin;
    use crate::core::parser::CommandParser;

    fn run(cart: &mut Cart, utterance: &str) -> ExecutionOutcome {
        let catalog = builtin::catalog();
        let table = builtin::suggestion_table();
        let command = CommandParser::default().parse(utterance, &catalog);
        execute(&command, cart, &catalog, &table)
    }

    #[test]
    fn test_add_reports_quantity_and_suggests() {
        let mut cart = Cart::new();
        let outcome = run(&mut cart, "add 2 bread");
        assert_eq!(outcome.message, "Added 2 of English Oven Brown Bread to cart.");
        let names: Vec<_> = outcome.suggestions.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Amul Butter Pasteurised", "Amul Cheese Slices"]);
        assert_eq!(cart.quantity_of(11), Some(2));
    }

    #[test]
    fn test_add_without_table_entry_has_no_suggestions() {
        let mut cart = Cart::new();
        let outcome = run(&mut cart, "add mango");
        assert!(outcome.suggestions.is_empty());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        run(&mut cart, "add 5 salt");
        let outcome = run(&mut cart, "delete salt");
        assert_eq!(outcome.message, "Removed Tata Salt from cart.");
        assert!(outcome.suggestions.is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_of_item_not_in_cart_still_reports() {
        let mut cart = Cart::new();
        let outcome = run(&mut cart, "remove chips");
        assert_eq!(outcome.message, "Removed Lays Potato Chips from cart.");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_not_found_leaves_cart_untouched() {
        let mut cart = Cart::new();
        run(&mut cart, "add curd");
        let outcome = run(&mut cart, "add xyz");
        assert_eq!(outcome.message, "Sorry, couldn't find \"xyz\" in our store.");
        assert!(outcome.suggestions.is_empty());
        assert_eq!(cart.item_count(), 1);
    }
}
