use talk2shop::core::Action;
use talk2shop::{CommandParser, ShoppingAssistant};

fn names(assistant: &ShoppingAssistant) -> Vec<String> {
    assistant.suggestions().iter().map(|i| i.name.clone()).collect()
}

/// "add milk" 加入一瓶牛奶並推薦餅乾與鬆餅粉
#[test]
fn test_add_milk_scenario() {
    let mut assistant = ShoppingAssistant::default();
    let command = CommandParser::default().parse("add milk", assistant.catalog());
    assert_eq!(command.action, Action::Add);
    assert_eq!(command.quantity, 1);
    assert_eq!(command.item.as_ref().map(|i| i.name.as_str()), Some("Amul Taaza Toned Milk"));

    assistant.handle_utterance("add milk");

    let lines = assistant.cart().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].item.id, 1);
    assert_eq!(lines[0].quantity, 1);
    assert_eq!(names(&assistant), vec!["Parle-G Gold Biscuits", "Pancake & Waffle Mix"]);
    assert_eq!(assistant.message(), "Added 1 of Amul Taaza Toned Milk to cart.");
}

/// "remove doodh" 透過別名移除整行並清空推薦
#[test]
fn test_remove_doodh_scenario() {
    let mut assistant = ShoppingAssistant::default();
    assistant.handle_utterance("add 3 milk");
    assistant.handle_utterance("add bread");
    assert_eq!(assistant.cart().quantity_of(1), Some(3));

    let outcome = assistant.handle_utterance("remove doodh");

    assert_eq!(outcome.message, "Removed Amul Taaza Toned Milk from cart.");
    assert_eq!(assistant.cart().quantity_of(1), None);
    assert_eq!(assistant.cart().item_count(), 1);
    assert!(assistant.suggestions().is_empty());
}

#[test]
fn test_two_dozen_bananas_scenario() {
    let mut assistant = ShoppingAssistant::default();
    assistant.handle_utterance("2 dozen bananas");

    let lines = assistant.cart().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].item.name, "Dozen Bananas");
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(assistant.cart().total(), 120);
}

#[test]
fn test_unknown_thing_scenario() {
    let mut assistant = ShoppingAssistant::default();
    assistant.handle_utterance("add tea");
    assert!(!assistant.suggestions().is_empty());

    let outcome = assistant.handle_utterance("xyz unknown thing");

    assert_eq!(outcome.message, "Sorry, couldn't find \"xyz unknown thing\" in our store.");
    assert!(outcome.suggestions.is_empty());
    assert!(assistant.suggestions().is_empty());
    assert_eq!(assistant.cart().item_count(), 1);
    assert_eq!(assistant.cart().quantity_of(23), Some(1));
}

#[test]
fn test_repeated_voice_adds_merge() {
    let mut assistant = ShoppingAssistant::default();
    assistant.handle_utterance("i need 2 atta");
    assistant.handle_utterance("buy 3 kg atta");
    assistant.handle_utterance("आटा चाहिए");

    assert_eq!(assistant.cart().item_count(), 1);
    assert_eq!(assistant.cart().quantity_of(21), Some(6));
    assert_eq!(
        names(&assistant),
        vec!["Fortune Sun Lite Refined Sunflower Oil", "Tata Salt"]
    );
}

#[test]
fn test_cart_never_holds_non_positive_quantities() {
    let mut assistant = ShoppingAssistant::default();
    assistant.handle_utterance("add 2 curd");
    assistant.handle_utterance("add chips");

    assistant.set_quantity(3, 0);
    assistant.set_quantity(16, -4);
    assistant.set_quantity(16, 5);

    assert!(assistant.cart().is_empty());
    assert!(assistant.cart().lines().iter().all(|line| line.quantity >= 1));
}

#[test]
fn test_snapshot_reflects_cart_and_status() {
    let mut assistant = ShoppingAssistant::default();
    assistant.handle_utterance("add 2 butter");
    assistant.handle_utterance("add cheese");

    let snapshot = assistant.snapshot();
    assert_eq!(snapshot.item_count, 2);
    assert_eq!(snapshot.lines[0].subtotal, 112);
    assert_eq!(snapshot.lines[1].subtotal, 135);
    assert_eq!(snapshot.total, 247);
    assert_eq!(snapshot.status, "Added 1 of Amul Cheese Slices to cart.");
    let ids: Vec<_> = snapshot.suggestions.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![11, 16]);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["language"], "en-US");
    assert_eq!(json["total"], 247);
}
