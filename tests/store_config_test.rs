use anyhow::Result;
use talk2shop::domain::model::{Category, Language};
use talk2shop::utils::validation::Validate;
use talk2shop::{AssistantError, ShoppingAssistant, StoreConfig};
use tempfile::TempDir;

fn example_store() -> Result<StoreConfig> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("store.example.toml");
    Ok(StoreConfig::from_file(path)?)
}

/// 範例商店檔可載入並驅動整個流程
#[test]
fn test_example_store_drives_assistant() -> Result<()> {
    let store = example_store()?;
    store.validate()?;

    let mut assistant = ShoppingAssistant::from_store(&store)?;
    assert_eq!(assistant.catalog().len(), 4);
    assert_eq!(assistant.language(), Language::EnglishUs);

    assistant.handle_utterance("get 2 packets chai");
    assert_eq!(assistant.cart().quantity_of(1), Some(2));
    let names: Vec<_> = assistant.suggestions().iter().map(|i| i.name.clone()).collect();
    assert_eq!(names, vec!["Parle-G Gold Biscuits", "Haldiram Bhujia"]);

    assistant.handle_utterance("नमक चाहिए");
    assert_eq!(assistant.cart().total(), 2 * 150 + 25);
    assert!(assistant.suggestions().is_empty());

    assert_eq!(
        assistant.categories(),
        vec![Category::Pantry, Category::Bakery, Category::Snacks]
    );
    Ok(())
}

#[test]
fn test_unset_env_placeholder_is_kept_verbatim() -> Result<()> {
    std::env::remove_var("STORE_NAME");
    let store = example_store()?;
    assert_eq!(store.store_name(), "${STORE_NAME}");
    Ok(())
}

#[tokio::test]
async fn test_custom_triggers_replace_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("kiosk.toml");
    let config_content = r#"
[store]
name = "Kiosk"
currency = "$"
default_language = "hi-IN"

[triggers]
add = ["gimme"]
remove = ["drop"]

[[products]]
id = 10
name = "Cola"
brand = "Fizz"
quantity = "330ml"
price = 2
category = "Snacks"
keywords = ["cola", "soda"]
"#;
    tokio::fs::write(&config_path, config_content).await?;

    let store = StoreConfig::from_file(&config_path)?;
    store.validate()?;
    let mut assistant = ShoppingAssistant::from_store(&store)?;
    assert_eq!(assistant.language(), Language::HindiIndia);

    assistant.handle_utterance("gimme 6 soda");
    assert_eq!(assistant.cart().quantity_of(10), Some(6));
    assert_eq!(assistant.snapshot().currency, "$");

    // "remove" is no longer a trigger, so this reads as an add
    assistant.handle_utterance("remove cola");
    assert_eq!(assistant.cart().quantity_of(10), Some(7));

    assistant.handle_utterance("drop cola");
    assert!(assistant.cart().is_empty());
    Ok(())
}

#[test]
fn test_invalid_store_is_rejected() -> Result<()> {
    let store = StoreConfig::from_toml_str(
        r#"
[[products]]
id = 1
name = "Milk"
brand = "Local"
quantity = "1L"
price = 30
category = "Dairy"
keywords = ["milk"]

[[products]]
id = 1
name = "Curd"
brand = "Local"
quantity = "400g"
price = 35
category = "Dairy"
keywords = ["curd"]
"#,
    )?;

    let err = store.validate().unwrap_err();
    assert!(matches!(err, AssistantError::InvalidConfigValueError { ref field, .. } if field == "products.id"));
    Ok(())
}

#[test]
fn test_malformed_toml_is_a_config_error() {
    let err = StoreConfig::from_toml_str("[[products]\nid = ").unwrap_err();
    assert!(matches!(err, AssistantError::ConfigValidationError { .. }));
}

#[test]
fn test_huge_price_in_store_does_not_crash_totals() -> Result<()> {
    let store = StoreConfig::from_toml_str(
        r#"
[[products]]
id = 1
name = "Gold Bar"
brand = "Mint"
quantity = "1kg"
price = 9000000000000000000
category = "Pantry"
keywords = ["gold"]
"#,
    )?;
    store.validate()?;

    let mut assistant = ShoppingAssistant::from_store(&store)?;
    assistant.handle_utterance("add 3 gold");

    let snapshot = assistant.snapshot();
    assert_eq!(snapshot.lines[0].quantity, 3);
    assert_eq!(snapshot.lines[0].subtotal, u64::MAX);
    assert_eq!(snapshot.total, u64::MAX);
    Ok(())
}
