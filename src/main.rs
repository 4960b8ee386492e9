use clap::Parser;
use talk2shop::adapters::StdinRecognizer;
use talk2shop::core::CatalogSource;
use talk2shop::domain::model::{Category, Language, ProductId};
use talk2shop::utils::error::ErrorSeverity;
use talk2shop::utils::logger;
use talk2shop::{AssistantSnapshot, CliConfig, ShoppingAssistant, Surface};

const HELP: &str = "\
Type a command such as \"add 2 kg apple\" or \"remove doodh\".
  /mic              next line is a voice transcript for the cart
  /searchmic        next line is a voice transcript for the search bar
  /search <text>    set the search term (empty clears it)
  /category <name>  filter products by category (\"all\" clears it)
  /products         list visible products
  /add <id>         add one unit of a product
  /inc <id>         step a cart line up
  /dec <id>         step a cart line down
  /qty <id> <n>     set a cart line quantity
  /lang <tag>       switch language (en-US, hi-IN)
  /cart             show the cart
  /help             show this help
  /quit             exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting talk2shop");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let store = match config.load() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "❌ Failed to load store: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    let mut assistant = ShoppingAssistant::from_store(&store)?;
    if let Some(language) = config.language {
        assistant.set_language(language);
    }
    tracing::info!(
        "✅ {} ready with {} products ({})",
        store.store_name(),
        assistant.catalog().len(),
        assistant.language()
    );

    let input = StdinRecognizer::new();
    println!("{}", store.store_name());
    println!("{}", HELP);
    render(&assistant, config.snapshot_json)?;

    while let Some(line) = input.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(rest) = line.strip_prefix('/') else {
            assistant.handle_utterance(line);
            render(&assistant, config.snapshot_json)?;
            continue;
        };

        let (command, argument) = rest.split_once(' ').unwrap_or((rest, ""));
        let argument = argument.trim();
        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "mic" | "searchmic" => {
                let surface = if command == "mic" {
                    Surface::CartCommand
                } else {
                    Surface::Search
                };
                println!("🎙️ {}", talk2shop::core::assistant::LISTENING_MESSAGE);
                assistant.listen(surface, &input).await;
            }
            "search" => assistant.set_search_term(argument),
            "category" => {
                if argument.is_empty() || argument.eq_ignore_ascii_case("all") {
                    assistant.select_category(None);
                } else {
                    match argument.parse::<Category>() {
                        Ok(category) => assistant.select_category(Some(category)),
                        Err(e) => eprintln!("❌ {}", e),
                    }
                }
            }
            "products" => {
                let categories: Vec<_> = assistant.categories().iter().map(Category::to_string).collect();
                println!("Categories: All, {}", categories.join(", "));
                for item in assistant.visible_products() {
                    println!(
                        "  [{:>2}] {} ({}, {}) {}{}",
                        item.id,
                        item.name,
                        item.brand,
                        item.quantity,
                        store.currency(),
                        item.price
                    );
                }
                continue;
            }
            "add" => match parse_id(argument) {
                Some(id) => {
                    if let Err(e) = assistant.add_product(id) {
                        eprintln!("❌ {}", e.user_friendly_message());
                        eprintln!("💡 {}", e.recovery_suggestion());
                    }
                }
                None => eprintln!("❌ Usage: /add <id>"),
            },
            "inc" | "dec" => match parse_id(argument) {
                Some(id) if command == "inc" => assistant.increment(id),
                Some(id) => assistant.decrement(id),
                None => eprintln!("❌ Usage: /{} <id>", command),
            },
            "qty" => {
                let mut parts = argument.split_whitespace();
                let id = parts.next().and_then(parse_id);
                let quantity = parts.next().and_then(|q| q.parse::<i64>().ok());
                match (id, quantity) {
                    (Some(id), Some(quantity)) => assistant.set_quantity(id, quantity),
                    _ => eprintln!("❌ Usage: /qty <id> <n>"),
                }
            }
            "lang" => match argument.parse::<Language>() {
                Ok(language) => {
                    assistant.set_language(language);
                }
                Err(e) => eprintln!("❌ {}", e),
            },
            "cart" => {}
            other => eprintln!("❌ Unknown command /{} (try /help)", other),
        }
        render(&assistant, config.snapshot_json)?;
    }

    tracing::info!("👋 Bye");
    Ok(())
}

fn parse_id(text: &str) -> Option<ProductId> {
    text.trim().parse().ok()
}

fn render(assistant: &ShoppingAssistant, as_json: bool) -> anyhow::Result<()> {
    let snapshot = assistant.snapshot();
    if as_json {
        println!("{}", serde_json::to_string(&snapshot)?);
        return Ok(());
    }
    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &AssistantSnapshot) {
    println!("💬 {}", snapshot.status);
    if !snapshot.suggestions.is_empty() {
        let names: Vec<_> = snapshot.suggestions.iter().map(|s| format!("[{}] {}", s.id, s.name)).collect();
        println!("✨ You might also like: {}", names.join(", "));
    }
    if snapshot.lines.is_empty() {
        println!("🛒 Your cart is empty.");
        return;
    }
    println!("🛒 Cart ({} items)", snapshot.item_count);
    for line in &snapshot.lines {
        println!(
            "  [{:>2}] {} x{} @ {}{} = {}{}",
            line.id, line.name, line.quantity, snapshot.currency, line.unit_price, snapshot.currency, line.subtotal
        );
    }
    println!("  Subtotal: {}{}.00", snapshot.currency, snapshot.total);
}
