//! PromptHub - browse, search, and copy curated AI prompt templates
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use prompthub::photos::{FallbackChain, FileSessionStore, ImageSource, SessionStore};
use prompthub::security::RateLimit;
use prompthub::{catalog, security};
use prompthub::{Config, ControllerOptions, DownloadLedger, PhotoController, UnsplashClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match parse_args()? {
        Command::List { category } => list_prompts(category.as_deref()),
        Command::Search { query, category } => search_prompts(&query, category.as_deref()),
        Command::Categories => list_categories(),
        Command::Show { id } => show_prompt(&id),
        Command::Copy { id } => copy_prompt(&id),
        Command::Photo { query, category } => photo_cli(query, category).await,
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    List {
        category: Option<String>,
    },
    Search {
        query: String,
        category: Option<String>,
    },
    Categories,
    Show {
        id: String,
    },
    Copy {
        id: String,
    },
    Photo {
        query: Option<String>,
        category: Option<String>,
    },
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::List { category: None });
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),

        "list" | "ls" => Ok(Command::List {
            category: flag_value(&args, "--category", "-c"),
        }),

        "search" => {
            let query = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing search query"))?
                .clone();
            Ok(Command::Search {
                query,
                category: flag_value(&args, "--category", "-c"),
            })
        }

        "categories" => Ok(Command::Categories),

        "show" => {
            let id = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing prompt id"))?
                .clone();
            Ok(Command::Show { id })
        }

        "copy" => {
            let id = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing prompt id"))?
                .clone();
            Ok(Command::Copy { id })
        }

        "photo" => {
            let category = flag_value(&args, "--category", "-c");
            let query = args.get(2).filter(|a| !a.starts_with('-')).cloned();
            if query.is_none() && category.is_none() {
                anyhow::bail!("Provide a query or --category\nExample: prompthub photo \"mountain sunrise\"");
            }
            Ok(Command::Photo { query, category })
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'prompthub --help' for usage"
        )),
    }
}

fn flag_value(args: &[String], long: &str, short: &str) -> Option<String> {
    args.iter()
        .position(|a| a == long || a == short)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"🪄 PromptHub - curated AI prompt templates

USAGE:
    prompthub                          List all prompts
    prompthub [COMMAND]

COMMANDS:
    list [OPTIONS]                     List prompts
      Options:
        -c, --category <name>          Filter by category

    search <query> [OPTIONS]           Search prompts by title/description/author
      Options:
        -c, --category <name>          Restrict to a category
      Examples:
        prompthub search "code review"
        prompthub search summary -c "Data Analysis"

    categories                         List catalog categories

    show <id>                          Show a prompt with its full template

    copy <id>                          Print only the template body (pipe to a
                                       clipboard tool); rate limited

    photo <query> [OPTIONS]            Fetch a representative Unsplash photo
      Options:
        -c, --category <name>          Derive the query from a category
      Examples:
        prompthub photo "mountain sunrise"
        prompthub photo -c "Development & Programming"

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

CONFIG:
    {}

    Set unsplash_access_key there (or the UNSPLASH_ACCESS_KEY environment
    variable) to enable photo fetching.
"#,
        config_path
    );
}

fn print_version() {
    println!("prompthub {}", prompthub::VERSION);
}

fn list_prompts(category: Option<&str>) -> Result<()> {
    let prompts = catalog::prompts_by_category(category.unwrap_or("All"));

    if prompts.is_empty() {
        println!("No prompts in that category.");
        println!("\nSee available categories with: prompthub categories");
        return Ok(());
    }

    for prompt in &prompts {
        println!(
            "  [{}] {} — {} ({}, ⬇ {})",
            prompt.id,
            prompt.title,
            prompt.author,
            prompt.category,
            prompt.downloads_display()
        );
    }
    println!(
        "\n{} prompt{} found",
        prompts.len(),
        if prompts.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn search_prompts(query: &str, category: Option<&str>) -> Result<()> {
    let results = catalog::search_prompts(query, category.unwrap_or("All"));

    if results.is_empty() {
        println!(
            "No prompts match \"{}\". Try different keywords or browse categories.",
            security::validate_search_query(query)
        );
        return Ok(());
    }

    for prompt in &results {
        println!("  [{}] {} — {}", prompt.id, prompt.title, prompt.description);
    }

    Ok(())
}

fn list_categories() -> Result<()> {
    for category in catalog::CATEGORIES {
        if *category == "All" {
            continue;
        }
        let count = catalog::prompts_by_category(category).len();
        println!("  {} ({})", category, count);
    }
    Ok(())
}

fn show_prompt(id: &str) -> Result<()> {
    let prompt = catalog::prompt_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("No prompt with id {id}\nList prompts with: prompthub list"))?;

    println!("{}", prompt.title);
    println!("{}", "─".repeat(60));
    println!("{}", prompt.description);
    println!(
        "\n{} · {} · {} · ⬇ {}",
        prompt.category,
        prompt.author,
        prompt.date_created,
        prompt.downloads_display()
    );
    println!("\n{}", prompt.prompt);

    Ok(())
}

fn copy_prompt(id: &str) -> Result<()> {
    let limiter = RateLimit::for_copies(app_cache_dir().join("copies.log"));
    if !limiter.is_allowed() {
        anyhow::bail!("Copy rate limit reached, try again in a minute");
    }

    let prompt = catalog::prompt_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("No prompt with id {id}"))?;

    println!("{}", security::validate_prompt_content(&prompt.prompt));
    Ok(())
}

async fn photo_cli(query: Option<String>, category: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let query = query.unwrap_or_else(|| {
        catalog::photo_query_for_category(category.as_deref().unwrap_or("")).to_string()
    });

    let client = UnsplashClient::new(&config);
    if !client.is_enabled() {
        println!("No Unsplash access key configured; falling back to placeholder sources.\n");
    }
    let metrics = client.metrics_handle();

    let store: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::open(session_ledger_path()));
    let ledger = DownloadLedger::new(store);

    let controller = PhotoController::new(
        client,
        ledger,
        ControllerOptions {
            immediate: true,
            debounce: std::time::Duration::from_millis(config.debounce_ms),
            width: config.image_width,
            height: config.image_height,
            app_name: config.app_name.clone(),
        },
    );

    // The CLI has no viewport; the "element" is visible immediately.
    controller.mark_visible().await;
    controller.update_query(&query).await;

    let state = controller.state();
    let mut chain = FallbackChain::new(
        state.src.clone(),
        &query,
        config.image_width,
        config.image_height,
    )
    .with_metrics(Arc::clone(&metrics));

    match (&state.photo, &state.error) {
        (Some(photo), _) => {
            println!("Photo for \"{}\":", query);
            println!("  {}", state.src.as_deref().unwrap_or_default());
            if let Some(attribution) = &state.attribution {
                println!("\nPhoto by {} on Unsplash", attribution.photographer);
                println!("  {}", attribution.photographer_url);
                println!("  {}", attribution.photo_url);
            }
            tracing::debug!("photo id {}", photo.id);

            // Viewing the photo counts as a use per the API terms.
            controller.trigger_download_once().await;
        }
        (None, error) => {
            if let Some(error) = error {
                println!("Photo fetch failed ({error}); fallback sources:");
            } else {
                println!("No photo; fallback sources:");
            }
            loop {
                match chain.current() {
                    ImageSource::Url(url) => println!("  {}", url),
                    ImageSource::Gradient(gradient) => println!("  gradient: {}", gradient),
                }
                if chain.advance().is_none() {
                    break;
                }
            }
        }
    }

    let snap = controller.source().metrics();
    println!(
        "\nmetrics: api_calls={} cache_hits={} fallback_uses={} errors={} cache_size={} hit_rate={:.2}",
        snap.api_calls, snap.cache_hits, snap.fallback_uses, snap.errors, snap.cache_size, snap.hit_rate
    );

    Ok(())
}

fn session_ledger_path() -> std::path::PathBuf {
    app_cache_dir().join("session.kv")
}

fn app_cache_dir() -> std::path::PathBuf {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("prompthub");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!("Could not create cache directory: {e}");
    }
    dir
}
