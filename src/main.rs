// Main entry point
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use wego::application::search::SearchCoordinator;
use wego::domain::traits::SearchReporter;
use wego::infrastructure::config::{self, load_config};
use wego::infrastructure::logging::init_logging;
use wego::interfaces::cli::Cli;
use wego::presentation::render::format_details;
use wego::presentation::reporter::{JsonReporter, TerminalReporter};
use wego::presentation::theme::Theme;
use wego::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();

    if cli.generate_config {
        let path = config::get_config_path()
            .ok_or_else(|| anyhow::anyhow!("Cannot determine config directory"))?;
        if config::write_config_sample(&path)? {
            println!("Generated config file at: {}", path.display());
        } else {
            eprintln!("Config file already exists at: {}", path.display());
        }
        return Ok(());
    }

    let config = load_config()?;

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let state = AppState::new(config.clone()).await?;

    if cli.status {
        print_status(&state).await;
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let reporter: Arc<dyn SearchReporter> = if cli.json {
        Arc::new(JsonReporter)
    } else {
        Arc::new(TerminalReporter::new(
            Theme::from_name(theme_name),
            config.enable_emoji,
        ))
    };

    if cli.featured {
        let coordinator = state.coordinator(reporter.clone());
        reporter.results("featured", &coordinator.featured());
        return Ok(());
    }

    if cli.interactive {
        let coordinator = Arc::new(state.coordinator(reporter));
        tokio::select! {
            result = run_interactive(coordinator.clone()) => result?,
            _ = shutdown_rx => {
                coordinator.cancel();
                eprintln!("\nInterrupted");
            }
        }
        return Ok(());
    }

    if cli.query.is_empty() {
        eprintln!("{}", "Please provide a destination".red());
        std::process::exit(1);
    }
    let query = cli.query.join(" ");

    if cli.details {
        let loader = state.details_loader();
        tokio::select! {
            result = loader.load(&query) => {
                if let Some(details) = result? {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&details)?);
                    } else {
                        print!("{}", format_details(&details, &Theme::from_name(theme_name)));
                    }
                }
            }
            _ = shutdown_rx => eprintln!("\nInterrupted"),
        }
        return Ok(());
    }

    let coordinator = state.coordinator(reporter);
    tokio::select! {
        result = coordinator.submit(&query) => {
            result?;
        }
        _ = shutdown_rx => {
            coordinator.cancel();
            eprintln!("\nSearch interrupted");
        }
    }

    Ok(())
}

/// Each line is a keystroke-style trigger; rapid lines coalesce through the debounce.
async fn run_interactive(coordinator: Arc<SearchCoordinator>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let coordinator = coordinator.clone();
        pending.spawn(async move { coordinator.search(&line).await });
    }

    while let Some(joined) = pending.join_next().await {
        match joined {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => eprintln!("{}", format!("Search failed: {}", e).red()),
            Err(e) => eprintln!("{}", format!("Search task failed: {}", e).red()),
        }
    }

    Ok(())
}

async fn print_status(state: &AppState) {
    println!("{}", "WeGo Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    state.locations.ready().await;
    let (cities, countries) = state.locations.counts();
    println!("Location index: {} cities, {} countries", cities, countries);
    println!("Curated destinations: {}", state.dataset.len());
    println!("Description cache: {} entries", state.cache.len());

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );

    if state.config.unsplash.access_key.is_some() {
        println!("Unsplash API: Configured");
    } else {
        println!("Unsplash API: Not configured");
    }
    println!(
        "Search: debounce {} ms, up to {} results",
        state.config.search.debounce_ms, state.config.search.max_results
    );
}
