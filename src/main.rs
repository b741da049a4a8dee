use clap::Parser;
use public_apis::core::config::{self, AppConfig, CliOverrides, ResolvedConfig};
use public_apis::core::pipeline::{Row, shape_rows};
use public_apis::core::selection::{SelectionState, SortMethod};
use public_apis::directory::{DirectoryClient, FetchError, HttpDirectoryClient};
use public_apis::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io::Write;

#[derive(Parser)]
#[command(name = "public-apis", about = "Browse the public API directory")]
struct Args {
    /// Initial sort method
    #[arg(short, long, value_enum)]
    sort: Option<SortMethod>,

    /// Initial category filter (case-insensitive substring)
    #[arg(short, long)]
    category: Option<String>,

    /// Initial name search (case-insensitive substring)
    #[arg(short = 'q', long)]
    search: Option<String>,

    /// Directory host, e.g. a local mirror
    #[arg(long)]
    base_url: Option<String>,

    /// Print matching rows to stdout instead of starting the TUI
    #[arg(short, long)]
    print: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        base_url: args.base_url.clone(),
        sort_method: args.sort,
    };
    let resolved = config::resolve(&file_config, &cli);

    // File logger: the TUI owns the terminal, so logs never go to stdout
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("public-apis starting up against {}", resolved.base_url);

    let selection = SelectionState {
        selected_category: args.category,
        search_text: args.search,
        sort_method: resolved.sort_method,
    };

    if args.print {
        return print_rows(&resolved, &selection).await;
    }

    tui::run(&resolved, selection)
}

/// Fetches entries once, runs the pipeline and writes tab-separated rows.
async fn print_rows(config: &ResolvedConfig, selection: &SelectionState) -> std::io::Result<()> {
    let client = HttpDirectoryClient::new(Some(config.base_url.clone()));
    let entries = match client.fetch_entries().await {
        Ok(response) => response.entries,
        Err(e) => {
            log::warn!("Print mode fetch failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    };

    let rows = shape_rows(&entries, selection);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in &rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

fn format_row(row: &Row) -> String {
    format!("{}\t{}\t{}", row.name, row.category, row.link)
}

fn exit_code(error: &FetchError) -> i32 {
    match error {
        FetchError::InvalidUrl(_) => 2,
        _ => 1,
    }
}
