use clap::Parser;
use scrawl::api::ScrawlApi;
use scrawl::commands::helpers::first_line;
use scrawl::config::ScrawlConfig;
use scrawl::error::Result;
use scrawl::logging::init_logging;
use scrawl::store::fs::FileStore;
use scrawl::web;
use std::io::Write;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = load_config(&cli)?;

    match cli.command {
        None => handle_serve(config, None),
        Some(Commands::Serve { bind }) => handle_serve(config, bind),
        Some(Commands::List) => handle_list(&open_api(&config)),
        Some(Commands::Count) => handle_count(&open_api(&config)),
        Some(Commands::View { id }) => handle_view(&open_api(&config), &id),
        Some(Commands::Delete { id }) => handle_delete(&open_api(&config), &id),
    }
}

fn load_config(cli: &Cli) -> Result<ScrawlConfig> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = ScrawlConfig::discover(cli.config.as_deref(), &cwd)?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

fn open_api(config: &ScrawlConfig) -> ScrawlApi<FileStore> {
    ScrawlApi::new(FileStore::new(&config.data_dir))
}

fn handle_serve(mut config: ScrawlConfig, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(web::serve(&config))
}

fn handle_list(api: &ScrawlApi<FileStore>) -> Result<()> {
    let listing = api.list_items()?;
    if listing.is_empty() {
        println!("No items.");
        return Ok(());
    }

    for note in &listing.notes {
        println!("note  {}  {}", note.id, note.preview);
    }
    for link in &listing.links {
        println!("link  {}  {}", link.id, first_line(&link.url));
    }
    for file in &listing.files {
        println!("file  {}  {}", file.id, file.filename);
    }
    Ok(())
}

fn handle_count(api: &ScrawlApi<FileStore>) -> Result<()> {
    println!("{}", api.count_items()?);
    Ok(())
}

fn handle_view(api: &ScrawlApi<FileStore>, id: &str) -> Result<()> {
    let bytes = api.view_item(id)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}

fn handle_delete(api: &ScrawlApi<FileStore>, id: &str) -> Result<()> {
    api.delete_item(id)?;
    println!("Deleted {}", id);
    Ok(())
}
