use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use mufetch::{cli, config, error, info, search::SearchMode, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  after_help = "Search for tracks, albums, or artists and display their metadata",
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authenticate with Spotify API
    Auth,

    /// Search for music
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// Search type: auto, track, album or artist
    #[clap(short = 't', long = "type", default_value = "auto")]
    pub mode: SearchMode,

    /// Image size (15-35)
    #[clap(short = 's', long, default_value_t = utils::DEFAULT_IMAGE_SIZE)]
    pub size: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MUFETCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command) {
    match command {
        Command::Auth => cli::auth().await,
        Command::Search(opt) => cli::search(opt.query, opt.mode, opt.size).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    if let Err(e) = config::init_config().await {
        error!("Failed to initialize config: {}", e);
    }

    let cli = Cli::parse();

    // the command future is dropped before reporting, so its guards run
    let cancelled = tokio::select! {
        _ = run(cli.command) => false,
        _ = tokio::signal::ctrl_c() => true,
    };

    if cancelled {
        println!();
        info!("Operation cancelled.");
        std::process::exit(0);
    }
}
