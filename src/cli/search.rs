use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config,
    display::DisplayFormatter,
    errors::MufetchError,
    error, info,
    search::{self, SearchMode},
    spotify::SpotifyClient,
    utils::{self, CursorGuard},
    warning,
};

/// Searches the catalog and prints the result next to its cover art.
///
/// `image_size` is clamped to `15..=35`. The cursor is hidden while the
/// search runs and shown again on every way out, including Ctrl-C, which
/// drops this future.
///
/// # Exit behavior
///
/// - Missing credentials print setup instructions and exit with code 1
/// - A failed kind-specific search prints the error and exits with code 1
/// - An empty result prints a message and returns normally
pub async fn search(query: String, mode: SearchMode, image_size: u32) {
    let credentials = match config::load_credentials().await {
        Ok(credentials) => credentials,
        Err(e) => error!("Failed to load configuration: {}", e),
    };

    if !credentials.is_complete() {
        warning!("{}!", MufetchError::NoCredentials);
        info!("Run 'mufetch auth' to set up your API credentials.");
        info!(
            "Alternatively set {} and {}.",
            config::CLIENT_ID_ENV,
            config::CLIENT_SECRET_ENV
        );
        std::process::exit(1);
    }

    let client = match SpotifyClient::new(credentials) {
        Ok(client) => client,
        Err(e) => error!("Failed to create Spotify client: {}", e),
    };

    let formatter = match DisplayFormatter::new(utils::clamp_image_size(image_size)) {
        Ok(formatter) => formatter,
        Err(e) => error!("Failed to create image renderer: {}", e),
    };

    let outcome = {
        let _cursor = CursorGuard::hide();
        println!();
        let outcome = run(&client, &formatter, &query, mode).await;
        println!();
        outcome
    };

    if let Err(e) = outcome {
        error!("Search failed: {}", e);
    }
}

async fn run(
    client: &SpotifyClient,
    formatter: &DisplayFormatter,
    query: &str,
    mode: SearchMode,
) -> Result<(), MufetchError> {
    let pb = spinner(&format!("Searching {mode} for \"{query}\"..."));
    let found = search::lookup(client, query, mode).await;

    let item = match found {
        Ok(Some(item)) => item,
        Ok(None) => {
            pb.finish_and_clear();
            println!("{}", search::no_results_message(query, mode));
            return Ok(());
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message(format!("Rendering {}...", item.kind()));
    let lines = formatter.render(&item, Some(client)).await;
    pb.finish_and_clear();

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
