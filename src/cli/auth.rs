use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use crate::{config, error, info, success, types::Credentials, warning};

const DASHBOARD_URL: &str = "https://developer.spotify.com/dashboard";

/// Shortest length a client id or secret is expected to have.
const MIN_CREDENTIAL_LENGTH: usize = 10;

/// Interactively captures Spotify API credentials and stores them in the
/// config file.
///
/// Opens the developer dashboard in the default browser, then asks for the
/// client id and secret on stdin. Empty values terminate with exit code 1;
/// values shorter than 10 characters only produce a warning.
pub async fn auth() {
    info!("Spotify API Authentication Setup");
    println!();
    println!("To get your Spotify API credentials:");
    println!("1. Go to: {DASHBOARD_URL}");
    println!("2. Log in with your Spotify account");
    println!("3. Click 'Create an App'");
    println!("4. Fill in app name and description");
    println!("5. Copy your Client ID and Client Secret");
    println!();

    if webbrowser::open(DASHBOARD_URL).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            DASHBOARD_URL
        )
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let client_id = prompt(&mut input, "Enter your Spotify Client ID: ").await;
    let client_secret = prompt(&mut input, "Enter your Spotify Client Secret: ").await;

    if client_id.is_empty() || client_secret.is_empty() {
        error!("Both Client ID and Client Secret are required!");
    }

    if client_id.len() < MIN_CREDENTIAL_LENGTH || client_secret.len() < MIN_CREDENTIAL_LENGTH {
        warning!("Credentials seem too short. Please verify they are correct.");
    }

    let credentials = Credentials::new(&client_id, &client_secret);
    if let Err(e) = config::save_credentials(&credentials).await {
        error!("Failed to save credentials: {}", e);
    }

    success!("Credentials saved successfully!");
    info!("You can now use 'mufetch search <query>' to search for music.");
}

/// Prints `message` and reads one trimmed line. End of input counts as an
/// empty answer.
async fn prompt(input: &mut Lines<BufReader<Stdin>>, message: &str) -> String {
    let mut stdout = tokio::io::stdout();
    let _ = stdout.write_all(message.as_bytes()).await;
    let _ = stdout.flush().await;

    match input.next_line().await {
        Ok(Some(line)) => line.trim().to_string(),
        Ok(None) => String::new(),
        Err(e) => error!("Failed to read input: {}", e),
    }
}
