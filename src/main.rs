use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rru_client::api::HttpApiClient;
use rru_client::config::ApiConfig;
use rru_client::routes::Route;
use rru_client::shell::Shell;
use rru_client::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "rru_client=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = ApiConfig::new_from_env();
    let api = Arc::new(HttpApiClient::new(config)?);
    let state = AppState::new(api);
    let mut shell = Shell::new(state);

    // An optional route path argument is the landing page.
    let initial = std::env::args()
        .nth(1)
        .and_then(|path| Route::parse(&path))
        .unwrap_or(Route::Home);

    println!("{}", shell.navigate(initial).await);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("rru {}> ", shell.current_path());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match shell.handle_line(&line).await {
            Some(output) => println!("{}", output),
            None => break,
        }
    }

    Ok(())
}
