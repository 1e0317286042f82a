use std::sync::Arc;

use clap::Parser;
use werkwoord_config::Config;

mod controller;
mod events;
mod io;
mod session;
mod state;
mod ui;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(about = "Dutch verb conjugation lookup")]
struct Args {
    /// Extra dictionary files merged over the embedded set
    #[arg(long = "dict")]
    dict: Vec<String>,

    /// Matches shown per disambiguation page
    #[arg(long)]
    page_size: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = Config::new();
    config.dictionary.additional_paths.extend(args.dict);
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Replies go to stdout; logs stay on stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if atty::is(atty::Stream::Stderr) {
        builder.init();
    } else {
        builder.json().init();
    }
}
