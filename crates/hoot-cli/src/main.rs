//! Hoot - terminal developer hub
//!
//! An AI chat pane beside a flappy-owl mini-game, in one terminal window.

mod tui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hoot_core::config::ChatConfig;

use crate::tui::App;

#[derive(Parser, Debug)]
#[command(name = "hoot", version, about = "AI chat beside a flappy-owl mini-game")]
struct Args {
    /// Completion endpoint URL (overrides HOOT_CHAT_URL and the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Bearer token for the completion endpoint
    #[arg(long)]
    api_key: Option<String>,

    /// Disable sound cues
    #[arg(long)]
    muted: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = ChatConfig::load()?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = Some(endpoint);
    }
    if let Some(key) = args.api_key {
        config.api_key = Some(key);
    }

    let app = App::new(config, args.muted)?;
    tui::run(app).await
}

/// Log to a file under the cache dir so the alternate screen stays clean.
fn init_tracing() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("hoot")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("hoot.log")) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init();
}
