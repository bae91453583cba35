/// JellyCli - A command-line interface for Jellyfin
use clap::Parser;
use jellycli::browser::{render_items, Browser};
use jellycli::config;
use jellycli::player::Player;
use jellycli_client::JellyfinClient;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jellycli")]
#[command(version, about = "JellyCli - A command-line interface for Jellyfin", long_about = None)]
struct Cli {
    /// List all collections
    #[arg(long)]
    list: bool,

    /// Browse items under a specific parent ID
    #[arg(long, value_name = "PARENT_ID")]
    browse: Option<String>,

    /// Play a specific item by ID
    #[arg(long, value_name = "ITEM_ID")]
    play: Option<String>,

    /// Start interactive browsing mode (default)
    #[arg(long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the menus.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jellycli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let file_config = config::load(&config::default_path())?;
    let client = JellyfinClient::new(file_config.into_server_config())?;

    let mut stdout = std::io::stdout();

    if cli.list {
        let items = client.collections().await?;
        writeln!(stdout, "\n=== Collections ===")?;
        render_items(&mut stdout, &items)?;
    } else if let Some(parent_id) = cli.browse {
        let items = client.children(&parent_id).await?;
        writeln!(stdout, "\n=== Items in {} ===", parent_id)?;
        render_items(&mut stdout, &items)?;
    } else if let Some(item_id) = cli.play {
        // Item details are not fetched here; the player gets a generic title.
        let url = client.download_url(&item_id);
        match Player::default().launch(&url, "Video") {
            Ok(()) => writeln!(stdout, "Playing: Video")?,
            Err(e) => eprintln!("{}", e),
        }
    } else {
        // Default to interactive mode
        tracing::debug!(explicit = cli.interactive, "Starting interactive session");
        let stdin = std::io::stdin();
        let mut browser = Browser::new(&client, Player::default());
        browser.run(&mut stdin.lock(), &mut stdout).await?;
    }

    Ok(())
}
