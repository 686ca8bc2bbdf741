use std::env;

use anyhow::{bail, Context};
use flock_core::{FixedIdentity, HubBoard, HubSelection, LoadState, SubmitOutcome};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// ri-utilizziamo le strutture definite in lib.rs
use flock_client::{Config, HubSession, PostsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load().context("load configuration")?;
    info!(api = %config.api_base, hub = %config.hub, user = %config.user_id, "starting flock client");

    let api = PostsClient::new(&config.api_base, config.http_timeout).context("build http client")?;
    let selection = HubSelection { hub_id: config.hub, ..HubSelection::default() };
    let mut session = HubSession::new(api, FixedIdentity::new(config.user_id), selection);

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            session.load().await;
        }
        [cmd, title, text] if cmd == "post" => {
            session.load().await;
            let board = session.board_mut();
            board.set_draft_title(title.as_str());
            board.set_draft_body(text.as_str());
            if let SubmitOutcome::Failed { error, alert } = session.submit().await {
                bail!("{alert}: {error}");
            }
        }
        _ => bail!("usage: flock [post <title> <text>]"),
    }

    print_board(session.board());
    Ok(())
}

fn print_board(board: &HubBoard) {
    println!("hub {}", board.hub_id());
    match board.state() {
        LoadState::Idle | LoadState::Loading(_) => {}
        // il dettaglio dell'errore è già nei log
        LoadState::Empty | LoadState::Failed(_) => println!("  (no posts)"),
        LoadState::Loaded(posts) => {
            for post in posts {
                println!("- [{}] {}", post.post_id, post.title);
                println!("  {}", post.text);
            }
        }
    }
}
