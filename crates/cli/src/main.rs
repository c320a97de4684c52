//! gigboard terminal entry point.

mod args;
mod board;
mod render;

use anyhow::Result;
use clap::Parser;

use gigboard_client::BoardConfig;

#[tokio::main]
async fn main() -> Result<()> {
    gigboard_observability::init();

    let cli = args::Cli::parse();
    let config = BoardConfig::resolve(cli.api, cli.offline, cli.referral);
    tracing::debug!(?config, "resolved board configuration");

    // Loaded once per session; filters only ever derive views from it.
    let jobs = gigboard_client::load_jobs(&config).await;

    let mut board = board::Board::new(jobs);
    if let Some(search) = cli.search.as_deref() {
        board.set_search(search);
    }
    if let Some(min_pay) = cli.min_pay {
        board.set_min_pay(min_pay);
    }
    if let Some(max_distance) = cli.max_distance {
        board.set_max_distance(max_distance);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        render::render_json(&mut out, &board.visible())?;
    } else if cli.interactive {
        let stdin = std::io::stdin();
        board.run_interactive(stdin.lock(), &mut out)?;
    } else {
        render::render_jobs(&mut out, &board.visible())?;
    }

    Ok(())
}
