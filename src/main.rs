use std::sync::Arc;

use anyhow::Result;
use console::Term;
use log::info;

use arc200_dashboard::{
    aggregator::Aggregator,
    client::IndexerClient,
    constants::Env,
    render,
    utils::setup_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_logger()?;

    let env = Env::new();
    let client = Arc::new(IndexerClient::new(&env)?);
    let aggregator = Aggregator::new(client);

    info!("refreshing community dashboard stats from {}", env.indexer_url);
    let (_, stats) = aggregator.run_cycle().await;

    let cells = render::build_cells(&stats);
    let (_, cols) = Term::stdout().size();
    println!("{}", render::render_grid(&cells, cols as usize));

    Ok(())
}
