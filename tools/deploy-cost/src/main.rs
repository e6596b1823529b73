use std::path::PathBuf;

use clap::Parser;
use log::debug;
use mythic_cost::{
    binary_size, consts, estimate_deploy_cost, render_report, DeployCostParams,
};

#[derive(Debug, Parser)]
#[command(name = "deploy-cost")]
#[command(about = "Estimates the SOL cost of deploying the L1 bridge program")]
struct Cli {
    /// Size of the compiled program binary in bytes
    #[arg(long, default_value_t = consts::BRIDGE_SO_SIZE)]
    so_size: usize,

    /// Read the binary size from a compiled .so file instead
    #[arg(long, conflicts_with = "so_size")]
    so_path: Option<PathBuf>,

    /// Estimated number of transactions needed for the deploy
    #[arg(long, default_value_t = consts::DEPLOY_TX_ESTIMATE)]
    deploy_txs: u64,

    /// SOL budget to report the remainder against
    #[arg(long, default_value_t = consts::DEPLOY_BUDGET_SOL)]
    budget_sol: f64,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let so_size = match &cli.so_path {
        Some(so_path) => match binary_size(so_path) {
            Ok(size) => size,
            Err(err) => {
                eprintln!("Failed to read program binary: {err}");
                std::process::exit(1);
            }
        },
        None => cli.so_size,
    };

    let params = DeployCostParams {
        so_size,
        deploy_tx_count: cli.deploy_txs,
    };
    debug!("estimating deploy cost for {:?}", params);

    let estimate = estimate_deploy_cost(&params);
    print!("{}", render_report(&estimate, cli.budget_sol));
}
