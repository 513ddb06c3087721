mod args;
mod counter;
mod error;
mod instructions;
mod session;

use clap::Parser;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Signer;
use tracing::{error, info};

use crate::args::{get_cluster, get_private_key, Args, Command};
use crate::error::Result;
use crate::session::Session;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!(error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Connect {
            private_key,
            cluster,
            url,
        } => {
            let payer = session::parse_keypair(&get_private_key(private_key))?;
            let session = Session::new(get_cluster(cluster), url, &payer);

            // prove the endpoint is live before remembering the session
            let balance = rpc_client(&session).get_balance(&payer.pubkey()).await?;
            session.store(&args.session)?;

            info!(wallet_pubkey = ?payer.pubkey(), cluster = %session.cluster, "Wallet connected");
            println!(
                "Connected {} on {} ({} lamports)",
                payer.pubkey(),
                session.cluster,
                balance
            );
        }
        Command::Disconnect => {
            if Session::clear(&args.session)? {
                println!("Disconnected");
            } else {
                println!("No wallet connected");
            }
        }
        Command::Switch { cluster, url } => {
            let mut session = Session::load(&args.session)?;
            session.switch(cluster, url);
            session.store(&args.session)?;
            println!("Switched to {}", session.cluster);
        }
        Command::Status => {
            let session = Session::load(&args.session)?;
            let payer = session.keypair()?;
            let balance = rpc_client(&session).get_balance(&payer.pubkey()).await?;
            println!("Wallet:  {}", payer.pubkey());
            println!("Cluster: {} ({})", session.cluster, session.endpoint());
            println!("Balance: {} lamports", balance);
        }
        Command::Increment => {
            let session = Session::load(&args.session)?;
            let payer = session.keypair()?;
            let account = counter::increment(&rpc_client(&session), &payer).await?;
            println!("Success! Count is: {}", account.count);
        }
    }
    Ok(())
}

fn rpc_client(session: &Session) -> RpcClient {
    RpcClient::new_with_commitment(session.endpoint(), CommitmentConfig::confirmed())
}
