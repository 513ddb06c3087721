use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use solana_sdk::signature::Keypair;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        default_value = "counter-session.json",
        help = "Path to the wallet session file"
    )]
    pub session: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Connect a wallet and remember the session
    Connect {
        #[arg(long, help = "Base58-encoded private key for the Solana wallet")]
        private_key: Option<String>,
        #[arg(long, value_enum, help = "Cluster to connect to")]
        cluster: Option<Cluster>,
        #[arg(long, help = "Custom RPC endpoint overriding the cluster URL")]
        url: Option<String>,
    },
    /// Forget the current wallet session
    Disconnect,
    /// Point the session at a different cluster
    Switch {
        #[arg(value_enum)]
        cluster: Cluster,
        #[arg(long, help = "Custom RPC endpoint overriding the cluster URL")]
        url: Option<String>,
    },
    /// Show the connected wallet, its cluster and balance
    Status,
    /// Allocate a counter account and increment it once
    Increment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
    Localnet,
}

impl Cluster {
    pub fn url(&self) -> &'static str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Localnet => "localnet",
        };
        f.write_str(name)
    }
}

pub fn get_private_key(cli_key: Option<String>) -> String {
    cli_key
        .or_else(|| std::env::var("COUNTER_PRIVATE_KEY").ok())
        .unwrap_or(Keypair::new().to_base58_string())
}

pub fn get_cluster(cli_cluster: Option<Cluster>) -> Cluster {
    cli_cluster
        .or_else(|| {
            std::env::var("COUNTER_CLUSTER")
                .ok()
                .and_then(|s| Cluster::from_str(&s, true).ok())
        })
        .unwrap_or(Cluster::Devnet)
}
