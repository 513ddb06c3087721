use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use solana_sdk::signature::Keypair;

use crate::args::Cluster;
use crate::error::{CliError, Result};

/// Parses a base58-encoded 64-byte keypair without panicking on malformed
/// input, so a bad `--private-key` or a hand-edited session file surfaces
/// through the normal error path.
pub fn parse_keypair(value: &str) -> Result<Keypair> {
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|_| CliError::InvalidPrivateKey)?;
    Keypair::try_from(bytes.as_slice()).map_err(|_| CliError::InvalidPrivateKey)
}

/// A connected wallet, persisted between invocations. This is the CLI
/// counterpart of the wallet adapter keeping a connection alive in the
/// browser.
#[derive(Serialize, Deserialize)]
pub struct Session {
    pub cluster: Cluster,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    keypair: String,
}

impl Session {
    pub fn new(cluster: Cluster, rpc_url: Option<String>, keypair: &Keypair) -> Self {
        Self {
            cluster,
            rpc_url,
            keypair: keypair.to_base58_string(),
        }
    }

    pub fn keypair(&self) -> Result<Keypair> {
        parse_keypair(&self.keypair)
    }

    /// RPC endpoint for this session: the explicit override if one was
    /// given, otherwise the cluster's canonical URL.
    pub fn endpoint(&self) -> String {
        self.rpc_url
            .clone()
            .unwrap_or_else(|| self.cluster.url().to_string())
    }

    pub fn switch(&mut self, cluster: Cluster, rpc_url: Option<String>) {
        self.cluster = cluster;
        self.rpc_url = rpc_url;
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CliError::WalletNotConnected)
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Removes the session file. Returns whether a session existed;
    /// disconnecting twice is not an error.
    pub fn clear(path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signer;
    use std::path::PathBuf;

    fn temp_session_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("counter-session-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn stores_and_loads() {
        let path = temp_session_path("round-trip");
        let keypair = Keypair::new();
        let session = Session::new(Cluster::Testnet, None, &keypair);
        session.store(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.cluster, Cluster::Testnet);
        assert_eq!(loaded.keypair().unwrap().pubkey(), keypair.pubkey());
        assert_eq!(loaded.endpoint(), Cluster::Testnet.url());

        Session::clear(&path).unwrap();
    }

    #[test]
    fn load_without_session_is_not_connected() {
        let path = temp_session_path("missing");
        assert!(matches!(
            Session::load(&path),
            Err(CliError::WalletNotConnected)
        ));
    }

    #[test]
    fn clear_is_idempotent() {
        let path = temp_session_path("clear");
        let session = Session::new(Cluster::Devnet, None, &Keypair::new());
        session.store(&path).unwrap();

        assert!(Session::clear(&path).unwrap());
        assert!(!Session::clear(&path).unwrap());
    }

    #[test]
    fn switch_replaces_cluster_and_override() {
        let keypair = Keypair::new();
        let mut session = Session::new(
            Cluster::Devnet,
            Some("http://localhost:9999".to_string()),
            &keypair,
        );
        session.switch(Cluster::MainnetBeta, None);

        assert_eq!(session.cluster, Cluster::MainnetBeta);
        assert_eq!(session.endpoint(), Cluster::MainnetBeta.url());
        assert_eq!(session.keypair().unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn parses_generated_keypair() {
        let keypair = Keypair::new();
        let parsed = parse_keypair(&keypair.to_base58_string()).unwrap();
        assert_eq!(parsed.pubkey(), keypair.pubkey());
    }

    #[test]
    fn rejects_malformed_private_key() {
        assert!(matches!(
            parse_keypair("not-a-base58-keypair"),
            Err(CliError::InvalidPrivateKey)
        ));
        // valid base58 but the wrong length
        assert!(matches!(
            parse_keypair("abc"),
            Err(CliError::InvalidPrivateKey)
        ));
    }

    #[test]
    fn tampered_session_keypair_errors_instead_of_panicking() {
        let path = temp_session_path("tampered");
        fs::write(
            &path,
            r#"{"cluster":"devnet","keypair":"garbage"}"#,
        )
        .unwrap();

        let session = Session::load(&path).unwrap();
        assert!(matches!(
            session.keypair(),
            Err(CliError::InvalidPrivateKey)
        ));

        Session::clear(&path).unwrap();
    }
}
