// Copyright 2026, Triboka

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use triboka_tools::core::identity::IdentityError;

use crate::{
    constants::DEFAULT_ENDPOINT,
    utils::{convert_gwei_to_wei, decode0x},
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Fails before any network traffic when no signer source is set.
    pub fn ensure_configured(&self) -> Result<(), IdentityError> {
        if self.private_key.is_none()
            && self.private_key_path.is_none()
            && self.keystore_path.is_none()
        {
            return Err(IdentityError::NoSigner);
        }
        Ok(())
    }

    fn build_wallet(&self, chain_id: u64) -> Result<EthereumWallet, IdentityError> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(IdentityError::InvalidKey("empty private key".to_string()));
            }
            return wallet_from_key(key, chain_id);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file)?;
            return wallet_from_key(&key, chain_id);
        }

        let keystore = self.keystore_path.as_ref().ok_or(IdentityError::NoSigner)?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer = LocalSigner::decrypt_keystore(keystore, password)
            .map_err(|err| IdentityError::Keystore(err.to_string()))?
            .with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn wallet_from_key(key: &str, chain_id: u64) -> Result<EthereumWallet, IdentityError> {
    let bytes = decode0x(key).map_err(|err| IdentityError::InvalidKey(err.to_string()))?;
    if bytes.len() != 32 {
        return Err(IdentityError::InvalidKey(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }
    let key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    let signer = PrivateKeySigner::from_bytes(&key_bytes)
        .map_err(|err| IdentityError::InvalidKey(err.to_string()))?
        .with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// JSON-RPC endpoint of the target network
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        auth.ensure_configured()?;
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}
