// Copyright 2026, Triboka

use alloy::primitives::{Address, U256};

/// The active signing identity for a deployment run.
#[derive(Debug, Clone, Copy)]
pub struct DeployerIdentity {
    pub address: Address,
    /// Balance in wei at the start of the run.
    pub balance: U256,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("no signing identity configured for the target network")]
    NoSigner,
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    #[error("could not open keystore: {0}")]
    Keystore(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to query balance for {address}: {source}")]
    BalanceUnavailable {
        address: Address,
        #[source]
        source: alloy::transports::RpcError<alloy::transports::TransportErrorKind>,
    },
}
