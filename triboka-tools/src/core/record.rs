// Copyright 2026, Triboka

//! Deployment record persistence.
//!
//! The record is the run's only persisted state: downstream tooling reads
//! `config/contracts-<network>.json` to locate the deployed addresses. It is
//! written exactly once per run, after every component and every role has
//! been confirmed, and a re-run for the same network replaces it wholesale.

use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::utils::create_dir_if_dne;

/// Summary of one orchestration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub network: String,
    pub chain_id: u64,
    pub deployer: Address,
    /// Unix seconds at which the record was assembled.
    pub deployed_at: u64,
    pub contracts: BTreeMap<String, ContractEntry>,
    /// Role-name to role-identifier table, per contract.
    pub roles: BTreeMap<String, BTreeMap<String, B256>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractEntry {
    pub address: Address,
    /// ABI artifact filename, resolved against the artifacts directory.
    pub abi: String,
}

impl DeploymentRecord {
    pub fn config_file_name(network: &str) -> String {
        format!("contracts-{network}.json")
    }
}

pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to finalize config file: {0}")]
    Finalize(#[from] tempfile::PersistError),
}

/// Atomically writes the record to `<config_dir>/contracts-<network>.json`,
/// creating the directory if absent and replacing any record from a previous
/// run. The write goes through a temp file in the same directory so a crash
/// mid-write can never leave a partial artifact behind.
pub fn persist(record: &DeploymentRecord, config_dir: &Path) -> Result<PathBuf, PersistenceError> {
    create_dir_if_dne(config_dir)?;
    let path = config_dir.join(DeploymentRecord::config_file_name(&record.network));
    let json = serde_json::to_string_pretty(record)?;

    let mut file = NamedTempFile::new_in(config_dir)?;
    file.write_all(json.as_bytes())?;
    file.persist(&path)?;
    Ok(path)
}

/// Reads a previously persisted record back.
pub fn load(config_dir: &Path, network: &str) -> Result<DeploymentRecord, PersistenceError> {
    let path = config_dir.join(DeploymentRecord::config_file_name(network));
    let contents = fs::read_to_string(path)?;
    let record = serde_json::from_str(&contents)?;
    Ok(record)
}
