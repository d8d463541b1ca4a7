// Copyright 2026, Triboka

//! Compiled contract artifacts.
//!
//! The contracts build emits one JSON file per contract containing its
//! creation bytecode. The orchestrator only needs the bytecode; the ABI stays
//! in the artifact file and is referenced by name from the deployment record.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::component::Component;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    /// 0x-prefixed creation bytecode.
    pub bytecode: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("missing artifact for {component} at {path} (was the contracts build run?)")]
    Missing {
        component: &'static str,
        path: String,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("artifact bytecode is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("artifact for {component} has empty bytecode")]
    EmptyBytecode { component: &'static str },
}

impl ContractArtifact {
    /// Loads `<dir>/<ComponentName>.json`.
    pub fn load(dir: &Path, component: Component) -> Result<Self, ArtifactError> {
        let path = dir.join(component.abi_file());
        if !path.exists() {
            return Err(ArtifactError::Missing {
                component: component.name(),
                path: path.display().to_string(),
            });
        }
        let contents = fs::read_to_string(&path)?;
        let artifact = serde_json::from_str(&contents)?;
        Ok(artifact)
    }

    /// Creation bytecode as raw bytes.
    pub fn init_code(&self, component: Component) -> Result<Vec<u8>, ArtifactError> {
        let text = self.bytecode.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        let code = hex::decode(text)?;
        if code.is_empty() {
            return Err(ArtifactError::EmptyBytecode {
                component: component.name(),
            });
        }
        Ok(code)
    }
}
