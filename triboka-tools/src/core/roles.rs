// Copyright 2026, Triboka

//! Access-control role discovery.
//!
//! Each component computes its role identifiers on-chain (a hash of the
//! role's symbolic name) and exposes them through zero-argument accessors
//! such as `OPERATOR_ROLE()`. The orchestrator reads and records these
//! identifiers; it has no authority to mint or alter roles.

use std::collections::BTreeMap;

use alloy::primitives::{keccak256, Address, B256};

use crate::core::{component::Component, network::ContractNetwork};

/// Selector for a zero-argument role accessor, e.g. `OPERATOR_ROLE()`.
pub fn role_selector(role_name: &str) -> [u8; 4] {
    let hash = keccak256(format!("{role_name}()").as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

#[derive(Debug, thiserror::Error)]
pub enum RoleDiscoveryError {
    /// The deployed code does not answer the accessor, which means the
    /// orchestrator and the contract build disagree on the ABI. Fatal, never
    /// retried.
    #[error("no {role}() accessor on deployed component: {source}")]
    MissingAccessor {
        role: String,
        #[source]
        source: alloy::transports::RpcError<alloy::transports::TransportErrorKind>,
    },
    #[error("{role}() returned {len} bytes, expected 32")]
    MalformedIdentifier { role: String, len: usize },
}

/// Reads every role identifier the component advertises.
///
/// The returned map's key set equals `component.role_names()` exactly.
pub async fn discover_roles<N: ContractNetwork>(
    network: &N,
    component: Component,
    address: Address,
) -> Result<BTreeMap<String, B256>, RoleDiscoveryError> {
    let mut roles = BTreeMap::new();
    for role in component.role_names() {
        let id = network.query_role(address, role).await?;
        debug!(@grey, "{component}.{role} = {id}");
        roles.insert((*role).to_string(), id);
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known selectors from the OpenZeppelin AccessControl ABI.
    #[test]
    fn selector_matches_known_accessors() {
        assert_eq!(role_selector("DEFAULT_ADMIN_ROLE"), [0xa2, 0x17, 0xfd, 0xdf]);
        assert_eq!(role_selector("MINTER_ROLE"), [0xd5, 0x39, 0x13, 0x93]);
    }

    #[test]
    fn selector_depends_on_role_name() {
        assert_ne!(role_selector("OPERATOR_ROLE"), role_selector("EXPORTER_ROLE"));
    }
}
