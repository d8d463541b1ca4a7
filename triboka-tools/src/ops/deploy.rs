// Copyright 2026, Triboka

//! The deployment run.
//!
//! Deploys the three components in a fixed order, reads each component's role
//! table right after its deployment confirms, persists the record once
//! everything succeeded, then optionally seeds sample data. Any failure
//! aborts the remaining sequence and nothing is persisted.

use std::{collections::BTreeMap, path::PathBuf};

use alloy::primitives::{utils::format_ether, Address};

use crate::{
    core::{
        artifact::ContractArtifact,
        component::Component,
        fixtures::{seed_fixtures, FixtureProvider},
        network::ContractNetwork,
        record::{self, ContractEntry, DeploymentRecord},
        roles,
    },
    Error, Result,
};

/// Per-run settings. Whether fixtures are seeded is decided by the caller;
/// no network-name policy lives down here.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Network name keying the configuration artifact.
    pub network_name: String,
    /// Directory holding the compiled contract artifacts.
    pub artifacts_dir: PathBuf,
    /// Directory the configuration artifact is written to.
    pub config_dir: PathBuf,
    pub seed_fixtures: bool,
}

#[derive(Debug)]
pub struct DeployOutcome {
    pub record: DeploymentRecord,
    pub config_file: PathBuf,
}

/// Runs one deployment against `network`.
pub async fn deploy<N, F>(network: &N, fixtures: &F, config: &DeployConfig) -> Result<DeployOutcome>
where
    N: ContractNetwork,
    F: FixtureProvider,
{
    let identity = network.deployer_identity().await?;
    info!(@grey,
        "deploying with account {} (balance {} ETH)",
        identity.address,
        format_ether(identity.balance)
    );
    if identity.balance.is_zero() {
        warn!(@yellow, "deployer balance is zero, creation txs will likely fail");
    }
    let chain_id = network.chain_id().await?;

    // Read all artifacts up front so a missing build fails before any
    // on-chain state is created.
    let mut init_codes = Vec::with_capacity(Component::ALL.len());
    for component in Component::ALL {
        let artifact = ContractArtifact::load(&config.artifacts_dir, component)?;
        init_codes.push(artifact.init_code(component)?);
    }

    let mut contracts = BTreeMap::new();
    let mut role_tables = BTreeMap::new();
    let mut addresses: BTreeMap<Component, Address> = BTreeMap::new();

    for (component, init_code) in Component::ALL.into_iter().zip(&init_codes) {
        info!(@grey, "deploying {component}...");
        let address = network
            .deploy(init_code)
            .await
            .map_err(|source| Error::Deployment {
                component: component.name(),
                source,
            })?;
        info!(@grey, "{component} deployed to {address}");

        let table = roles::discover_roles(network, component, address)
            .await
            .map_err(|source| Error::RoleDiscovery {
                component: component.name(),
                source,
            })?;

        contracts.insert(
            component.name().to_string(),
            ContractEntry {
                address,
                abi: component.abi_file().to_string(),
            },
        );
        role_tables.insert(component.name().to_string(), table);
        addresses.insert(component, address);
    }

    let record = DeploymentRecord {
        network: config.network_name.clone(),
        chain_id,
        deployer: identity.address,
        deployed_at: record::unix_timestamp(),
        contracts,
        roles: role_tables,
    };
    let config_file = record::persist(&record, &config.config_dir)?;
    info!(@grey, "contract addresses saved to {}", config_file.display());

    if config.seed_fixtures {
        info!(@grey, "seeding fixture data...");
        seed_fixtures(
            network,
            identity.address,
            addresses[&Component::AgroExportContract],
            addresses[&Component::ProducerLotNFT],
            fixtures,
        )
        .await?;
    }

    info!(@grey, "deployment completed on {} (chain id {chain_id})", record.network);
    for (name, entry) in &record.contracts {
        info!(@grey, "  {name}: {}", entry.address);
    }

    Ok(DeployOutcome {
        record,
        config_file,
    })
}
