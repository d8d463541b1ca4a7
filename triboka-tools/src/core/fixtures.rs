// Copyright 2026, Triboka

//! Fixture entities for local/test networks.
//!
//! Disposable sample data (one export contract, one producer lot) created
//! right after a deployment so the contracts can be exercised manually. The
//! on-chain state lives only until the test network resets. Whether a run
//! seeds fixtures is an explicit flag on the run configuration; the
//! network-name policy belongs to the caller.

use std::time::{SystemTime, UNIX_EPOCH};

use alloy::{
    primitives::{address, Address, TxHash, I256, U256},
    rpc::types::TransactionReceipt,
};

use crate::core::network::ContractNetwork;

/// Networks whose deployments get sample data by default.
pub const FIXTURE_NETWORKS: &[&str] = &["localhost", "hardhat", "devnet"];

pub fn is_fixture_network(network: &str) -> bool {
    FIXTURE_NETWORKS.contains(&network)
}

/// Well-known devnet accounts used by the built-in samples.
pub const SAMPLE_BUYER: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
pub const SAMPLE_PRODUCER: Address = address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");

const DAY: u64 = 24 * 60 * 60;

/// Sample export contract written to a freshly deployed registry.
#[derive(Debug, Clone)]
pub struct ExportContractFixture {
    pub buyer: Address,
    pub exporter: Address,
    pub contract_id: String,
    pub product: String,
    pub quality: String,
    /// Metric tons.
    pub quantity: U256,
    /// USD per metric ton relative to the exchange price. The sample data
    /// carries a negative differential, so the field stays signed.
    pub price_differential: I256,
    pub start_date: U256,
    pub end_date: U256,
    pub delivery_date: U256,
}

/// Sample producer lot minted on a freshly deployed issuer.
#[derive(Debug, Clone)]
pub struct LotFixture {
    pub producer: Address,
    pub producer_name: String,
    pub farm_name: String,
    pub geolocation: String,
    pub product: String,
    /// Kilograms.
    pub quantity_kg: U256,
    pub variety: String,
    pub harvest_date: U256,
    pub certifications: Vec<String>,
    pub metadata_uri: String,
}

/// Supplies fixture values, so tests can substitute deterministic data for
/// the built-in samples.
pub trait FixtureProvider {
    /// The exporter side of the sample contract is the active deployer.
    fn export_contract(&self, exporter: Address) -> ExportContractFixture;
    fn lot(&self) -> LotFixture;
}

/// The built-in samples: one cacao export contract and one producer lot.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleFixtures;

impl FixtureProvider for SampleFixtures {
    fn export_contract(&self, exporter: Address) -> ExportContractFixture {
        let now = now_secs();
        ExportContractFixture {
            buyer: SAMPLE_BUYER,
            exporter,
            contract_id: "HERSHEY-CACAO-2024-001".to_string(),
            product: "cacao".to_string(),
            quality: "Fino de Aroma".to_string(),
            quantity: U256::from(500u64),
            price_differential: I256::unchecked_from(-150),
            start_date: U256::from(now),
            end_date: U256::from(now + 90 * DAY),
            delivery_date: U256::from(now + 120 * DAY),
        }
    }

    fn lot(&self) -> LotFixture {
        let now = now_secs();
        LotFixture {
            producer: SAMPLE_PRODUCER,
            producer_name: "José Martínez".to_string(),
            farm_name: "Finca El Dorado".to_string(),
            geolocation: "-9.2948,-75.9947".to_string(),
            product: "cacao".to_string(),
            quantity_kg: U256::from(2500u64),
            variety: "Fino de Aroma".to_string(),
            harvest_date: U256::from(now.saturating_sub(30 * DAY)),
            certifications: vec!["Orgánico".to_string(), "Fair Trade".to_string()],
            metadata_uri: "ipfs://QmTestHash123".to_string(),
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to send fixture tx: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("fixture tx failed to confirm: {0}")]
    Confirmation(#[from] alloy::providers::PendingTransactionError),
    #[error("fixture {what} tx reverted: {tx_hash}")]
    Reverted { what: &'static str, tx_hash: TxHash },
}

impl FixtureError {
    pub(crate) fn check_receipt(
        what: &'static str,
        receipt: TransactionReceipt,
    ) -> Result<(), FixtureError> {
        if receipt.status() {
            Ok(())
        } else {
            Err(FixtureError::Reverted {
                what,
                tx_hash: receipt.transaction_hash,
            })
        }
    }
}

/// Creates one sample export contract and one sample lot on the freshly
/// deployed components.
pub async fn seed_fixtures<N: ContractNetwork, F: FixtureProvider>(
    network: &N,
    deployer: Address,
    export_registry: Address,
    lot_issuer: Address,
    fixtures: &F,
) -> Result<(), FixtureError> {
    info!(@grey, "creating sample export contract...");
    network
        .create_export_contract(export_registry, &fixtures.export_contract(deployer))
        .await?;
    info!(@grey, "creating sample producer lot...");
    network.create_lot(lot_issuer, &fixtures.lot()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_networks_are_local_only() {
        assert!(is_fixture_network("localhost"));
        assert!(is_fixture_network("hardhat"));
        assert!(!is_fixture_network("mainnet"));
        assert!(!is_fixture_network("sepolia"));
    }

    #[test]
    fn sample_contract_spans_ninety_days_with_negative_differential() {
        let exporter = Address::repeat_byte(0x22);
        let fixture = SampleFixtures.export_contract(exporter);
        assert_eq!(fixture.exporter, exporter);
        assert_eq!(fixture.quantity, U256::from(500u64));
        assert!(fixture.price_differential.is_negative());
        assert_eq!(fixture.end_date - fixture.start_date, U256::from(90 * DAY));
        assert!(fixture.delivery_date > fixture.end_date);
    }

    #[test]
    fn sample_lot_is_harvested_in_the_past() {
        let fixture = SampleFixtures.lot();
        assert_eq!(fixture.producer, SAMPLE_PRODUCER);
        assert_eq!(fixture.certifications.len(), 2);
        assert!(fixture.harvest_date < U256::from(now_secs()));
    }
}
