// Copyright 2026, Triboka

//! End-to-end orchestration runs against an in-memory network double.

use std::{collections::BTreeSet, fs, path::Path, sync::Mutex};

use alloy::primitives::{keccak256, Address, B256, U256};
use triboka_tools::{
    core::{
        component::Component,
        deployment::DeploymentError,
        fixtures::{
            ExportContractFixture, FixtureError, FixtureProvider, LotFixture, SampleFixtures,
        },
        identity::{DeployerIdentity, IdentityError},
        network::{ContractNetwork, NetworkError},
        record,
        roles::RoleDiscoveryError,
    },
    ops::{self, DeployConfig},
    Error,
};

const DEPLOYER: Address = Address::repeat_byte(0x11);

/// Network double: hands out deterministic addresses, derives role ids the
/// way the contracts do, and records every fixture creation.
struct FakeNetwork {
    chain_id: u64,
    /// Creation tx index (0-based) that should fail, if any.
    fail_on_deploy: Option<usize>,
    /// Role accessor that should come back malformed, if any.
    fail_on_role: Option<&'static str>,
    deployed: Mutex<Vec<Address>>,
    export_fixtures: Mutex<Vec<ExportContractFixture>>,
    lot_fixtures: Mutex<Vec<LotFixture>>,
}

impl FakeNetwork {
    fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            fail_on_deploy: None,
            fail_on_role: None,
            deployed: Mutex::new(Vec::new()),
            export_fixtures: Mutex::new(Vec::new()),
            lot_fixtures: Mutex::new(Vec::new()),
        }
    }

    fn failing_at(chain_id: u64, index: usize) -> Self {
        Self {
            fail_on_deploy: Some(index),
            ..Self::new(chain_id)
        }
    }

    fn failing_role(chain_id: u64, role: &'static str) -> Self {
        Self {
            fail_on_role: Some(role),
            ..Self::new(chain_id)
        }
    }

    fn deployed_addresses(&self) -> Vec<Address> {
        self.deployed.lock().unwrap().clone()
    }
}

impl ContractNetwork for FakeNetwork {
    async fn deployer_identity(&self) -> Result<DeployerIdentity, IdentityError> {
        Ok(DeployerIdentity {
            address: DEPLOYER,
            balance: U256::from(10u64).pow(U256::from(18u64)),
        })
    }

    async fn chain_id(&self) -> Result<u64, NetworkError> {
        Ok(self.chain_id)
    }

    async fn deploy(&self, _init_code: &[u8]) -> Result<Address, DeploymentError> {
        let mut deployed = self.deployed.lock().unwrap();
        if self.fail_on_deploy == Some(deployed.len()) {
            return Err(DeploymentError::FailedToComplete);
        }
        let address = Address::repeat_byte(0xa0 + deployed.len() as u8);
        deployed.push(address);
        Ok(address)
    }

    async fn query_role(
        &self,
        _contract: Address,
        role_name: &str,
    ) -> Result<B256, RoleDiscoveryError> {
        if self.fail_on_role == Some(role_name) {
            return Err(RoleDiscoveryError::MalformedIdentifier {
                role: role_name.to_string(),
                len: 0,
            });
        }
        // same derivation the contracts use: hash of the symbolic name,
        // except the admin role which is all zeroes
        if role_name == "DEFAULT_ADMIN_ROLE" {
            Ok(B256::ZERO)
        } else {
            Ok(keccak256(role_name.as_bytes()))
        }
    }

    async fn create_export_contract(
        &self,
        _contract: Address,
        fixture: &ExportContractFixture,
    ) -> Result<(), FixtureError> {
        self.export_fixtures.lock().unwrap().push(fixture.clone());
        Ok(())
    }

    async fn create_lot(
        &self,
        _contract: Address,
        fixture: &LotFixture,
    ) -> Result<(), FixtureError> {
        self.lot_fixtures.lock().unwrap().push(fixture.clone());
        Ok(())
    }
}

fn write_artifacts(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for component in Component::ALL {
        fs::write(
            dir.join(component.abi_file()),
            format!(
                r#"{{"contractName":"{}","bytecode":"0x6080604052"}}"#,
                component.name()
            ),
        )
        .unwrap();
    }
}

fn run_config(root: &Path, seed_fixtures: bool) -> DeployConfig {
    DeployConfig {
        network_name: "localhost".to_string(),
        artifacts_dir: root.join("artifacts"),
        config_dir: root.join("config"),
        seed_fixtures,
    }
}

#[tokio::test]
async fn full_run_persists_record_and_seeds_fixtures() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(&dir.path().join("artifacts"));
    let network = FakeNetwork::new(31337);

    let outcome = ops::deploy(&network, &SampleFixtures, &run_config(dir.path(), true))
        .await
        .unwrap();

    let deployed = network.deployed_addresses();
    assert_eq!(deployed.len(), 3);
    for address in &deployed {
        assert_ne!(*address, Address::ZERO);
    }

    // artifact on disk matches what the run reports
    assert_eq!(
        outcome.config_file,
        dir.path().join("config").join("contracts-localhost.json")
    );
    let loaded = record::load(&dir.path().join("config"), "localhost").unwrap();
    assert_eq!(loaded, outcome.record);
    assert_eq!(loaded.network, "localhost");
    assert_eq!(loaded.chain_id, 31337);
    assert_eq!(loaded.deployer, DEPLOYER);
    assert_eq!(loaded.contracts["AgroExportContract"].address, deployed[0]);
    assert_eq!(loaded.contracts["ProducerLotNFT"].address, deployed[1]);
    assert_eq!(loaded.contracts["DocumentRegistry"].address, deployed[2]);

    // role table key sets equal the requested sets exactly
    for component in Component::ALL {
        let table = &loaded.roles[component.name()];
        let want: BTreeSet<_> = component.role_names().iter().map(|r| r.to_string()).collect();
        let got: BTreeSet<_> = table.keys().cloned().collect();
        assert_eq!(got, want);
        assert_eq!(table["DEFAULT_ADMIN_ROLE"], B256::ZERO);
    }

    // one fixture export contract, one fixture lot
    let exports = network.export_fixtures.lock().unwrap();
    let lots = network.lot_fixtures.lock().unwrap();
    assert_eq!(exports.len(), 1);
    assert_eq!(lots.len(), 1);
    assert_eq!(exports[0].exporter, DEPLOYER);
}

#[tokio::test]
async fn failed_component_leaves_no_record() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(&dir.path().join("artifacts"));
    // second creation tx (ProducerLotNFT) fails
    let network = FakeNetwork::failing_at(31337, 1);

    let err = ops::deploy(&network, &SampleFixtures, &run_config(dir.path(), true))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Deployment { .. }));
    assert!(err.to_string().contains("ProducerLotNFT"));
    assert!(!dir.path().join("config").join("contracts-localhost.json").exists());

    // the run stopped at the failing component and seeded nothing
    assert_eq!(network.deployed_addresses().len(), 1);
    assert!(network.export_fixtures.lock().unwrap().is_empty());
    assert!(network.lot_fixtures.lock().unwrap().is_empty());
}

#[tokio::test]
async fn role_discovery_failure_leaves_no_record() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(&dir.path().join("artifacts"));
    // MINTER_ROLE is only advertised by ProducerLotNFT
    let network = FakeNetwork::failing_role(31337, "MINTER_ROLE");

    let err = ops::deploy(&network, &SampleFixtures, &run_config(dir.path(), true))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RoleDiscovery { .. }));
    assert!(err.to_string().contains("ProducerLotNFT"));
    assert!(!dir.path().join("config").join("contracts-localhost.json").exists());

    // the run stopped inside the second component and seeded nothing
    assert_eq!(network.deployed_addresses().len(), 2);
    assert!(network.export_fixtures.lock().unwrap().is_empty());
    assert!(network.lot_fixtures.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unwritable_config_dir_fails_after_deployment() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(&dir.path().join("artifacts"));
    // a plain file where the config directory should go
    fs::write(dir.path().join("config"), b"not a directory").unwrap();
    let network = FakeNetwork::new(31337);

    let err = ops::deploy(&network, &SampleFixtures, &run_config(dir.path(), true))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Persistence(_)));

    // every component went out, but the record never landed and nothing
    // was seeded on top of an unrecorded deployment
    assert_eq!(network.deployed_addresses().len(), 3);
    assert!(network.export_fixtures.lock().unwrap().is_empty());
    assert!(network.lot_fixtures.lock().unwrap().is_empty());
    assert_eq!(fs::read(dir.path().join("config")).unwrap(), b"not a directory");
}

#[tokio::test]
async fn fixtures_are_skipped_when_not_requested() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(&dir.path().join("artifacts"));
    let network = FakeNetwork::new(1);

    let config = DeployConfig {
        network_name: "mainnet".to_string(),
        seed_fixtures: false,
        ..run_config(dir.path(), false)
    };
    ops::deploy(&network, &SampleFixtures, &config).await.unwrap();

    assert!(network.export_fixtures.lock().unwrap().is_empty());
    assert!(network.lot_fixtures.lock().unwrap().is_empty());
    assert!(dir.path().join("config").join("contracts-mainnet.json").exists());
}

#[tokio::test]
async fn rerun_overwrites_the_prior_record() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(&dir.path().join("artifacts"));
    let config = run_config(dir.path(), false);

    ops::deploy(&FakeNetwork::new(31337), &SampleFixtures, &config)
        .await
        .unwrap();
    ops::deploy(&FakeNetwork::new(1337), &SampleFixtures, &config)
        .await
        .unwrap();

    let loaded = record::load(&dir.path().join("config"), "localhost").unwrap();
    assert_eq!(loaded.chain_id, 1337);

    // one artifact, not an accumulation
    let entries = fs::read_dir(dir.path().join("config")).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn missing_artifact_fails_before_any_creation_tx() {
    let dir = tempfile::tempdir().unwrap();
    // no artifacts written
    let network = FakeNetwork::new(31337);

    let err = ops::deploy(&network, &SampleFixtures, &run_config(dir.path(), false))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Artifact(_)));
    assert!(network.deployed_addresses().is_empty());
    assert!(!dir.path().join("config").exists());
}

/// Deterministic provider standing in for the built-in samples.
struct StaticFixtures;

impl FixtureProvider for StaticFixtures {
    fn export_contract(&self, exporter: Address) -> ExportContractFixture {
        let mut fixture = SampleFixtures.export_contract(exporter);
        fixture.contract_id = "TEST-CONTRACT-001".to_string();
        fixture
    }

    fn lot(&self) -> LotFixture {
        let mut fixture = SampleFixtures.lot();
        fixture.producer_name = "Test Producer".to_string();
        fixture
    }
}

#[tokio::test]
async fn fixture_provider_values_reach_the_network() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(&dir.path().join("artifacts"));
    let network = FakeNetwork::new(31337);

    ops::deploy(&network, &StaticFixtures, &run_config(dir.path(), true))
        .await
        .unwrap();

    assert_eq!(
        network.export_fixtures.lock().unwrap()[0].contract_id,
        "TEST-CONTRACT-001"
    );
    assert_eq!(
        network.lot_fixtures.lock().unwrap()[0].producer_name,
        "Test Producer"
    );
}
