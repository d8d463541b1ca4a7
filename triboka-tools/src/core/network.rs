// Copyright 2026, Triboka

//! The contract-deployment network service, as the orchestrator sees it.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, B256},
    providers::{Provider, WalletProvider},
    rpc::types::TransactionRequest,
    sol,
};

use crate::core::{
    deployment::{DeploymentError, DeploymentRequest},
    fixtures::{ExportContractFixture, FixtureError, LotFixture},
    identity::{DeployerIdentity, IdentityError},
    roles::{role_selector, RoleDiscoveryError},
};

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

/// Everything the orchestrator needs from the chain: submit a creation
/// transaction and wait for it, read role identifiers, create fixture
/// entities. The trait is the seam the orchestration tests mock.
#[allow(async_fn_in_trait)]
pub trait ContractNetwork {
    /// The active signing identity and its balance.
    async fn deployer_identity(&self) -> Result<DeployerIdentity, IdentityError>;

    async fn chain_id(&self) -> Result<u64, NetworkError>;

    /// Submits a contract-creation transaction and blocks until the network
    /// confirms it, returning the deployed address.
    async fn deploy(&self, init_code: &[u8]) -> Result<Address, DeploymentError>;

    /// Reads one named role identifier from a deployed component.
    async fn query_role(&self, contract: Address, role_name: &str)
        -> Result<B256, RoleDiscoveryError>;

    async fn create_export_contract(
        &self,
        contract: Address,
        fixture: &ExportContractFixture,
    ) -> Result<(), FixtureError>;

    async fn create_lot(&self, contract: Address, fixture: &LotFixture)
        -> Result<(), FixtureError>;
}

sol! {
    #[sol(rpc)]
    interface AgroExport {
        function createContract(
            address buyer,
            address exporter,
            string contractId,
            string product,
            string quality,
            uint256 quantity,
            int256 priceDifferential,
            uint256 startDate,
            uint256 endDate,
            uint256 deliveryDate
        ) external returns (uint256);
    }

    #[sol(rpc)]
    interface ProducerLot {
        function createLot(
            address producer,
            string producerName,
            string farmName,
            string geolocation,
            string product,
            uint256 quantityKg,
            string variety,
            uint256 harvestDate,
            string[] certifications,
            string metadataUri
        ) external returns (uint256);
    }
}

/// Alloy-backed implementation speaking to an Ethereum-compatible endpoint.
#[derive(Debug)]
pub struct EthereumNetwork<P> {
    provider: P,
    max_fee_per_gas_wei: Option<u128>,
}

impl<P: Provider + WalletProvider> EthereumNetwork<P> {
    pub fn new(provider: P, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            provider,
            max_fee_per_gas_wei,
        }
    }
}

impl<P: Provider + WalletProvider> ContractNetwork for EthereumNetwork<P> {
    async fn deployer_identity(&self) -> Result<DeployerIdentity, IdentityError> {
        let address = self.provider.default_signer_address();
        let balance = self
            .provider
            .get_balance(address)
            .await
            .map_err(|source| IdentityError::BalanceUnavailable { address, source })?;
        Ok(DeployerIdentity { address, balance })
    }

    async fn chain_id(&self) -> Result<u64, NetworkError> {
        Ok(self.provider.get_chain_id().await?)
    }

    async fn deploy(&self, init_code: &[u8]) -> Result<Address, DeploymentError> {
        let sender = self.provider.default_signer_address();
        let receipt = DeploymentRequest::new(sender, init_code, self.max_fee_per_gas_wei)
            .exec(&self.provider)
            .await?;
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress)?;
        if address.is_zero() {
            return Err(DeploymentError::ZeroAddress);
        }
        Ok(address)
    }

    async fn query_role(
        &self,
        contract: Address,
        role_name: &str,
    ) -> Result<B256, RoleDiscoveryError> {
        let tx = TransactionRequest::default()
            .with_to(contract)
            .with_input(role_selector(role_name).to_vec());
        let ret = self
            .provider
            .call(tx)
            .await
            .map_err(|source| RoleDiscoveryError::MissingAccessor {
                role: role_name.to_string(),
                source,
            })?;
        if ret.len() != 32 {
            return Err(RoleDiscoveryError::MalformedIdentifier {
                role: role_name.to_string(),
                len: ret.len(),
            });
        }
        Ok(B256::from_slice(&ret))
    }

    async fn create_export_contract(
        &self,
        contract: Address,
        fixture: &ExportContractFixture,
    ) -> Result<(), FixtureError> {
        let receipt = AgroExport::new(contract, &self.provider)
            .createContract(
                fixture.buyer,
                fixture.exporter,
                fixture.contract_id.clone(),
                fixture.product.clone(),
                fixture.quality.clone(),
                fixture.quantity,
                fixture.price_differential,
                fixture.start_date,
                fixture.end_date,
                fixture.delivery_date,
            )
            .send()
            .await?
            .get_receipt()
            .await?;
        FixtureError::check_receipt("export contract", receipt)
    }

    async fn create_lot(
        &self,
        contract: Address,
        fixture: &LotFixture,
    ) -> Result<(), FixtureError> {
        let receipt = ProducerLot::new(contract, &self.provider)
            .createLot(
                fixture.producer,
                fixture.producer_name.clone(),
                fixture.farm_name.clone(),
                fixture.geolocation.clone(),
                fixture.product.clone(),
                fixture.quantity_kg,
                fixture.variety.clone(),
                fixture.harvest_date,
                fixture.certifications.clone(),
                fixture.metadata_uri.clone(),
            )
            .send()
            .await?
            .get_receipt()
            .await?;
        FixtureError::check_receipt("producer lot", receipt)
    }
}
