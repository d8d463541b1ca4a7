// Copyright 2026, Triboka

use std::path::PathBuf;

use triboka_tools::{
    core::{
        fixtures::{self, SampleFixtures},
        network::EthereumNetwork,
    },
    ops,
};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    error::TribokaDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Network name keying the configuration artifact and the fixture policy.
    #[arg(long, default_value = "localhost")]
    network: String,
    /// Directory holding the compiled contract artifacts.
    #[arg(long, default_value = "artifacts")]
    artifacts_dir: PathBuf,
    /// Directory the deployment record is written to.
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,
    /// Seed sample data even if the network is not a designated test network.
    #[arg(long, conflicts_with = "no_seed_fixtures")]
    seed_fixtures: bool,
    /// Skip sample data even on designated test networks.
    #[arg(long)]
    no_seed_fixtures: bool,

    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

impl Args {
    /// The explicit fixture decision handed to the orchestrator. The
    /// network-name policy lives here, not in the library.
    fn should_seed(&self) -> bool {
        if self.no_seed_fixtures {
            return false;
        }
        self.seed_fixtures || fixtures::is_fixture_network(&self.network)
    }
}

pub async fn exec(args: Args) -> TribokaDeployResult {
    let max_fee_per_gas_wei = args.auth.get_max_fee_per_gas_wei()?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let network = EthereumNetwork::new(provider, max_fee_per_gas_wei);

    let config = ops::DeployConfig {
        network_name: args.network.clone(),
        artifacts_dir: args.artifacts_dir.clone(),
        config_dir: args.config_dir.clone(),
        seed_fixtures: args.should_seed(),
    };
    ops::deploy(&network, &SampleFixtures, &config).await?;
    Ok(())
}
