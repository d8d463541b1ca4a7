// Copyright 2026, Triboka

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Anything that can abort a deployment run. All variants are fatal; a run is
/// a one-shot, audited operation and nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("deployer identity unavailable: {0}")]
    Identity(#[from] crate::core::identity::IdentityError),
    #[error("rpc error: {0}")]
    Network(#[from] crate::core::network::NetworkError),
    #[error("{0}")]
    Artifact(#[from] crate::core::artifact::ArtifactError),
    #[error("failed to deploy {component}: {source}")]
    Deployment {
        component: &'static str,
        #[source]
        source: crate::core::deployment::DeploymentError,
    },
    #[error("role discovery failed for {component}: {source}")]
    RoleDiscovery {
        component: &'static str,
        #[source]
        source: crate::core::roles::RoleDiscoveryError,
    },
    #[error("failed to write deployment record: {0}")]
    Persistence(#[from] crate::core::record::PersistenceError),
    #[error("fixture seeding failed: {0}")]
    Fixture(#[from] crate::core::fixtures::FixtureError),
}
