// Copyright 2026, Triboka

//! The three on-chain components managed by the orchestrator.

use std::fmt;

/// A deployable contract of the traceability suite.
///
/// The components are mutually independent on-chain; the order in [`ALL`] is
/// kept fixed so logs and records stay deterministic across runs.
///
/// [`ALL`]: Component::ALL
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    /// Export-contract registry.
    AgroExportContract,
    /// Producer-lot token issuer.
    ProducerLotNFT,
    /// Document registry.
    DocumentRegistry,
}

impl Component {
    /// Deployment order.
    pub const ALL: [Component; 3] = [
        Component::AgroExportContract,
        Component::ProducerLotNFT,
        Component::DocumentRegistry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Component::AgroExportContract => "AgroExportContract",
            Component::ProducerLotNFT => "ProducerLotNFT",
            Component::DocumentRegistry => "DocumentRegistry",
        }
    }

    /// ABI artifact filename referenced from the deployment record.
    pub fn abi_file(self) -> &'static str {
        match self {
            Component::AgroExportContract => "AgroExportContract.json",
            Component::ProducerLotNFT => "ProducerLotNFT.json",
            Component::DocumentRegistry => "DocumentRegistry.json",
        }
    }

    /// Access-control roles the component exposes, admin role included.
    ///
    /// Role discovery queries exactly this set; anything missing on the
    /// deployed code is an ABI mismatch and aborts the run.
    pub fn role_names(self) -> &'static [&'static str] {
        match self {
            Component::AgroExportContract => &[
                "DEFAULT_ADMIN_ROLE",
                "OPERATOR_ROLE",
                "EXPORTER_ROLE",
                "BUYER_ROLE",
            ],
            Component::ProducerLotNFT => &[
                "DEFAULT_ADMIN_ROLE",
                "MINTER_ROLE",
                "OPERATOR_ROLE",
                "PRODUCER_ROLE",
            ],
            Component::DocumentRegistry => &[
                "DEFAULT_ADMIN_ROLE",
                "ISSUER_ROLE",
                "VERIFIER_ROLE",
                "OPERATOR_ROLE",
            ],
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_order_is_stable() {
        let names: Vec<_> = Component::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["AgroExportContract", "ProducerLotNFT", "DocumentRegistry"]
        );
    }

    #[test]
    fn every_component_has_an_admin_role() {
        for component in Component::ALL {
            assert!(component.role_names().contains(&"DEFAULT_ADMIN_ROLE"));
        }
    }

    #[test]
    fn abi_file_matches_component_name() {
        for component in Component::ALL {
            assert_eq!(
                component.abi_file(),
                format!("{}.json", component.name())
            );
        }
    }
}
