// Copyright 2026, Triboka

//! Tools for deploying the Triboka Agro traceability contracts.
//!
//! The heart of this crate is [`ops::deploy`], which runs one deployment:
//! deploy the export registry, the producer lot issuer and the document
//! registry, read their access-control role identifiers, and persist the
//! resulting addresses as a per-network configuration artifact. Everything
//! on-chain goes through the [`core::network::ContractNetwork`] trait, so the
//! whole run can be exercised against an in-memory double.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

pub use error::{Error, Result};
