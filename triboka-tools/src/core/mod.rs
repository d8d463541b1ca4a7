// Copyright 2026, Triboka

//! Core deployment machinery.

pub mod artifact;
pub mod component;
pub mod deployment;
pub mod fixtures;
pub mod identity;
pub mod network;
pub mod record;
pub mod roles;
