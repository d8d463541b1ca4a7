// Copyright 2026, Triboka

pub use deploy::{deploy, DeployConfig, DeployOutcome};

mod deploy;
