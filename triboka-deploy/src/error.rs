// Copyright 2026, Triboka

use std::fmt;
use std::process::ExitCode;

pub type TribokaDeployResult = Result<(), TribokaDeployError>;

#[derive(Debug)]
pub struct TribokaDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl TribokaDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for TribokaDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for TribokaDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for TribokaDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<triboka_tools::Error> for TribokaDeployError {
    fn from(err: triboka_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
