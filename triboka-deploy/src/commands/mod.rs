// Copyright 2026, Triboka

use crate::error::TribokaDeployResult;

mod deploy;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy the traceability contracts and record their addresses
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
}

pub async fn exec(cmd: Command) -> TribokaDeployResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
    }
}
