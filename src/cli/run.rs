use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

/// Run the command named on the command line and collect its result.
/// `serve` is started by the binary before this is called.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => anyhow::bail!("serve is handled by the binary entry point"),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
