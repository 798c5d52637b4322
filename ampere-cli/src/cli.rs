mod convert;
mod defaults;
mod reference;
mod session;

use clap::{Parser, Subcommand};

pub use self::{
    convert::{ConvertArgs, convert},
    defaults::VoltageDefaultsArgs,
    reference::{ReferenceArgs, apply_reference, print_references},
    session::run_session,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub voltage_defaults: VoltageDefaultsArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a single value between amps and kilowatts.
    #[clap(name = "convert")]
    Convert(Box<ConvertArgs>),

    /// Print the common charging specifications.
    #[clap(name = "references")]
    References,

    /// Apply a common charging specification and print the result.
    #[clap(name = "reference")]
    Reference(ReferenceArgs),

    /// Interactive calculator reading commands from the standard input.
    #[clap(name = "session")]
    Session,
}
