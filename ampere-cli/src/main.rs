#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

mod cli;
mod core;
mod fmt;
mod prelude;
mod tables;

use std::io;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, apply_reference, convert, print_references, run_session},
    core::{phase::VoltageDefaults, session::Session},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(io::stderr).init();
    let args = Args::parse();
    debug!(version = crate_version!(), "starting…");

    let defaults = VoltageDefaults::from(args.voltage_defaults);
    match args.command {
        Command::Convert(args) => {
            convert(&args, defaults)?;
        }
        Command::References => {
            print_references();
        }
        Command::Reference(args) => {
            apply_reference(&args, defaults)?;
        }
        Command::Session => {
            let mut session = Session::new(defaults);
            run_session(&mut session, io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
