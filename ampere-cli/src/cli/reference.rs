use clap::Parser;

use crate::{
    core::{phase::VoltageDefaults, reference, session::Session},
    prelude::*,
    tables::{FORMULA_NOTES, build_references_table, build_session_table},
};

#[derive(Parser)]
pub struct ReferenceArgs {
    /// 1-based row number or the exact label, for example `三相快速 (32A)`.
    pub key: String,
}

pub fn print_references() {
    println!("{}", build_references_table());
    for note in FORMULA_NOTES {
        println!("• {note}");
    }
}

#[instrument(skip_all, fields(key = %args.key))]
pub fn apply_reference(args: &ReferenceArgs, defaults: VoltageDefaults) -> Result {
    let spec = reference::find(&args.key)
        .with_context(|| format!("no charging specification matches `{}`", args.key))?;
    let mut session = Session::new(defaults);
    session.select_reference(spec);
    info!(spec.label, reading = %session.reading(), "applied");
    println!("{}", build_session_table(&session));
    Ok(())
}
