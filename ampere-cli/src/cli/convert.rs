use ampere_quantities::Volts;
use clap::Parser;

use crate::{
    core::{
        mode::CalculationMode,
        phase::{PhaseMode, VoltageDefaults},
        session::Session,
    },
    prelude::*,
};

#[derive(Parser)]
pub struct ConvertArgs {
    #[clap(long, value_enum, default_value_t = CalculationMode::AmpsToPower)]
    pub mode: CalculationMode,

    #[clap(long, value_enum, default_value_t = PhaseMode::SinglePhase)]
    pub phase: PhaseMode,

    /// Supply voltage, defaults to the phase's default voltage.
    #[clap(long, allow_hyphen_values = true)]
    pub voltage: Option<Volts>,

    /// Print the session state and the reading as JSON.
    #[clap(long)]
    pub json: bool,

    /// Amps or kilowatts, depending on the mode.
    #[clap(allow_hyphen_values = true)]
    pub input: String,
}

impl ConvertArgs {
    pub fn build_session(&self, defaults: VoltageDefaults) -> Session {
        let mut session = Session::new(defaults);
        session.set_phase_mode(self.phase);
        session.set_calculation_mode(self.mode);
        if let Some(voltage) = self.voltage {
            session.set_voltage(voltage);
        }
        session.set_input(self.input.as_str());
        session
    }
}

#[instrument(skip_all)]
pub fn convert(args: &ConvertArgs, defaults: VoltageDefaults) -> Result {
    let session = args.build_session(defaults);
    info!(reading = %session.reading(), "converted");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&session).context("failed to serialize")?);
    } else {
        println!("{}", session.reading());
    }
    Ok(())
}
