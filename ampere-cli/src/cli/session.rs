use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use ampere_quantities::Volts;
use clap::ValueEnum;

use crate::{
    core::{
        mode::CalculationMode,
        phase::PhaseMode,
        reference::{self, ChargingSpec},
        session::Session,
    },
    prelude::*,
    tables::{build_references_table, build_session_table},
};

const HELP: &str = "\
mode <amps-to-power|power-to-amps>  switch the conversion direction
phase <single|three>                switch the supply, resets the voltage and the input
voltage <V>                         set the supply voltage
input <TEXT>                        set the amps or kilowatts
reference <N|LABEL>                 apply a common charging specification
show                                print the current state
references                          print the common charging specifications
quit                                leave the session";

/// Single line of the interactive session.
#[derive(Debug, PartialEq)]
pub enum SessionCommand {
    Mode(CalculationMode),
    Phase(PhaseMode),
    Voltage(Volts),
    Input(String),
    Reference(&'static ChargingSpec),
    Show,
    References,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, argument) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        let command = match word.to_lowercase().as_str() {
            "mode" => Self::Mode(CalculationMode::from_str(argument, true).map_err(Error::msg)?),
            "phase" => Self::Phase(PhaseMode::from_str(argument, true).map_err(Error::msg)?),
            "voltage" => Self::Voltage(
                argument.parse().with_context(|| format!("invalid voltage `{argument}`"))?,
            ),
            "input" => Self::Input(argument.to_string()),
            "reference" => Self::Reference(
                reference::find(argument)
                    .with_context(|| format!("no charging specification matches `{argument}`"))?,
            ),
            "show" => Self::Show,
            "references" => Self::References,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => bail!("unknown command `{word}`, try `help`"),
        };
        Ok(command)
    }
}

/// Read commands line by line until the input ends or the user quits.
#[instrument(skip_all)]
pub fn run_session(session: &mut Session, input: impl BufRead, output: &mut impl Write) -> Result {
    writeln!(output, "{}", build_session_table(session))?;
    for line in input.lines() {
        let line = line.context("failed to read the command")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(error) => {
                warn!("{error:#}");
                continue;
            }
        };
        match command {
            SessionCommand::Mode(mode) => session.set_calculation_mode(mode),
            SessionCommand::Phase(phase) => session.set_phase_mode(phase),
            SessionCommand::Voltage(voltage) => session.set_voltage(voltage),
            SessionCommand::Input(text) => session.set_input(text),
            SessionCommand::Reference(spec) => session.select_reference(spec),
            SessionCommand::Show => {}
            SessionCommand::References => {
                writeln!(output, "{}", build_references_table())?;
                continue;
            }
            SessionCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            SessionCommand::Quit => break,
        }
        writeln!(output, "{}", build_session_table(session))?;
    }
    info!(reading = %session.reading(), "session finished");
    Ok(())
}
