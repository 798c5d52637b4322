use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Direction of the conversion.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationMode {
    /// Current (A) ➜ power (kW).
    #[default]
    #[value(alias = "a2p")]
    AmpsToPower,

    /// Power (kW) ➜ current (A).
    #[value(alias = "p2a")]
    PowerToAmps,
}

impl Display for CalculationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmpsToPower => write!(f, "電流 ➜ 功率 (kW)"),
            Self::PowerToAmps => write!(f, "功率 ➜ 電流 (A)"),
        }
    }
}

impl CalculationMode {
    /// Unit of the magnitude the user types in.
    pub const fn input_unit(self) -> &'static str {
        match self {
            Self::AmpsToPower => "Amps",
            Self::PowerToAmps => "kW",
        }
    }

    /// Caption of the derived reading.
    pub const fn result_caption(self) -> &'static str {
        match self {
            Self::AmpsToPower => "功率",
            Self::PowerToAmps => "電流",
        }
    }
}
