use std::fmt::{Display, Formatter};

use ampere_quantities::{Amperes, Kilowatts};
use serde::Serialize;

use crate::{core::mode::CalculationMode, fmt::FormattedMagnitude};

/// Derived result of a conversion, in the unit opposite to the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value")]
pub enum Reading {
    #[serde(rename = "kW")]
    Power(Kilowatts),

    #[serde(rename = "A")]
    Current(Amperes),
}

impl Reading {
    pub const fn zero(mode: CalculationMode) -> Self {
        match mode {
            CalculationMode::AmpsToPower => Self::Power(Kilowatts::ZERO),
            CalculationMode::PowerToAmps => Self::Current(Amperes::ZERO),
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Power(power) => power.get(),
            Self::Current(current) => current.get(),
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Power(_) => "kW",
            Self::Current(_) => "A",
        }
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", FormattedMagnitude(self.value()), self.unit())
    }
}
