use std::fmt::{Display, Formatter};

use ampere_quantities::Volts;
use comfy_table::Color;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseMode {
    /// Regular household supply, slow charging.
    #[default]
    #[value(name = "single", alias = "1")]
    SinglePhase,

    /// Commercial supply, medium and fast charging.
    #[value(name = "three", alias = "3")]
    ThreePhase,
}

impl Display for PhaseMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinglePhase => write!(f, "單相 (1-Phase)"),
            Self::ThreePhase => write!(f, "三相 (3-Phase)"),
        }
    }
}

impl PhaseMode {
    /// Ratio between the real power and the plain `V × I` product, assuming the power factor of 1.
    ///
    /// The three-phase voltage is the line voltage.
    #[must_use]
    pub fn power_coefficient(self) -> f64 {
        match self {
            Self::SinglePhase => 1.0,
            Self::ThreePhase => 3.0_f64.sqrt(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SinglePhase => "單相",
            Self::ThreePhase => "三相",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::SinglePhase => "一般家用 / 慢充",
            Self::ThreePhase => "商用 / 中快充",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::SinglePhase => Color::Green,
            Self::ThreePhase => Color::DarkYellow,
        }
    }
}

/// Voltage which gets applied whenever the phase mode changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VoltageDefaults {
    pub single_phase: Volts,
    pub three_phase: Volts,
}

impl Default for VoltageDefaults {
    fn default() -> Self {
        Self { single_phase: Volts::new(220.0), three_phase: Volts::new(380.0) }
    }
}

impl VoltageDefaults {
    pub const fn voltage(self, phase: PhaseMode) -> Volts {
        match phase {
            PhaseMode::SinglePhase => self.single_phase,
            PhaseMode::ThreePhase => self.three_phase,
        }
    }

    #[must_use]
    pub fn hint(self, phase: PhaseMode) -> String {
        match phase {
            PhaseMode::SinglePhase => format!("預設: {}V", self.single_phase.0),
            PhaseMode::ThreePhase => format!("預設: {}V (線電壓)", self.three_phase.0),
        }
    }
}
