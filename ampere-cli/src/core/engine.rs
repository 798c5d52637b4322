use ampere_quantities::{Amperes, Kilowatts, Volts};

use crate::core::{
    input::parse_magnitude,
    mode::CalculationMode,
    phase::PhaseMode,
    reading::Reading,
};

/// Convert the user-entered text into the opposite unit.
///
/// Unparsable or negative input quietly yields a zero reading.
/// Zero or negative voltage is passed through as is.
pub fn compute(mode: CalculationMode, phase: PhaseMode, voltage: Volts, input: &str) -> Reading {
    parse_magnitude(input)
        .map_or_else(|| Reading::zero(mode), |magnitude| convert(mode, phase, voltage, magnitude))
}

/// Convert an already validated magnitude.
///
/// - Single phase: `P = V × I / 1000`.
/// - Three phase: `P = √3 × V × I / 1000`.
pub fn convert(mode: CalculationMode, phase: PhaseMode, voltage: Volts, magnitude: f64) -> Reading {
    match mode {
        CalculationMode::AmpsToPower => {
            Reading::Power(voltage * Amperes::from(magnitude) * phase.power_coefficient())
        }
        CalculationMode::PowerToAmps => {
            Reading::Current(Kilowatts::from(magnitude) / (voltage * phase.power_coefficient()))
        }
    }
}
