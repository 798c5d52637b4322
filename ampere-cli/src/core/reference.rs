use ampere_quantities::{Amperes, Kilowatts, Volts};

use crate::core::{engine::convert, mode::CalculationMode, phase::PhaseMode, reading::Reading};

/// Common charging specification from the reference table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChargingSpec {
    pub label: &'static str,
    pub phase: PhaseMode,
    pub voltage: Volts,
    pub current: Amperes,
    pub approximate_power: Kilowatts,
}

impl ChargingSpec {
    const fn new(
        label: &'static str,
        phase: PhaseMode,
        voltage: f64,
        current: f64,
        approximate_power: f64,
    ) -> Self {
        Self {
            label,
            phase,
            voltage: Volts::new(voltage),
            current: Amperes::new(current),
            approximate_power: Kilowatts::new(approximate_power),
        }
    }

    /// Power the engine derives for this specification.
    pub fn power(&self) -> Reading {
        convert(CalculationMode::AmpsToPower, self.phase, self.voltage, self.current.get())
    }
}

pub static REFERENCES: [ChargingSpec; 5] = [
    ChargingSpec::new("家用插座 (13A)", PhaseMode::SinglePhase, 220.0, 13.0, 2.8),
    ChargingSpec::new("中速充電 (16A)", PhaseMode::SinglePhase, 220.0, 16.0, 3.5),
    ChargingSpec::new("標準中速 (32A)", PhaseMode::SinglePhase, 220.0, 32.0, 7.0),
    ChargingSpec::new("三相中速 (16A)", PhaseMode::ThreePhase, 380.0, 16.0, 11.0),
    ChargingSpec::new("三相快速 (32A)", PhaseMode::ThreePhase, 380.0, 32.0, 22.0),
];

/// Find the reference by its 1-based index or its exact label.
#[must_use]
pub fn find(key: &str) -> Option<&'static ChargingSpec> {
    let key = key.trim();
    match key.parse::<usize>() {
        Ok(index) => index.checked_sub(1).and_then(|index| REFERENCES.get(index)),
        Err(_) => REFERENCES.iter().find(|spec| spec.label == key),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_find_by_index() {
        assert_eq!(find("1").unwrap().label, "家用插座 (13A)");
        assert_eq!(find("5").unwrap().label, "三相快速 (32A)");
        assert!(find("0").is_none());
        assert!(find("6").is_none());
    }

    #[test]
    fn test_find_by_label() {
        let spec = find("三相快速 (32A)").unwrap();
        assert_eq!(spec.phase, PhaseMode::ThreePhase);
        assert_eq!(spec.current, Amperes::from(32));
        assert!(find("超級快充").is_none());
    }

    /// The approximate figures should stay within 10% of what the engine computes.
    #[test]
    fn test_approximate_power() {
        for spec in &REFERENCES {
            let power = spec.power().value();
            assert_abs_diff_eq!(
                power,
                spec.approximate_power.get(),
                epsilon = spec.approximate_power.get() * 0.1,
            );
        }
    }
}
