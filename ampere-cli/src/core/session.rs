use ampere_quantities::Volts;
use serde::Serialize;

use crate::{
    core::{
        engine::compute,
        mode::CalculationMode,
        phase::{PhaseMode, VoltageDefaults},
        reading::Reading,
        reference::ChargingSpec,
    },
    prelude::*,
};

/// Everything the user controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub calculation_mode: CalculationMode,
    pub phase_mode: PhaseMode,
    pub voltage: Volts,

    /// Raw text, amperes or kilowatts depending on the calculation mode.
    pub input: String,
}

impl FormState {
    pub fn new(defaults: VoltageDefaults) -> Self {
        let phase_mode = PhaseMode::default();
        Self {
            calculation_mode: CalculationMode::default(),
            phase_mode,
            voltage: defaults.voltage(phase_mode),
            input: String::new(),
        }
    }
}

/// Derive the reading from the state, which is the only source of truth.
pub fn recompute(state: &FormState) -> Reading {
    compute(state.calculation_mode, state.phase_mode, state.voltage, &state.input)
}

/// Calculator session: the form state and the reading derived from it.
///
/// Every setter ends with [`recompute`], so the reading never goes stale.
#[derive(Debug, Serialize)]
pub struct Session {
    #[serde(skip)]
    defaults: VoltageDefaults,

    #[serde(flatten)]
    state: FormState,

    reading: Reading,
}

impl Session {
    pub fn new(defaults: VoltageDefaults) -> Self {
        let state = FormState::new(defaults);
        let reading = recompute(&state);
        Self { defaults, state, reading }
    }

    pub const fn state(&self) -> &FormState {
        &self.state
    }

    pub const fn reading(&self) -> Reading {
        self.reading
    }

    pub const fn defaults(&self) -> VoltageDefaults {
        self.defaults
    }

    pub fn set_calculation_mode(&mut self, mode: CalculationMode) {
        self.state.calculation_mode = mode;
        self.commit();
    }

    /// Switching the phase discards the input and applies the phase's default voltage.
    pub fn set_phase_mode(&mut self, phase: PhaseMode) {
        if self.state.phase_mode == phase {
            return;
        }
        self.state.phase_mode = phase;
        self.state.voltage = self.defaults.voltage(phase);
        self.state.input.clear();
        self.commit();
    }

    pub fn set_voltage(&mut self, voltage: Volts) {
        self.state.voltage = voltage;
        self.commit();
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state.input = input.into();
        self.commit();
    }

    /// Apply the reference: its phase and its current as the input.
    ///
    /// The voltage falls back to the default only when the phase actually changes.
    pub fn select_reference(&mut self, spec: &ChargingSpec) {
        if self.state.phase_mode != spec.phase {
            self.state.phase_mode = spec.phase;
            self.state.voltage = self.defaults.voltage(spec.phase);
        }
        self.state.calculation_mode = CalculationMode::AmpsToPower;
        self.state.input = spec.current.get().to_string();
        self.commit();
    }

    fn commit(&mut self) {
        self.reading = recompute(&self.state);
        debug!(
            mode = ?self.state.calculation_mode,
            phase = ?self.state.phase_mode,
            voltage = ?self.state.voltage,
            input = self.state.input.as_str(),
            reading = %self.reading,
            "recomputed",
        );
    }
}

#[cfg(test)]
mod tests {
    use ampere_quantities::Kilowatts;
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::reference::find;

    fn session() -> Session {
        Session::new(VoltageDefaults::default())
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.state().calculation_mode, CalculationMode::AmpsToPower);
        assert_eq!(session.state().phase_mode, PhaseMode::SinglePhase);
        assert_eq!(session.state().voltage, Volts::from(220));
        assert_eq!(session.state().input, "");
        assert_eq!(session.reading(), Reading::Power(Kilowatts::ZERO));
    }

    #[test]
    fn test_input_recomputes() {
        let mut session = session();
        session.set_input("32");
        assert_abs_diff_eq!(session.reading().value(), 7.04, epsilon = 1e-9);

        session.set_voltage(Volts::from(230));
        assert_abs_diff_eq!(session.reading().value(), 7.36, epsilon = 1e-9);

        session.set_input("oops");
        assert_eq!(session.reading(), Reading::Power(Kilowatts::ZERO));
    }

    #[test]
    fn test_mode_switch_keeps_input() {
        let mut session = session();
        session.set_input("7.04");
        session.set_calculation_mode(CalculationMode::PowerToAmps);
        assert_eq!(session.state().input, "7.04");
        assert_eq!(session.reading().unit(), "A");
        assert_abs_diff_eq!(session.reading().value(), 32.0, epsilon = 1e-9);
    }

    #[test]
    fn test_phase_switch_resets() {
        for mode in [CalculationMode::AmpsToPower, CalculationMode::PowerToAmps] {
            let mut session = session();
            session.set_calculation_mode(mode);
            session.set_voltage(Volts::from(240));
            session.set_input("16");

            session.set_phase_mode(PhaseMode::ThreePhase);
            assert_eq!(session.state().voltage, Volts::from(380));
            assert_eq!(session.state().input, "");
            assert_eq!(session.reading(), Reading::zero(mode));

            session.set_input("16");
            session.set_phase_mode(PhaseMode::SinglePhase);
            assert_eq!(session.state().voltage, Volts::from(220));
            assert_eq!(session.reading(), Reading::zero(mode));
        }
    }

    #[test]
    fn test_same_phase_is_noop() {
        let mut session = session();
        session.set_voltage(Volts::from(230));
        session.set_input("10");
        session.set_phase_mode(PhaseMode::SinglePhase);
        assert_eq!(session.state().voltage, Volts::from(230));
        assert_abs_diff_eq!(session.reading().value(), 2.3, epsilon = 1e-9);
    }

    #[test]
    fn test_custom_defaults() {
        let defaults =
            VoltageDefaults { single_phase: Volts::from(230), three_phase: Volts::from(400) };
        let mut session = Session::new(defaults);
        assert_eq!(session.state().voltage, Volts::from(230));
        session.set_phase_mode(PhaseMode::ThreePhase);
        assert_eq!(session.state().voltage, Volts::from(400));
    }

    #[test]
    fn test_select_reference() {
        let mut session = session();
        session.set_calculation_mode(CalculationMode::PowerToAmps);
        session.set_input("99");

        session.select_reference(find("三相快速 (32A)").unwrap());
        assert_eq!(session.state().phase_mode, PhaseMode::ThreePhase);
        assert_eq!(session.state().calculation_mode, CalculationMode::AmpsToPower);
        assert_eq!(session.state().input, "32");
        assert_eq!(session.state().voltage, Volts::from(380));
        assert_eq!(session.reading().to_string(), "21.06 kW");
    }

    #[test]
    fn test_select_reference_same_phase_keeps_voltage() {
        let mut session = session();
        session.set_phase_mode(PhaseMode::ThreePhase);
        session.set_voltage(Volts::from(400));
        session.select_reference(find("4").unwrap());
        assert_eq!(session.state().voltage, Volts::from(400));
        assert_eq!(session.state().input, "16");
        assert_abs_diff_eq!(session.reading().value(), 11.085, epsilon = 0.001);
    }

    #[test]
    fn test_select_reference_other_phase_resets_voltage() {
        let mut session = session();
        session.set_voltage(Volts::from(230));
        session.select_reference(find("4").unwrap());
        assert_eq!(session.state().phase_mode, PhaseMode::ThreePhase);
        assert_eq!(session.state().voltage, Volts::from(380));

        session.set_voltage(Volts::from(400));
        session.select_reference(find("2").unwrap());
        assert_eq!(session.state().phase_mode, PhaseMode::SinglePhase);
        assert_eq!(session.state().voltage, Volts::from(220));
        assert_eq!(session.state().input, "16");
    }

    #[test]
    fn test_reading_matches_state() {
        let mut session = session();
        session.set_phase_mode(PhaseMode::ThreePhase);
        session.set_input("22");
        session.set_calculation_mode(CalculationMode::PowerToAmps);
        assert_eq!(session.reading(), recompute(session.state()));
    }

    #[test]
    fn test_serialize() {
        let mut session = session();
        session.set_input("32");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["calculation_mode"], "amps-to-power");
        assert_eq!(json["phase_mode"], "single-phase");
        assert_eq!(json["voltage"], 220.0);
        assert_eq!(json["input"], "32");
        assert_eq!(json["reading"]["unit"], "kW");
    }
}
