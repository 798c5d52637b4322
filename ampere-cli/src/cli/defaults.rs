use ampere_quantities::Volts;
use clap::Parser;

use crate::core::phase::VoltageDefaults;

#[derive(Copy, Clone, Parser)]
pub struct VoltageDefaultsArgs {
    /// Default single-phase voltage.
    #[clap(
        long = "single-phase-voltage",
        default_value = "220",
        env = "SINGLE_PHASE_VOLTAGE",
        global = true
    )]
    pub single_phase: Volts,

    /// Default three-phase line voltage.
    #[clap(
        long = "three-phase-voltage",
        default_value = "380",
        env = "THREE_PHASE_VOLTAGE",
        global = true
    )]
    pub three_phase: Volts,
}

impl From<VoltageDefaultsArgs> for VoltageDefaults {
    fn from(args: VoltageDefaultsArgs) -> Self {
        Self { single_phase: args.single_phase, three_phase: args.three_phase }
    }
}
