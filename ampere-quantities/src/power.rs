use std::{
    fmt::{Debug, Formatter},
    ops::{Div, Mul},
};

use crate::{Quantity, current::Amperes, voltage::Volts};

/// Real power, assuming the power factor of 1.
pub type Kilowatts = Quantity<1, 1>;

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kW", self.0)
    }
}

impl Mul<Amperes> for Volts {
    type Output = Kilowatts;

    fn mul(self, rhs: Amperes) -> Self::Output {
        Quantity(self.0 * rhs.0 / 1000.0)
    }
}

impl Div<Volts> for Kilowatts {
    type Output = Amperes;

    fn div(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 * 1000.0 / rhs.0)
    }
}
