use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

pub type Volts = Quantity<1, 0>;

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} V", self.0)
    }
}

impl Debug for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}V", self.0)
    }
}
