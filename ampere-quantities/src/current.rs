use std::fmt::{Debug, Formatter};

use crate::Quantity;

pub type Amperes = Quantity<0, 1>;

impl Debug for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}A", self.0)
    }
}
