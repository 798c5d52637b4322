pub mod current;
pub mod power;
pub mod voltage;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

pub use self::{current::Amperes, power::Kilowatts, voltage::Volts};

/// Electrical quantity, dimensioned by the exponents of volts and amperes.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const VOLT: isize, const AMPERE: isize>(pub OrderedFloat<f64>);

impl<const VOLT: isize, const AMPERE: isize> Quantity<VOLT, AMPERE> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0.0
    }
}

impl<const VOLT: isize, const AMPERE: isize> Mul<f64> for Quantity<VOLT, AMPERE> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const VOLT: isize, const AMPERE: isize> Div<f64> for Quantity<VOLT, AMPERE> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const VOLT: isize, const AMPERE: isize> Div<Self> for Quantity<VOLT, AMPERE> {
    type Output = OrderedFloat<f64>;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
