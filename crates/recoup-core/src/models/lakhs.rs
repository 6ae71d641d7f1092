use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::NATIVE_PER_LAKH;

/// Money in the internal unit: 1 lakh = 100,000 native currency units.
///
/// All allocation math runs on `Lakhs`; native amounts only exist at the
/// normalization boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lakhs(f64);

impl Lakhs {
    pub const ZERO: Lakhs = Lakhs(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Convert a native amount. Only strictly positive values are rescaled.
    pub fn from_native(native: f64) -> Self {
        if native > 0.0 {
            Self(native / NATIVE_PER_LAKH)
        } else {
            Self(native)
        }
    }

    pub fn to_native(self) -> f64 {
        self.0 * NATIVE_PER_LAKH
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Fraction of `whole` this amount represents; 0 when `whole` is not positive.
    pub fn share_of(self, whole: Lakhs) -> f64 {
        if whole.0 > 0.0 {
            self.0 / whole.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Lakhs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} lakh", self.0)
    }
}

impl Add for Lakhs {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Lakhs {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Lakhs {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Lakhs {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Sum for Lakhs {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Lakhs::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Lakhs> for Lakhs {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
