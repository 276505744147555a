// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Fixed-Point Numeric Types
//!
//! All neuron state and parameters are held as [`Accum`], a signed s16.15
//! fixed-point value stored in an `i32` (16 integer bits including sign, 15
//! fractional bits). This is the same layout as the `S1615` data type the host
//! tooling writes into parameter regions, so a raw word can be moved between
//! the two without conversion.
//!
//! ## Arithmetic Policy
//!
//! ```text
//! a + b, a - b, -a   saturate at Accum::MIN / Accum::MAX
//! a * b              (a.raw as i64 * b.raw as i64) >> 15, then saturate
//!                    (arithmetic shift: truncation toward negative infinity)
//! Σ a_i              saturating fold from ZERO
//! ```
//!
//! Every operation is integer-only, so results are bit-for-bit identical on
//! every platform.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Number of fractional bits in an [`Accum`]
pub const ACCUM_FRACTIONAL_BITS: u32 = 15;

const ACCUM_SCALE: f64 = (1u32 << ACCUM_FRACTIONAL_BITS) as f64;

/// Signed s16.15 fixed-point value with saturating arithmetic
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Accum(i32);

impl Accum {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << ACCUM_FRACTIONAL_BITS);
    pub const MIN: Self = Self(i32::MIN);
    pub const MAX: Self = Self(i32::MAX);
    /// Smallest representable step (2^-15)
    pub const DELTA: Self = Self(1);

    /// Wrap a raw s16.15 word
    #[inline(always)]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw s16.15 word
    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Exact conversion from an integer
    #[inline(always)]
    pub const fn from_int(value: i16) -> Self {
        Self((value as i32) << ACCUM_FRACTIONAL_BITS)
    }

    /// Convert from a float, rounding to nearest and saturating out-of-range
    /// values. NaN maps to zero.
    ///
    /// # Example
    /// ```
    /// use lifdv_npu_neural::Accum;
    ///
    /// assert_eq!(Accum::from_num(1.0), Accum::ONE);
    /// assert_eq!(Accum::from_num(0.9).raw(), 29491);
    /// assert_eq!(Accum::from_num(1.0e9), Accum::MAX);
    /// ```
    #[inline]
    pub fn from_num(value: f64) -> Self {
        // `as` saturates on overflow and maps NaN to 0
        Self((value * ACCUM_SCALE).round() as i32)
    }

    /// Convert from a float, or `None` when the rounded value does not fit
    /// s16.15 (roughly [-65536, 65536)) or is not finite
    ///
    /// # Example
    /// ```
    /// use lifdv_npu_neural::Accum;
    ///
    /// assert_eq!(Accum::checked_from_num(-65.0), Some(Accum::from_int(-65)));
    /// assert_eq!(Accum::checked_from_num(70_000.0), None);
    /// ```
    pub fn checked_from_num(value: f64) -> Option<Self> {
        let scaled = (value * ACCUM_SCALE).round();
        if scaled >= i32::MIN as f64 && scaled <= i32::MAX as f64 {
            Some(Self(scaled as i32))
        } else {
            None
        }
    }

    /// Convert to a float (exact: every s16.15 value fits in an f64)
    #[inline]
    pub fn to_num(self) -> f64 {
        self.0 as f64 / ACCUM_SCALE
    }

    #[inline(always)]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    #[inline(always)]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    #[inline(always)]
    pub const fn saturating_neg(self) -> Self {
        Self(self.0.saturating_neg())
    }

    /// Widening multiply, truncated back to 15 fractional bits and saturated
    #[inline(always)]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i64 * rhs.0 as i64) >> ACCUM_FRACTIONAL_BITS;
        if wide > i32::MAX as i64 {
            Self::MAX
        } else if wide < i32::MIN as i64 {
            Self::MIN
        } else {
            Self(wide as i32)
        }
    }

    #[inline(always)]
    pub const fn saturating_abs(self) -> Self {
        Self(self.0.saturating_abs())
    }
}

impl Add for Accum {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Accum {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sub for Accum {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl SubAssign for Accum {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.saturating_sub(rhs);
    }
}

impl Mul for Accum {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }
}

impl Neg for Accum {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.saturating_neg()
    }
}

impl Sum for Accum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Accum> for Accum {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<i16> for Accum {
    fn from(value: i16) -> Self {
        Self::from_int(value)
    }
}

impl fmt::Display for Accum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.width() {
            Some(width) => write!(f, "{:>width$.4}", self.to_num(), width = width),
            None => write!(f, "{:.4}", self.to_num()),
        }
    }
}
