//! Four-lane sample vectors.
//!
//! Circuit engines evaluate four parallel signal paths in lock step (four
//! filter cells, four control voltages, two stereo pairs). [`F32x4`] packs
//! those lanes into one value so filters and integrators run the exact same
//! arithmetic on every lane.
//!
//! [`Sample`] abstracts over `f32` and [`F32x4`] so the filter primitives in
//! this crate are written once and used for both.
//!
//! ```rust
//! use voltaic_core::F32x4;
//!
//! let v = F32x4::new(1.0, -2.0, 3.0, -4.0);
//! let clamped = v.clamp(-2.5, 2.5);
//! assert_eq!(clamped.to_array(), [1.0, -2.0, 2.5, -2.5]);
//! ```

use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A value that flows through the filter and integrator primitives.
///
/// Implemented for `f32` and [`F32x4`]. Scalar constants enter generic
/// code through [`Sample::splat`].
pub trait Sample:
    Copy
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// All lanes zero.
    const ZERO: Self;

    /// Broadcast a scalar to every lane.
    fn splat(x: f32) -> Self;

    /// Clamp every lane to `[-limit, limit]`.
    fn saturate(self, limit: f32) -> Self;

    /// Apply `f` to every lane.
    fn map_lanes(self, f: impl Fn(f32) -> f32) -> Self;

    /// True if every lane is finite.
    fn all_finite(self) -> bool;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn splat(x: f32) -> Self {
        x
    }

    #[inline]
    fn saturate(self, limit: f32) -> Self {
        self.clamp(-limit, limit)
    }

    #[inline]
    fn map_lanes(self, f: impl Fn(f32) -> f32) -> Self {
        f(self)
    }

    #[inline]
    fn all_finite(self) -> bool {
        self.is_finite()
    }
}

/// Four `f32` lanes processed together.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct F32x4(pub [f32; 4]);

impl F32x4 {
    /// All lanes zero.
    pub const ZERO: Self = Self([0.0; 4]);

    /// Build from four lane values.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self([a, b, c, d])
    }

    /// Broadcast `x` to all four lanes.
    #[inline]
    pub const fn splat(x: f32) -> Self {
        Self([x; 4])
    }

    /// Lane values as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Apply `f` to every lane.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    /// Combine lanes pairwise with `f`.
    #[inline]
    pub fn zip_map(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = other.0;
        Self([f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3)])
    }

    /// Lane-wise minimum against a scalar.
    #[inline]
    pub fn min(self, limit: f32) -> Self {
        self.map(|x| x.min(limit))
    }

    /// Lane-wise maximum against a scalar.
    #[inline]
    pub fn max(self, limit: f32) -> Self {
        self.map(|x| x.max(limit))
    }

    /// Lane-wise clamp to `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: f32, hi: f32) -> Self {
        self.map(|x| x.clamp(lo, hi))
    }

    /// Lane-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(f32::abs)
    }

    /// Lane-wise `2^x`.
    #[inline]
    pub fn exp2(self) -> Self {
        self.map(libm::exp2f)
    }

    /// Lane-wise `e^x`.
    #[inline]
    pub fn exp(self) -> Self {
        self.map(libm::expf)
    }

    /// Lane-wise `10^x`.
    #[inline]
    pub fn pow10(self) -> Self {
        self.map(|x| libm::powf(10.0, x))
    }

    /// Sum of all four lanes.
    #[inline]
    pub fn horizontal_sum(self) -> f32 {
        self.0[0] + self.0[1] + self.0[2] + self.0[3]
    }
}

impl Sample for F32x4 {
    const ZERO: Self = F32x4([0.0; 4]);

    #[inline]
    fn splat(x: f32) -> Self {
        Self([x; 4])
    }

    #[inline]
    fn saturate(self, limit: f32) -> Self {
        self.clamp(-limit, limit)
    }

    #[inline]
    fn map_lanes(self, f: impl Fn(f32) -> f32) -> Self {
        self.map(f)
    }

    #[inline]
    fn all_finite(self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }
}

impl From<[f32; 4]> for F32x4 {
    fn from(lanes: [f32; 4]) -> Self {
        Self(lanes)
    }
}

impl From<F32x4> for [f32; 4] {
    fn from(v: F32x4) -> Self {
        v.0
    }
}

impl Index<usize> for F32x4 {
    type Output = f32;

    #[inline]
    fn index(&self, lane: usize) -> &f32 {
        &self.0[lane]
    }
}

impl IndexMut<usize> for F32x4 {
    #[inline]
    fn index_mut(&mut self, lane: usize) -> &mut f32 {
        &mut self.0[lane]
    }
}

macro_rules! lane_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for F32x4 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl $trait<f32> for F32x4 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: f32) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl $assign_trait for F32x4 {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl $assign_trait<f32> for F32x4 {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = *self $op rhs;
            }
        }
    };
}

lane_op!(Add, add, AddAssign, add_assign, +);
lane_op!(Sub, sub, SubAssign, sub_assign, -);
lane_op!(Mul, mul, MulAssign, mul_assign, *);

impl Div for F32x4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a / b)
    }
}

impl Div<f32> for F32x4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|a| a / rhs)
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}
