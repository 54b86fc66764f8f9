// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Point/Size Arithmetic Capability
//!
//! Traits linking a *point* type (a position on some axis) to its *size* type
//! (the distance between two positions). The pairing is expressed statically:
//! `P: PointOps<S>` states that positions of type `P` can be shifted by
//! distances of type `S` and that subtracting two positions yields an `S`.
//!
//! For all primitive numeric types, point and size coincide (`i64` positions
//! are shifted by `i64` distances). Distinct pairs — a timestamp shifted by a
//! duration, say — opt in by implementing both traits for their own types.
//!
//! Shifting operations are *checked*: they return `None` when the result is
//! not representable, mirroring the semantics of primitive `checked_add`. The
//! point-minus-point operation saturates at the type extremes instead, since
//! a distance query has a well-defined nearest representable answer.

use crate::constants::Zero;

/// The arithmetic capability of a point type over its size type `S`.
///
/// A point is a position on a totally ordered axis; a size is a distance
/// between two such positions. Implementations must satisfy
/// `origin.checked_forward(p.span_from(origin)) == Some(p)` whenever the
/// span is exactly representable.
///
/// # Examples
///
/// ```rust
/// # use gamut_num::ops::PointOps;
/// assert_eq!(10i32.checked_forward(5), Some(15));
/// assert_eq!(10i32.checked_backward(5), Some(5));
/// assert_eq!(10i32.span_from(4), 6);
/// assert_eq!(i32::MAX.checked_forward(1), None); // Overflow
/// ```
pub trait PointOps<S>: Copy + PartialOrd {
    /// Shifts this point forward by `delta`, returning `None` if the result
    /// is not representable.
    fn checked_forward(self, delta: S) -> Option<Self>;

    /// Shifts this point backward by `delta`, returning `None` if the result
    /// is not representable.
    fn checked_backward(self, delta: S) -> Option<Self>;

    /// Returns the distance from `origin` to this point (`self - origin`),
    /// saturating at the extremes of `S` when the exact distance is not
    /// representable.
    fn span_from(self, origin: Self) -> S;
}

/// The arithmetic capability of a size type.
///
/// Sizes are ordered, carry a zero constant, and support checked subtraction
/// among themselves.
///
/// # Examples
///
/// ```rust
/// # use gamut_num::ops::SizeOps;
/// assert_eq!(10i32.checked_diff(4), Some(6));
/// assert_eq!(i32::MIN.checked_diff(1), None); // Underflow
/// ```
pub trait SizeOps: Copy + PartialOrd + Zero {
    /// Subtracts `other` from this size, returning `None` if the result is
    /// not representable.
    fn checked_diff(self, other: Self) -> Option<Self>;
}

macro_rules! point_ops_int_impl {
    ($t:ty) => {
        impl PointOps<$t> for $t {
            #[inline(always)]
            fn checked_forward(self, delta: $t) -> Option<$t> {
                self.checked_add(delta)
            }

            #[inline(always)]
            fn checked_backward(self, delta: $t) -> Option<$t> {
                self.checked_sub(delta)
            }

            #[inline(always)]
            fn span_from(self, origin: $t) -> $t {
                self.saturating_sub(origin)
            }
        }

        impl SizeOps for $t {
            #[inline(always)]
            fn checked_diff(self, other: $t) -> Option<$t> {
                self.checked_sub(other)
            }
        }
    };
}

point_ops_int_impl!(u8);
point_ops_int_impl!(u16);
point_ops_int_impl!(u32);
point_ops_int_impl!(u64);
point_ops_int_impl!(usize);
point_ops_int_impl!(u128);

point_ops_int_impl!(i8);
point_ops_int_impl!(i16);
point_ops_int_impl!(i32);
point_ops_int_impl!(i64);
point_ops_int_impl!(isize);
point_ops_int_impl!(i128);

macro_rules! point_ops_float_impl {
    ($t:ty) => {
        impl PointOps<$t> for $t {
            #[inline(always)]
            fn checked_forward(self, delta: $t) -> Option<$t> {
                let result = self + delta;
                result.is_finite().then_some(result)
            }

            #[inline(always)]
            fn checked_backward(self, delta: $t) -> Option<$t> {
                let result = self - delta;
                result.is_finite().then_some(result)
            }

            #[inline(always)]
            fn span_from(self, origin: $t) -> $t {
                self - origin
            }
        }

        impl SizeOps for $t {
            #[inline(always)]
            fn checked_diff(self, other: $t) -> Option<$t> {
                let result = self - other;
                result.is_finite().then_some(result)
            }
        }
    };
}

point_ops_float_impl!(f32);
point_ops_float_impl!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_forward_int() {
        assert_eq!(5i32.checked_forward(3), Some(8));
        assert_eq!((-5i64).checked_forward(3), Some(-2));
        assert_eq!(i32::MAX.checked_forward(1), None);
        assert_eq!(250u8.checked_forward(10), None);
    }

    #[test]
    fn test_checked_backward_int() {
        assert_eq!(5i32.checked_backward(3), Some(2));
        assert_eq!(i32::MIN.checked_backward(1), None);
        assert_eq!(3u8.checked_backward(5), None);
    }

    #[test]
    fn test_span_from_saturates() {
        assert_eq!(10i32.span_from(4), 6);
        assert_eq!(4i32.span_from(10), -6);
        assert_eq!(i64::MAX.span_from(i64::MIN), i64::MAX);
    }

    #[test]
    fn test_checked_diff() {
        assert_eq!(10i32.checked_diff(4), Some(6));
        assert_eq!(4u16.checked_diff(10), None);
    }

    #[test]
    fn test_float_ops() {
        assert_eq!(1.5f64.checked_forward(0.25), Some(1.75));
        assert_eq!(1.5f64.checked_backward(0.5), Some(1.0));
        assert_eq!(f64::MAX.checked_forward(f64::MAX), None);
        assert_eq!(10.0f64.span_from(2.5), 7.5);
    }

    #[test]
    fn test_roundtrip_forward_span() {
        let origin = 7i32;
        let point = 42i32;
        assert_eq!(origin.checked_forward(point.span_from(origin)), Some(point));
    }
}
