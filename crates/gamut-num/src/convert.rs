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

//! # Float Sampling
//!
//! Bidirectional conversion between a numeric type and `f64`. Ratio-based
//! interval operations (percentages, centers, scaling) carry out their
//! intermediate math in `f64` and convert back; this module defines the
//! capability those operations require.
//!
//! A blanket implementation covers every type that implements
//! `num_traits::ToPrimitive + FromPrimitive`, so all primitive numerics work
//! without further ceremony. User-defined point or size types opt in by
//! implementing those two `num_traits` traits; types that cannot supply the
//! conversion simply cannot call ratio-based operations, while boundary and
//! ordering operations remain fully available to them.

use num_traits::{FromPrimitive, ToPrimitive};

/// Bidirectional conversion through a 64-bit float.
///
/// Both directions are fallible: `to_sample` returns `None` when the value
/// has no `f64` representation, `from_sample` when the sample lies outside
/// the representable range of the target type (including non-finite samples
/// for integer targets).
///
/// # Examples
///
/// ```rust
/// # use gamut_num::convert::FloatSample;
/// assert_eq!(5i32.to_sample(), Some(5.0));
/// assert_eq!(<i32 as FloatSample>::from_sample(4.5), Some(4)); // Truncates
/// assert_eq!(<i32 as FloatSample>::from_sample(1e300), None);
/// assert_eq!(<u8 as FloatSample>::from_sample(-1.0), None);
/// ```
pub trait FloatSample: Copy {
    /// Converts this value to an `f64` sample, or `None` when no such
    /// representation exists.
    fn to_sample(self) -> Option<f64>;

    /// Converts an `f64` sample back, or `None` when the sample is not
    /// representable. Integer targets truncate toward zero.
    fn from_sample(value: f64) -> Option<Self>;
}

impl<T> FloatSample for T
where
    T: ToPrimitive + FromPrimitive + Copy,
{
    #[inline]
    fn to_sample(self) -> Option<f64> {
        self.to_f64()
    }

    #[inline]
    fn from_sample(value: f64) -> Option<Self> {
        T::from_f64(value)
    }
}
