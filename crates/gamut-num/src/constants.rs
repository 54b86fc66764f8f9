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

/// A trait for numeric types that have a constant representing 0.
///
/// Unlike `num_traits::Zero`, the value is an associated constant rather than
/// a function, so it can be used in const contexts and pattern guards.
///
/// # Examples
///
/// ```rust
/// # use gamut_num::constants::Zero;
/// assert_eq!(i32::ZERO, 0);
/// assert_eq!(f64::ZERO, 0.0);
/// ```
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_zero_for {
    ($value:expr, $t:ty) => {
        impl Zero for $t {
            const ZERO: Self = $value;
        }
    };
}

impl_zero_for!(0, i8);
impl_zero_for!(0, u8);
impl_zero_for!(0, i16);
impl_zero_for!(0, u16);
impl_zero_for!(0, i32);
impl_zero_for!(0, u32);
impl_zero_for!(0, i64);
impl_zero_for!(0, u64);
impl_zero_for!(0, i128);
impl_zero_for!(0, u128);
impl_zero_for!(0, isize);
impl_zero_for!(0, usize);

impl_zero_for!(0.0, f32);
impl_zero_for!(0.0, f64);
