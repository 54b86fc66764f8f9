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

//! # Gamut Num
//!
//! The arithmetic capability layer of the Gamut interval toolkit. This crate
//! defines the traits a concrete point/size type pair must implement to
//! participate in interval arithmetic, together with blanket and macro-based
//! implementations for all primitive numeric types.
//!
//! ## Modules
//!
//! - `constants`: Associated constant traits (`Zero`) implemented for every
//!   primitive integer and floating-point type.
//! - `ops`: The point/size arithmetic capability — `PointOps<S>` for checked
//!   point-plus-size and point-minus-point operations, and `SizeOps` for
//!   size-level arithmetic and the zero constant.
//! - `convert`: Bidirectional `f64` sampling (`FloatSample`) used by
//!   ratio-based interval operations, with a blanket implementation over
//!   `num_traits::ToPrimitive + FromPrimitive`.
//!
//! ## Purpose
//!
//! A position type (timestamp, offset, coordinate) and its distance type
//! (duration, length) are often distinct. These traits make that pairing
//! explicit and statically checked: built-in numerics work out of the box,
//! and user types opt in by implementing the traits for their own pairs.
//!
//! Refer to each module for detailed APIs and examples.

pub mod constants;
pub mod convert;
pub mod ops;
