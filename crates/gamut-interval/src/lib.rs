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

//! # Gamut Interval
//!
//! An immutable, runtime-generic interval type `Interval<P, S>` parameterized
//! independently over a *point* type `P` (positions) and a *size* type `S`
//! (distances between positions), with per-boundary inclusion flags and
//! support for reversed storage order.
//!
//! ## Modules
//!
//! - `interval`: The `Interval<P, S>` value type with validated construction,
//!   containment and intersection queries, clamping, expansion, translation,
//!   reversal, splitting, set subtraction, and ratio-based operations
//!   (interpolation, percentages, anchored scaling).
//! - `iter`: `StepIter<P, S>`, a lazy, finite iterator stepping across an
//!   interval at a fixed, optionally anchor-aligned step size.
//! - `error`: The `IntervalError` type raised by validating constructors and
//!   fallible operations.
//!
//! ## Purpose
//!
//! Positions and distances frequently live in different types (a timestamp is
//! shifted by a duration, never added to another timestamp). `Interval<P, S>`
//! keeps that distinction while still collapsing to a single-parameter form
//! (`Interval<f64>`) when point and size coincide. All values are immutable:
//! every transformation returns a new interval, so a failed operation leaves
//! no observable side effect.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod interval;
pub mod iter;
