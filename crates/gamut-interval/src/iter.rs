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

//! # Stepped Interval Iteration
//!
//! [`StepIter`] walks an interval from its stored start toward its stored end
//! at a fixed step size, yielding each contained point lazily. The iterator is
//! created through [`Interval::points`] or [`Interval::points_from_anchor`].
//!
//! The step's sign is taken literally: stepping a reversed interval requires a
//! step that actually points from `start` toward `end`, and a step pointing
//! away from the interval yields at most the start point. A zero step yields
//! exactly one value before terminating.

use crate::error::IntervalError;
use crate::interval::Interval;
use gamut_num::convert::FloatSample;
use gamut_num::ops::{PointOps, SizeOps};
use std::iter::FusedIterator;

/// A lazy, finite iterator over the points of an [`Interval`] at a fixed step.
///
/// # Examples
///
/// ```rust
/// # use gamut_interval::interval::Interval;
/// let points: Vec<_> = Interval::new(0, 10).points(4).collect();
/// assert_eq!(points, vec![0, 4, 8]);
///
/// // Reversed intervals step from start toward end with a matching step sign.
/// let down: Vec<_> = Interval::new(3, 0).points(-1).collect();
/// assert_eq!(down, vec![3, 2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct StepIter<P, S> {
    interval: Interval<P, S>,
    step: S,
    upcoming: Option<P>,
}

impl<P, S> StepIter<P, S>
where
    P: PointOps<S>,
    S: SizeOps,
{
    /// Creates an iterator starting at the interval's start boundary.
    ///
    /// An excluded start is skipped by stepping forward once before the first
    /// value is produced.
    pub(crate) fn new(interval: Interval<P, S>, step: S) -> Self {
        let first = if interval.is_start_included() {
            Some(interval.start())
        } else {
            interval.start().checked_forward(step)
        };
        Self {
            interval,
            step,
            upcoming: first.filter(|p| interval.contains(*p)),
        }
    }
}

impl<P, S> StepIter<P, S>
where
    P: PointOps<S> + FloatSample,
    S: SizeOps + FloatSample,
{
    /// Creates an iterator whose values are aligned to a grid anchored at
    /// `anchor` rather than at the interval's start.
    ///
    /// The first value is the start boundary pushed forward to the nearest
    /// grid position; when that position coincides with an excluded start it
    /// is pushed one step further. The alignment runs in `f64` and always
    /// moves toward greater values, so anchoring assumes a forward-oriented
    /// interval: on a reversed interval an off-grid start leaves the interval
    /// immediately and the iterator is empty.
    pub(crate) fn anchored(
        interval: Interval<P, S>,
        step: S,
        anchor: P,
    ) -> Result<Self, IntervalError> {
        let start = interval
            .start()
            .to_sample()
            .ok_or(IntervalError::ConversionUnsupported)?;
        let step_sample = step
            .to_sample()
            .ok_or(IntervalError::ConversionUnsupported)?;
        let anchor_sample = anchor
            .to_sample()
            .ok_or(IntervalError::ConversionUnsupported)?;
        let magnitude = step_sample.abs();
        let mut first = if magnitude == 0.0 {
            start
        } else {
            let offset = (start - anchor_sample).rem_euclid(magnitude);
            if offset == 0.0 {
                start
            } else {
                start + (magnitude - offset)
            }
        };
        if !interval.is_start_included() && first == start {
            first += step_sample;
        }
        Ok(Self {
            interval,
            step,
            upcoming: P::from_sample(first).filter(|p| interval.contains(*p)),
        })
    }
}

impl<P, S> Iterator for StepIter<P, S>
where
    P: PointOps<S>,
    S: SizeOps,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        let current = self.upcoming.take()?;
        if self.step != S::ZERO {
            self.upcoming = current
                .checked_forward(self.step)
                .filter(|p| self.interval.contains(*p));
        }
        Some(current)
    }
}

impl<P, S> FusedIterator for StepIter<P, S>
where
    P: PointOps<S>,
    S: SizeOps,
{
}
