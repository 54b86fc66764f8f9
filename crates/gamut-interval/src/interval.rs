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

use crate::error::IntervalError;
use crate::iter::StepIter;
use gamut_num::convert::FloatSample;
use gamut_num::ops::{PointOps, SizeOps};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// An immutable interval between two points, with per-boundary inclusion.
///
/// The interval is parameterized independently over the point type `P`
/// (positions) and the size type `S` (distances between positions). When the
/// two coincide, the default type parameter collapses the type to a single
/// parameter form: `Interval<f64>` is `Interval<f64, f64>`.
///
/// Boundaries are stored in *storage* order: `start` may compare greater than
/// `end`, in which case the interval is *reversed* and still denotes the same
/// set of points, traversed in the opposite direction.
///
/// # Invariants
///
/// A single-point interval (`start == end`) includes either both boundaries
/// or neither; [`Interval::with_bounds`] rejects mismatched flags.
///
/// # Examples
///
/// ```rust
/// # use gamut_interval::interval::Interval;
/// let iv = Interval::new(0, 10);
/// assert!(iv.contains(0));
/// assert!(iv.contains(10));
/// assert_eq!(iv.size(), 10);
///
/// let half_open = Interval::with_bounds(0, true, 10, false).unwrap();
/// assert!(!half_open.contains(10));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<P, S = P> {
    start: P,
    end: P,
    start_included: bool,
    end_included: bool,
    _size: PhantomData<fn(S) -> S>,
}

/// Controls which side keeps the split point in [`Interval::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitOption {
    /// Both resulting intervals include the split point.
    Both,
    /// Only the side adjacent to `start` includes the split point.
    Left,
    /// Only the side adjacent to `end` includes the split point.
    Right,
    /// Neither resulting interval includes the split point.
    None,
}

impl<P, S> Interval<P, S>
where
    P: PointOps<S>,
    S: SizeOps,
{
    /// Creates a closed interval with both boundaries included.
    ///
    /// The boundaries are stored as given; `start` greater than `end` yields
    /// a reversed interval rather than an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::new(5, 10);
    /// assert_eq!(iv.start(), 5);
    /// assert_eq!(iv.end(), 10);
    /// assert!(iv.is_start_included() && iv.is_end_included());
    /// ```
    #[inline]
    pub fn new(start: P, end: P) -> Self {
        Self {
            start,
            end,
            start_included: true,
            end_included: true,
            _size: PhantomData,
        }
    }

    /// Creates an interval with explicit per-boundary inclusion flags.
    ///
    /// Fails with [`IntervalError::InconsistentBounds`] when `start == end`
    /// and the two flags differ: a single-point interval cannot include one
    /// boundary but exclude the identical other one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// # use gamut_interval::error::IntervalError;
    /// let iv = Interval::with_bounds(0, true, 5, false).unwrap();
    /// assert!(!iv.is_end_included());
    ///
    /// let err = Interval::with_bounds(3, true, 3, false);
    /// assert_eq!(err, Err(IntervalError::InconsistentBounds));
    /// ```
    pub fn with_bounds(
        start: P,
        start_included: bool,
        end: P,
        end_included: bool,
    ) -> Result<Self, IntervalError> {
        if matches!(start.partial_cmp(&end), Some(Ordering::Equal))
            && start_included != end_included
        {
            return Err(IntervalError::InconsistentBounds);
        }
        Ok(Self {
            start,
            start_included,
            end,
            end_included,
            _size: PhantomData,
        })
    }

    /// Creates the smallest closed interval spanning all given points.
    ///
    /// Returns `None` for an empty iterator. This is the usual way to wrap
    /// the key range of a keyed collection into an interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let keys = [7, 2, 9, 4];
    /// let iv: Interval<i32> = Interval::spanning(keys).unwrap();
    /// assert_eq!(iv.start(), 2);
    /// assert_eq!(iv.end(), 9);
    ///
    /// assert_eq!(Interval::<i32>::spanning([]), None);
    /// ```
    pub fn spanning<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut lo, mut hi) = (first, first);
        for point in iter {
            if point < lo {
                lo = point;
            }
            if point > hi {
                hi = point;
            }
        }
        Some(Self::new(lo, hi))
    }

    /// Returns the stored start boundary.
    #[inline]
    pub fn start(&self) -> P {
        self.start
    }

    /// Returns the stored end boundary.
    #[inline]
    pub fn end(&self) -> P {
        self.end
    }

    /// Returns `true` if the start boundary belongs to the interval.
    #[inline]
    pub fn is_start_included(&self) -> bool {
        self.start_included
    }

    /// Returns `true` if the end boundary belongs to the interval.
    #[inline]
    pub fn is_end_included(&self) -> bool {
        self.end_included
    }

    /// Returns `true` iff the stored `start` compares greater than `end`.
    ///
    /// Single-point intervals are never reversed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// assert!(!Interval::new(0, 10).is_reversed());
    /// assert!(Interval::new(10, 0).is_reversed());
    /// assert!(!Interval::new(5, 5).is_reversed());
    /// ```
    #[inline]
    pub fn is_reversed(&self) -> bool {
        matches!(self.start.partial_cmp(&self.end), Some(Ordering::Greater))
    }

    /// The boundaries in ascending order, each paired with its inclusion flag.
    #[inline]
    fn ordered(&self) -> (P, bool, P, bool) {
        if self.is_reversed() {
            (self.end, self.end_included, self.start, self.start_included)
        } else {
            (self.start, self.start_included, self.end, self.end_included)
        }
    }

    /// Builds a forward-oriented interval, dropping degenerate pieces.
    ///
    /// Expects `lo <= hi`. A single-point piece survives only when both flags
    /// are set; anything else (including `lo > hi`) yields `None`.
    fn piece(lo: P, lo_included: bool, hi: P, hi_included: bool) -> Option<Self> {
        match lo.partial_cmp(&hi) {
            Some(Ordering::Less) => Some(Self {
                start: lo,
                start_included: lo_included,
                end: hi,
                end_included: hi_included,
                _size: PhantomData,
            }),
            Some(Ordering::Equal) if lo_included && hi_included => Some(Self::new(lo, hi)),
            _ => None,
        }
    }

    /// Returns `true` iff the interval contains no point at all.
    ///
    /// The only legal construction with an empty point set is a single-point
    /// interval excluding both of its boundaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let empty = Interval::with_bounds(5, false, 5, false).unwrap();
    /// assert!(empty.is_empty());
    /// assert!(!Interval::new(5, 5).is_empty());
    /// assert!(!Interval::new(0, 10).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.start.partial_cmp(&self.end), Some(Ordering::Equal))
            && !self.start_included
    }

    /// Returns the absolute distance between the two boundaries.
    ///
    /// The result is independent of storage order and of the inclusion flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// assert_eq!(Interval::new(2, 10).size(), 8);
    /// assert_eq!(Interval::new(10, 2).size(), 8);
    /// assert_eq!(Interval::new(5, 5).size(), 0);
    /// ```
    #[inline]
    pub fn size(&self) -> S {
        let (lo, _, hi, _) = self.ordered();
        hi.span_from(lo)
    }

    /// Returns `true` iff `value` lies between the boundaries and is not
    /// shut out by an excluded boundary it equals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::with_bounds(0, true, 5, false).unwrap();
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(4));
    /// assert!(!iv.contains(5)); // Excluded boundary
    /// assert!(!iv.contains(-1));
    ///
    /// // Reversal does not affect membership.
    /// assert!(Interval::new(10, 0).contains(7));
    /// ```
    pub fn contains(&self, value: P) -> bool {
        let (lo, lo_included, hi, hi_included) = self.ordered();
        let above_lo = match value.partial_cmp(&lo) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => lo_included,
            _ => false,
        };
        let below_hi = match value.partial_cmp(&hi) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => hi_included,
            _ => false,
        };
        above_lo && below_hi
    }

    /// Returns `true` iff the two intervals share at least one point.
    ///
    /// Two adjacent intervals sharing only a boundary that either side
    /// excludes do not intersect, and an empty interval intersects nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let a = Interval::new(0, 10);
    /// assert!(a.intersects(&Interval::new(10, 20))); // Shared included point
    ///
    /// let half_open = Interval::with_bounds(0, true, 10, false).unwrap();
    /// assert!(!half_open.intersects(&Interval::new(10, 20)));
    ///
    /// let empty = Interval::with_bounds(5, false, 5, false).unwrap();
    /// assert!(!a.intersects(&empty));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_lo, a_lo_inc, a_hi, a_hi_inc) = self.ordered();
        let (b_lo, b_lo_inc, b_hi, b_hi_inc) = other.ordered();
        let lower_ok = match a_lo.partial_cmp(&b_hi) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => a_lo_inc && b_hi_inc,
            _ => false,
        };
        let upper_ok = match b_lo.partial_cmp(&a_hi) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => b_lo_inc && a_hi_inc,
            _ => false,
        };
        lower_ok && upper_ok
    }

    /// Returns the point of the interval nearest to `value`.
    ///
    /// Values below the lower boundary clamp to it, values above the upper
    /// boundary likewise; values inside pass through unchanged. Storage order
    /// and inclusion flags play no role.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.clamp_value(-3), 0);
    /// assert_eq!(iv.clamp_value(7), 7);
    /// assert_eq!(iv.clamp_value(15), 10);
    ///
    /// assert_eq!(Interval::new(10, 0).clamp_value(-3), 0);
    /// ```
    pub fn clamp_value(&self, value: P) -> P {
        let (lo, _, hi, _) = self.ordered();
        if value < lo {
            lo
        } else if value > hi {
            hi
        } else {
            value
        }
    }

    /// Returns the common region of the two intervals, or `None` if they do
    /// not overlap.
    ///
    /// Where both intervals contribute the same boundary value, the result's
    /// inclusion flag is the logical AND of the two inputs' flags. The result
    /// is always forward-oriented.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let a = Interval::new(0, 10);
    /// let b = Interval::new(5, 15);
    /// assert_eq!(a.intersection(&b), Some(Interval::new(5, 10)));
    ///
    /// // Adjacent with an excluded shared boundary: no intersection.
    /// let half_open = Interval::with_bounds(0, true, 5, false).unwrap();
    /// assert_eq!(half_open.intersection(&Interval::new(5, 10)), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (a_lo, a_lo_inc, a_hi, a_hi_inc) = self.ordered();
        let (b_lo, b_lo_inc, b_hi, b_hi_inc) = other.ordered();
        let (lo, lo_inc) = match a_lo.partial_cmp(&b_lo)? {
            Ordering::Greater => (a_lo, a_lo_inc),
            Ordering::Less => (b_lo, b_lo_inc),
            Ordering::Equal => (a_lo, a_lo_inc && b_lo_inc),
        };
        let (hi, hi_inc) = match a_hi.partial_cmp(&b_hi)? {
            Ordering::Less => (a_hi, a_hi_inc),
            Ordering::Greater => (b_hi, b_hi_inc),
            Ordering::Equal => (a_hi, a_hi_inc && b_hi_inc),
        };
        Self::piece(lo, lo_inc, hi, hi_inc)
    }

    /// Restricts `other` to this interval's range.
    ///
    /// Each boundary of the result keeps the inclusion flag of whichever
    /// interval contributed it; where both contribute the same value, both
    /// flags are retained and combined with AND. Under that rule the clamped
    /// region coincides with [`Interval::intersection`], and `None` is
    /// returned when the two do not overlap or the clamp degenerates to an
    /// excluded single point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let bounds = Interval::new(0, 10);
    /// let wide = Interval::with_bounds(-5, false, 7, false).unwrap();
    /// let clamped = bounds.clamp_interval(&wide).unwrap();
    /// assert_eq!(clamped.start(), 0);
    /// assert!(clamped.is_start_included()); // Retained from `bounds`
    /// assert_eq!(clamped.end(), 7);
    /// assert!(!clamped.is_end_included()); // Retained from `wide`
    /// ```
    #[inline]
    pub fn clamp_interval(&self, other: &Self) -> Option<Self> {
        self.intersection(other)
    }

    /// Returns the smallest superset interval covering both this interval
    /// and `point`.
    ///
    /// The untouched boundary keeps its inclusion flag. The extended boundary
    /// adopts `included` only when it actually moved; a point equal to an
    /// existing excluded boundary leaves the exclusion in place. Orientation
    /// is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::with_bounds(0, true, 5, false).unwrap();
    ///
    /// let grown = iv.expand_to(8, true);
    /// assert_eq!(grown.end(), 8);
    /// assert!(grown.is_end_included());
    ///
    /// // Already inside: unchanged.
    /// assert_eq!(iv.expand_to(3, false), iv);
    ///
    /// // Equal to the excluded boundary: exclusion is kept.
    /// assert_eq!(iv.expand_to(5, true), iv);
    /// ```
    pub fn expand_to(&self, point: P, included: bool) -> Self {
        let reversed = self.is_reversed();
        let (lo, lo_inc, hi, hi_inc) = self.ordered();
        let expanded = if point < lo {
            Self {
                start: point,
                start_included: included,
                end: hi,
                end_included: hi_inc,
                _size: PhantomData,
            }
        } else if point > hi {
            Self {
                start: lo,
                start_included: lo_inc,
                end: point,
                end_included: included,
                _size: PhantomData,
            }
        } else {
            Self {
                start: lo,
                start_included: lo_inc,
                end: hi,
                end_included: hi_inc,
                _size: PhantomData,
            }
        };
        if reversed { expanded.reverse() } else { expanded }
    }

    /// Shifts both boundaries by `delta`, preserving inclusion flags and
    /// orientation.
    ///
    /// Fails with [`IntervalError::OutOfRange`] when either shifted boundary
    /// is not representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// # use gamut_interval::error::IntervalError;
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.translate(5), Ok(Interval::new(5, 15)));
    /// assert_eq!(Interval::new(0, i32::MAX).translate(1), Err(IntervalError::OutOfRange));
    /// ```
    pub fn translate(&self, delta: S) -> Result<Self, IntervalError> {
        let start = self
            .start
            .checked_forward(delta)
            .ok_or(IntervalError::OutOfRange)?;
        let end = self
            .end
            .checked_forward(delta)
            .ok_or(IntervalError::OutOfRange)?;
        Self::with_bounds(start, self.start_included, end, self.end_included)
    }

    /// Swaps the boundaries together with their inclusion flags.
    ///
    /// Applying `reverse` twice yields the original interval, including its
    /// original orientation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::with_bounds(0, true, 10, false).unwrap();
    /// let rev = iv.reverse();
    /// assert_eq!(rev.start(), 10);
    /// assert!(!rev.is_start_included());
    /// assert!(rev.is_reversed());
    /// assert_eq!(rev.reverse(), iv);
    /// ```
    #[inline]
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            start_included: self.end_included,
            end: self.start,
            end_included: self.start_included,
            _size: PhantomData,
        }
    }

    /// Splits the interval into the piece adjacent to `start` and the piece
    /// adjacent to `end`, cut at `at`.
    ///
    /// `option` decides which side keeps the split point. A piece that would
    /// degenerate into an excluded single point (splitting at a boundary the
    /// option does not assign to that side) is omitted as `None`.
    ///
    /// Fails with [`IntervalError::SplitOutOfBounds`] when `at` is not
    /// contained in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::{Interval, SplitOption};
    /// let iv = Interval::new(0, 10);
    /// let (before, after) = iv.split(5, SplitOption::Both).unwrap();
    /// assert_eq!(before, Some(Interval::new(0, 5)));
    /// assert_eq!(after, Some(Interval::new(5, 10)));
    ///
    /// // Splitting at the start under `Right` leaves no "before" piece.
    /// let (before, after) = iv.split(0, SplitOption::Right).unwrap();
    /// assert_eq!(before, None);
    /// assert_eq!(after, Some(iv));
    /// ```
    pub fn split(
        &self,
        at: P,
        option: SplitOption,
    ) -> Result<(Option<Self>, Option<Self>), IntervalError> {
        if !self.contains(at) {
            return Err(IntervalError::SplitOutOfBounds);
        }
        let keep_left = matches!(option, SplitOption::Both | SplitOption::Left);
        let keep_right = matches!(option, SplitOption::Both | SplitOption::Right);
        let (lo, lo_inc, hi, hi_inc) = self.ordered();
        if self.is_reversed() {
            let before = Self::piece(at, keep_left, hi, hi_inc).map(|p| p.reverse());
            let after = Self::piece(lo, lo_inc, at, keep_right).map(|p| p.reverse());
            Ok((before, after))
        } else {
            let before = Self::piece(lo, lo_inc, at, keep_left);
            let after = Self::piece(at, keep_right, hi, hi_inc);
            Ok((before, after))
        }
    }

    /// Removes the overlap with `other` from this interval.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 intervals: `other` consumes this interval entirely.
    /// * 1 interval: `other` clips one side, or does not overlap at all (the
    ///   original is returned unchanged).
    /// * 2 intervals: `other` lies strictly inside with room on both sides.
    ///
    /// At each cut point the resulting inclusion flag is the logical negation
    /// of `other`'s flag for that boundary. Remainder pieces are returned
    /// forward-oriented, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let base = Interval::new(0, 10);
    /// let hole = Interval::with_bounds(3, false, 7, false).unwrap();
    ///
    /// let rest = base.subtract(&hole);
    /// assert_eq!(rest.len(), 2);
    /// assert_eq!(rest[0], Interval::new(0, 3)); // Inclusive at 3
    /// assert_eq!(rest[1], Interval::new(7, 10)); // Inclusive at 7
    /// ```
    pub fn subtract(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec::smallvec![*self];
        }
        let (a_lo, a_lo_inc, a_hi, a_hi_inc) = self.ordered();
        let (b_lo, b_lo_inc, b_hi, b_hi_inc) = other.ordered();
        let mut remainder = SmallVec::new();
        if let Some(left) = Self::piece(a_lo, a_lo_inc, b_lo, !b_lo_inc) {
            remainder.push(left);
        }
        if let Some(right) = Self::piece(b_hi, !b_hi_inc, a_hi, a_hi_inc) {
            remainder.push(right);
        }
        remainder
    }

    /// Creates an iterator stepping across the interval at a fixed step size.
    ///
    /// The first value is `start` when included, otherwise `start + step`.
    /// A zero step yields exactly one value. The step's sign is taken as
    /// given: stepping a reversed interval requires a step pointing from
    /// `start` toward `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::new(0, 5);
    /// let points: Vec<_> = iv.points(1).collect();
    /// assert_eq!(points, vec![0, 1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn points(&self, step: S) -> StepIter<P, S> {
        StepIter::new(*self, step)
    }
}

impl<P, S> Interval<P, S>
where
    P: PointOps<S> + FloatSample,
    S: SizeOps,
{
    /// Samples both boundaries as `f64`, in storage order.
    fn samples(&self) -> Result<(f64, f64), IntervalError> {
        let start = self
            .start
            .to_sample()
            .ok_or(IntervalError::ConversionUnsupported)?;
        let end = self
            .end
            .to_sample()
            .ok_or(IntervalError::ConversionUnsupported)?;
        Ok((start, end))
    }

    /// Linearly interpolates a point at the given percentage of the interval.
    ///
    /// `0.0` maps to `start`, `1.0` to `end`; percentages outside `[0, 1]`
    /// extrapolate along the same line. A single-point interval returns its
    /// point for any percentage. The math runs in `f64` and converts back,
    /// truncating toward zero for integer point types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.value_at(0.5), Ok(5));
    /// assert_eq!(iv.value_at(1.5), Ok(15)); // Extrapolates
    /// assert_eq!(Interval::new(4, 4).value_at(9.0), Ok(4));
    /// ```
    pub fn value_at(&self, percentage: f64) -> Result<P, IntervalError> {
        let (start, end) = self.samples()?;
        let value = start + percentage * (end - start);
        P::from_sample(value).ok_or(IntervalError::OutOfRange)
    }

    /// Returns where `value` lies within the interval, as a fraction of its
    /// signed extent. The inverse of [`Interval::value_at`].
    ///
    /// On a zero-size interval the numeric sentinel convention applies as
    /// part of the contract: the result is `1.0` when `value == start` and
    /// `-1.0` otherwise. Values outside a non-degenerate interval yield
    /// plain extrapolated percentages (negative, or greater than one), never
    /// an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.percentage_of(5), Ok(0.5));
    /// assert_eq!(iv.percentage_of(20), Ok(2.0));
    ///
    /// let point = Interval::new(5, 5);
    /// assert_eq!(point.percentage_of(5), Ok(1.0));
    /// assert_eq!(point.percentage_of(4), Ok(-1.0));
    /// ```
    pub fn percentage_of(&self, value: P) -> Result<f64, IntervalError> {
        let (start, end) = self.samples()?;
        let sample = value
            .to_sample()
            .ok_or(IntervalError::ConversionUnsupported)?;
        let span = end - start;
        if span == 0.0 {
            Ok(if sample == start { 1.0 } else { -1.0 })
        } else {
            Ok((sample - start) / span)
        }
    }

    /// Returns the midpoint of the interval, defined even when reversed or
    /// degenerate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// assert_eq!(Interval::new(0, 10).center(), Ok(5));
    /// assert_eq!(Interval::new(10, 0).center(), Ok(5));
    /// assert_eq!(Interval::new(3, 3).center(), Ok(3));
    /// ```
    #[inline]
    pub fn center(&self) -> Result<P, IntervalError> {
        self.value_at(0.5)
    }

    /// Maps `value` from this interval onto `target`, composing
    /// [`Interval::percentage_of`] with [`Interval::value_at`].
    ///
    /// Out-of-range percentages (extrapolations and the zero-size sentinels)
    /// propagate through unchanged. The target interval may use entirely
    /// different point and size types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let source = Interval::new(0, 10);
    /// let target = Interval::new(0.0, 100.0);
    /// assert_eq!(source.map_to(5, &target), Ok(50.0));
    /// assert_eq!(source.map_to(15, &target), Ok(150.0));
    /// ```
    pub fn map_to<Q, R>(&self, value: P, target: &Interval<Q, R>) -> Result<Q, IntervalError>
    where
        Q: PointOps<R> + FloatSample,
        R: SizeOps,
    {
        let percentage = self.percentage_of(value)?;
        target.value_at(percentage)
    }

    /// Scales the interval's size by `factor`, anchored at the point located
    /// at `around_percentage` within the interval.
    ///
    /// An anchor percentage of `0.0` keeps `start` fixed, `1.0` keeps `end`
    /// fixed, and `0.5` grows or shrinks symmetrically around the center.
    /// Inclusion flags and orientation are preserved.
    ///
    /// Fails with [`IntervalError::OutOfRange`] when a scaled boundary falls
    /// outside the representable range of `P`, and with
    /// [`IntervalError::InconsistentBounds`] when a zero factor collapses an
    /// interval whose boundary flags differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// # use gamut_interval::error::IntervalError;
    /// let iv = Interval::new(0, 10);
    /// assert_eq!(iv.scale(2.0, 0.5), Ok(Interval::new(-5, 15)));
    /// assert_eq!(iv.scale(2.0, 0.0), Ok(Interval::new(0, 20)));
    /// assert_eq!(iv.scale(0.5, 1.0), Ok(Interval::new(5, 10)));
    ///
    /// let extremes = Interval::new(i64::MIN, i64::MAX);
    /// assert_eq!(extremes.scale(2.0, 0.5), Err(IntervalError::OutOfRange));
    /// ```
    pub fn scale(&self, factor: f64, around_percentage: f64) -> Result<Self, IntervalError> {
        let (new_start, new_end) = self.scaled_samples(factor, around_percentage)?;
        if !new_start.is_finite() || !new_end.is_finite() {
            return Err(IntervalError::OutOfRange);
        }
        let start = P::from_sample(new_start).ok_or(IntervalError::OutOfRange)?;
        let end = P::from_sample(new_end).ok_or(IntervalError::OutOfRange)?;
        Self::with_bounds(start, self.start_included, end, self.end_included)
    }

    /// Scales like [`Interval::scale`], but clamps the result into `bound`.
    ///
    /// Boundary samples are clamped in `f64` space before converting back,
    /// so results that would overflow the point type are pulled into range
    /// instead of failing. When the scaled interval would cover `bound`
    /// entirely, `bound` is returned unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::new(0, 10);
    /// let bound = Interval::new(-2, 12);
    ///
    /// // [0, 20] clamped into [-2, 12].
    /// assert_eq!(iv.scale_within(2.0, 0.0, &bound), Ok(Interval::new(0, 12)));
    ///
    /// // [-5, 15] covers the bound entirely.
    /// assert_eq!(iv.scale_within(2.0, 0.5, &bound), Ok(bound));
    /// ```
    pub fn scale_within(
        &self,
        factor: f64,
        around_percentage: f64,
        bound: &Self,
    ) -> Result<Self, IntervalError> {
        let (new_start, new_end) = self.scaled_samples(factor, around_percentage)?;
        let (bound_start, bound_end) = bound.samples()?;
        let (bound_lo, bound_hi) = if bound_start <= bound_end {
            (bound_start, bound_end)
        } else {
            (bound_end, bound_start)
        };
        let (scaled_lo, scaled_hi) = if new_start <= new_end {
            (new_start, new_end)
        } else {
            (new_end, new_start)
        };
        if scaled_lo <= bound_lo && scaled_hi >= bound_hi {
            return Ok(*bound);
        }
        let start = P::from_sample(new_start.clamp(bound_lo, bound_hi))
            .ok_or(IntervalError::OutOfRange)?;
        let end =
            P::from_sample(new_end.clamp(bound_lo, bound_hi)).ok_or(IntervalError::OutOfRange)?;
        Self::with_bounds(start, self.start_included, end, self.end_included)
    }

    /// The scaled boundary samples, anchored at `around_percentage`.
    fn scaled_samples(
        &self,
        factor: f64,
        around_percentage: f64,
    ) -> Result<(f64, f64), IntervalError> {
        let (start, end) = self.samples()?;
        let span = end - start;
        let anchor = start + around_percentage * span;
        let scaled_span = span * factor;
        let new_start = anchor - around_percentage * scaled_span;
        let new_end = new_start + scaled_span;
        Ok((new_start, new_end))
    }
}

impl<P, S> Interval<P, S>
where
    P: PointOps<S> + FloatSample,
    S: SizeOps + FloatSample,
{
    /// Creates an iterator whose steps are aligned to a grid anchored at
    /// `anchor`, independent of where the interval itself starts.
    ///
    /// The first value is `start` pushed forward to the nearest position
    /// congruent to `anchor` modulo the step magnitude (computed in `f64`
    /// and converted back). If that position coincides with an excluded
    /// `start`, it is pushed one further step.
    ///
    /// Grid alignment always moves toward greater values, so anchoring
    /// assumes a forward-oriented interval; on a reversed interval an
    /// off-grid start is pushed out of the interval and the iterator is
    /// empty.
    ///
    /// Fails with [`IntervalError::ConversionUnsupported`] when start, step,
    /// or anchor cannot be sampled as `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gamut_interval::interval::Interval;
    /// let iv = Interval::new(2, 10);
    /// let points: Vec<_> = iv.points_from_anchor(3, 0).unwrap().collect();
    /// assert_eq!(points, vec![3, 6, 9]);
    /// ```
    #[inline]
    pub fn points_from_anchor(&self, step: S, anchor: P) -> Result<StepIter<P, S>, IntervalError> {
        StepIter::anchored(*self, step, anchor)
    }
}

impl<P, S> std::fmt::Debug for Interval<P, S>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("start_included", &self.start_included)
            .field("end", &self.end)
            .field("end_included", &self.end_included)
            .finish()
    }
}

impl<P, S> std::fmt::Display for Interval<P, S>
where
    P: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.start_included { '[' } else { '(' },
            self.start,
            self.end,
            if self.end_included { ']' } else { ')' },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_open(start: i32, end: i32) -> Interval<i32> {
        Interval::with_bounds(start, true, end, false).unwrap()
    }

    fn open(start: i32, end: i32) -> Interval<i32> {
        Interval::with_bounds(start, false, end, false).unwrap()
    }

    #[test]
    fn test_construction() {
        let iv = Interval::new(10, 20);
        assert_eq!(iv.start(), 10);
        assert_eq!(iv.end(), 20);
        assert!(iv.is_start_included());
        assert!(iv.is_end_included());
    }

    #[test]
    fn test_with_bounds_rejects_mismatched_point_flags() {
        assert_eq!(
            Interval::with_bounds(3, true, 3, false),
            Err(IntervalError::InconsistentBounds)
        );
        assert_eq!(
            Interval::with_bounds(3, false, 3, true),
            Err(IntervalError::InconsistentBounds)
        );
        // Matching flags are fine either way.
        assert!(Interval::with_bounds(3, true, 3, true).is_ok());
        assert!(Interval::with_bounds(3, false, 3, false).is_ok());
    }

    #[test]
    fn test_spanning() {
        let iv: Interval<i32> = Interval::spanning([4, -2, 9, 0]).unwrap();
        assert_eq!(iv.start(), -2);
        assert_eq!(iv.end(), 9);
        assert!(iv.is_start_included() && iv.is_end_included());

        let single: Interval<i32> = Interval::spanning([7]).unwrap();
        assert_eq!(single, Interval::new(7, 7));

        assert_eq!(Interval::<i32>::spanning([]), None);
    }

    #[test]
    fn test_is_reversed() {
        assert!(!Interval::new(0, 10).is_reversed());
        assert!(Interval::new(10, 0).is_reversed());
        assert!(!Interval::new(5, 5).is_reversed());
    }

    #[test]
    fn test_size_is_order_independent() {
        assert_eq!(Interval::new(2, 10).size(), 8);
        assert_eq!(Interval::new(10, 2).size(), 8);
        assert_eq!(Interval::new(-4, 4).size(), 8);
        assert_eq!(Interval::new(5, 5).size(), 0);
    }

    #[test]
    fn test_contains_boundary_flags() {
        let iv = half_open(0, 5);
        assert!(iv.contains(0));
        assert!(iv.contains(4));
        assert!(!iv.contains(5));
        assert!(!iv.contains(-1));
        assert!(!iv.contains(6));
    }

    #[test]
    fn test_contains_reversed() {
        let iv = Interval::new(10, 0);
        assert!(iv.contains(0));
        assert!(iv.contains(5));
        assert!(iv.contains(10));
        assert!(!iv.contains(11));
    }

    #[test]
    fn test_contains_empty_point() {
        let empty = open(5, 5);
        assert!(!empty.contains(5));
        let point = Interval::new(5, 5);
        assert!(point.contains(5));
    }

    #[test]
    fn test_intersects() {
        let a = Interval::new(0, 10);
        assert!(a.intersects(&Interval::new(5, 15)));
        assert!(a.intersects(&Interval::new(10, 20))); // Shared included point
        assert!(!a.intersects(&Interval::new(11, 20)));

        // Adjacent with one side excluding the shared boundary.
        let b = half_open(0, 10);
        assert!(!b.intersects(&Interval::new(10, 20)));
        assert!(!Interval::new(10, 20).intersects(&b));

        // Reversal is irrelevant.
        assert!(Interval::new(10, 0).intersects(&Interval::new(5, 15)));
    }

    #[test]
    fn test_intersects_empty_interval() {
        let base = Interval::new(0, 10);
        let empty = open(5, 5);
        // An empty interval has no point to share, even inside `base`.
        assert!(!base.intersects(&empty));
        assert!(!empty.intersects(&base));
        assert!(!empty.intersects(&empty));
        // Agreement with `intersection`.
        assert_eq!(base.intersection(&empty), None);
    }

    #[test]
    fn test_clamp_value() {
        let iv = Interval::new(0, 10);
        assert_eq!(iv.clamp_value(-5), 0);
        assert_eq!(iv.clamp_value(3), 3);
        assert_eq!(iv.clamp_value(99), 10);

        let rev = Interval::new(10, 0);
        assert_eq!(rev.clamp_value(-5), 0);
        assert_eq!(rev.clamp_value(99), 10);
    }

    #[test]
    fn test_intersection() {
        let a = Interval::new(0, 10);
        assert_eq!(
            a.intersection(&Interval::new(5, 15)),
            Some(Interval::new(5, 10))
        );
        assert_eq!(a.intersection(&Interval::new(2, 8)), Some(Interval::new(2, 8)));
        assert_eq!(a.intersection(&Interval::new(12, 20)), None);

        // Shared boundary: flags are ANDed.
        let touching = a.intersection(&Interval::new(10, 20)).unwrap();
        assert_eq!(touching, Interval::new(10, 10));

        let excluded = half_open(0, 10).intersection(&Interval::new(10, 20));
        assert_eq!(excluded, None);
    }

    #[test]
    fn test_intersection_flag_and_at_shared_edges() {
        let a = half_open(0, 10);
        let b = Interval::with_bounds(0, false, 10, true).unwrap();
        let shared = a.intersection(&b).unwrap();
        assert!(!shared.is_start_included());
        assert!(!shared.is_end_included());
    }

    #[test]
    fn test_intersection_is_commutative() {
        let cases = [
            (Interval::new(0, 10), Interval::new(5, 15)),
            (half_open(0, 10), Interval::new(10, 20)),
            (open(2, 8), Interval::new(0, 5)),
            (Interval::new(10, 0), Interval::new(3, 12)),
        ];
        for (a, b) in cases {
            assert_eq!(a.intersection(&b), b.intersection(&a));
        }
    }

    #[test]
    fn test_clamp_interval() {
        let bounds = Interval::new(0, 10);
        let wide = Interval::with_bounds(-5, false, 7, false).unwrap();
        let clamped = bounds.clamp_interval(&wide).unwrap();
        assert_eq!(clamped.start(), 0);
        assert!(clamped.is_start_included());
        assert_eq!(clamped.end(), 7);
        assert!(!clamped.is_end_included());

        assert_eq!(bounds.clamp_interval(&Interval::new(20, 30)), None);
    }

    #[test]
    fn test_expand_to() {
        let iv = half_open(0, 5);

        let lower = iv.expand_to(-3, false);
        assert_eq!(lower.start(), -3);
        assert!(!lower.is_start_included());
        assert_eq!(lower.end(), 5);
        assert!(!lower.is_end_included()); // Untouched side preserved

        let upper = iv.expand_to(8, true);
        assert_eq!(upper.end(), 8);
        assert!(upper.is_end_included());
        assert!(upper.is_start_included());

        // Strictly inside: unchanged.
        assert_eq!(iv.expand_to(3, false), iv);

        // Equal to the excluded end boundary: exclusion kept, not overwritten.
        assert_eq!(iv.expand_to(5, true), iv);
    }

    #[test]
    fn test_expand_to_preserves_orientation() {
        let rev = Interval::new(10, 0);
        let grown = rev.expand_to(15, true);
        assert!(grown.is_reversed());
        assert_eq!(grown.start(), 15);
        assert_eq!(grown.end(), 0);
    }

    #[test]
    fn test_translate() {
        let iv = half_open(0, 10);
        let moved = iv.translate(5).unwrap();
        assert_eq!(moved.start(), 5);
        assert_eq!(moved.end(), 15);
        assert!(moved.is_start_included());
        assert!(!moved.is_end_included());

        let rev = Interval::new(10, 0).translate(-3).unwrap();
        assert!(rev.is_reversed());
        assert_eq!(rev.start(), 7);
        assert_eq!(rev.end(), -3);
    }

    #[test]
    fn test_translate_overflow() {
        assert_eq!(
            Interval::new(0, i32::MAX).translate(1),
            Err(IntervalError::OutOfRange)
        );
        assert_eq!(
            Interval::new(i32::MIN, 0).translate(-1),
            Err(IntervalError::OutOfRange)
        );
    }

    #[test]
    fn test_reverse_roundtrip() {
        let cases = [
            Interval::new(0, 10),
            half_open(0, 10),
            Interval::new(10, 0),
            Interval::new(5, 5),
            open(2, 8),
        ];
        for iv in cases {
            let rev = iv.reverse();
            assert_eq!(rev.reverse(), iv);
            if iv.size() > 0 {
                assert_ne!(rev.is_reversed(), iv.is_reversed());
            }
        }
    }

    #[test]
    fn test_reverse_swaps_flags() {
        let iv = half_open(0, 10);
        let rev = iv.reverse();
        assert_eq!(rev.start(), 10);
        assert!(!rev.is_start_included());
        assert_eq!(rev.end(), 0);
        assert!(rev.is_end_included());
    }

    #[test]
    fn test_split_both() {
        let iv = Interval::new(0, 10);
        let (before, after) = iv.split(5, SplitOption::Both).unwrap();
        let before = before.unwrap();
        let after = after.unwrap();
        assert_eq!(before, Interval::new(0, 5));
        assert!(before.is_end_included());
        assert_eq!(after, Interval::new(5, 10));
        assert!(after.is_start_included());
    }

    #[test]
    fn test_split_left_right_none() {
        let iv = Interval::new(0, 10);

        let (before, after) = iv.split(5, SplitOption::Left).unwrap();
        assert!(before.unwrap().is_end_included());
        assert!(!after.unwrap().is_start_included());

        let (before, after) = iv.split(5, SplitOption::Right).unwrap();
        assert!(!before.unwrap().is_end_included());
        assert!(after.unwrap().is_start_included());

        let (before, after) = iv.split(5, SplitOption::None).unwrap();
        assert!(!before.unwrap().is_end_included());
        assert!(!after.unwrap().is_start_included());
    }

    #[test]
    fn test_split_at_boundaries() {
        let iv = Interval::new(0, 10);

        // At the start under `Right`: the before piece vanishes.
        let (before, after) = iv.split(0, SplitOption::Right).unwrap();
        assert_eq!(before, None);
        assert_eq!(after, Some(iv));

        // At the start under `Both`: a single-point before piece survives.
        let (before, _) = iv.split(0, SplitOption::Both).unwrap();
        assert_eq!(before, Some(Interval::new(0, 0)));

        // At the end under `Left`: the after piece vanishes.
        let (before, after) = iv.split(10, SplitOption::Left).unwrap();
        assert_eq!(before, Some(iv));
        assert_eq!(after, None);
    }

    #[test]
    fn test_split_outside_fails() {
        let iv = Interval::new(0, 10);
        assert_eq!(
            iv.split(11, SplitOption::Both),
            Err(IntervalError::SplitOutOfBounds)
        );
        // An excluded boundary is not a valid split point either.
        assert_eq!(
            half_open(0, 10).split(10, SplitOption::Both),
            Err(IntervalError::SplitOutOfBounds)
        );
    }

    #[test]
    fn test_split_reversed() {
        let iv = Interval::new(10, 0);
        let (before, after) = iv.split(5, SplitOption::Both).unwrap();
        let before = before.unwrap();
        let after = after.unwrap();
        // The before piece stays adjacent to the stored start.
        assert_eq!(before.start(), 10);
        assert_eq!(before.end(), 5);
        assert!(before.is_reversed());
        assert_eq!(after.start(), 5);
        assert_eq!(after.end(), 0);
    }

    #[test]
    fn test_subtract_hole() {
        let base = Interval::new(0, 10);
        let rest = base.subtract(&open(3, 7));
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0], Interval::new(0, 3));
        assert!(rest[0].is_end_included()); // Negation of the hole's exclusion
        assert_eq!(rest[1], Interval::new(7, 10));
        assert!(rest[1].is_start_included());
    }

    #[test]
    fn test_subtract_no_overlap_returns_original() {
        let base = Interval::new(0, 10);
        let rest = base.subtract(&Interval::new(20, 30));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], base);
    }

    #[test]
    fn test_subtract_consumed() {
        let base = open(2, 8);
        let rest = base.subtract(&Interval::new(0, 10));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_subtract_clip_one_side() {
        let base = Interval::new(0, 10);

        let rest = base.subtract(&Interval::new(5, 15));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].start(), 0);
        assert_eq!(rest[0].end(), 5);
        assert!(!rest[0].is_end_included()); // 5 belongs to the subtrahend

        let rest = base.subtract(&Interval::new(-5, 5));
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].start(), 5);
        assert!(!rest[0].is_start_included());
        assert_eq!(rest[0].end(), 10);
    }

    #[test]
    fn test_subtract_empty_interval_returns_original() {
        // Removing nothing leaves the original as a single untouched piece.
        let base = Interval::new(0, 10);
        let empty = open(5, 5);
        let rest = base.subtract(&empty);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0], base);
    }

    #[test]
    fn test_subtract_leaves_boundary_points() {
        // Removing the open interior leaves exactly the two endpoints.
        let base = Interval::new(0, 10);
        let rest = base.subtract(&open(0, 10));
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0], Interval::new(0, 0));
        assert_eq!(rest[1], Interval::new(10, 10));
    }

    #[test]
    fn test_subtract_reunion_covers_original() {
        // The pieces plus the overlap cover every point of the original.
        let base = Interval::new(0, 10);
        let hole = Interval::new(3, 7);
        let rest = base.subtract(&hole);
        for value in 0..=10 {
            let in_rest = rest.iter().any(|piece| piece.contains(value));
            let in_hole = hole.contains(value);
            assert_eq!(in_rest || in_hole, base.contains(value));
            assert!(!(in_rest && in_hole));
        }
    }

    #[test]
    fn test_value_at() {
        let iv = Interval::new(0, 10);
        assert_eq!(iv.value_at(0.5), Ok(5));
        assert_eq!(iv.value_at(0.0), Ok(0));
        assert_eq!(iv.value_at(1.0), Ok(10));
        assert_eq!(iv.value_at(2.0), Ok(20));
        assert_eq!(iv.value_at(-0.5), Ok(-5));
    }

    #[test]
    fn test_value_at_reversed_and_degenerate() {
        let rev = Interval::new(10, 0);
        assert_eq!(rev.value_at(0.25), Ok(7)); // 10 + 0.25 * (0 - 10) = 7.5

        let point = Interval::new(4, 4);
        assert_eq!(point.value_at(0.0), Ok(4));
        assert_eq!(point.value_at(100.0), Ok(4));
    }

    #[test]
    fn test_percentage_of() {
        let iv = Interval::new(0.0, 10.0);
        assert_eq!(iv.percentage_of(5.0), Ok(0.5));
        assert_eq!(iv.percentage_of(0.0), Ok(0.0));
        assert_eq!(iv.percentage_of(10.0), Ok(1.0));
        assert_eq!(iv.percentage_of(20.0), Ok(2.0));
        assert_eq!(iv.percentage_of(-10.0), Ok(-1.0));
    }

    #[test]
    fn test_percentage_of_zero_size_sentinels() {
        let point = Interval::new(5, 5);
        assert_eq!(point.percentage_of(5), Ok(1.0));
        assert_eq!(point.percentage_of(4), Ok(-1.0));
        assert_eq!(point.percentage_of(6), Ok(-1.0));
    }

    #[test]
    fn test_percentage_value_roundtrip() {
        let iv = Interval::new(-4.0, 12.0);
        for p in [-0.5, 0.0, 0.25, 0.5, 0.75, 1.0, 1.5] {
            let value = iv.value_at(p).unwrap();
            let back = iv.percentage_of(value).unwrap();
            assert!((back - p).abs() < 1e-12, "p = {}, back = {}", p, back);
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(Interval::new(0, 10).center(), Ok(5));
        assert_eq!(Interval::new(10, 0).center(), Ok(5));
        assert_eq!(Interval::new(-10.0, 10.0).center(), Ok(0.0));
        assert_eq!(Interval::new(3, 3).center(), Ok(3));
    }

    #[test]
    fn test_map_to() {
        let source = Interval::new(0, 10);
        let target = Interval::new(0.0, 100.0);
        assert_eq!(source.map_to(5, &target), Ok(50.0));
        assert_eq!(source.map_to(0, &target), Ok(0.0));
        assert_eq!(source.map_to(10, &target), Ok(100.0));
        // Extrapolation propagates through the composition.
        assert_eq!(source.map_to(15, &target), Ok(150.0));
        assert_eq!(source.map_to(-5, &target), Ok(-50.0));
    }

    #[test]
    fn test_map_to_zero_size_sentinel_propagates() {
        let point = Interval::new(5, 5);
        let target = Interval::new(0.0, 100.0);
        assert_eq!(point.map_to(5, &target), Ok(100.0)); // Sentinel 1.0
        assert_eq!(point.map_to(4, &target), Ok(-100.0)); // Sentinel -1.0
    }

    #[test]
    fn test_scale() {
        let iv = Interval::new(0, 10);
        assert_eq!(iv.scale(2.0, 0.5), Ok(Interval::new(-5, 15)));
        assert_eq!(iv.scale(2.0, 0.0), Ok(Interval::new(0, 20)));
        assert_eq!(iv.scale(2.0, 1.0), Ok(Interval::new(-10, 10)));
        assert_eq!(iv.scale(0.5, 0.5), Ok(Interval::new(2, 7))); // 2.5/7.5 truncated
    }

    #[test]
    fn test_scale_preserves_flags_and_orientation() {
        let iv = Interval::with_bounds(10, true, 0, false).unwrap();
        let scaled = iv.scale(2.0, 0.0).unwrap();
        assert_eq!(scaled.start(), 10);
        assert_eq!(scaled.end(), -10);
        assert!(scaled.is_reversed());
        assert!(scaled.is_start_included());
        assert!(!scaled.is_end_included());
    }

    #[test]
    fn test_scale_overflow_at_extremes() {
        let extremes = Interval::new(i64::MIN, i64::MAX);
        assert_eq!(extremes.scale(2.0, 0.5), Err(IntervalError::OutOfRange));
    }

    #[test]
    fn test_scale_zero_factor_with_mismatched_flags() {
        let iv = half_open(0, 10);
        assert_eq!(iv.scale(0.0, 0.0), Err(IntervalError::InconsistentBounds));
        // With matching flags the collapse is a legal single-point interval.
        assert_eq!(Interval::new(0, 10).scale(0.0, 0.0), Ok(Interval::new(0, 0)));
    }

    #[test]
    fn test_scale_within() {
        let iv = Interval::new(0, 10);
        let bound = Interval::new(-2, 12);
        assert_eq!(iv.scale_within(2.0, 0.0, &bound), Ok(Interval::new(0, 12)));
        assert_eq!(iv.scale_within(2.0, 0.5, &bound), Ok(bound));
        // A shrink that stays inside the bound is untouched.
        assert_eq!(iv.scale_within(0.5, 0.0, &bound), Ok(Interval::new(0, 5)));
    }

    #[test]
    fn test_scale_within_caps_overflow() {
        let extremes = Interval::new(i64::MIN, i64::MAX);
        let bound = Interval::new(-1000, 1000);
        // The doubled interval covers any finite bound.
        assert_eq!(extremes.scale_within(2.0, 0.5, &bound), Ok(bound));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Interval::new(0, 10)), "[0, 10]");
        assert_eq!(format!("{}", half_open(0, 10)), "[0, 10)");
        assert_eq!(format!("{}", open(0, 10)), "(0, 10)");
    }

    #[test]
    fn test_debug() {
        let iv = half_open(0, 10);
        assert_eq!(
            format!("{:?}", iv),
            "Interval { start: 0, start_included: true, end: 10, end_included: false }"
        );
    }

    mod tick_time {
        //! A point/size pair with distinct types, in the shape of a
        //! timestamp-and-duration pairing.

        use super::*;
        use gamut_num::constants::Zero;
        use num_traits::{FromPrimitive, ToPrimitive};

        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        struct TickPoint(i64);

        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        struct TickSpan(i64);

        impl PointOps<TickSpan> for TickPoint {
            fn checked_forward(self, delta: TickSpan) -> Option<Self> {
                self.0.checked_add(delta.0).map(TickPoint)
            }

            fn checked_backward(self, delta: TickSpan) -> Option<Self> {
                self.0.checked_sub(delta.0).map(TickPoint)
            }

            fn span_from(self, origin: Self) -> TickSpan {
                TickSpan(self.0.saturating_sub(origin.0))
            }
        }

        impl Zero for TickSpan {
            const ZERO: Self = TickSpan(0);
        }

        impl SizeOps for TickSpan {
            fn checked_diff(self, other: Self) -> Option<Self> {
                self.0.checked_sub(other.0).map(TickSpan)
            }
        }

        impl ToPrimitive for TickPoint {
            fn to_i64(&self) -> Option<i64> {
                Some(self.0)
            }

            fn to_u64(&self) -> Option<u64> {
                self.0.to_u64()
            }
        }

        impl FromPrimitive for TickPoint {
            fn from_i64(n: i64) -> Option<Self> {
                Some(TickPoint(n))
            }

            fn from_u64(n: u64) -> Option<Self> {
                n.to_i64().map(TickPoint)
            }
        }

        #[test]
        fn test_two_parameter_interval() {
            let iv: Interval<TickPoint, TickSpan> =
                Interval::new(TickPoint(100), TickPoint(160));
            assert_eq!(iv.size(), TickSpan(60));
            assert!(iv.contains(TickPoint(100)));
            assert!(!iv.contains(TickPoint(161)));
        }

        #[test]
        fn test_translate_by_span() {
            let iv: Interval<TickPoint, TickSpan> =
                Interval::new(TickPoint(100), TickPoint(160));
            let moved = iv.translate(TickSpan(40)).unwrap();
            assert_eq!(moved.start(), TickPoint(140));
            assert_eq!(moved.end(), TickPoint(200));
        }

        #[test]
        fn test_ratio_math_through_sampling() {
            let iv: Interval<TickPoint, TickSpan> =
                Interval::new(TickPoint(100), TickPoint(200));
            assert_eq!(iv.center(), Ok(TickPoint(150)));
            assert_eq!(iv.value_at(0.25), Ok(TickPoint(125)));
            assert_eq!(iv.percentage_of(TickPoint(150)), Ok(0.5));
        }

        #[test]
        fn test_stepping_with_span_step() {
            let iv: Interval<TickPoint, TickSpan> =
                Interval::new(TickPoint(0), TickPoint(100));
            let points: Vec<_> = iv.points(TickSpan(25)).collect();
            assert_eq!(
                points,
                vec![
                    TickPoint(0),
                    TickPoint(25),
                    TickPoint(50),
                    TickPoint(75),
                    TickPoint(100)
                ]
            );
        }
    }
}
