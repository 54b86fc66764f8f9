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

/// The error type for interval construction and arithmetic.
///
/// All errors are raised synchronously at the offending call. Intervals are
/// immutable, so a failed operation never leaves partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// A single-point interval was constructed with one boundary included and
    /// the identical other boundary excluded.
    InconsistentBounds,
    /// A split point does not lie within the interval being split.
    SplitOutOfBounds,
    /// An operation produced a point outside the representable range of the
    /// point type (e.g., scaling an interval at the type's extremes).
    OutOfRange,
    /// A ratio-based operation required an `f64` sample that the point or
    /// size type could not supply.
    ConversionUnsupported,
}

impl std::fmt::Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InconsistentBounds => write!(
                f,
                "A single-point interval must include either both boundaries or neither"
            ),
            Self::SplitOutOfBounds => {
                write!(f, "The split point does not lie within the interval")
            }
            Self::OutOfRange => write!(
                f,
                "The operation produced a point outside the representable range of the point type"
            ),
            Self::ConversionUnsupported => write!(
                f,
                "The point or size type could not supply a 64-bit float sample for this value"
            ),
        }
    }
}

impl std::error::Error for IntervalError {}
