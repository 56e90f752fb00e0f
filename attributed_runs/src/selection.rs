// Copyright 2026 the Rich Text Runs Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::SpanRange;

/// Decides whether reads and writes for `range` target the typing attributes
/// or the run list.
///
/// Returns `true` iff `range` is a caret (zero length). This predicate is the
/// single seam every implicit-range entry point dispatches through: platform
/// text frameworks diverge on when typing attributes apply (some report them
/// even with a non-empty selection under certain focus states), so range
/// length is canonicalized as the sole signal.
///
/// ```
/// use attributed_runs::{targets_typing_attributes, SpanRange};
///
/// assert!(targets_typing_attributes(SpanRange::caret(3)));
/// assert!(!targets_typing_attributes(SpanRange::new_unchecked(3, 1)));
/// ```
#[inline]
pub fn targets_typing_attributes(range: SpanRange) -> bool {
    range.is_caret()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_length_matters() {
        assert!(targets_typing_attributes(SpanRange::caret(0)));
        assert!(targets_typing_attributes(SpanRange::caret(usize::MAX)));
        assert!(targets_typing_attributes(SpanRange::new_unchecked(7, 0)));
        assert!(!targets_typing_attributes(SpanRange::new_unchecked(0, 1)));
        assert!(!targets_typing_attributes(SpanRange::new_unchecked(7, 100)));
    }
}
