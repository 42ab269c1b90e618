//! Anchor resolution and slide insertion.

use md2odp_odf::{DocumentError, Node, OdpDocument};
use tracing::warn;

/// Resolve a user-supplied anchor against the current slide count.
///
/// Non-negative anchors are absolute insertion indices. Negative anchors
/// count from the end of the slide stack: `-1` appends after the last
/// slide, `-2` inserts before it, and so on. A result outside
/// `0..=slide_count` clamps to the nearest bound with a warning.
#[must_use]
pub fn resolve_anchor(slide_count: usize, anchor: i64) -> usize {
    let count = i64::try_from(slide_count).unwrap_or(i64::MAX);
    let resolved = if anchor < 0 {
        count.saturating_add(anchor).saturating_add(1)
    } else {
        anchor
    };
    if resolved < 0 {
        warn!(anchor, "anchor resolves before the first slide, prepending");
        return 0;
    }
    let index = usize::try_from(resolved).unwrap_or(usize::MAX);
    if index > slide_count {
        warn!(
            anchor,
            slide_count, "anchor resolves past the last slide, appending"
        );
        return slide_count;
    }
    index
}

/// Insert rendered top-level nodes at the resolved anchor, contiguously
/// and in order. Returns the index used.
pub fn insert_at_anchor(
    document: &mut OdpDocument,
    anchor: i64,
    nodes: Vec<Node>,
) -> Result<usize, DocumentError> {
    let index = resolve_anchor(document.slide_count(), anchor);
    document.insert_nodes(index, nodes)?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_anchor_appends_at_the_end() {
        assert_eq!(resolve_anchor(4, -1), 4);
        assert_eq!(resolve_anchor(0, -1), 0);
    }

    #[test]
    fn zero_prepends() {
        assert_eq!(resolve_anchor(4, 0), 0);
    }

    #[test]
    fn negative_anchors_count_from_the_end() {
        assert_eq!(resolve_anchor(4, -2), 3);
        assert_eq!(resolve_anchor(4, -5), 0);
    }

    #[test]
    fn out_of_range_anchors_clamp() {
        assert_eq!(resolve_anchor(4, 100), 4);
        assert_eq!(resolve_anchor(4, -100), 0);
        assert_eq!(resolve_anchor(4, i64::MIN), 0);
        assert_eq!(resolve_anchor(4, i64::MAX), 4);
    }

    #[test]
    fn positive_anchors_are_absolute() {
        assert_eq!(resolve_anchor(4, 2), 2);
        assert_eq!(resolve_anchor(4, 4), 4);
    }
}
