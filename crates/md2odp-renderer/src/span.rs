//! Grouping of inline runs into paragraph containers.

use md2odp_odf::{Node, Paragraph};

/// Wrap every maximal run of consecutive spans into one paragraph.
///
/// Non-span nodes pass through untouched and keep their relative order.
/// Already-wrapped input is returned unchanged, so the function is
/// idempotent.
#[must_use]
pub fn wrap_spans(nodes: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::with_capacity(nodes.len());
    let mut run: Option<Paragraph> = None;
    for node in nodes {
        if node.is_span() {
            run.get_or_insert_with(Paragraph::new).push(node);
        } else {
            if let Some(para) = run.take() {
                result.push(Node::Paragraph(para));
            }
            result.push(node);
        }
    }
    if let Some(para) = run {
        result.push(Node::Paragraph(para));
    }
    result
}
