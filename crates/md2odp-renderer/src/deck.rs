//! Slide-deck assembly.

use md2odp_odf::{FrameRole, Node, TextFrame};

use crate::fragment::Fragment;
use crate::span::wrap_spans;

/// Geometry of a synthesized outline frame.
const OUTLINE_SIZE: (&str, &str) = ("22cm", "12cm");
const OUTLINE_POSITION: (&str, &str) = ("2cm", "5cm");

/// Whether the trailing slide is still accepting body content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlideCursor {
    Closed,
    Open,
}

/// Accumulates rendered fragments into the final top-level node sequence.
///
/// A fragment leading with a slide always starts a new slide boundary and
/// leaves that slide open. Content absorbed while a slide is open is
/// grouped into paragraphs and redirected into the open slide's outline
/// frame instead of becoming a top-level sibling; the frame is synthesized
/// with a fixed default geometry the first time it is needed. Only the
/// trailing slide ever receives redirected content.
pub struct DeckBuilder {
    nodes: Vec<Node>,
    cursor: SlideCursor,
    outline_style: String,
}

impl DeckBuilder {
    /// Create an empty deck. `outline_style` is the presentation style
    /// given to synthesized outline frames.
    #[must_use]
    pub fn new(outline_style: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            cursor: SlideCursor::Closed,
            outline_style: outline_style.into(),
        }
    }

    /// Absorb one rendered fragment.
    pub fn absorb(&mut self, fragment: Fragment) {
        if fragment.is_empty() {
            return;
        }
        let nodes = fragment.into_nodes();
        if self.cursor == SlideCursor::Open && !nodes[0].is_slide() {
            self.redirect(nodes);
            return;
        }
        self.nodes.extend(nodes);
        self.cursor = if self.nodes.last().is_some_and(Node::is_slide) {
            SlideCursor::Open
        } else {
            SlideCursor::Closed
        };
    }

    /// Route content into the open slide's outline frame.
    fn redirect(&mut self, nodes: Vec<Node>) {
        let wrapped = wrap_spans(nodes);
        // The cursor is only open when the trailing node is a slide
        match self.nodes.last_mut() {
            Some(Node::Slide(slide)) => {
                if let Some(frame) = slide.outline_frame_mut() {
                    frame.append(wrapped);
                } else {
                    let mut frame = TextFrame::new(
                        FrameRole::Outline,
                        Some(&self.outline_style),
                        OUTLINE_SIZE,
                        OUTLINE_POSITION,
                    );
                    frame.append(wrapped);
                    slide.push_frame(frame);
                }
            }
            _ => self.nodes.extend(wrapped),
        }
    }

    /// Finish, yielding the top-level nodes in document order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
