//! Typed content model for presentation documents.
//!
//! Nodes map one-to-one onto the ODF elements the converter emits
//! (`draw:page`, `draw:frame`, `text:p`, `text:span`, …). They are built
//! once per render rule and only grow through the append operations;
//! nothing is removed or reordered after construction.

/// A presentation content node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A top-level slide (`draw:page`).
    Slide(Slide),
    /// A positioned text frame on a slide (`draw:frame`).
    TextFrame(TextFrame),
    /// A block paragraph (`text:p`).
    Paragraph(Paragraph),
    /// An inline text run (`text:span`).
    Span(Span),
    /// An ordered or unordered list (`text:list`).
    List(List),
    /// A single list entry (`text:list-item`).
    ListItem(ListItem),
    /// An explicit line break (`text:line-break`).
    LineBreak,
    /// A hyperlink (`text:a`).
    Link(Link),
}

impl Node {
    /// Whether this node is a slide.
    #[must_use]
    pub fn is_slide(&self) -> bool {
        matches!(self, Node::Slide(_))
    }

    /// Whether this node is an inline span.
    #[must_use]
    pub fn is_span(&self) -> bool {
        matches!(self, Node::Span(_))
    }

    /// Recursively collected text content. Line breaks contribute `\n`.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Slide(slide) => {
                for frame in &slide.frames {
                    for child in &frame.content {
                        child.collect_text(out);
                    }
                }
            }
            Node::TextFrame(frame) => {
                for child in &frame.content {
                    child.collect_text(out);
                }
            }
            Node::Paragraph(para) => {
                for child in &para.children {
                    child.collect_text(out);
                }
            }
            Node::Span(span) => {
                out.push_str(&span.text);
                for child in &span.children {
                    child.collect_text(out);
                }
            }
            Node::List(list) => {
                for item in &list.items {
                    item.collect_text(out);
                }
            }
            Node::ListItem(item) => {
                for child in &item.content {
                    child.collect_text(out);
                }
            }
            Node::LineBreak => out.push('\n'),
            Node::Link(link) => out.push_str(&link.text),
        }
    }
}

/// The presentation role a frame carries (`presentation:class`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRole {
    /// Slide title region.
    Title,
    /// Slide body/outline region.
    Outline,
}

impl FrameRole {
    /// The ODF `presentation:class` attribute value.
    #[must_use]
    pub fn as_odf(self) -> &'static str {
        match self {
            FrameRole::Title => "title",
            FrameRole::Outline => "outline",
        }
    }
}

/// A slide with its master page, layout, and child frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Display name (`draw:name`).
    pub name: String,
    /// Master page reference (`draw:master-page-name`).
    pub master_page: String,
    /// Presentation page layout reference.
    pub layout: String,
    /// Child frames in z-order.
    pub frames: Vec<TextFrame>,
}

impl Slide {
    /// Create a slide with no frames.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        master_page: impl Into<String>,
        layout: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            master_page: master_page.into(),
            layout: layout.into(),
            frames: Vec::new(),
        }
    }

    /// Append a frame.
    pub fn push_frame(&mut self, frame: TextFrame) {
        self.frames.push(frame);
    }

    /// The slide's outline frame, if it has one.
    pub fn outline_frame_mut(&mut self) -> Option<&mut TextFrame> {
        self.frames
            .iter_mut()
            .find(|frame| frame.role == FrameRole::Outline)
    }
}

/// A positioned text frame wrapping a `draw:text-box` of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFrame {
    /// Presentation style reference (`presentation:style-name`).
    pub style: Option<String>,
    /// Presentation role of the frame.
    pub role: FrameRole,
    /// Width and height, as ODF lengths (e.g. `"22cm"`).
    pub size: (String, String),
    /// X and Y position, as ODF lengths.
    pub position: (String, String),
    /// Content of the inner text box.
    pub content: Vec<Node>,
}

impl TextFrame {
    /// Create an empty frame.
    #[must_use]
    pub fn new(
        role: FrameRole,
        style: Option<&str>,
        size: (&str, &str),
        position: (&str, &str),
    ) -> Self {
        Self {
            style: style.map(str::to_owned),
            role,
            size: (size.0.to_owned(), size.1.to_owned()),
            position: (position.0.to_owned(), position.1.to_owned()),
            content: Vec::new(),
        }
    }

    /// Append nodes to the inner text box.
    pub fn append(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.content.extend(nodes);
    }
}

/// A block paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph style reference.
    pub style: Option<String>,
    /// Inline children.
    pub children: Vec<Node>,
}

impl Paragraph {
    /// Create an unstyled, empty paragraph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paragraph with a style.
    #[must_use]
    pub fn styled(style: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            children: Vec::new(),
        }
    }

    /// Append an inline child.
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }
}

/// An inline text run, optionally styled, holding text and/or children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Text style reference.
    pub style: Option<String>,
    /// Leading literal text.
    pub text: String,
    /// Nested inline children, serialized after the text.
    pub children: Vec<Node>,
}

impl Span {
    /// Create an unstyled leaf span.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            style: None,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create a styled leaf span.
    #[must_use]
    pub fn styled_text(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create an empty container span.
    #[must_use]
    pub fn container(style: Option<&str>) -> Self {
        Self {
            style: style.map(str::to_owned),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Append a nested child.
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }
}

/// An ordered or unordered list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    /// List style reference (`text:style-name`).
    pub style: String,
    /// List items in order.
    pub items: Vec<Node>,
}

impl List {
    /// Create an empty list with a style.
    #[must_use]
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            items: Vec::new(),
        }
    }
}

/// A single list entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Item content.
    pub content: Vec<Node>,
}

impl ListItem {
    /// Create an item from its content.
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }
}

/// A hyperlink with plain display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// Target URL (`xlink:href`).
    pub href: String,
    /// Display text.
    pub text: String,
    /// Optional tooltip (`office:title`).
    pub title: Option<String>,
}

impl Link {
    /// Create a link.
    #[must_use]
    pub fn new(href: impl Into<String>, text: impl Into<String>, title: Option<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_recurses_through_inline_structure() {
        let mut outer = Span::container(None);
        outer.push(Node::Span(Span::text("Hello ")));
        outer.push(Node::Link(Link::new("https://example.com", "world", None)));
        outer.push(Node::LineBreak);
        assert_eq!(Node::Span(outer).plain_text(), "Hello world\n");
    }

    #[test]
    fn outline_frame_lookup_skips_title_frames() {
        let mut slide = Slide::new("s", "Break", "AL3T19");
        slide.push_frame(TextFrame::new(
            FrameRole::Title,
            Some("pr9"),
            ("20cm", "3cm"),
            ("2cm", "8cm"),
        ));
        assert!(slide.outline_frame_mut().is_none());

        slide.push_frame(TextFrame::new(
            FrameRole::Outline,
            Some("pr7"),
            ("22cm", "12cm"),
            ("2cm", "5cm"),
        ));
        let outline = slide.outline_frame_mut().expect("outline frame");
        assert_eq!(outline.role, FrameRole::Outline);
    }

    #[test]
    fn slide_text_covers_all_frames() {
        let mut slide = Slide::new("s", "Break", "AL3T19");
        let mut title = TextFrame::new(FrameRole::Title, None, ("20cm", "3cm"), ("2cm", "8cm"));
        title.append([Node::Span(Span::text("Title"))]);
        let mut body = TextFrame::new(FrameRole::Outline, None, ("22cm", "12cm"), ("2cm", "5cm"));
        body.append([Node::Span(Span::text("Body"))]);
        slide.push_frame(title);
        slide.push_frame(body);
        assert_eq!(Node::Slide(slide).plain_text(), "TitleBody");
    }
}
