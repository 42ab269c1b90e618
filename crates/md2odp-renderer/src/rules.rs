//! Block and inline render rules.
//!
//! One rule per markdown construct. Rules run strictly bottom-up: each
//! receives the fully rendered fragments of its children and returns the
//! fragment the enclosing construct concatenates. Rules never touch the
//! document; they only reference style and template resource names.

#![allow(clippy::unused_self)] // Rules take &self for dispatch symmetry

use md2odp_odf::{FrameRole, Link, List, ListItem, Node, Paragraph, Slide, Span, TextFrame};

use crate::error::RenderError;
use crate::fragment::Fragment;
use crate::profile::TemplateProfile;
use crate::span::wrap_spans;
use crate::styles;

/// Title frame geometry, shared by both heading levels.
const TITLE_SIZE: (&str, &str) = ("20cm", "3cm");
/// Title frame position on cover slides (level-1 headings).
const COVER_TITLE_POSITION: (&str, &str) = ("2cm", "8cm");
/// Title frame position on content slides (level-2 headings).
const CONTENT_TITLE_POSITION: (&str, &str) = ("2cm", "1cm");

const OPENING_QUOTE: &str = "\u{201c}";
const CLOSING_QUOTE: &str = "\u{201d}";

/// The per-construct rendering rules.
pub(crate) struct BlockRules<'a> {
    profile: &'a TemplateProfile,
}

impl<'a> BlockRules<'a> {
    pub(crate) fn new(profile: &'a TemplateProfile) -> Self {
        Self { profile }
    }

    /// Level 1 and 2 headings open a new slide; deeper levels abort.
    pub(crate) fn heading(&self, level: u8, content: Fragment) -> Result<Fragment, RenderError> {
        let (slide_profile, position) = match level {
            1 => (&self.profile.title_slide, COVER_TITLE_POSITION),
            2 => (&self.profile.content_slide, CONTENT_TITLE_POSITION),
            level => return Err(RenderError::UnsupportedHeading { level }),
        };
        let mut slide = Slide::new(
            content.plain_text(),
            &slide_profile.master_page,
            &slide_profile.layout,
        );
        let mut frame = TextFrame::new(
            FrameRole::Title,
            Some(&slide_profile.frame_style),
            TITLE_SIZE,
            position,
        );
        frame.append(wrap_spans(content.into_nodes()));
        slide.push_frame(frame);
        Ok(Fragment::from(Node::Slide(slide)))
    }

    /// One quote paragraph: opening glyph, quoted content, closing glyph.
    /// The glyph spans carry their style directly, so a curly quote inside
    /// the quoted text is unaffected.
    pub(crate) fn block_quote(&self, content: Fragment) -> Fragment {
        let mut para = Paragraph::styled(styles::PARAGRAPH_QUOTE);
        para.push(Node::Span(Span::styled_text(
            styles::TEXT_QUOTE,
            OPENING_QUOTE,
        )));
        let mut quoted = Span::container(None);
        for node in content.into_nodes() {
            quoted.push(node);
        }
        para.push(Node::Span(quoted));
        para.push(Node::Span(Span::styled_text(
            styles::TEXT_QUOTE,
            CLOSING_QUOTE,
        )));
        Fragment::from(Node::Paragraph(para))
    }

    /// One code paragraph: a span per source line, explicit breaks between
    /// consecutive lines, no embedded newlines.
    pub(crate) fn code_block(&self, code: &str) -> Fragment {
        let mut para = Paragraph::styled(styles::PARAGRAPH_CODE);
        for (index, line) in code.lines().enumerate() {
            if index > 0 {
                para.push(Node::LineBreak);
            }
            para.push(Node::Span(Span::styled_text(styles::TEXT_CODE, line)));
        }
        Fragment::from(Node::Paragraph(para))
    }

    /// A list over already-rendered items.
    pub(crate) fn list(&self, body: Fragment, ordered: bool) -> Fragment {
        let style = if ordered {
            &self.profile.lists.ordered_style
        } else {
            &self.profile.lists.unordered_style
        };
        let mut list = List::new(style.as_str());
        list.items = body.into_nodes();
        Fragment::from(Node::List(list))
    }

    /// One item wrapping its span-wrapped inline content.
    pub(crate) fn list_item(&self, content: Fragment) -> Fragment {
        Fragment::from(Node::ListItem(ListItem::new(wrap_spans(
            content.into_nodes(),
        ))))
    }

    /// An inline run, deliberately kept as a span container rather than a
    /// block paragraph: most runs sit inside list items or quotes where a
    /// `text:p` child is not permitted. Promotion to paragraphs happens at
    /// the enclosing construct, through the span wrapper.
    pub(crate) fn paragraph(&self, content: Fragment) -> Fragment {
        let mut span = Span::container(None);
        for node in content.into_nodes() {
            span.push(node);
        }
        Fragment::from(Node::Span(span))
    }

    /// A link with plain display text. Email autolinks get a `mailto:`
    /// prefix; an empty title is omitted.
    pub(crate) fn link(&self, dest: &str, title: &str, email: bool, content: Fragment) -> Fragment {
        let href = if email && !dest.starts_with("mailto:") {
            format!("mailto:{dest}")
        } else {
            dest.to_owned()
        };
        let title = (!title.is_empty()).then(|| title.to_owned());
        Fragment::from(Node::Link(Link::new(href, content.plain_text(), title)))
    }

    /// Inline code. A single plain text run is restyled in place; rendered
    /// content nests inside a styled container span.
    pub(crate) fn code_span(&self, content: Fragment) -> Fragment {
        let mut nodes = content.into_nodes();
        if nodes.len() == 1 {
            if let Node::Span(span) = &mut nodes[0] {
                if span.style.is_none() && span.children.is_empty() {
                    span.style = Some(styles::TEXT_CODE.to_owned());
                    return Fragment::from_nodes(nodes);
                }
            }
        }
        let mut outer = Span::container(Some(styles::TEXT_CODE));
        for node in nodes {
            outer.push(node);
        }
        Fragment::from(Node::Span(outer))
    }

    /// Emphasis wraps its children in a styled span.
    pub(crate) fn emphasis(&self, content: Fragment) -> Fragment {
        self.styled_container(styles::TEXT_EMPHASIS, content)
    }

    /// Double emphasis wraps its children in a styled span.
    pub(crate) fn double_emphasis(&self, content: Fragment) -> Fragment {
        self.styled_container(styles::TEXT_DOUBLE_EMPHASIS, content)
    }

    /// A single explicit line break.
    pub(crate) fn line_break(&self) -> Fragment {
        Fragment::from(Node::LineBreak)
    }

    fn styled_container(&self, style: &str, content: Fragment) -> Fragment {
        let mut span = Span::container(Some(style));
        for node in content.into_nodes() {
            span.push(node);
        }
        Fragment::from(Node::Span(span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rules(profile: &TemplateProfile) -> BlockRules<'_> {
        BlockRules::new(profile)
    }

    fn text_fragment(text: &str) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.append_text(text);
        fragment
    }

    fn unwrap_single(fragment: Fragment) -> Node {
        let mut nodes = fragment.into_nodes();
        assert_eq!(nodes.len(), 1);
        nodes.remove(0)
    }

    #[test]
    fn level_one_heading_builds_a_cover_slide() {
        let profile = TemplateProfile::default();
        let fragment = rules(&profile)
            .heading(1, text_fragment("Welcome"))
            .unwrap();

        let Node::Slide(slide) = unwrap_single(fragment) else {
            panic!("expected a slide");
        };
        assert_eq!(slide.name, "Welcome");
        assert_eq!(slide.master_page, "Break");
        assert_eq!(slide.layout, "AL3T19");
        assert_eq!(slide.frames.len(), 1);

        let frame = &slide.frames[0];
        assert_eq!(frame.role, FrameRole::Title);
        assert_eq!(frame.style.as_deref(), Some("pr9"));
        assert_eq!(frame.size, ("20cm".to_owned(), "3cm".to_owned()));
        assert_eq!(frame.position, ("2cm".to_owned(), "8cm".to_owned()));
        // heading inlines are span-wrapped into a paragraph
        assert!(matches!(frame.content[0], Node::Paragraph(_)));
    }

    #[test]
    fn level_two_heading_uses_the_content_pair() {
        let profile = TemplateProfile::default();
        let fragment = rules(&profile).heading(2, text_fragment("Agenda")).unwrap();

        let Node::Slide(slide) = unwrap_single(fragment) else {
            panic!("expected a slide");
        };
        assert_eq!(slide.master_page, "Logo_20_Content");
        assert_eq!(slide.layout, "AL3T1");
        assert_eq!(slide.frames[0].style.as_deref(), Some("pr6"));
        assert_eq!(
            slide.frames[0].position,
            ("2cm".to_owned(), "1cm".to_owned())
        );
    }

    #[test]
    fn deep_headings_are_fatal() {
        let profile = TemplateProfile::default();
        for level in 3..=6 {
            let err = rules(&profile)
                .heading(level, text_fragment("deep"))
                .unwrap_err();
            assert!(matches!(
                err,
                RenderError::UnsupportedHeading { level: l } if l == level
            ));
        }
    }

    #[test]
    fn block_quote_styles_glyphs_by_identity() {
        let profile = TemplateProfile::default();
        // quoted text containing the glyph itself must stay untouched
        let fragment = rules(&profile).block_quote(text_fragment("she said \u{201c}hi\u{201d}"));

        let Node::Paragraph(para) = unwrap_single(fragment) else {
            panic!("expected a paragraph");
        };
        assert_eq!(para.style.as_deref(), Some(styles::PARAGRAPH_QUOTE));
        assert_eq!(para.children.len(), 3);

        let Node::Span(opening) = &para.children[0] else {
            panic!("expected a span");
        };
        assert_eq!(opening.style.as_deref(), Some(styles::TEXT_QUOTE));
        assert_eq!(opening.text, "\u{201c}");

        let Node::Span(quoted) = &para.children[1] else {
            panic!("expected a span");
        };
        assert_eq!(quoted.style, None);
        assert_eq!(quoted.children[0].plain_text(), "she said \u{201c}hi\u{201d}");

        let Node::Span(closing) = &para.children[2] else {
            panic!("expected a span");
        };
        assert_eq!(closing.text, "\u{201d}");
    }

    #[test]
    fn code_block_emits_breaks_between_lines_only() {
        let profile = TemplateProfile::default();
        let fragment = rules(&profile).code_block("a\nb\nc\n");

        let Node::Paragraph(para) = unwrap_single(fragment) else {
            panic!("expected a paragraph");
        };
        assert_eq!(para.style.as_deref(), Some(styles::PARAGRAPH_CODE));
        assert_eq!(para.children.len(), 5);

        let spans: Vec<&Node> = para.children.iter().step_by(2).collect();
        let breaks: Vec<&Node> = para.children.iter().skip(1).step_by(2).collect();
        assert_eq!(spans.len(), 3);
        assert_eq!(breaks.len(), 2);
        for node in spans {
            let Node::Span(span) = node else {
                panic!("expected a span");
            };
            assert_eq!(span.style.as_deref(), Some(styles::TEXT_CODE));
        }
        assert!(breaks.iter().all(|node| **node == Node::LineBreak));
    }

    #[test]
    fn list_style_follows_the_ordered_flag() {
        let profile = TemplateProfile::default();
        let item = rules(&profile).list_item(text_fragment("x"));

        let ordered = rules(&profile).list(item.clone(), true);
        let Node::List(list) = unwrap_single(ordered) else {
            panic!("expected a list");
        };
        assert_eq!(list.style, "L6");
        assert_eq!(list.items.len(), 1);

        let unordered = rules(&profile).list(item, false);
        let Node::List(list) = unwrap_single(unordered) else {
            panic!("expected a list");
        };
        assert_eq!(list.style, "L2");
    }

    #[test]
    fn list_item_wraps_inline_content() {
        let profile = TemplateProfile::default();
        let fragment = rules(&profile).list_item(text_fragment("entry"));

        let Node::ListItem(item) = unwrap_single(fragment) else {
            panic!("expected a list item");
        };
        assert!(matches!(item.content[0], Node::Paragraph(_)));
    }

    #[test]
    fn paragraph_stays_an_inline_container() {
        let profile = TemplateProfile::default();
        let fragment = rules(&profile).paragraph(text_fragment("text"));

        let Node::Span(span) = unwrap_single(fragment) else {
            panic!("expected a span");
        };
        assert_eq!(span.style, None);
        assert_eq!(span.children.len(), 1);
    }

    #[test]
    fn email_autolinks_gain_a_mailto_prefix() {
        let profile = TemplateProfile::default();
        let fragment =
            rules(&profile).link("user@example.com", "", true, text_fragment("user@example.com"));

        let Node::Link(link) = unwrap_single(fragment) else {
            panic!("expected a link");
        };
        assert_eq!(link.href, "mailto:user@example.com");
        assert_eq!(link.text, "user@example.com");
        assert_eq!(link.title, None);
    }

    #[test]
    fn links_keep_href_title_and_flattened_text() {
        let profile = TemplateProfile::default();
        let content = rules(&profile).emphasis(text_fragment("here"));
        let fragment = rules(&profile).link("https://example.com", "Example", false, content);

        let Node::Link(link) = unwrap_single(fragment) else {
            panic!("expected a link");
        };
        assert_eq!(link.href, "https://example.com");
        assert_eq!(link.text, "here");
        assert_eq!(link.title.as_deref(), Some("Example"));
    }

    #[test]
    fn code_span_restyles_a_plain_text_run_in_place() {
        let profile = TemplateProfile::default();
        let fragment = rules(&profile).code_span(text_fragment("x()"));

        let Node::Span(span) = unwrap_single(fragment) else {
            panic!("expected a span");
        };
        assert_eq!(span.style.as_deref(), Some(styles::TEXT_CODE));
        assert_eq!(span.text, "x()");
        assert!(span.children.is_empty());
    }

    #[test]
    fn code_span_nests_rendered_content() {
        let profile = TemplateProfile::default();
        let inner = rules(&profile).emphasis(text_fragment("x"));
        let fragment = rules(&profile).code_span(inner);

        let Node::Span(span) = unwrap_single(fragment) else {
            panic!("expected a span");
        };
        assert_eq!(span.style.as_deref(), Some(styles::TEXT_CODE));
        assert_eq!(span.children.len(), 1);
    }

    #[test]
    fn emphasis_variants_pick_their_styles() {
        let profile = TemplateProfile::default();

        let em = rules(&profile).emphasis(text_fragment("a"));
        let Node::Span(span) = unwrap_single(em) else {
            panic!("expected a span");
        };
        assert_eq!(span.style.as_deref(), Some(styles::TEXT_EMPHASIS));

        let strong = rules(&profile).double_emphasis(text_fragment("b"));
        let Node::Span(span) = unwrap_single(strong) else {
            panic!("expected a span");
        };
        assert_eq!(span.style.as_deref(), Some(styles::TEXT_DOUBLE_EMPHASIS));
    }
}
