//! The markdown event loop.
//!
//! Drives the block rules bottom-up over the parser's event stream: every
//! container start pushes an empty fragment, the matching end pops it and
//! invokes exactly one rule, and the rule's result concatenates into the
//! enclosing fragment. At the top level the deck builder decides between
//! starting a new slide and filling the open one.
//!
//! Unsupported constructs render as empty content: their events accumulate
//! into a stacked fragment that is dropped wholesale at the end tag, so
//! nested content (a table cell's text, an image's alt text) never leaks
//! into the output. The event match is exhaustive on purpose: a new
//! construct kind must be classified here before the crate compiles.

use md2odp_odf::Node;
use pulldown_cmark::{Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd};
use tracing::debug;

use crate::deck::DeckBuilder;
use crate::error::RenderError;
use crate::fragment::Fragment;
use crate::profile::TemplateProfile;
use crate::rules::BlockRules;

/// Renders one markdown document into top-level presentation nodes.
pub struct SlideRenderer<'a> {
    rules: BlockRules<'a>,
    deck: DeckBuilder,
    stack: Vec<Fragment>,
    code: CodeCapture,
    pending_link: Option<PendingLink>,
}

/// Code block capture state.
#[derive(Default)]
struct CodeCapture {
    active: bool,
    buffer: String,
}

impl CodeCapture {
    fn start(&mut self) {
        self.active = true;
        self.buffer.clear();
    }

    fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.buffer)
    }
}

/// Link target captured at the start tag; the end tag carries no data.
#[derive(Default)]
struct PendingLink {
    dest: String,
    title: String,
    email: bool,
}

impl<'a> SlideRenderer<'a> {
    /// Create a renderer for one run.
    #[must_use]
    pub fn new(profile: &'a TemplateProfile) -> Self {
        Self {
            rules: BlockRules::new(profile),
            deck: DeckBuilder::new(profile.outline.frame_style.as_str()),
            stack: Vec::new(),
            code: CodeCapture::default(),
            pending_link: None,
        }
    }

    /// Render a markdown document into top-level presentation nodes.
    ///
    /// # Errors
    ///
    /// Fails on the first heading deeper than level 2; nothing is emitted
    /// in that case.
    pub fn render(mut self, input: &str) -> Result<Vec<Node>, RenderError> {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        for event in Parser::new_ext(input, options) {
            self.process(event)?;
        }
        Ok(self.deck.into_nodes())
    }

    fn process(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => return self.end(tag),
            Event::Text(text) => {
                if self.code.active {
                    self.code.buffer.push_str(&text);
                } else {
                    self.text(&text);
                }
            }
            Event::Code(code) => {
                let mut literal = Fragment::new();
                literal.append_text(&code);
                let rendered = self.rules.code_span(literal);
                self.emit(rendered);
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                debug!(bytes = html.len(), "dropping raw HTML");
            }
            Event::SoftBreak => {
                if self.code.active {
                    self.code.buffer.push('\n');
                } else {
                    self.text("\n");
                }
            }
            Event::HardBreak => {
                let rendered = self.rules.line_break();
                self.emit(rendered);
            }
            Event::Rule => debug!("dropping horizontal rule"),
            Event::TaskListMarker(_) => debug!("dropping task list marker"),
            Event::FootnoteReference(name) => {
                debug!(%name, "dropping footnote reference");
            }
            Event::InlineMath(_) | Event::DisplayMath(_) => debug!("dropping math"),
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::CodeBlock(_) => self.code.start(),
            Tag::Link {
                link_type,
                dest_url,
                title,
                ..
            } => {
                self.pending_link = Some(PendingLink {
                    dest: dest_url.into_string(),
                    title: title.into_string(),
                    email: matches!(link_type, LinkType::Email),
                });
                self.stack.push(Fragment::new());
            }
            Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::List(_)
            | Tag::Item
            | Tag::Emphasis
            | Tag::Strong => self.stack.push(Fragment::new()),
            // Unsupported containers still get a fragment; it is discarded
            // at the end tag together with everything rendered inside it
            Tag::Image { .. }
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow
            | Tag::TableCell
            | Tag::Strikethrough
            | Tag::HtmlBlock
            | Tag::FootnoteDefinition(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::MetadataBlock(_)
            | Tag::Superscript
            | Tag::Subscript => self.stack.push(Fragment::new()),
        }
    }

    fn end(&mut self, tag: TagEnd) -> Result<(), RenderError> {
        match tag {
            TagEnd::Paragraph => {
                let content = self.pop();
                let rendered = self.rules.paragraph(content);
                self.emit(rendered);
            }
            TagEnd::Heading(level) => {
                let content = self.pop();
                let rendered = self.rules.heading(heading_level(level), content)?;
                self.emit(rendered);
            }
            TagEnd::BlockQuote(_) => {
                let content = self.pop();
                let rendered = self.rules.block_quote(content);
                self.emit(rendered);
            }
            TagEnd::CodeBlock => {
                let code = self.code.end();
                let rendered = self.rules.code_block(&code);
                self.emit(rendered);
            }
            TagEnd::List(ordered) => {
                let body = self.pop();
                let rendered = self.rules.list(body, ordered);
                self.emit(rendered);
            }
            TagEnd::Item => {
                let content = self.pop();
                let rendered = self.rules.list_item(content);
                self.emit(rendered);
            }
            TagEnd::Emphasis => {
                let content = self.pop();
                let rendered = self.rules.emphasis(content);
                self.emit(rendered);
            }
            TagEnd::Strong => {
                let content = self.pop();
                let rendered = self.rules.double_emphasis(content);
                self.emit(rendered);
            }
            TagEnd::Link => {
                let content = self.pop();
                let pending = self.pending_link.take().unwrap_or_default();
                let rendered =
                    self.rules
                        .link(&pending.dest, &pending.title, pending.email, content);
                self.emit(rendered);
            }
            TagEnd::Image
            | TagEnd::Table
            | TagEnd::TableHead
            | TagEnd::TableRow
            | TagEnd::TableCell
            | TagEnd::Strikethrough
            | TagEnd::HtmlBlock
            | TagEnd::FootnoteDefinition
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition
            | TagEnd::MetadataBlock(_)
            | TagEnd::Superscript
            | TagEnd::Subscript => {
                let dropped = self.pop();
                debug!(nodes = dropped.len(), "dropping unsupported construct");
            }
        }
        Ok(())
    }

    /// Pop the innermost open fragment. A well-formed event stream never
    /// underflows; an empty fragment keeps rendering total if one does.
    fn pop(&mut self) -> Fragment {
        self.stack.pop().unwrap_or_default()
    }

    fn text(&mut self, text: &str) {
        if let Some(top) = self.stack.last_mut() {
            top.append_text(text);
        } else {
            let mut fragment = Fragment::new();
            fragment.append_text(text);
            self.deck.absorb(fragment);
        }
    }

    fn emit(&mut self, fragment: Fragment) {
        if let Some(top) = self.stack.last_mut() {
            *top += fragment;
        } else {
            self.deck.absorb(fragment);
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
