//! Markdown to slide rendering core.
//!
//! Renders a markdown document into presentation nodes and inserts them
//! into an ODP template. The pipeline:
//!
//! 1. [`TemplateProfile`] names the template's master pages, layouts, and
//!    styles (defaults built in, overridable from TOML).
//! 2. [`RenderContext`] bundles the exclusive document handle with the
//!    [`StyleRegistry`], registering the fixed style vocabulary into the
//!    document's automatic-style table on construction.
//! 3. [`SlideRenderer`] drives the markdown parser's event stream
//!    bottom-up: each construct's rule consumes the already-rendered
//!    fragments of its children and returns a new [`Fragment`], threaded
//!    together by concatenation. Headings open slides; everything that
//!    follows an open slide is grouped into paragraphs and redirected into
//!    that slide's outline frame.
//! 4. [`resolve_anchor`] turns the user's (possibly end-relative) anchor
//!    into an insertion index and the nodes are spliced into the template.
//!
//! # Example
//!
//! ```no_run
//! use md2odp_odf::OdpDocument;
//! use md2odp_renderer::{RenderContext, TemplateProfile};
//!
//! let mut document = OdpDocument::open("template.odp")?;
//! let mut ctx = RenderContext::new(&mut document, TemplateProfile::default())?;
//! let nodes = ctx.render("# Hello\n\nFirst slide body")?;
//! ctx.insert(-1, nodes)?;
//! document.save("out.odp")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod context;
mod deck;
mod error;
mod fragment;
mod placement;
mod profile;
mod renderer;
mod rules;
mod span;
pub mod styles;

pub use context::RenderContext;
pub use deck::DeckBuilder;
pub use error::RenderError;
pub use fragment::Fragment;
pub use placement::{insert_at_anchor, resolve_anchor};
pub use profile::{ListProfile, OutlineProfile, ProfileError, SlideProfile, TemplateProfile};
pub use renderer::SlideRenderer;
pub use span::wrap_spans;
pub use styles::StyleRegistry;
