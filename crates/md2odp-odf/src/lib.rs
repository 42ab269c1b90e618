//! OpenDocument Presentation package handling and content model.
//!
//! This crate is the document-store half of md2odp: it owns the typed
//! [`Node`] model for presentation content, the [`StyleDefinition`] model
//! for automatic styles, and [`OdpDocument`], which loads an `.odp`
//! template, splices new styles and slides into its `content.xml`, and
//! writes the package back out.
//!
//! # Example
//!
//! ```no_run
//! use md2odp_odf::{Node, OdpDocument, Slide};
//!
//! let mut doc = OdpDocument::open("template.odp")?;
//! let slide = Slide::new("Intro", "Break", "AL3T19");
//! let at = doc.slide_count();
//! doc.insert_nodes(at, vec![Node::Slide(slide)])?;
//! doc.save("out.odp")?;
//! # Ok::<(), md2odp_odf::DocumentError>(())
//! ```

mod document;
mod error;
mod inventory;
mod node;
mod package;
mod style;
mod xml;

pub use document::OdpDocument;
pub use error::DocumentError;
pub use inventory::TemplateInventory;
pub use node::{FrameRole, Link, List, ListItem, Node, Paragraph, Slide, Span, TextFrame};
pub use style::{PropertyArea, StyleDefinition, StyleFamily};
