//! Template profile configuration.
//!
//! The renderer references template resources (master pages, page layouts,
//! presentation styles, list styles) by name. Those names vary between
//! templates, so they load from an optional TOML profile; the defaults
//! target the template the tool ships against. A present section must be
//! complete, absent sections keep their defaults.
//!
//! ```toml
//! [title_slide]
//! master_page = "Break"
//! layout = "AL3T19"
//! frame_style = "pr9"
//!
//! [lists]
//! ordered_style = "L6"
//! unordered_style = "L2"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Template resource names for one slide kind.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SlideProfile {
    /// Master page name (`draw:master-page-name`).
    pub master_page: String,
    /// Presentation page layout name.
    pub layout: String,
    /// Presentation style for the title frame.
    pub frame_style: String,
}

/// Template resource names for synthesized outline frames.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct OutlineProfile {
    /// Presentation style for outline frames.
    pub frame_style: String,
}

/// Template list style names.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ListProfile {
    /// List style for ordered lists.
    pub ordered_style: String,
    /// List style for unordered lists.
    pub unordered_style: String,
}

/// All template resource names the renderer emits.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateProfile {
    /// Level-1 headings (cover slides).
    pub title_slide: SlideProfile,
    /// Level-2 headings (content slides).
    pub content_slide: SlideProfile,
    /// Synthesized body frames.
    pub outline: OutlineProfile,
    /// Ordered and unordered lists.
    pub lists: ListProfile,
}

impl Default for TemplateProfile {
    fn default() -> Self {
        Self {
            title_slide: SlideProfile {
                master_page: "Break".to_owned(),
                layout: "AL3T19".to_owned(),
                frame_style: "pr9".to_owned(),
            },
            content_slide: SlideProfile {
                master_page: "Logo_20_Content".to_owned(),
                layout: "AL3T1".to_owned(),
                frame_style: "pr6".to_owned(),
            },
            outline: OutlineProfile {
                frame_style: "pr7".to_owned(),
            },
            lists: ListProfile {
                ordered_style: "L6".to_owned(),
                unordered_style: "L2".to_owned(),
            },
        }
    }
}

impl TemplateProfile {
    /// Load a profile from an optional TOML file path.
    ///
    /// `None` yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ProfileError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_owned(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Error raised while loading a template profile.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("cannot read profile `{path}`")]
    Read {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The profile file is not valid TOML for this schema.
    #[error("invalid profile: {0}")]
    Parse(#[from] toml::de::Error),
}
