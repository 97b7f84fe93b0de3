//! Scene files: a page, its layout, and the overlay's placement options.
//!
//! ```json
//! {
//!   "window": { "width": 1024, "height": 768, "scrollY": 0 },
//!   "placement": { "offsetY": true, "offsetOverflow": true },
//!   "elements": [
//!     { "id": "trigger", "tag": "button", "ref": "activator",
//!       "box": { "x": 50, "y": 100, "width": 80, "height": 30 } },
//!     { "id": "menu", "ref": "content", "style": "display: none",
//!       "box": { "x": 0, "y": 0, "width": 120, "height": 40 } }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tether_common::warning::clear_warnings;
use tether_css::Rect;
use tether_menu::{PlacementConfig, RefName};
use thiserror::Error;

use crate::page::{Page, Window};

/// Errors raised while loading or building a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene '{}': {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The scene is not valid JSON or does not match the scene shape.
    #[error("invalid scene: {0}")]
    Json(#[from] serde_json::Error),
    /// Two elements share an id.
    #[error("duplicate element id '{0}'")]
    DuplicateId(String),
    /// An element names a parent that was not declared before it.
    #[error("element '{element}' names unknown parent '{parent}'")]
    UnknownParent {
        /// Element being declared.
        element: String,
        /// Parent id it refers to.
        parent: String,
    },
    /// An element uses a ref name the engine does not look up.
    #[error("element '{element}' has unknown ref '{name}'")]
    UnknownRef {
        /// Element being declared.
        element: String,
        /// Ref name it declares.
        name: String,
    },
}

/// A page description plus the overlay's placement options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Window size and scroll.
    #[serde(default)]
    pub window: Window,
    /// Placement options for the overlay.
    #[serde(default)]
    pub placement: PlacementConfig,
    /// Elements in document order; parents precede their children.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

/// One element of a scene.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementSpec {
    /// Unique id, also set as the `id` attribute.
    pub id: String,
    /// Local name.
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Id of the parent element; the document when absent.
    #[serde(default)]
    pub parent: Option<String>,
    /// Border box in document coordinates.
    #[serde(default, rename = "box")]
    pub layout_box: Option<Rect>,
    /// Inline `style` attribute.
    #[serde(default)]
    pub style: Option<String>,
    /// Ref name the element is registered under (`activator`, `content`).
    #[serde(default, rename = "ref")]
    pub ref_name: Option<String>,
}

fn default_tag() -> String {
    "div".to_string()
}

impl Scene {
    /// Read and parse a scene file.
    ///
    /// # Errors
    /// Returns [`SceneError::Io`] if the file cannot be read and
    /// [`SceneError::Json`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a scene from JSON text.
    ///
    /// # Errors
    /// Returns [`SceneError::Json`] if the text does not parse.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the page this scene describes. One-shot warnings from any
    /// previous scene are forgotten.
    ///
    /// # Errors
    /// Fails on duplicate ids, parents declared after their children, and
    /// ref names other than `activator` and `content`.
    pub fn build_page(&self) -> Result<Page, SceneError> {
        clear_warnings();
        let mut page = Page::new(self.window);
        let mut ids = HashMap::new();

        for spec in &self.elements {
            if ids.contains_key(&spec.id) {
                return Err(SceneError::DuplicateId(spec.id.clone()));
            }
            let parent = spec
                .parent
                .as_ref()
                .map(|parent| {
                    ids.get(parent).copied().ok_or_else(|| SceneError::UnknownParent {
                        element: spec.id.clone(),
                        parent: parent.clone(),
                    })
                })
                .transpose()?;

            let node = page.create_element(&spec.tag, parent);
            page.set_attribute(node, "id", &spec.id);
            if let Some(style) = &spec.style {
                page.set_attribute(node, "style", style);
            }
            if let Some(rect) = spec.layout_box {
                page.set_layout_box(node, rect);
            }
            if let Some(name) = &spec.ref_name {
                let ref_name = name.parse::<RefName>().map_err(|_| SceneError::UnknownRef {
                    element: spec.id.clone(),
                    name: name.clone(),
                })?;
                page.register_ref(ref_name, node);
            }
            let _ = ids.insert(spec.id.clone(), node);
        }

        log::debug!("built page with {} elements", ids.len());
        Ok(page)
    }
}
