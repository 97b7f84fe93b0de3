//! Headless page host for the Tether positioning engine.
//!
//! # Scope
//!
//! This crate provides:
//! - **Page** - a DOM tree plus precomputed layout boxes and window state,
//!   answering the engine's element and viewport queries
//! - **Scenes** - JSON descriptions of a page and its placement options
//!
//! # Not Yet Implemented
//!
//! - Layout: boxes are supplied by the scene, never computed
//! - Horizontal scrollbars (`clientHeight` always equals `innerHeight`)

mod page;
mod scene;

pub use page::{Page, StyleMutation, Window};
pub use scene::{ElementSpec, Scene, SceneError};

pub use tether_css as css;
pub use tether_dom as dom;
pub use tether_menu as menu;
