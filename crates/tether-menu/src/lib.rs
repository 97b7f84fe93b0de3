//! Anchored overlay positioning for the Tether engine.
//!
//! A floating overlay (menu, tooltip, popover) is anchored to a trigger
//! element, the *activator*. This crate measures both elements, derives a
//! preferred top/left for the overlay from declarative placement flags, and
//! corrects that candidate so the overlay stays inside the visible page.
//!
//! # Pipeline
//!
//! 1. **Measure** - [`Menuable::update_dimensions`] refreshes [`PageMetrics`]
//!    and the activator rectangle, and queues a content measurement for the
//!    next animation frame ([`Menuable::run_animation_frame`]). A hidden
//!    content element is measured with a *sneak peek*: forced to
//!    `inline-block`, measured, and hidden again in one synchronous step.
//! 2. **Place** - [`computed_top`] and [`computed_left`] are pure functions of
//!    the current [`Dimensions`], [`PageMetrics`], and [`PlacementConfig`].
//! 3. **Correct** - [`calc_x_overflow`] and [`calc_y_overflow`] clamp or flip
//!    the candidate against the viewport.
//!
//! The host (a browser binding, a headless page, a test double) supplies
//! elements and viewport state through [`ElementHost`] and [`ViewportQuery`].

mod config;
mod frame;
mod geometry;
mod host;
mod measure;
mod menuable;
mod model;
mod overflow;
mod position;

pub use config::{MaxWidth, PlacementConfig};
pub use frame::FrameId;
pub use geometry::{Dimensions, ElementRect, PageMetrics};
pub use host::{ElementHost, RefName, ViewportQuery};
pub use measure::{margin_px, measure};
pub use menuable::{Candidate, Menuable, Position, SubscriptionId};
pub use model::{Model, ModelEvent};
pub use overflow::{ViewportClip, calc_x_overflow, calc_y_overflow, is_out_of_viewport};
pub use position::{computed_left, computed_top};
