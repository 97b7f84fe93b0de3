//! The surface a host environment exposes to the engine.

use std::fmt;

use strum_macros::{AsRefStr, Display, EnumString};
use tether_css::{ComputedStyle, DomRect};

/// Named element references the engine looks up on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RefName {
    /// The trigger element the overlay is anchored to.
    Activator,
    /// The floating overlay element itself.
    Content,
}

/// Read-only window and document metrics.
///
/// Hosts that cannot report a value return 0, in which case the provided
/// methods fall back to the document-root equivalent.
pub trait ViewportQuery {
    /// `window.innerWidth`
    fn inner_width(&self) -> f64;
    /// `window.innerHeight`
    fn inner_height(&self) -> f64;
    /// `document.documentElement.clientWidth` (excludes a vertical scrollbar)
    fn client_width(&self) -> f64;
    /// `document.documentElement.clientHeight`
    fn client_height(&self) -> f64;
    /// `window.pageYOffset`
    fn page_y_offset(&self) -> f64;
    /// `document.documentElement.scrollTop`
    fn scroll_top(&self) -> f64;

    /// Visible height of the window.
    fn viewport_height(&self) -> f64 {
        non_zero_or(self.inner_height(), self.client_height())
    }

    /// Visible width of the window.
    fn viewport_width(&self) -> f64 {
        non_zero_or(self.inner_width(), self.client_width())
    }

    /// Vertical scroll position of the document.
    fn scroll_y(&self) -> f64 {
        non_zero_or(self.page_y_offset(), self.scroll_top())
    }
}

fn non_zero_or(primary: f64, fallback: f64) -> f64 {
    if primary != 0.0 && primary.is_finite() {
        primary
    } else {
        fallback
    }
}

/// Live element access: ref lookup, geometry, and inline `display`.
///
/// `Element` is a cheap handle (an arena index, a JS object reference). A
/// ref that resolves to `None` means the element does not exist yet; the
/// engine keeps its previous measurement in that case.
pub trait ElementHost: ViewportQuery {
    /// Handle to a live element.
    type Element: Copy + fmt::Debug;

    /// Resolve a named reference to a live element, if any.
    fn element_ref(&self, name: RefName) -> Option<Self::Element>;

    /// `element.getBoundingClientRect()`
    fn bounding_client_rect(&self, element: Self::Element) -> DomRect;

    /// `element.offsetLeft`
    fn offset_left(&self, element: Self::Element) -> f64;

    /// `element.offsetTop`
    fn offset_top(&self, element: Self::Element) -> f64;

    /// `window.getComputedStyle(element)`
    fn computed_style(&self, element: Self::Element) -> ComputedStyle;

    /// `element.style.display`, `None` when no inline value is set.
    fn inline_display(&self, element: Self::Element) -> Option<String>;

    /// Write `element.style.display`; `None` removes the inline value.
    fn set_inline_display(&mut self, element: Self::Element, value: Option<&str>);
}
