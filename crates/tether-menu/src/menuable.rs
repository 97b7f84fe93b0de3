//! The stateful engine: one instance per overlay.

use std::fmt;

use serde::Serialize;

use crate::config::PlacementConfig;
use crate::frame::{FrameId, FrameQueue};
use crate::geometry::{Dimensions, ElementRect, PageMetrics};
use crate::host::{ElementHost, RefName, ViewportQuery};
use crate::measure::measure;
use crate::overflow::{calc_x_overflow, calc_y_overflow};
use crate::position::{computed_left, computed_top};

const INLINE_BLOCK: &str = "inline-block";
const NONE: &str = "none";

/// Preferred coordinates, before overflow correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Candidate {
    /// `computed_top`
    pub top: f64,
    /// `computed_left`
    pub left: f64,
}

/// Final coordinates handed to the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    /// Corrected top.
    pub top: f64,
    /// Corrected left.
    pub left: f64,
}

/// Handle returned by [`Menuable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Candidate)>;

/// Measurement state and placement for a single overlay.
///
/// The engine is the only writer of [`Dimensions`] and [`PageMetrics`]; the
/// placement functions only read them. Both are replaced wholesale, never
/// patched field by field.
pub struct Menuable {
    config: PlacementConfig,
    metrics: PageMetrics,
    dimensions: Dimensions,
    frames: FrameQueue,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    last_candidate: Candidate,
}

impl Menuable {
    /// A fresh engine with zeroed geometry.
    #[must_use]
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            config,
            metrics: PageMetrics::default(),
            dimensions: Dimensions::default(),
            frames: FrameQueue::default(),
            observers: Vec::new(),
            next_subscription: 0,
            last_candidate: Candidate::default(),
        }
        .with_initial_candidate()
    }

    fn with_initial_candidate(mut self) -> Self {
        self.last_candidate = self.candidate();
        self
    }

    /// Current placement options.
    #[must_use]
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Replace the placement options.
    pub fn set_config(&mut self, config: PlacementConfig) {
        if config == self.config {
            return;
        }
        if config.offset_overflow && config.allow_overflow {
            log::debug!("offsetOverflow and allowOverflow both set; flipping takes priority");
        }
        self.config = config;
        self.notify();
    }

    /// Most recent measurements.
    #[must_use]
    pub const fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Page state captured by the most recent [`Self::update_dimensions`].
    #[must_use]
    pub const fn page_metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// Preferred top, see [`computed_top`].
    #[must_use]
    pub fn computed_top(&self) -> f64 {
        computed_top(&self.dimensions, &self.metrics, &self.config)
    }

    /// Preferred left, see [`computed_left`].
    #[must_use]
    pub fn computed_left(&self) -> f64 {
        computed_left(&self.dimensions, &self.config)
    }

    /// Both preferred coordinates.
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        Candidate {
            top: self.computed_top(),
            left: self.computed_left(),
        }
    }

    /// See [`calc_x_overflow`].
    #[must_use]
    pub fn calc_x_overflow(&self, left: f64, menu_width: f64) -> f64 {
        calc_x_overflow(left, menu_width, &self.metrics, &self.config)
    }

    /// See [`calc_y_overflow`]. The window height is read live from `viewport`.
    #[must_use]
    pub fn calc_y_overflow<V: ViewportQuery + ?Sized>(&self, viewport: &V, top: f64) -> f64 {
        calc_y_overflow(
            top,
            viewport.viewport_height(),
            &self.dimensions,
            &self.metrics,
            &self.config,
        )
    }

    /// Candidate coordinates corrected in both axes.
    ///
    /// Only final once [`Self::is_settled`] holds for the current pass.
    #[must_use]
    pub fn position<V: ViewportQuery + ?Sized>(&self, viewport: &V) -> Position {
        let candidate = self.candidate();
        Position {
            top: self.calc_y_overflow(viewport, candidate.top),
            left: self.calc_x_overflow(candidate.left, self.dimensions.content.width),
        }
    }

    /// Start a measurement pass.
    ///
    /// Refreshes [`PageMetrics`], measures the activator right away, and
    /// queues the content measurement for the next animation frame. An
    /// absent activator keeps its previous measurement.
    pub fn update_dimensions<H: ElementHost + ?Sized>(&mut self, host: &H) {
        self.metrics = PageMetrics::read(host);

        if let Some(activator) = host.element_ref(RefName::Activator) {
            self.dimensions.activator = ElementRect {
                offset_left: host.offset_left(activator),
                offset_top: host.offset_top(activator),
                ..measure(host, activator, self.config.attach)
            };
        } else {
            log::debug!("activator ref absent, keeping previous measurement");
        }

        let frame = self.frames.request();
        log::trace!("content measurement scheduled for {frame:?}");
        self.notify();
    }

    /// Fire the animation frame: run every content measurement queued so far.
    ///
    /// Measurements run in request order, so the last one wins.
    pub fn run_animation_frame<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        let batch = self.frames.take_batch();
        for frame in batch {
            self.measure_content(host, frame);
        }
        self.notify();
    }

    /// Content measurements still waiting for a frame.
    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Whether every scheduled content measurement has run.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending_frames() == 0
    }

    /// Call `observer` with the fresh candidate whenever it changes.
    pub fn subscribe(&mut self, observer: impl FnMut(Candidate) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Stop notifying a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    fn notify(&mut self) {
        let candidate = self.candidate();
        if candidate == self.last_candidate {
            return;
        }
        self.last_candidate = candidate;
        for (_, observer) in &mut self.observers {
            observer(candidate);
        }
    }

    /// Sneak peek: a content element hidden with an inline `display: none`
    /// is switched to `inline-block`, measured, and hidden again without
    /// yielding, so it is never painted while forced on.
    fn measure_content<H: ElementHost + ?Sized>(&mut self, host: &mut H, frame: FrameId) {
        let Some(content) = host.element_ref(RefName::Content) else {
            log::debug!("{frame:?}: content ref absent, keeping previous measurement");
            return;
        };

        let hidden = host
            .inline_display(content)
            .is_some_and(|display| display.trim().eq_ignore_ascii_case(NONE));

        if !hidden {
            self.dimensions.content = measure(&*host, content, self.config.attach);
            return;
        }

        host.set_inline_display(content, Some(INLINE_BLOCK));
        let rect = measure(&*host, content, self.config.attach);
        host.set_inline_display(content, Some(NONE));
        log::trace!("{frame:?}: measured hidden content via sneak peek");
        self.dimensions.content = rect;
    }
}

impl Default for Menuable {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}

impl fmt::Debug for Menuable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menuable")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .field("dimensions", &self.dimensions)
            .field("pending_frames", &self.frames.len())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
