//! Tests for the position calculator and the overflow resolver.

#![allow(clippy::float_cmp)]

use quickcheck_macros::quickcheck;
use tether_menu::{
    Dimensions, ElementRect, MaxWidth, PageMetrics, PlacementConfig, ViewportQuery,
    calc_x_overflow, calc_y_overflow, computed_left, computed_top,
};

/// Activator `{top:100, left:50, width:80, height:30}`, content 120x40.
fn reference_dimensions() -> Dimensions {
    Dimensions {
        activator: ElementRect {
            top: 100.0,
            left: 50.0,
            bottom: 130.0,
            right: 130.0,
            width: 80.0,
            height: 30.0,
            ..ElementRect::default()
        },
        content: ElementRect {
            width: 120.0,
            height: 40.0,
            ..ElementRect::default()
        },
    }
}

fn metrics(page_y_offset: f64, page_width: f64) -> PageMetrics {
    PageMetrics {
        page_y_offset,
        page_width,
    }
}

// ---------------------------------------------------------------------------
// computed_top / computed_left
// ---------------------------------------------------------------------------

#[test]
fn test_zeroed_dimensions_place_at_origin() {
    let dims = Dimensions::default();
    let config = PlacementConfig {
        top: true,
        left: true,
        offset_x: true,
        offset_y: true,
        ..PlacementConfig::default()
    };
    assert_eq!(computed_top(&dims, &PageMetrics::default(), &config), 0.0);
    assert_eq!(computed_left(&dims, &config), 0.0);
}

#[test]
fn test_no_flags() {
    let dims = reference_dimensions();
    let config = PlacementConfig::default();
    assert_eq!(computed_top(&dims, &metrics(0.0, 1024.0), &config), 100.0);
    assert_eq!(computed_left(&dims, &config), 50.0);
}

#[test]
fn test_top_flag_aligns_bottom_edges() {
    let config = PlacementConfig {
        top: true,
        ..PlacementConfig::default()
    };
    let top = computed_top(&reference_dimensions(), &metrics(0.0, 1024.0), &config);
    assert_eq!(top, 90.0);
}

#[test]
fn test_offset_y_below_activator() {
    let config = PlacementConfig {
        offset_y: true,
        ..PlacementConfig::default()
    };
    let top = computed_top(&reference_dimensions(), &metrics(0.0, 1024.0), &config);
    assert_eq!(top, 130.0);
}

#[test]
fn test_offset_y_with_top_sits_above_activator() {
    let config = PlacementConfig {
        top: true,
        offset_y: true,
        ..PlacementConfig::default()
    };
    // 100 + (30 - 40) - 30: the overlay's bottom edge meets the activator's top.
    let top = computed_top(&reference_dimensions(), &metrics(0.0, 1024.0), &config);
    assert_eq!(top, 60.0);
}

#[test]
fn test_scroll_offset_converts_to_document_coordinates() {
    let top = computed_top(
        &reference_dimensions(),
        &metrics(250.0, 1024.0),
        &PlacementConfig::default(),
    );
    assert_eq!(top, 350.0);
}

#[test]
fn test_left_flag_right_aligns_wider_overlay() {
    let config = PlacementConfig {
        left: true,
        ..PlacementConfig::default()
    };
    assert_eq!(computed_left(&reference_dimensions(), &config), 10.0);
}

#[test]
fn test_left_flag_with_narrower_overlay_keeps_left_edge() {
    let mut dims = reference_dimensions();
    dims.content.width = 40.0;
    let config = PlacementConfig {
        left: true,
        ..PlacementConfig::default()
    };
    assert_eq!(computed_left(&dims, &config), 50.0);
}

#[test]
fn test_offset_x_right_of_activator() {
    let config = PlacementConfig {
        offset_x: true,
        ..PlacementConfig::default()
    };
    assert_eq!(computed_left(&reference_dimensions(), &config), 130.0);
}

#[test]
fn test_offset_x_left_uses_activator_width_when_not_numeric() {
    let config = PlacementConfig {
        left: true,
        offset_x: true,
        max_width: MaxWidth::parse("auto"),
        ..PlacementConfig::default()
    };
    // 10 - 80
    assert_eq!(computed_left(&reference_dimensions(), &config), -70.0);
}

#[test]
fn test_offset_x_left_limited_by_max_width() {
    let config = PlacementConfig {
        left: true,
        offset_x: true,
        max_width: MaxWidth::Px(25.0),
        ..PlacementConfig::default()
    };
    // 10 - min(80, 25)
    assert_eq!(computed_left(&reference_dimensions(), &config), -15.0);
}

#[test]
fn test_offset_x_left_max_width_larger_than_activator() {
    let config = PlacementConfig {
        left: true,
        offset_x: true,
        max_width: MaxWidth::parse("500"),
        ..PlacementConfig::default()
    };
    assert_eq!(computed_left(&reference_dimensions(), &config), -70.0);
}

// ---------------------------------------------------------------------------
// calc_x_overflow
// ---------------------------------------------------------------------------

#[test]
fn test_x_overflow_floors_at_zero() {
    let left = calc_x_overflow(10.0, 120.0, &metrics(0.0, 100.0), &PlacementConfig::default());
    assert_eq!(left, 0.0);
}

#[test]
fn test_x_overflow_shifts_by_excess() {
    let left = calc_x_overflow(900.0, 200.0, &metrics(0.0, 1024.0), &PlacementConfig::default());
    assert_eq!(left, 824.0);
}

#[test]
fn test_x_overflow_no_overflow_unchanged() {
    let left = calc_x_overflow(100.0, 200.0, &metrics(0.0, 1024.0), &PlacementConfig::default());
    assert_eq!(left, 100.0);
}

#[test]
fn test_x_overflow_left_flag_exempts() {
    let config = PlacementConfig {
        left: true,
        ..PlacementConfig::default()
    };
    let left = calc_x_overflow(900.0, 200.0, &metrics(0.0, 1024.0), &config);
    assert_eq!(left, 900.0);
}

#[test]
fn test_x_overflow_right_flag_restores_correction() {
    let config = PlacementConfig {
        left: true,
        right: true,
        ..PlacementConfig::default()
    };
    let left = calc_x_overflow(900.0, 200.0, &metrics(0.0, 1024.0), &config);
    assert_eq!(left, 824.0);
}

#[quickcheck]
fn prop_x_overflow_never_negative(
    left: u16,
    menu_width: u16,
    page_width: u16,
    flags: (bool, bool),
) -> bool {
    let config = PlacementConfig {
        left: flags.0,
        right: flags.1,
        ..PlacementConfig::default()
    };
    let result = calc_x_overflow(
        f64::from(left),
        f64::from(menu_width),
        &metrics(0.0, f64::from(page_width)),
        &config,
    );
    result >= 0.0
}

// ---------------------------------------------------------------------------
// calc_y_overflow
// ---------------------------------------------------------------------------

#[test]
fn test_y_overflow_clamps_to_bottom() {
    // to_top = 500, total_height = 560 + 40 = 600
    let dims = reference_dimensions();
    let top = calc_y_overflow(
        560.0,
        500.0,
        &dims,
        &metrics(0.0, 1024.0),
        &PlacementConfig::default(),
    );
    assert_eq!(top, 460.0);
}

#[test]
fn test_y_overflow_flips_above_activator() {
    let mut dims = reference_dimensions();
    dims.activator.top = 480.0;
    let config = PlacementConfig {
        offset_overflow: true,
        ..PlacementConfig::default()
    };
    let top = calc_y_overflow(510.0, 500.0, &dims, &metrics(0.0, 1024.0), &config);
    assert_eq!(top, 440.0);
}

#[test]
fn test_y_overflow_flip_respects_scroll() {
    let mut dims = reference_dimensions();
    dims.activator.top = 480.0;
    let config = PlacementConfig {
        offset_overflow: true,
        ..PlacementConfig::default()
    };
    let top = calc_y_overflow(1010.0, 500.0, &dims, &metrics(500.0, 1024.0), &config);
    assert_eq!(top, 940.0);
}

#[test]
fn test_y_overflow_no_room_to_flip_clamps() {
    let mut dims = reference_dimensions();
    dims.activator.top = 30.0;
    let config = PlacementConfig {
        offset_overflow: true,
        ..PlacementConfig::default()
    };
    let top = calc_y_overflow(480.0, 500.0, &dims, &metrics(0.0, 1024.0), &config);
    assert_eq!(top, 460.0);
}

#[test]
fn test_y_overflow_flip_wins_over_allow_overflow() {
    let mut dims = reference_dimensions();
    dims.activator.top = 480.0;
    let config = PlacementConfig {
        offset_overflow: true,
        allow_overflow: true,
        ..PlacementConfig::default()
    };
    let top = calc_y_overflow(510.0, 500.0, &dims, &metrics(0.0, 1024.0), &config);
    assert_eq!(top, 440.0);
}

#[test]
fn test_y_overflow_allowed_bottom_overflow_unchanged() {
    let config = PlacementConfig {
        allow_overflow: true,
        ..PlacementConfig::default()
    };
    let top = calc_y_overflow(
        560.0,
        500.0,
        &reference_dimensions(),
        &metrics(0.0, 1024.0),
        &config,
    );
    assert_eq!(top, 560.0);
}

#[test]
fn test_y_overflow_clamps_to_top() {
    let top = calc_y_overflow(
        80.0,
        500.0,
        &reference_dimensions(),
        &metrics(100.0, 1024.0),
        &PlacementConfig::default(),
    );
    assert_eq!(top, 100.0);
}

#[test]
fn test_y_overflow_allowed_top_overflow_unchanged() {
    let config = PlacementConfig {
        allow_overflow: true,
        ..PlacementConfig::default()
    };
    let top = calc_y_overflow(
        80.0,
        500.0,
        &reference_dimensions(),
        &metrics(100.0, 1024.0),
        &config,
    );
    assert_eq!(top, 80.0);
}

#[quickcheck]
fn prop_y_overflow_idempotent_when_allowed_and_in_range(
    scroll: u16,
    viewport: u16,
    content_height: u16,
    offset: u16,
) -> bool {
    let (scroll, viewport, content_height) =
        (f64::from(scroll), f64::from(viewport), f64::from(content_height));
    if content_height > viewport {
        return true;
    }
    let span = viewport - content_height;
    let top = scroll + f64::from(offset) % (span + 1.0);
    let mut dims = Dimensions::default();
    dims.content.height = content_height;
    let config = PlacementConfig {
        allow_overflow: true,
        ..PlacementConfig::default()
    };
    let metrics = metrics(scroll, 1024.0);
    let once = calc_y_overflow(top, viewport, &dims, &metrics, &config);
    let twice = calc_y_overflow(once, viewport, &dims, &metrics, &config);
    once == top && twice == once
}

#[quickcheck]
fn prop_y_overflow_clamped_result_fits(
    scroll: u16,
    viewport: u16,
    content_height: u16,
    top: i32,
) -> bool {
    let (scroll, viewport, content_height) =
        (f64::from(scroll), f64::from(viewport), f64::from(content_height));
    if content_height > viewport {
        return true;
    }
    let mut dims = Dimensions::default();
    dims.content.height = content_height;
    let result = calc_y_overflow(
        f64::from(top),
        viewport,
        &dims,
        &metrics(scroll, 1024.0),
        &PlacementConfig::default(),
    );
    result >= scroll && result + content_height <= scroll + viewport
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_config_deserializes_camel_case() {
    let config: PlacementConfig = serde_json::from_str(
        r#"{"top": true, "offsetX": true, "allowOverflow": true, "maxWidth": 240}"#,
    )
    .unwrap();
    assert!(config.top);
    assert!(config.offset_x);
    assert!(config.allow_overflow);
    assert!(!config.offset_overflow);
    assert_eq!(config.max_width, MaxWidth::Px(240.0));
}

#[test]
fn test_max_width_forms() {
    let parse = |json: &str| -> MaxWidth {
        let config: PlacementConfig =
            serde_json::from_str(&format!(r#"{{"maxWidth": {json}}}"#)).unwrap();
        config.max_width
    };
    assert_eq!(parse("\"300\""), MaxWidth::Px(300.0));
    assert_eq!(parse("\"300px\""), MaxWidth::Auto);
    assert_eq!(parse("\"auto\""), MaxWidth::Auto);
    assert_eq!(parse("\"inf\""), MaxWidth::Auto);
    assert_eq!(parse("\"0x\""), MaxWidth::Auto);
    assert_eq!(parse("\"\""), MaxWidth::Px(0.0));
    assert_eq!(parse("\"  \""), MaxWidth::Px(0.0));
    assert_eq!(parse("\" 42 \""), MaxWidth::Px(42.0));
    assert_eq!(parse("\"0x1F\""), MaxWidth::Px(31.0));
    assert_eq!(parse("\"0b101\""), MaxWidth::Px(5.0));
    assert_eq!(parse("\"-Infinity\""), MaxWidth::Px(f64::NEG_INFINITY));
    assert_eq!(parse("\"1e2\""), MaxWidth::Px(100.0));
    assert_eq!(parse("null"), MaxWidth::Px(0.0));
    assert_eq!(parse("true"), MaxWidth::Px(1.0));
    assert_eq!(parse("false"), MaxWidth::Px(0.0));
    assert_eq!(parse("12.5"), MaxWidth::Px(12.5));

    let absent: PlacementConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(absent.max_width, MaxWidth::Auto);
}

#[test]
fn test_offset_x_left_with_null_max_width() {
    let config: PlacementConfig =
        serde_json::from_str(r#"{"left": true, "offsetX": true, "maxWidth": null}"#).unwrap();
    let dimensions = Dimensions {
        activator: ElementRect {
            left: 200.0,
            width: 80.0,
            ..ElementRect::default()
        },
        content: ElementRect {
            width: 120.0,
            ..ElementRect::default()
        },
    };
    // 200 - (120 - 80) - min(80, 0)
    assert_eq!(computed_left(&dimensions, &config), 160.0);
}

#[test]
fn test_max_width_serializes() {
    let json = serde_json::to_value(PlacementConfig::default()).unwrap();
    assert_eq!(json["maxWidth"], "auto");
    let json = serde_json::to_value(PlacementConfig {
        max_width: MaxWidth::Px(10.0),
        ..PlacementConfig::default()
    })
    .unwrap();
    assert_eq!(json["maxWidth"], 10.0);
}

// ---------------------------------------------------------------------------
// Viewport fallbacks
// ---------------------------------------------------------------------------

struct Window {
    inner: (f64, f64),
    client: (f64, f64),
    page_y_offset: f64,
    scroll_top: f64,
}

impl ViewportQuery for Window {
    fn inner_width(&self) -> f64 {
        self.inner.0
    }
    fn inner_height(&self) -> f64 {
        self.inner.1
    }
    fn client_width(&self) -> f64 {
        self.client.0
    }
    fn client_height(&self) -> f64 {
        self.client.1
    }
    fn page_y_offset(&self) -> f64 {
        self.page_y_offset
    }
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }
}

#[test]
fn test_viewport_prefers_window_values() {
    let window = Window {
        inner: (800.0, 600.0),
        client: (785.0, 590.0),
        page_y_offset: 40.0,
        scroll_top: 12.0,
    };
    assert_eq!(window.viewport_width(), 800.0);
    assert_eq!(window.viewport_height(), 600.0);
    assert_eq!(window.scroll_y(), 40.0);
    assert_eq!(PageMetrics::read(&window), metrics(40.0, 785.0));
}

#[test]
fn test_viewport_falls_back_to_document_root() {
    let window = Window {
        inner: (0.0, 0.0),
        client: (785.0, 590.0),
        page_y_offset: 0.0,
        scroll_top: 12.0,
    };
    assert_eq!(window.viewport_width(), 785.0);
    assert_eq!(window.viewport_height(), 590.0);
    assert_eq!(window.scroll_y(), 12.0);
}
