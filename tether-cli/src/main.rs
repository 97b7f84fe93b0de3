//! Tether CLI
//!
//! Loads a scene, runs one measurement pass (including the deferred content
//! frame), and prints where the overlay ends up.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use tether_menu::{
    Candidate, Dimensions, ElementHost, ElementRect, MaxWidth, Menuable, PageMetrics,
    PlacementConfig, Position, RefName, ViewportClip, ViewportQuery, is_out_of_viewport,
};
use tether_page::{Page, Scene};

#[derive(Parser, Debug)]
#[command(name = "tether")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Place the overlay described by a scene
    tether demos/dropdown.json

    # Same scene, opening upward, as JSON
    tether demos/dropdown.json --top --json

    # Shrink the window to force a vertical correction
    tether demos/dropdown.json --height 300 --offset-overflow
"#)]
struct Cli {
    /// Scene file (JSON)
    #[arg(value_name = "FILE")]
    scene: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log measurement details (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Open upward
    #[arg(long)]
    top: bool,

    /// Open leftward
    #[arg(long)]
    left: bool,

    /// Keep x-overflow correction with --left
    #[arg(long)]
    right: bool,

    /// Place beside the activator
    #[arg(long)]
    offset_x: bool,

    /// Place above/below the activator
    #[arg(long)]
    offset_y: bool,

    /// Do not clamp vertically
    #[arg(long)]
    allow_overflow: bool,

    /// Flip above the activator on bottom overflow
    #[arg(long)]
    offset_overflow: bool,

    /// Overlay is rendered in place; read its margins
    #[arg(long)]
    attach: bool,

    /// Limit for --offset-x with --left (number, or anything else for auto)
    #[arg(long, value_name = "PX")]
    max_width: Option<String>,

    /// Window width override
    #[arg(long)]
    width: Option<f64>,

    /// Window height override
    #[arg(long)]
    height: Option<f64>,

    /// Vertical scroll override
    #[arg(long)]
    scroll_y: Option<f64>,
}

impl Cli {
    /// Scene placement with command-line flags switched on top.
    fn placement(&self, base: PlacementConfig) -> PlacementConfig {
        PlacementConfig {
            top: base.top || self.top,
            left: base.left || self.left,
            right: base.right || self.right,
            offset_x: base.offset_x || self.offset_x,
            offset_y: base.offset_y || self.offset_y,
            allow_overflow: base.allow_overflow || self.allow_overflow,
            offset_overflow: base.offset_overflow || self.offset_overflow,
            attach: base.attach || self.attach,
            max_width: self
                .max_width
                .as_deref()
                .map_or(base.max_width, MaxWidth::parse),
        }
    }

    fn apply_window(&self, page: &mut Page) {
        let window = *page.window();
        if self.width.is_some() || self.height.is_some() {
            page.resize(
                self.width.unwrap_or(window.width),
                self.height.unwrap_or(window.height),
            );
        }
        if let Some(scroll_y) = self.scroll_y {
            page.scroll_to(scroll_y);
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    placement: PlacementConfig,
    page: PageMetrics,
    viewport_height: f64,
    dimensions: Dimensions,
    candidate: Candidate,
    position: Position,
    activator_clip: Option<ViewportClip>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let scene = Scene::load(&cli.scene)
        .with_context(|| format!("loading scene {}", cli.scene.display()))?;
    let mut page = scene.build_page().context("building page from scene")?;
    cli.apply_window(&mut page);

    let mut menu = Menuable::new(cli.placement(scene.placement));
    menu.update_dimensions(&page);
    menu.run_animation_frame(&mut page);
    log::debug!("{menu:?}");

    let report = Report {
        placement: *menu.config(),
        page: *menu.page_metrics(),
        viewport_height: page.viewport_height(),
        dimensions: *menu.dimensions(),
        candidate: menu.candidate(),
        position: menu.position(&page),
        activator_clip: page
            .element_ref(RefName::Activator)
            .map(|activator| is_out_of_viewport(&page, activator)),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_rect(label: &str, rect: &ElementRect) {
    println!(
        "{:<10} top={} left={} width={} height={}",
        label.bold(),
        rect.top,
        rect.left,
        rect.width,
        rect.height
    );
}

fn print_report(report: &Report) {
    println!("{}", "=== Measurements ===".cyan());
    print_rect("activator", &report.dimensions.activator);
    print_rect("content", &report.dimensions.content);
    println!(
        "{:<10} pageYOffset={} pageWidth={} viewportHeight={}",
        "page".bold(),
        report.page.page_y_offset,
        report.page.page_width,
        report.viewport_height
    );

    println!("\n{}", "=== Placement ===".cyan());
    println!(
        "{:<10} top={} left={}",
        "candidate".bold(),
        report.candidate.top,
        report.candidate.left
    );
    let moved = report.position.top != report.candidate.top
        || report.position.left != report.candidate.left;
    let position = format!("top={} left={}", report.position.top, report.position.left);
    if moved {
        println!("{:<10} {} {}", "position".bold(), position.yellow(), "(corrected)".dimmed());
    } else {
        println!("{:<10} {}", "position".bold(), position.green());
    }

    if let Some(clip) = report.activator_clip.filter(|clip| clip.any()) {
        println!(
            "\n{} activator clipped: top={} left={} bottom={} right={}",
            "warning:".yellow().bold(),
            clip.top,
            clip.left,
            clip.bottom,
            clip.right
        );
    }
}
