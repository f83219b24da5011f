//! Headless carousel simulation
//!
//! Mounts one virtual panel per skill category, runs the page shell at a
//! fixed frame rate, injects user scrolls at chosen times and samples every
//! panel's state.

use anyhow::{Context, Result};
use folio_content::ContentRegistry;
use folio_core::Event;
use folio_layout::{CarouselConfig, CarouselMode, PageShell, VirtualPanel};
use folio_theme::MemoryStore;
use serde::Serialize;
use std::time::Duration;

/// Height of one skill-project row
pub const ROW_HEIGHT: f32 = 88.0;
/// Visible height of a skill panel
pub const PANEL_VIEWPORT: f32 = 160.0;
/// Distance a simulated wheel gesture scrolls
pub const USER_SCROLL_PX: f32 = 40.0;

#[derive(Debug, Clone)]
pub struct SimulationParams {
    pub frames: u32,
    pub fps: f32,
    /// Seconds at which every panel receives a user scroll
    pub scroll_at: Vec<f32>,
    /// Sample every n-th frame
    pub sample_every: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            frames: 300,
            fps: 60.0,
            scroll_at: Vec::new(),
            sample_every: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSample {
    pub key: String,
    pub offset: f32,
    pub extent: f32,
    pub mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub frame: u32,
    pub time_ms: u64,
    pub panels: Vec<PanelSample>,
}

pub fn run(
    registry: &ContentRegistry,
    config: CarouselConfig,
    params: &SimulationParams,
) -> Result<Vec<Sample>> {
    if !(params.fps.is_finite() && params.fps > 0.0) {
        anyhow::bail!("--fps must be positive, got {}", params.fps);
    }
    let dt = Duration::try_from_secs_f32(1.0 / params.fps)
        .with_context(|| format!("--fps {} gives no representable frame length", params.fps))?;
    let sample_every = params.sample_every.max(1);

    let mut shell: PageShell<VirtualPanel, MemoryStore> =
        PageShell::new(config, MemoryStore::default(), false);

    let keys: Vec<String> = registry
        .skill_categories()
        .iter()
        .map(|category| {
            let surface =
                VirtualPanel::for_rows(category.row_count(), ROW_HEIGHT, PANEL_VIEWPORT);
            shell.mount_panel(category.id.clone(), surface);
            category.id.clone()
        })
        .collect();

    let mut pending: Vec<Duration> = params
        .scroll_at
        .iter()
        .map(|s| {
            Duration::try_from_secs_f32(*s)
                .with_context(|| format!("--scroll-at {} is not a usable time", s))
        })
        .collect::<Result<_>>()?;
    pending.sort();
    pending.reverse();

    tracing::debug!(
        "simulate - {} panels, {} frames at {} fps, {} user scrolls",
        keys.len(),
        params.frames,
        params.fps,
        pending.len()
    );

    let mut samples = Vec::new();
    for frame in 1..=params.frames {
        while pending.last().is_some_and(|at| *at <= shell.carousel().now()) {
            pending.pop();
            for key in &keys {
                shell.dispatch(&mut Event::scroll(key.as_str(), USER_SCROLL_PX))?;
            }
        }

        shell.tick(dt);

        if frame % sample_every == 0 || frame == params.frames {
            samples.push(sample(&shell, &keys, frame));
        }
    }
    Ok(samples)
}

fn sample(shell: &PageShell<VirtualPanel, MemoryStore>, keys: &[String], frame: u32) -> Sample {
    let carousel = shell.carousel();
    let panels = keys
        .iter()
        .map(|key| PanelSample {
            key: key.clone(),
            offset: carousel.offset(key).unwrap_or(0.0),
            extent: carousel.extent(key).unwrap_or(0.0),
            mode: match carousel.mode(key) {
                Some(CarouselMode::Auto) | None => "auto",
                Some(CarouselMode::UserOverride) => "user",
            },
        })
        .collect();

    Sample {
        frame,
        time_ms: carousel.now().as_millis() as u64,
        panels,
    }
}

/// Plain-text table of samples
pub fn format_table(samples: &[Sample]) -> String {
    let mut out = String::new();
    for sample in samples {
        out.push_str(&format!("frame {:>5}  t={:>6}ms", sample.frame, sample.time_ms));
        for panel in &sample.panels {
            out.push_str(&format!(
                "  {}={:.1}/{:.1}({})",
                panel.key, panel.offset, panel.extent, panel.mode
            ));
        }
        out.push('\n');
    }
    out
}
