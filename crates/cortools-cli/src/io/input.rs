// crates/cortools-cli/src/io/input.rs

use anyhow::Context;
use cortools_core::capture;
use cortools_core::color::{colorize, ColorMap};
use cortools_core::format;
use cortools_core::{ComputerProfile, Displacement};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    Table,
    Capture,
}

impl InputKind {
    pub fn of(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".pcap") {
            InputKind::Capture
        } else {
            InputKind::Table
        }
    }
}

/// One decoded input ready for the renderer.
#[derive(Clone, Debug)]
pub struct Panel {
    pub source: String,
    pub kind: &'static str,
    pub cells: Vec<Displacement>,
    pub colors: ColorMap,
}

pub fn load(path: &str, profile: ComputerProfile) -> anyhow::Result<Panel> {
    let (kind, cells) = match InputKind::of(path) {
        InputKind::Table => load_table(path)?,
        InputKind::Capture => load_capture(path, profile)?,
    };
    let colors = colorize(&cells).with_context(|| format!("color {path}"))?;
    log::info!("{}", colors.stats);

    Ok(Panel {
        source: path.to_string(),
        kind,
        cells,
        colors,
    })
}

fn load_table(path: &str) -> anyhow::Result<(&'static str, Vec<Displacement>)> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    let table = format::decode(&bytes).with_context(|| format!("decode {path}"))?;

    log::info!("{path} .cor file creator listed as: {}", table.label);
    log::info!("reserved header: {}", table.reserved_hex());
    match table.lens_size_mm() {
        Some(mm) => log::info!("scale {:.6} (lens {:.3} mm)", table.scale, mm),
        None => log::info!("scale {} (no lens size)", table.scale),
    }

    Ok((table.profile.name(), table.grid.into_cells()))
}

fn load_capture(path: &str, profile: ComputerProfile) -> anyhow::Result<(&'static str, Vec<Displacement>)> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    let got = capture::extract(&bytes, profile).with_context(|| format!("parse capture {path}"))?;

    log::info!(
        "{path}: {} of {} frames carried correction samples ({})",
        got.samples.len(),
        got.frames_seen,
        profile.name()
    );

    Ok(("capture", got.samples))
}
