// crates/cortools-cli/src/cmd/view.rs

use std::path::Path;

use clap::{Args, ValueEnum};
use cortools_core::{ComputerProfile, Orientation};

use crate::io::{input, render};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Computer {
    Intel,
    Mac,
    M1,
}

impl From<Computer> for ComputerProfile {
    fn from(c: Computer) -> Self {
        match c {
            Computer::Intel => ComputerProfile::Intel,
            Computer::Mac => ComputerProfile::Mac,
            Computer::M1 => ComputerProfile::M1,
        }
    }
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Correction tables or .pcap captures to view
    pub input: Vec<String>,

    /// Stack panels vertically instead of side by side
    #[arg(short = 'v', long)]
    pub vert: bool,

    /// Computer that recorded the capture (sets link header offsets)
    #[arg(short, long, value_enum, default_value_t = Computer::Intel)]
    pub computer: Computer,

    /// Write mesh, vectors and colors for every panel as JSON
    #[arg(long)]
    pub json: Option<String>,
}

pub fn run(args: &ViewArgs, wrote_template: bool) -> anyhow::Result<()> {
    if args.input.is_empty() {
        if !wrote_template {
            log::info!("No files were requested to be viewed.");
        }
        return Ok(());
    }

    let profile = ComputerProfile::from(args.computer);
    let orientation = if args.vert {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };

    let mut panels = Vec::with_capacity(args.input.len());
    for path in &args.input {
        if !Path::new(path).exists() {
            log::warn!("{path} does not exist; skipping");
            continue;
        }
        match input::load(path, profile) {
            Ok(panel) => panels.push(panel),
            Err(e) => log::warn!("skipping {path}: {e:#}"),
        }
    }

    for p in &panels {
        println!(
            "{}\t{}\tcells={}\t{}\tmagnitude=[{:.3}, {:.3}]",
            p.source,
            p.kind,
            p.cells.len(),
            p.colors.stats,
            p.colors.stats.min_magnitude,
            p.colors.stats.max_magnitude
        );
    }

    if let Some(out) = args.json.as_deref() {
        render::write_json(out, orientation, &panels)?;
        log::info!("render hand-off: {} ({} panels)", out, panels.len());
    }

    Ok(())
}
