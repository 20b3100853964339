// crates/cortools-cli/src/io/render.rs
//
// JSON hand-off for an external plotter: one quiver panel per input over the
// 65x65 mesh, colored per cell.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use cortools_core::grid::{components, mesh, GRID_SIZE};
use cortools_core::Orientation;
use serde::Serialize;

use crate::io::input::Panel;

#[derive(Serialize)]
struct RenderDoc<'a> {
    layout: Layout,
    grid_size: usize,
    mesh_x: Vec<u32>,
    mesh_y: Vec<u32>,
    panels: Vec<PanelDoc<'a>>,
}

#[derive(Serialize)]
struct Layout {
    orientation: &'static str,
    rows: usize,
    cols: usize,
}

#[derive(Serialize)]
struct PanelDoc<'a> {
    source: &'a str,
    kind: &'a str,
    u: Vec<i64>,
    v: Vec<i64>,
    colors: Vec<[f64; 3]>,
}

pub fn write_json(path: &str, orientation: Orientation, panels: &[Panel]) -> anyhow::Result<()> {
    let (rows, cols) = orientation.layout(panels.len());
    let (mesh_x, mesh_y) = mesh();

    let doc = RenderDoc {
        layout: Layout {
            orientation: match orientation {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            },
            rows,
            cols,
        },
        grid_size: GRID_SIZE,
        mesh_x,
        mesh_y,
        panels: panels
            .iter()
            .map(|p| {
                let (u, v) = components(&p.cells);
                PanelDoc {
                    source: &p.source,
                    kind: p.kind,
                    u,
                    v,
                    colors: p.colors.colors.iter().map(|c| c.to_array()).collect(),
                }
            })
            .collect(),
    };

    let f = File::create(path).with_context(|| format!("create {path}"))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &doc).with_context(|| format!("write render json {path}"))?;
    w.flush().with_context(|| format!("flush {path}"))?;
    Ok(())
}
