// crates/cortools-core/src/format/encode.rs

use crate::config::TemplateConfig;
use crate::format::label::{FormatProfile, Label};
use crate::grid::CELL_COUNT;

const TRAILER_LEN: usize = 4;

/// Uncalibrated V2 table: label, zero reserved bytes, scale, 4225 zero
/// (dx, dy) pairs and a zero trailer. A baseline file, not a calibration.
pub fn write_template(cfg: &TemplateConfig) -> Vec<u8> {
    let profile = FormatProfile::V2;
    let cell_bytes = CELL_COUNT * 2 * profile.field_width();

    let label = Label::for_profile(profile);

    let mut b = Vec::with_capacity(
        label.as_bytes().len() + profile.reserved_len() + 8 + cell_bytes + TRAILER_LEN,
    );
    b.extend_from_slice(label.as_bytes());
    b.resize(b.len() + profile.reserved_len(), 0);
    b.extend_from_slice(&cfg.scale().to_le_bytes());
    b.resize(b.len() + cell_bytes + TRAILER_LEN, 0);
    b
}
