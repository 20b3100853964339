// crates/cortools-core/src/format/decode.rs
//
// V1 layout (little-endian):
//   label[22] reserved[2] scale_table: 63 x f64 (scale = [43])
//   cells: 4225 x { dx:f64 dy:f64 }
//
// V2 layout (little-endian):
//   label[22] reserved[6] scale:f64
//   cells: 4225 x { dx:i32 dy:i32 }
//   trailer[4]   (not read)

use crate::error::Result;
use crate::format::label::{detect, FormatProfile, Label, ScaleLocation, LABEL_LEN};
use crate::format::{need, read_f64, read_i32};
use crate::grid::{CorrectionGrid, Displacement, CELL_COUNT, FULL_SCALE};

/// A decoded correction file.
#[derive(Clone, Debug)]
pub struct CorrectionTable {
    pub profile: FormatProfile,
    pub label: Label,
    /// Reserved header bytes, unparsed.
    pub reserved: Vec<u8>,
    pub scale: f64,
    pub grid: CorrectionGrid,
}

impl CorrectionTable {
    /// Scan field size implied by the scale factor; `None` for a zero or non-finite scale.
    pub fn lens_size_mm(&self) -> Option<f64> {
        let mm = FULL_SCALE / self.scale;
        (mm.is_finite() && self.scale != 0.0).then_some(mm)
    }

    /// Reserved bytes as hex, grouped in 2-byte words.
    pub fn reserved_hex(&self) -> String {
        self.reserved
            .chunks(2)
            .map(|w| w.iter().map(|b| format!("{b:02x}")).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Detect the format from the label and decode the rest of the file.
pub fn decode(bytes: &[u8]) -> Result<CorrectionTable> {
    let label = Label::from_bytes(bytes)?;
    let profile = detect(&label)?;
    decode_body(profile, label, &bytes[LABEL_LEN..])
}

/// Decode everything after the label according to `profile`.
pub fn decode_body(profile: FormatProfile, label: Label, body: &[u8]) -> Result<CorrectionTable> {
    let mut i = 0usize;

    let reserved_len = profile.reserved_len();
    need(body, i, reserved_len, "reserved header")?;
    let reserved = body[..reserved_len].to_vec();
    i += reserved_len;

    let scale = read_scale(profile.scale_location(), body, &mut i)?;

    need(body, i, CELL_COUNT * 2 * profile.field_width(), "cell table")?;
    let cells = match profile {
        FormatProfile::V1 => v1_cells(body, &mut i)?,
        FormatProfile::V2 => v2_cells(body, &mut i)?,
    };

    Ok(CorrectionTable {
        profile,
        label,
        reserved,
        scale,
        grid: CorrectionGrid::from_cells(cells)?,
    })
}

fn v1_cells(body: &[u8], i: &mut usize) -> Result<Vec<Displacement>> {
    let mut cells = Vec::with_capacity(CELL_COUNT);
    for _ in 0..CELL_COUNT {
        let dx = read_f64(body, i, "cell table")?;
        let dy = read_f64(body, i, "cell table")?;
        cells.push(Displacement::new(unoffset_v1(dx), unoffset_v1(dy)));
    }
    Ok(cells)
}

fn v2_cells(body: &[u8], i: &mut usize) -> Result<Vec<Displacement>> {
    let mut cells = Vec::with_capacity(CELL_COUNT);
    for _ in 0..CELL_COUNT {
        let dx = read_i32(body, i, "cell table")?;
        let dy = read_i32(body, i, "cell table")?;
        cells.push(Displacement::new(-i64::from(dx), -i64::from(dy)));
    }
    Ok(cells)
}

fn read_scale(loc: ScaleLocation, body: &[u8], i: &mut usize) -> Result<f64> {
    match loc {
        ScaleLocation::Single => read_f64(body, i, "scale"),
        ScaleLocation::Table { len, index } => {
            need(body, *i, len * 8, "scale table")?;
            let mut scale = 0.0;
            for k in 0..len {
                let v = read_f64(body, i, "scale table")?;
                if k == index {
                    scale = v;
                }
            }
            Ok(scale)
        }
    }
}

/// V1 cell value: round half to even, negatives become `round(-v) + 0x8000`,
/// result masked to 16 bits. The sign is taken from the raw value, so anything
/// in (-0.5, 0) decodes to `0x8000`. Large negatives alias into the positive
/// range; that is how the format stores them. Out-of-range floats saturate
/// before masking.
pub fn unoffset_v1(raw: f64) -> i64 {
    let v = if raw < 0.0 {
        ((-raw).round_ties_even() as i64).wrapping_add(0x8000)
    } else {
        raw.round_ties_even() as i64
    };
    v & 0xFFFF
}
