// crates/cortools-core/src/format/mod.rs

pub mod decode;
pub mod encode;
pub mod label;

pub use decode::{decode, decode_body, CorrectionTable};
pub use encode::write_template;
pub use label::{detect, FormatProfile, Label, ScaleLocation, SignConvention, LABEL_LEN};

use crate::error::{CorError, Result};

fn need(bytes: &[u8], i: usize, n: usize, what: &'static str) -> Result<()> {
    if bytes.len() < i + n {
        return Err(CorError::Truncated {
            what,
            needed: i + n,
            available: bytes.len(),
        });
    }
    Ok(())
}

fn read_f64(bytes: &[u8], i: &mut usize, what: &'static str) -> Result<f64> {
    need(bytes, *i, 8, what)?;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[*i..*i + 8]);
    *i += 8;
    Ok(f64::from_le_bytes(raw))
}

fn read_i32(bytes: &[u8], i: &mut usize, what: &'static str) -> Result<i32> {
    need(bytes, *i, 4, what)?;
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[*i..*i + 4]);
    *i += 4;
    Ok(i32::from_le_bytes(raw))
}
