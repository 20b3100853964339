// crates/cortools-core/src/format/label.rs

use std::fmt;

use crate::error::{CorError, Result};

/// Bytes at the head of every correction file naming its creator/format.
pub const LABEL_LEN: usize = 22;

/// Leading label bytes compared against the known tags.
pub const MAGIC_LEN: usize = 12;

pub const MAGIC_V1: &[u8; MAGIC_LEN] = b"LMC1COR_1.0\0";
pub const MAGIC_V2: &[u8; MAGIC_LEN] = b"JCZ_COR_2_1\0";

/// Raw 22-byte file label, kept verbatim for diagnostics.
#[derive(Clone, PartialEq, Eq)]
pub struct Label([u8; LABEL_LEN]);

impl Label {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < LABEL_LEN {
            return Err(CorError::Truncated {
                what: "label",
                needed: LABEL_LEN,
                available: bytes.len(),
            });
        }
        let mut raw = [0u8; LABEL_LEN];
        raw.copy_from_slice(&bytes[..LABEL_LEN]);
        Ok(Self(raw))
    }

    /// Canonical label for a profile: magic tag padded with zeros.
    pub fn for_profile(profile: FormatProfile) -> Self {
        let mut raw = [0u8; LABEL_LEN];
        raw[..MAGIC_LEN].copy_from_slice(profile.magic());
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8; LABEL_LEN] {
        &self.0
    }

    pub fn magic(&self) -> &[u8] {
        &self.0[..MAGIC_LEN]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.0.escape_ascii())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({self})")
    }
}

/// How a version stores negative displacements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SignConvention {
    /// Negative `v` stored as `-v + 0x8000`, everything masked to 16 bits.
    OffsetMasked16,
    /// Stored value is the negated displacement.
    Negated,
}

/// Where the scale factor lives in the reserved header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScaleLocation {
    /// Entry `index` of a table of `len` little-endian f64 values.
    Table { len: usize, index: usize },
    /// A single little-endian f64.
    Single,
}

/// Known correction table encodings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatProfile {
    V1,
    V2,
}

impl FormatProfile {
    pub fn magic(self) -> &'static [u8; MAGIC_LEN] {
        match self {
            FormatProfile::V1 => MAGIC_V1,
            FormatProfile::V2 => MAGIC_V2,
        }
    }

    /// Reserved bytes between the label and the scale data.
    pub fn reserved_len(self) -> usize {
        match self {
            FormatProfile::V1 => 2,
            FormatProfile::V2 => 6,
        }
    }

    /// Width in bytes of one stored dx or dy.
    pub fn field_width(self) -> usize {
        match self {
            FormatProfile::V1 => 8,
            FormatProfile::V2 => 4,
        }
    }

    pub fn sign_convention(self) -> SignConvention {
        match self {
            FormatProfile::V1 => SignConvention::OffsetMasked16,
            FormatProfile::V2 => SignConvention::Negated,
        }
    }

    pub fn scale_location(self) -> ScaleLocation {
        match self {
            FormatProfile::V1 => ScaleLocation::Table { len: 63, index: 43 },
            FormatProfile::V2 => ScaleLocation::Single,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormatProfile::V1 => "cor-v1",
            FormatProfile::V2 => "cor-v2",
        }
    }
}

/// Pick the profile whose magic tag opens the label.
pub fn detect(label: &Label) -> Result<FormatProfile> {
    [FormatProfile::V1, FormatProfile::V2]
        .into_iter()
        .find(|p| label.magic() == p.magic())
        .ok_or_else(|| CorError::UnsupportedFormat {
            label: label.clone(),
        })
}
