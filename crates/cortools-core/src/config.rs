// crates/cortools-core/src/config.rs
//
// Explicit per-call settings. Nothing here is global; callers build a value
// and pass it into decode/extract/encode.

/// Lens size used when none (or a nonsensical one) is supplied.
pub const DEFAULT_LENS_SIZE_MM: f64 = 150.0;

/// Byte layout of the capture link header, which depends on the host that
/// recorded the traffic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ComputerProfile {
    #[default]
    Intel,
    Mac,
    M1,
}

impl ComputerProfile {
    /// Offset of the byte holding endpoint (low 7 bits) and direction (high nibble).
    pub fn endpoint_offset(self) -> usize {
        match self {
            ComputerProfile::Intel => 21,
            ComputerProfile::Mac | ComputerProfile::M1 => 30,
        }
    }

    /// Offset where the application payload begins.
    pub fn payload_offset(self) -> usize {
        match self {
            ComputerProfile::Intel => 27,
            ComputerProfile::Mac => 32,
            ComputerProfile::M1 => 40,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ComputerProfile::Intel => "intel",
            ComputerProfile::Mac => "mac",
            ComputerProfile::M1 => "m1",
        }
    }
}

/// Settings for writing an uncalibrated template.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TemplateConfig {
    pub lens_size_mm: f64,
}

impl TemplateConfig {
    /// Non-finite or non-positive sizes fall back to [`DEFAULT_LENS_SIZE_MM`].
    pub fn new(lens_size_mm: f64) -> Self {
        if lens_size_mm.is_finite() && lens_size_mm > 0.0 {
            Self { lens_size_mm }
        } else {
            log::warn!(
                "invalid lens size {lens_size_mm}; using default {DEFAULT_LENS_SIZE_MM} mm"
            );
            Self::default()
        }
    }

    /// Stored scale factor: units per millimeter of scan field.
    pub fn scale(&self) -> f64 {
        crate::grid::FULL_SCALE / self.lens_size_mm
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            lens_size_mm: DEFAULT_LENS_SIZE_MM,
        }
    }
}

/// Panel arrangement for the render hand-off.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// (rows, cols) of the panel layout for `count` panels.
    pub fn layout(self, count: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, count),
            Orientation::Vertical => (count, 1),
        }
    }
}
