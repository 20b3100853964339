// crates/cortools-core/src/capture/frame.rs
//
// Correction samples sent host -> scanner on endpoint 2 as 12-byte payloads:
//   marker[2] = 10 00, x:u16le, y:u16le, unused[6]

use crate::capture::pcap::PcapReader;
use crate::config::ComputerProfile;
use crate::error::Result;
use crate::grid::Displacement;

pub const SAMPLE_ENDPOINT: u8 = 2;
pub const SAMPLE_DIRECTION: u8 = 0;
pub const SAMPLE_PAYLOAD_LEN: usize = 12;
pub const SAMPLE_MARKER: [u8; 2] = [0x10, 0x00];

/// One capture record split per the recording host's link header layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CaptureFrame<'a> {
    pub endpoint: u8,
    pub direction: u8,
    pub payload: &'a [u8],
}

impl<'a> CaptureFrame<'a> {
    /// `None` when the packet is too short to hold the endpoint byte.
    pub fn parse(packet: &'a [u8], profile: ComputerProfile) -> Option<Self> {
        let ep = *packet.get(profile.endpoint_offset())?;
        let payload = packet.get(profile.payload_offset()..).unwrap_or(&[]);
        Some(Self {
            endpoint: ep & 0x7F,
            direction: ep & 0xF0,
            payload,
        })
    }

    pub fn is_correction_sample(&self) -> bool {
        self.endpoint == SAMPLE_ENDPOINT
            && self.direction == SAMPLE_DIRECTION
            && self.payload.len() == SAMPLE_PAYLOAD_LEN
            && self.payload[..2] == SAMPLE_MARKER
    }

    pub fn sample(&self) -> Option<Displacement> {
        if !self.is_correction_sample() {
            return None;
        }
        let x = u16::from_le_bytes([self.payload[2], self.payload[3]]);
        let y = u16::from_le_bytes([self.payload[4], self.payload[5]]);
        Some(Displacement::new(unsign_sample(x), unsign_sample(y)))
    }
}

/// Values at or above 0x8000 are negatives stored as `0x8000 - v`.
pub fn unsign_sample(raw: u16) -> i64 {
    let v = i64::from(raw);
    if v >= 0x8000 {
        0x8000 - v
    } else {
        v
    }
}

/// Accepted samples from a packet sequence, in arrival order.
pub fn samples<'a, I>(packets: I, profile: ComputerProfile) -> impl Iterator<Item = Displacement> + 'a
where
    I: IntoIterator<Item = &'a [u8]>,
    I::IntoIter: 'a,
{
    packets
        .into_iter()
        .filter_map(move |p| CaptureFrame::parse(p, profile))
        .filter_map(|f| f.sample())
}

/// Samples recovered from one capture. Length varies with the capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureSamples {
    pub frames_seen: usize,
    pub samples: Vec<Displacement>,
}

/// Read a pcap capture and pull out every correction sample.
pub fn extract(bytes: &[u8], profile: ComputerProfile) -> Result<CaptureSamples> {
    let reader = PcapReader::new(bytes)?;
    let mut frames_seen = 0usize;
    let mut samples = Vec::new();
    for packet in reader.packets() {
        frames_seen += 1;
        if let Some(s) = CaptureFrame::parse(packet, profile).and_then(|f| f.sample()) {
            samples.push(s);
        }
    }

    log::debug!(
        "capture ({}): {} frames, {} correction samples",
        profile.name(),
        frames_seen,
        samples.len()
    );

    Ok(CaptureSamples { frames_seen, samples })
}
