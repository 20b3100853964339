// crates/cortools-core/src/capture/mod.rs

pub mod frame;
pub mod pcap;

pub use frame::{extract, samples, CaptureFrame, CaptureSamples};
pub use pcap::{PcapHeader, PcapReader};
