// crates/cortools-core/src/capture/pcap.rs
//
// Classic libpcap container.
// Global header (24 bytes):
//   magic:u32 version_major:u16 version_minor:u16 thiszone:i32 sigfigs:u32
//   snaplen:u32 linktype:u32
// Record header (16 bytes):
//   ts_sec:u32 ts_frac:u32 incl_len:u32 orig_len:u32, then incl_len bytes.
// Byte order of every field follows the byte order the magic was written in.

use crate::error::{CorError, Result};

const MAGIC_USEC: u32 = 0xa1b2_c3d4;
const MAGIC_NSEC: u32 = 0xa1b2_3c4d;
const MAGIC_PCAPNG: u32 = 0x0a0d_0d0a;

pub const GLOBAL_HEADER_LEN: usize = 24;
pub const RECORD_HEADER_LEN: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    fn u16_at(self, b: &[u8], i: usize) -> u16 {
        let raw = [b[i], b[i + 1]];
        match self {
            ByteOrder::Little => u16::from_le_bytes(raw),
            ByteOrder::Big => u16::from_be_bytes(raw),
        }
    }

    fn u32_at(self, b: &[u8], i: usize) -> u32 {
        let raw = [b[i], b[i + 1], b[i + 2], b[i + 3]];
        match self {
            ByteOrder::Little => u32::from_le_bytes(raw),
            ByteOrder::Big => u32::from_be_bytes(raw),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PcapHeader {
    pub order: ByteOrder,
    pub nanosecond: bool,
    pub version_major: u16,
    pub version_minor: u16,
    pub snaplen: u32,
    pub linktype: u32,
}

/// Borrowing reader over an in-memory capture.
#[derive(Clone, Debug)]
pub struct PcapReader<'a> {
    header: PcapHeader,
    records: &'a [u8],
}

impl<'a> PcapReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < GLOBAL_HEADER_LEN {
            return Err(CorError::Capture(format!(
                "global header needs {GLOBAL_HEADER_LEN} bytes, have {}",
                bytes.len()
            )));
        }

        let le = ByteOrder::Little.u32_at(bytes, 0);
        let be = ByteOrder::Big.u32_at(bytes, 0);
        let (order, nanosecond) = match (le, be) {
            (MAGIC_USEC, _) => (ByteOrder::Little, false),
            (MAGIC_NSEC, _) => (ByteOrder::Little, true),
            (_, MAGIC_USEC) => (ByteOrder::Big, false),
            (_, MAGIC_NSEC) => (ByteOrder::Big, true),
            (MAGIC_PCAPNG, _) => {
                return Err(CorError::Capture("pcapng captures are not supported".into()))
            }
            _ => return Err(CorError::Capture(format!("bad pcap magic 0x{le:08x}"))),
        };

        let header = PcapHeader {
            order,
            nanosecond,
            version_major: order.u16_at(bytes, 4),
            version_minor: order.u16_at(bytes, 6),
            snaplen: order.u32_at(bytes, 16),
            linktype: order.u32_at(bytes, 20),
        };

        Ok(Self {
            header,
            records: &bytes[GLOBAL_HEADER_LEN..],
        })
    }

    pub fn header(&self) -> &PcapHeader {
        &self.header
    }

    /// Lazily walk record payloads in file order.
    pub fn packets(&self) -> Packets<'a> {
        Packets {
            order: self.header.order,
            rest: self.records,
        }
    }
}

/// Iterator over packet data slices. Stops at the first record that is cut short.
#[derive(Clone, Debug)]
pub struct Packets<'a> {
    order: ByteOrder,
    rest: &'a [u8],
}

impl<'a> Iterator for Packets<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        if self.rest.len() < RECORD_HEADER_LEN {
            log::warn!(
                "capture ends inside a record header ({} trailing bytes)",
                self.rest.len()
            );
            self.rest = &[];
            return None;
        }

        let incl_len = self.order.u32_at(self.rest, 8) as usize;
        let body = &self.rest[RECORD_HEADER_LEN..];
        if body.len() < incl_len {
            log::warn!(
                "capture ends inside a record (need {incl_len} bytes, have {})",
                body.len()
            );
            self.rest = &[];
            return None;
        }

        let (packet, rest) = body.split_at(incl_len);
        self.rest = rest;
        Some(packet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_header_le(magic: u32) -> Vec<u8> {
        let mut b = Vec::new();
        b.extend_from_slice(&magic.to_le_bytes());
        b.extend_from_slice(&2u16.to_le_bytes());
        b.extend_from_slice(&4u16.to_le_bytes());
        b.extend_from_slice(&0i32.to_le_bytes());
        b.extend_from_slice(&0u32.to_le_bytes());
        b.extend_from_slice(&65535u32.to_le_bytes());
        b.extend_from_slice(&220u32.to_le_bytes());
        b
    }

    fn record_le(b: &mut Vec<u8>, data: &[u8]) {
        b.extend_from_slice(&1u32.to_le_bytes());
        b.extend_from_slice(&2u32.to_le_bytes());
        b.extend_from_slice(&(data.len() as u32).to_le_bytes());
        b.extend_from_slice(&(data.len() as u32).to_le_bytes());
        b.extend_from_slice(data);
    }

    #[test]
    fn reads_little_endian_records_in_order() {
        let mut b = global_header_le(MAGIC_USEC);
        record_le(&mut b, b"first");
        record_le(&mut b, b"");
        record_le(&mut b, b"third!");

        let r = PcapReader::new(&b).unwrap();
        assert_eq!(r.header().order, ByteOrder::Little);
        assert!(!r.header().nanosecond);
        assert_eq!(r.header().linktype, 220);

        let got: Vec<&[u8]> = r.packets().collect();
        assert_eq!(got, vec![&b"first"[..], &b""[..], &b"third!"[..]]);
    }

    #[test]
    fn reads_big_endian_nanosecond_header() {
        let mut b = Vec::new();
        b.extend_from_slice(&MAGIC_NSEC.to_be_bytes());
        b.extend_from_slice(&2u16.to_be_bytes());
        b.extend_from_slice(&4u16.to_be_bytes());
        b.extend_from_slice(&[0u8; 8]);
        b.extend_from_slice(&65535u32.to_be_bytes());
        b.extend_from_slice(&1u32.to_be_bytes());
        b.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0]);
        b.extend_from_slice(&3u32.to_be_bytes());
        b.extend_from_slice(&3u32.to_be_bytes());
        b.extend_from_slice(b"abc");

        let r = PcapReader::new(&b).unwrap();
        assert_eq!(r.header().order, ByteOrder::Big);
        assert!(r.header().nanosecond);
        assert_eq!(r.header().version_major, 2);
        assert_eq!(r.packets().collect::<Vec<_>>(), vec![&b"abc"[..]]);
    }

    #[test]
    fn truncated_trailing_record_ends_iteration() {
        let mut b = global_header_le(MAGIC_USEC);
        record_le(&mut b, b"whole");
        let keep = b.len();
        record_le(&mut b, b"partial-record");
        b.truncate(keep + RECORD_HEADER_LEN + 3);

        let r = PcapReader::new(&b).unwrap();
        assert_eq!(r.packets().count(), 1);
    }

    #[test]
    fn rejects_bad_magic_and_pcapng() {
        let b = global_header_le(0xdead_beef);
        assert!(matches!(PcapReader::new(&b), Err(CorError::Capture(_))));

        let ng = global_header_le(MAGIC_PCAPNG);
        match PcapReader::new(&ng) {
            Err(CorError::Capture(msg)) => assert!(msg.contains("pcapng")),
            other => panic!("expected Capture error, got {other:?}"),
        }

        assert!(matches!(PcapReader::new(&[0u8; 10]), Err(CorError::Capture(_))));
    }
}
