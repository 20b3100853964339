// crates/cortools-core/tests/capture_extract.rs

use cortools_core::capture::extract;
use cortools_core::color::colorize;
use cortools_core::{ComputerProfile, CorError, Displacement};

fn pcap(packets: &[Vec<u8>]) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&0xa1b2_c3d4u32.to_le_bytes());
    b.extend_from_slice(&2u16.to_le_bytes());
    b.extend_from_slice(&4u16.to_le_bytes());
    b.extend_from_slice(&[0u8; 8]);
    b.extend_from_slice(&65535u32.to_le_bytes());
    b.extend_from_slice(&249u32.to_le_bytes());
    for (n, p) in packets.iter().enumerate() {
        b.extend_from_slice(&(n as u32).to_le_bytes());
        b.extend_from_slice(&0u32.to_le_bytes());
        b.extend_from_slice(&(p.len() as u32).to_le_bytes());
        b.extend_from_slice(&(p.len() as u32).to_le_bytes());
        b.extend_from_slice(p);
    }
    b
}

fn packet(profile: ComputerProfile, ep_byte: u8, payload: &[u8]) -> Vec<u8> {
    let mut p = vec![0u8; profile.payload_offset()];
    p[profile.endpoint_offset()] = ep_byte;
    p.extend_from_slice(payload);
    p
}

fn sample_payload(x: u16, y: u16) -> Vec<u8> {
    let mut p = vec![0x10, 0x00];
    p.extend_from_slice(&x.to_le_bytes());
    p.extend_from_slice(&y.to_le_bytes());
    p.extend_from_slice(&[0xEE; 6]);
    p
}

#[test]
fn keeps_only_outbound_samples_in_arrival_order() {
    for profile in [ComputerProfile::Intel, ComputerProfile::Mac, ComputerProfile::M1] {
        let packets = vec![
            packet(profile, 0x02, &sample_payload(5, 0)),
            packet(profile, 0x82, &sample_payload(9, 9)),
            packet(profile, 0x01, &sample_payload(9, 9)),
            packet(profile, 0x02, &[0x10, 0x00, 1, 0]),
            packet(profile, 0x02, &sample_payload(0x8003, 0x0002)),
            vec![0u8; 8],
            packet(profile, 0x02, &sample_payload(0x0010, 0xFFFF)),
        ];

        let got = extract(&pcap(&packets), profile).unwrap();
        assert_eq!(got.frames_seen, 7);
        assert_eq!(
            got.samples,
            vec![
                Displacement::new(5, 0),
                Displacement::new(-3, 2),
                Displacement::new(16, -0x7FFF),
            ],
            "profile {}",
            profile.name()
        );
    }
}

#[test]
fn sample_count_is_not_tied_to_grid_size() {
    let packets: Vec<Vec<u8>> = (0..10u16)
        .map(|n| packet(ComputerProfile::Intel, 0x02, &sample_payload(n, n * 2)))
        .collect();
    let got = extract(&pcap(&packets), ComputerProfile::Intel).unwrap();
    assert_eq!(got.samples.len(), 10);

    let map = colorize(&got.samples).unwrap();
    assert_eq!(map.colors.len(), 10);
    assert_eq!(map.stats.max_x, 9);
    assert_eq!(map.stats.max_y, 18);
}

#[test]
fn capture_without_samples_cannot_be_colored() {
    let packets = vec![packet(ComputerProfile::Intel, 0x81, &sample_payload(1, 1))];
    let got = extract(&pcap(&packets), ComputerProfile::Intel).unwrap();
    assert!(got.samples.is_empty());
    assert!(matches!(colorize(&got.samples), Err(CorError::NoSamples)));
}
