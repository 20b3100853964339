// crates/cortools-core/tests/template_roundtrip.rs

use cortools_core::format::{decode, write_template};
use cortools_core::grid::CELL_COUNT;
use cortools_core::{Displacement, FormatProfile, TemplateConfig};

#[test]
fn template_decodes_as_v2_with_zero_grid() {
    for lens in [70.0, 110.0, 150.0, 163.3, 300.0] {
        let bytes = write_template(&TemplateConfig::new(lens));
        let table = decode(&bytes).expect("decode template");

        assert_eq!(table.profile, FormatProfile::V2);
        assert!((table.scale - 65536.0 / lens).abs() < 1e-9);
        assert!((table.lens_size_mm().unwrap() - lens).abs() < 1e-9);
        assert_eq!(table.reserved, vec![0u8; 6]);
        assert_eq!(table.grid.cells().len(), CELL_COUNT);
        assert!(table.grid.cells().iter().all(|d| *d == Displacement::new(0, 0)));
    }
}

#[test]
fn invalid_lens_size_writes_default_template() {
    let a = write_template(&TemplateConfig::new(-1.0));
    let b = write_template(&TemplateConfig::default());
    assert_eq!(a, b);
    let table = decode(&a).unwrap();
    assert!((table.lens_size_mm().unwrap() - 150.0).abs() < 1e-9);
}

#[test]
fn v2_cells_are_negated_without_masking() {
    let mut bytes = write_template(&TemplateConfig::new(150.0));
    let cells_at = 22 + 6 + 8;

    let raw: [(i32, i32); 4] = [(5, -7), (40000, -40000), (i32::MAX, i32::MIN), (-1, 0)];
    for (n, (dx, dy)) in raw.iter().enumerate() {
        let off = cells_at + n * 8;
        bytes[off..off + 4].copy_from_slice(&dx.to_le_bytes());
        bytes[off + 4..off + 8].copy_from_slice(&dy.to_le_bytes());
    }

    let table = decode(&bytes).unwrap();
    let cells = table.grid.cells();
    assert_eq!(cells[0], Displacement::new(-5, 7));
    assert_eq!(cells[1], Displacement::new(-40000, 40000));
    assert_eq!(cells[2], Displacement::new(-(i32::MAX as i64), 2_147_483_648));
    assert_eq!(cells[3], Displacement::new(1, 0));
    assert_eq!(cells[4], Displacement::new(0, 0));
}

#[test]
fn v2_trailer_is_optional() {
    let mut bytes = write_template(&TemplateConfig::default());
    bytes.truncate(bytes.len() - 4);
    assert!(decode(&bytes).is_ok());
}
