//! Published professional-player share codes decoded field by field.

use crosshair_code_core::{
    bytes_to_share_code, decode_share_code, encode_crosshair, share_code_to_bytes, Style,
};

const PRO_CODES: [&str; 9] = [
    "CSGO-FENf8-KfNms-f3uU4-ds97r-kZ2UO",
    "CSGO-4ttyQ-vfwMK-Gz9fL-hY6zW-4fWjM",
    "CSGO-wAD3c-ykt5L-zvZ98-vBisR-6sWPA",
    "CSGO-nCfX7-54ue9-aC5eV-6Womf-Q6izO",
    "CSGO-ANFqt-s6dDk-cZGKb-dMXSu-wzUrC",
    "CSGO-2R3RD-dBh8Z-mBZZU-yA5mE-bkMHA",
    "CSGO-9Xqnn-EfrJy-eq2pc-M8Yxa-zqLDR",
    "CSGO-RGiBp-OXkpB-BqZwB-BRBvu-zwsyM",
    "CSGO-3ZkVZ-TKBxe-Zhs8C-m2Cy7-b2D7K",
];

// ---------------------------------------------------------------------------
// Whole-set properties
// ---------------------------------------------------------------------------

#[test]
fn every_pro_code_decodes_with_valid_checksum() {
    for code in PRO_CODES {
        let decoded = decode_share_code(code).expect("pro code must decode");
        assert!(decoded.checksum_ok(), "checksum mismatch for {code}");
        assert!(decoded.crosshair.style <= 5, "style out of range for {code}");
    }
}

#[test]
fn every_pro_code_bytes_render_back_to_same_text() {
    for code in PRO_CODES {
        let bytes = share_code_to_bytes(code).unwrap();
        assert_eq!(bytes[1], 1, "version byte for {code}");
        assert_eq!(bytes_to_share_code(&bytes), code);
    }
}

#[test]
fn every_pro_code_survives_record_reencode() {
    for code in PRO_CODES {
        let first = decode_share_code(code).unwrap().crosshair;
        let again = decode_share_code(&encode_crosshair(&first)).unwrap();
        assert!(again.checksum_ok());
        assert_eq!(again.crosshair, first, "record drift for {code}");
    }
}

// ---------------------------------------------------------------------------
// Field-level vectors
// ---------------------------------------------------------------------------

#[test]
fn flamez_code_fields() {
    let c = decode_share_code("CSGO-ANFqt-s6dDk-cZGKb-dMXSu-wzUrC")
        .unwrap()
        .crosshair;
    assert_eq!(c.gap, -2.0);
    assert_eq!(c.outline_thickness, 1.0);
    assert_eq!(c.color_index, 4);
    assert_eq!(c.rgb(), [0, 255, 255]);
    assert_eq!(c.alpha, 255);
    assert_eq!(c.split_distance, 3);
    assert!(!c.follow_recoil);
    assert_eq!(c.fixed_crosshair_gap, 3.0);
    assert!(!c.outline_enabled);
    assert_eq!(c.inner_split_alpha, 0.0);
    assert_eq!(c.outer_split_alpha, 1.0);
    assert_eq!(c.split_size_ratio, 1.0);
    assert_eq!(c.thickness, 0.6);
    assert_eq!(c.style_kind(), Some(Style::Legacy));
    assert!(c.center_dot_enabled);
    assert!(!c.deployed_weapon_gap_enabled);
    assert!(c.alpha_enabled);
    assert!(!c.t_style_enabled);
    assert_eq!(c.size, 1.5);
}

#[test]
fn preset_index_replaces_embedded_rgb() {
    // Bytes 4..6 carry (0, 255, 135) but the colour index selects yellow.
    let bytes = share_code_to_bytes("CSGO-4ttyQ-vfwMK-Gz9fL-hY6zW-4fWjM").unwrap();
    assert_eq!(&bytes[4..7], &[0, 255, 135]);
    let c = decode_share_code("CSGO-4ttyQ-vfwMK-Gz9fL-hY6zW-4fWjM")
        .unwrap()
        .crosshair;
    assert_eq!(c.color_index, 2);
    assert_eq!(c.rgb(), [255, 255, 0]);
    assert_eq!(c.gap, -4.0);
    assert_eq!(c.split_distance, 7);
    assert_eq!(c.inner_split_alpha, 1.0);
    assert_eq!(c.outer_split_alpha, 0.5);
    assert_eq!(c.split_size_ratio, 0.3);
}

#[test]
fn custom_color_code_keeps_rgb() {
    let c = decode_share_code("CSGO-3ZkVZ-TKBxe-Zhs8C-m2Cy7-b2D7K")
        .unwrap()
        .crosshair;
    assert!(c.uses_custom_color());
    assert_eq!(c.rgb(), [0, 255, 145]);
}

#[test]
fn negative_fixed_gap_and_outline_flag() {
    let c = decode_share_code("CSGO-RGiBp-OXkpB-BqZwB-BRBvu-zwsyM")
        .unwrap()
        .crosshair;
    assert_eq!(c.fixed_crosshair_gap, -9.0);
    assert!(c.outline_enabled);
    assert_eq!(c.outline_thickness, 0.0);
}
