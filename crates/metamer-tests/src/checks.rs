//! Shared assertions

use metamer_core::Rgb;

/// Components in `[0, 1]` with the largest exactly 1
pub fn assert_normalized(rgb: Rgb) {
    assert!(rgb.is_in_gamut(), "{rgb} is outside [0, 1]");
    assert_eq!(rgb.max_component(), 1.0, "brightest channel of {rgb}");
}

/// Parse `#rrggbb` into its channels, panicking on anything else
pub fn hex_channels(hex: &str) -> [u8; 3] {
    Rgb::hex_to_u8(hex).unwrap_or_else(|| panic!("not a #rrggbb colour: {hex:?}"))
}
