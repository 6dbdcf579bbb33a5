//! Packed 32-bit ARGB colors.
//!
//! Layout is `0xAARRGGBB`. Everything this workspace produces is opaque
//! (`alpha == 0xFF`).

use crate::{ParseColorError, ParseResult};

/// Opaque black.
pub const BLACK: u32 = 0xFF00_0000;

/// Opaque white.
pub const WHITE: u32 = 0xFFFF_FFFF;

/// Packs opaque 8-bit channels into ARGB.
///
/// ```rust
/// use hct_transfer::argb_from_rgb;
///
/// assert_eq!(argb_from_rgb(0x12, 0x34, 0x56), 0xFF12_3456);
/// ```
#[inline]
pub const fn argb_from_rgb(red: u8, green: u8, blue: u8) -> u32 {
    0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

/// Alpha channel.
#[inline]
pub const fn alpha_from_argb(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Red channel.
#[inline]
pub const fn red_from_argb(argb: u32) -> u8 {
    (argb >> 16) as u8
}

/// Green channel.
#[inline]
pub const fn green_from_argb(argb: u32) -> u8 {
    (argb >> 8) as u8
}

/// Blue channel.
#[inline]
pub const fn blue_from_argb(argb: u32) -> u8 {
    argb as u8
}

/// True if alpha is 0xFF.
#[inline]
pub const fn is_opaque(argb: u32) -> bool {
    alpha_from_argb(argb) == 0xFF
}

/// Formats as `#rrggbb`, dropping alpha.
///
/// ```rust
/// use hct_transfer::hex_from_argb;
///
/// assert_eq!(hex_from_argb(0xFF00_00FF), "#0000ff");
/// ```
pub fn hex_from_argb(argb: u32) -> String {
    format!("#{:06x}", argb & 0x00FF_FFFF)
}

/// Parses `#rgb`, `#rrggbb` or `#aarrggbb` (the `#` is optional).
///
/// Three and six digit forms are opaque.
///
/// ```rust
/// use hct_transfer::argb_from_hex;
///
/// assert_eq!(argb_from_hex("#0000ff").unwrap(), 0xFF00_00FF);
/// assert_eq!(argb_from_hex("f0a").unwrap(), 0xFFFF_00AA);
/// assert_eq!(argb_from_hex("#80ff0000").unwrap(), 0x80FF_0000);
/// assert!(argb_from_hex("#12345").is_err());
/// ```
pub fn argb_from_hex(hex: &str) -> ParseResult<u32> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(hex.to_string()));
    }
    let value = |s: &str| u32::from_str_radix(s, 16).map_err(|_| ParseColorError::InvalidDigit(hex.to_string()));
    match digits.len() {
        3 => {
            let mut argb = 0xFF00_0000;
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16).unwrap_or(0);
                argb |= (v * 0x11) << (16 - 8 * i);
            }
            Ok(argb)
        }
        6 => Ok(0xFF00_0000 | value(digits)?),
        8 => value(digits),
        len => Err(ParseColorError::InvalidLength {
            input: hex.to_string(),
            len,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let argb = 0x80_12_34_56;
        assert_eq!(alpha_from_argb(argb), 0x80);
        assert_eq!(red_from_argb(argb), 0x12);
        assert_eq!(green_from_argb(argb), 0x34);
        assert_eq!(blue_from_argb(argb), 0x56);
        assert!(!is_opaque(argb));
        assert!(is_opaque(BLACK));
    }

    #[test]
    fn test_hex_roundtrip() {
        for argb in [BLACK, WHITE, 0xFF12_3456, 0xFFAB_CDEF] {
            assert_eq!(argb_from_hex(&hex_from_argb(argb)).unwrap(), argb);
        }
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(
            argb_from_hex("#12"),
            Err(ParseColorError::InvalidLength {
                input: "#12".to_string(),
                len: 2
            })
        );
        assert!(matches!(argb_from_hex("#zzzzzz"), Err(ParseColorError::InvalidDigit(_))));
        assert!(matches!(argb_from_hex("#+12345"), Err(ParseColorError::InvalidDigit(_))));
    }
}
