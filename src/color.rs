use crate::ease::Ease;
use crate::error::{DriftglowError, DriftglowResult};

/// Straight (non-premultiplied) RGB triple, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully black; pairs with alpha 0 for the transparent outer gradient stop.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Parse a strict 6-digit `#RRGGBB` color (case-insensitive).
    pub fn from_hex(s: &str) -> DriftglowResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(DriftglowError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> DriftglowResult<u8> {
            u8::from_str_radix(pair, 16).map_err(|_| {
                DriftglowError::validation(format!("invalid hex byte \"{pair}\""))
            })
        }

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    /// Re-encode as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cubic-eased blend between two colors.
///
/// `t` is eased with `InCubic` (t^3) before the per-channel lerp, so the blend
/// leaves `a` slowly and rushes into `b` near the end of the cycle.
pub fn blend(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = Ease::InCubic.apply(t);

    fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    }

    Rgb {
        r: lerp_u8(a.r, b.r, t),
        g: lerp_u8(a.g, b.g, t),
        b: lerp_u8(a.b, b.b, t),
    }
}

/// One two-color interpolation pair from the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PalettePair {
    pub a: Rgb,
    pub b: Rgb,
}

/// The six fixed pairs every blob cycles through.
pub const PALETTE: [PalettePair; 6] = [
    PalettePair {
        a: Rgb::new(0xFF, 0x57, 0x33),
        b: Rgb::new(0xC7, 0x00, 0x39),
    },
    PalettePair {
        a: Rgb::new(0x90, 0x0C, 0x3F),
        b: Rgb::new(0x58, 0x18, 0x45),
    },
    PalettePair {
        a: Rgb::new(0x1D, 0x4E, 0xD8),
        b: Rgb::new(0x4B, 0x91, 0xF3),
    },
    PalettePair {
        a: Rgb::new(0x38, 0xA1, 0xDB),
        b: Rgb::new(0x63, 0xB7, 0xD0),
    },
    PalettePair {
        a: Rgb::new(0x6E, 0xE7, 0xB7),
        b: Rgb::new(0x10, 0xB9, 0x81),
    },
    PalettePair {
        a: Rgb::new(0xD4, 0xAF, 0x37),
        b: Rgb::new(0xDA, 0xA5, 0x20),
    },
];

/// Pick a uniformly random palette pair.
pub fn random_pair(rng: &mut fastrand::Rng) -> PalettePair {
    PALETTE[rng.usize(..PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE_HEX: [[&str; 2]; 6] = [
        ["#FF5733", "#C70039"],
        ["#900C3F", "#581845"],
        ["#1D4ED8", "#4B91F3"],
        ["#38A1DB", "#63B7D0"],
        ["#6EE7B7", "#10B981"],
        ["#D4AF37", "#DAA520"],
    ];

    #[test]
    fn palette_hex_round_trips() {
        for (pair, hex) in PALETTE.iter().zip(PALETTE_HEX) {
            for (color, s) in [(pair.a, hex[0]), (pair.b, hex[1])] {
                let decoded = Rgb::from_hex(s).unwrap();
                assert_eq!(decoded, color);
                assert_eq!(decoded.to_hex(), s.to_lowercase());
            }
        }
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#1234567").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn blend_endpoints_are_exact() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(250, 0, 90);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn blend_midpoint_is_biased_toward_first_color() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 200, 200);
        let mid = blend(a, b, 0.5);
        // 0.5^3 = 0.125, so the eased midpoint sits well below the linear 100.
        assert_eq!(mid.r, 25);
        assert!(u16::from(mid.r) < 100);
    }

    #[test]
    fn random_pair_stays_in_palette() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..64 {
            let pair = random_pair(&mut rng);
            assert!(PALETTE.contains(&pair));
        }
    }
}
