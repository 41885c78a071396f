use core::fmt;

use bitflags::bitflags;

/// Coefficients are 1.4 fixed point and saturate at 16/16.
const COEFF_MAX: u8 = 16;

bitflags! {
    /// Blend target mask, one per `BLDCNT` byte half.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BlendTarget: u8 {
        const BG0 = 1 << 0;
        const BG1 = 1 << 1;
        const BG2 = 1 << 2;
        const BG3 = 1 << 3;
        const OBJ = 1 << 4;
        const BACKDROP = 1 << 5;
    }
}

/// Color special effect selected by `BLDCNT` bits 6-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendEffect {
    #[default]
    None,
    Alpha,
    Brighten,
    Darken,
}

impl fmt::Display for BlendEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlendEffect::None => "none",
            BlendEffect::Alpha => "alpha",
            BlendEffect::Brighten => "brighten",
            BlendEffect::Darken => "darken",
        };
        f.write_str(s)
    }
}

/// Decoded `BLDCNT`.
///
/// ```text
/// F E D C B A 9 8 7 6 5 4 3 2 1 0
/// . . b O 3 2 1 0 E E b O 3 2 1 0
///     \-second-/      \-first--/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlendControl(u16);

impl BlendControl {
    pub fn from_bits(value: u16) -> Self {
        Self(value)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn first_target(self) -> BlendTarget {
        BlendTarget::from_bits_retain(self.0 as u8 & 0x3F)
    }

    pub fn second_target(self) -> BlendTarget {
        BlendTarget::from_bits_retain((self.0 >> 8) as u8 & 0x3F)
    }

    pub fn effect(self) -> BlendEffect {
        match (self.0 >> 6) & 0b11 {
            0 => BlendEffect::None,
            1 => BlendEffect::Alpha,
            2 => BlendEffect::Brighten,
            _ => BlendEffect::Darken,
        }
    }
}

/// Decoded `BLDALPHA`: EVA in bits 0-4, EVB in bits 8-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlendAlpha {
    pub eva: u8,
    pub evb: u8,
}

impl BlendAlpha {
    pub fn from_bits(value: u16) -> Self {
        Self {
            eva: value as u8 & 0x1F,
            evb: (value >> 8) as u8 & 0x1F,
        }
    }

    /// First-target weight in sixteenths, saturated at 16.
    pub fn eva_coeff(self) -> u8 {
        self.eva.min(COEFF_MAX)
    }

    /// Second-target weight in sixteenths, saturated at 16.
    pub fn evb_coeff(self) -> u8 {
        self.evb.min(COEFF_MAX)
    }
}

/// Decoded `BLDY`: EVY in bits 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Brightness {
    pub evy: u8,
}

impl Brightness {
    pub fn from_bits(value: u16) -> Self {
        Self {
            evy: value as u8 & 0x1F,
        }
    }

    pub fn coeff(self) -> u8 {
        self.evy.min(COEFF_MAX)
    }
}
