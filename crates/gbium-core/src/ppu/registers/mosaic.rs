/// Decoded `MOSAIC` register.
///
/// Fields hold the raw nibbles; the block size in pixels is the value plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mosaic {
    pub bg_h: u8,
    pub bg_v: u8,
    pub obj_h: u8,
    pub obj_v: u8,
}

impl Mosaic {
    pub fn from_bits(value: u16) -> Self {
        Self {
            bg_h: (value & 0xF) as u8,
            bg_v: ((value >> 4) & 0xF) as u8,
            obj_h: ((value >> 8) & 0xF) as u8,
            obj_v: ((value >> 12) & 0xF) as u8,
        }
    }

    /// Background mosaic block as `(width, height)` in pixels.
    pub fn bg_block(self) -> (u8, u8) {
        (self.bg_h + 1, self.bg_v + 1)
    }

    /// OBJ mosaic block as `(width, height)` in pixels.
    pub fn obj_block(self) -> (u8, u8) {
        (self.obj_h + 1, self.obj_v + 1)
    }
}
