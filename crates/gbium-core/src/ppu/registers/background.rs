use bitflags::bitflags;

bitflags! {
    /// Background control register (`BG0CNT`-`BG3CNT`).
    ///
    /// Bit layout:
    /// ```text
    /// F E D C B A 9 8 7 6 5 4 3 2 1 0
    /// Z Z W S S S S S P M . . C C R R
    /// ```
    /// - `R R`: priority (0 is highest)
    /// - `C C`: character base block (16 KiB units)
    /// - `M`: mosaic
    /// - `P`: 256-color palette (0=16x16, 1=256x1)
    /// - `S`: screen base block (2 KiB units)
    /// - `W`: display area overflow (affine BG2/BG3 only)
    /// - `Z Z`: screen size
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BgControl: u16 {
        const PRIORITY = 0b0000_0000_0000_0011;
        const CHAR_BASE_BLOCK = 0b0000_0000_0000_1100;
        const MOSAIC = 1 << 6;
        const PALETTE_256 = 1 << 7;
        const SCREEN_BASE_BLOCK = 0b0001_1111_0000_0000;
        const DISPLAY_AREA_OVERFLOW = 1 << 13;
        const SCREEN_SIZE = 0b1100_0000_0000_0000;
    }
}

impl Default for BgControl {
    fn default() -> Self {
        Self::empty()
    }
}

impl BgControl {
    pub fn priority(self) -> u8 {
        (self.bits() & Self::PRIORITY.bits()) as u8
    }

    pub fn char_base_block(self) -> u8 {
        ((self.bits() & Self::CHAR_BASE_BLOCK.bits()) >> 2) as u8
    }

    /// VRAM byte offset of the tile data.
    pub fn char_base_addr(self) -> u32 {
        self.char_base_block() as u32 * 0x4000
    }

    pub fn screen_base_block(self) -> u8 {
        ((self.bits() & Self::SCREEN_BASE_BLOCK.bits()) >> 8) as u8
    }

    /// VRAM byte offset of the tile map.
    pub fn screen_base_addr(self) -> u32 {
        self.screen_base_block() as u32 * 0x800
    }

    /// Raw screen size selector (0-3). Its pixel meaning depends on whether
    /// the layer is in text or affine mode.
    pub fn screen_size(self) -> u8 {
        (self.bits() >> 14) as u8
    }
}
