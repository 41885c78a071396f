use bitflags::bitflags;

bitflags! {
    /// LCD control register (`DISPCNT`, `$04000000`).
    ///
    /// Bit layout:
    /// ```text
    /// F E D C B A 9 8 7 6 5 4 3 2 1 0
    /// W w v O 3 2 1 0 B M H F C m m m
    /// ```
    /// - `m m m`: background mode (0-5)
    /// - `C`: CGB mode (read-only on hardware, stored as written here)
    /// - `F`: display frame select for bitmap modes 4/5
    /// - `H`: allow OAM access during H-blank
    /// - `M`: OBJ character VRAM mapping (0=2D, 1=1D)
    /// - `B`: forced blank
    /// - `0-3`: BG layer enables
    /// - `O`: OBJ layer enable
    /// - `v`, `w`, `W`: window 0, window 1 and OBJ window enables
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayControl: u16 {
        /// Background mode (bits 0-2).
        const BG_MODE = 0b0000_0000_0000_0111;
        const CGB_MODE = 1 << 3;
        const FRAME_SELECT = 1 << 4;
        const HBLANK_INTERVAL_FREE = 1 << 5;
        const OBJ_MAPPING_1D = 1 << 6;
        /// Forced blank (bit 7). Set at power-on.
        const FORCED_BLANK = 1 << 7;
        const BG0 = 1 << 8;
        const BG1 = 1 << 9;
        const BG2 = 1 << 10;
        const BG3 = 1 << 11;
        const OBJ = 1 << 12;
        const WIN0 = 1 << 13;
        const WIN1 = 1 << 14;
        const OBJ_WIN = 1 << 15;
    }
}

impl Default for DisplayControl {
    fn default() -> Self {
        Self::FORCED_BLANK
    }
}

impl DisplayControl {
    /// Background mode field. Values 6 and 7 are prohibited on hardware but
    /// are returned unchanged.
    pub fn bg_mode(self) -> u8 {
        (self.bits() & Self::BG_MODE.bits()) as u8
    }

    /// Returns `true` when background layer `bg` (0..=3) is switched on.
    pub fn bg_enabled(self, bg: usize) -> bool {
        assert!(bg < 4, "background index {bg} out of range");
        self.bits() & (Self::BG0.bits() << bg) != 0
    }

    /// Returns `true` when any of the three windows is enabled.
    pub fn any_window(self) -> bool {
        self.intersects(Self::WIN0 | Self::WIN1 | Self::OBJ_WIN)
    }
}

bitflags! {
    /// LCD status register (`DISPSTAT`, `$04000004`).
    ///
    /// The flag bits are driven by the timing logic; the bank only stores
    /// them. Bits 8-15 hold the V-count match setting.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayStatus: u16 {
        const VBLANK = 1 << 0;
        const HBLANK = 1 << 1;
        const VCOUNT_MATCH = 1 << 2;
        const VBLANK_IRQ = 1 << 3;
        const HBLANK_IRQ = 1 << 4;
        const VCOUNT_IRQ = 1 << 5;
        /// V-count setting, LYC (bits 8-15).
        const VCOUNT_SETTING = 0xFF00;
    }
}

impl Default for DisplayStatus {
    fn default() -> Self {
        Self::empty()
    }
}

impl DisplayStatus {
    /// Scanline number compared against `VCOUNT`.
    pub fn vcount_setting(self) -> u8 {
        (self.bits() >> 8) as u8
    }
}
