use bitflags::bitflags;

bitflags! {
    /// Layer enable mask for one window region.
    ///
    /// `WININ` and `WINOUT` each pack two of these, one per byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowEnable: u8 {
        const BG0 = 1 << 0;
        const BG1 = 1 << 1;
        const BG2 = 1 << 2;
        const BG3 = 1 << 3;
        const OBJ = 1 << 4;
        /// Color special effects apply inside this region.
        const COLOR_EFFECT = 1 << 5;
    }
}

impl Default for WindowEnable {
    fn default() -> Self {
        Self::empty()
    }
}

impl WindowEnable {
    pub fn bg_enabled(self, bg: usize) -> bool {
        assert!(bg < 4, "background index {bg} out of range");
        self.bits() & (Self::BG0.bits() << bg) != 0
    }
}

/// Decoded `WININ`/`WINOUT` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowControl {
    winin: u16,
    winout: u16,
}

impl WindowControl {
    pub fn new(winin: u16, winout: u16) -> Self {
        Self { winin, winout }
    }

    /// Enables inside window `win` (0 or 1).
    pub fn inside(self, win: usize) -> WindowEnable {
        assert!(win < 2, "window index {win} out of range");
        WindowEnable::from_bits_retain((self.winin >> (win * 8)) as u8)
    }

    /// Enables for pixels outside every window.
    pub fn outside(self) -> WindowEnable {
        WindowEnable::from_bits_retain(self.winout as u8)
    }

    /// Enables inside the OBJ window.
    pub fn obj_window(self) -> WindowEnable {
        WindowEnable::from_bits_retain((self.winout >> 8) as u8)
    }
}

/// One axis of a window rectangle (`WINxH` or `WINxV`).
///
/// The high byte is the first coordinate, the low byte is one past the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowBounds {
    pub start: u8,
    pub end: u8,
}

impl WindowBounds {
    pub fn from_bits(value: u16) -> Self {
        Self {
            start: (value >> 8) as u8,
            end: value as u8,
        }
    }

    /// `end < start` is a window that wraps across the screen edge (mGBA
    /// behaviour). `end` is clamped to `limit`.
    pub fn contains(self, coord: u8, limit: u8) -> bool {
        let end = self.end.min(limit);
        if self.start <= end {
            coord >= self.start && coord < end
        } else {
            coord >= self.start || coord < end
        }
    }
}
