//! Shared definitions for the I/O memory map.
//!
//! Centralizing address-related constants keeps the hardware layout in one
//! location and prevents magic numbers from sneaking into the register bank or
//! its consumers.

/// LCD I/O register layout and the byte-lane decode table.
pub mod io {
    use core::fmt;

    use crate::error::Error;

    /// First address of the I/O register region.
    pub const IO_BASE: u32 = 0x0400_0000;

    /// First CPU-visible PPU register address (`DISPCNT` low byte).
    pub const PPU_REGISTER_BASE: u32 = IO_BASE;
    /// Last CPU-visible PPU register address (`BLDY` high byte).
    pub const PPU_REGISTER_END: u32 = 0x0400_0055;
    /// Number of byte addresses covered by the decode table.
    pub const PPU_REGISTER_SPACE: usize = (PPU_REGISTER_END - PPU_REGISTER_BASE + 1) as usize;

    /// Number of logical registers held by the bank.
    pub const REGISTER_COUNT: usize = Register::ALL.len();

    /// Power-on value of `DISPCNT` (forced blank set, mode 0).
    pub const DISPCNT_POWER_ON: u16 = 0x0080;

    /// Which half of a 16-bit register a byte address selects.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Lane {
        /// Bits 0-7, at the register's even base address.
        Low,
        /// Bits 8-15, at base + 1.
        High,
    }

    impl Lane {
        /// Bit position of the lane inside the 16-bit register.
        pub const fn shift(self) -> u32 {
            match self {
                Lane::Low => 0,
                Lane::High => 8,
            }
        }

        /// Mask selecting the lane's bits inside the 16-bit register.
        pub const fn mask(self) -> u16 {
            0x00FF_u16 << self.shift()
        }

        /// Extracts this lane's byte from a whole register value.
        pub const fn extract(self, value: u16) -> u8 {
            (value >> self.shift()) as u8
        }

        /// Replaces this lane's byte inside `value`, preserving the other lane.
        pub const fn merge(self, value: u16, byte: u8) -> u16 {
            (value & !self.mask()) | ((byte as u16) << self.shift())
        }
    }

    /// CPU-visible PPU register identifiers, keyed by their base address.
    #[repr(u32)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Register {
        /// `$04000000` - LCD control.
        DispCnt = 0x0400_0000,
        /// `$04000004` - LCD status.
        DispStat = 0x0400_0004,
        /// `$04000006` - vertical counter.
        VCount = 0x0400_0006,

        /// `$04000008` - BG0 control.
        Bg0Cnt = 0x0400_0008,
        /// `$0400000A` - BG1 control.
        Bg1Cnt = 0x0400_000A,
        /// `$0400000C` - BG2 control.
        Bg2Cnt = 0x0400_000C,
        /// `$0400000E` - BG3 control.
        Bg3Cnt = 0x0400_000E,

        /// `$04000010` - BG0 X offset.
        Bg0HOfs = 0x0400_0010,
        /// `$04000012` - BG0 Y offset.
        Bg0VOfs = 0x0400_0012,
        /// `$04000014` - BG1 X offset.
        Bg1HOfs = 0x0400_0014,
        /// `$04000016` - BG1 Y offset.
        Bg1VOfs = 0x0400_0016,
        /// `$04000018` - BG2 X offset.
        Bg2HOfs = 0x0400_0018,
        /// `$0400001A` - BG2 Y offset.
        Bg2VOfs = 0x0400_001A,
        /// `$0400001C` - BG3 X offset.
        Bg3HOfs = 0x0400_001C,
        /// `$0400001E` - BG3 Y offset.
        Bg3VOfs = 0x0400_001E,

        /// `$04000040` - window 0 horizontal dimensions.
        Win0H = 0x0400_0040,
        /// `$04000042` - window 1 horizontal dimensions.
        Win1H = 0x0400_0042,
        /// `$04000044` - window 0 vertical dimensions.
        Win0V = 0x0400_0044,
        /// `$04000046` - window 1 vertical dimensions.
        Win1V = 0x0400_0046,
        /// `$04000048` - inside of window 0 and 1.
        WinIn = 0x0400_0048,
        /// `$0400004A` - outside of windows, inside of OBJ window.
        WinOut = 0x0400_004A,

        /// `$0400004C` - mosaic size.
        Mosaic = 0x0400_004C,

        /// `$04000050` - color special effects selection.
        BldCnt = 0x0400_0050,
        /// `$04000052` - alpha blending coefficients.
        BldAlpha = 0x0400_0052,
        /// `$04000054` - brightness (fade in/out) coefficient.
        BldY = 0x0400_0054,
    }

    impl Register {
        /// Every register in storage order.
        pub const ALL: [Register; 25] = [
            Register::DispCnt,
            Register::DispStat,
            Register::VCount,
            Register::Bg0Cnt,
            Register::Bg1Cnt,
            Register::Bg2Cnt,
            Register::Bg3Cnt,
            Register::Bg0HOfs,
            Register::Bg0VOfs,
            Register::Bg1HOfs,
            Register::Bg1VOfs,
            Register::Bg2HOfs,
            Register::Bg2VOfs,
            Register::Bg3HOfs,
            Register::Bg3VOfs,
            Register::Win0H,
            Register::Win1H,
            Register::Win0V,
            Register::Win1V,
            Register::WinIn,
            Register::WinOut,
            Register::Mosaic,
            Register::BldCnt,
            Register::BldAlpha,
            Register::BldY,
        ];

        /// Background control registers indexed by layer.
        pub const BG_CONTROL: [Register; 4] = [
            Register::Bg0Cnt,
            Register::Bg1Cnt,
            Register::Bg2Cnt,
            Register::Bg3Cnt,
        ];

        /// Background horizontal offset registers indexed by layer.
        pub const BG_HOFS: [Register; 4] = [
            Register::Bg0HOfs,
            Register::Bg1HOfs,
            Register::Bg2HOfs,
            Register::Bg3HOfs,
        ];

        /// Background vertical offset registers indexed by layer.
        pub const BG_VOFS: [Register; 4] = [
            Register::Bg0VOfs,
            Register::Bg1VOfs,
            Register::Bg2VOfs,
            Register::Bg3VOfs,
        ];

        /// Base (low byte) address of the register.
        pub const fn addr(self) -> u32 {
            self as u32
        }

        /// Offset of the base address from [`PPU_REGISTER_BASE`].
        pub const fn offset(self) -> usize {
            (self.addr() - PPU_REGISTER_BASE) as usize
        }

        /// Address of the given byte lane.
        pub const fn lane_addr(self, lane: Lane) -> u32 {
            match lane {
                Lane::Low => self.addr(),
                Lane::High => self.addr() + 1,
            }
        }

        /// Slot of the register inside the bank's storage array.
        pub const fn index(self) -> usize {
            match self {
                Register::DispCnt => 0,
                Register::DispStat => 1,
                Register::VCount => 2,
                Register::Bg0Cnt => 3,
                Register::Bg1Cnt => 4,
                Register::Bg2Cnt => 5,
                Register::Bg3Cnt => 6,
                Register::Bg0HOfs => 7,
                Register::Bg0VOfs => 8,
                Register::Bg1HOfs => 9,
                Register::Bg1VOfs => 10,
                Register::Bg2HOfs => 11,
                Register::Bg2VOfs => 12,
                Register::Bg3HOfs => 13,
                Register::Bg3VOfs => 14,
                Register::Win0H => 15,
                Register::Win1H => 16,
                Register::Win0V => 17,
                Register::Win1V => 18,
                Register::WinIn => 19,
                Register::WinOut => 20,
                Register::Mosaic => 21,
                Register::BldCnt => 22,
                Register::BldAlpha => 23,
                Register::BldY => 24,
            }
        }

        /// Hardware mnemonic, as printed in GBATEK.
        pub const fn name(self) -> &'static str {
            match self {
                Register::DispCnt => "DISPCNT",
                Register::DispStat => "DISPSTAT",
                Register::VCount => "VCOUNT",
                Register::Bg0Cnt => "BG0CNT",
                Register::Bg1Cnt => "BG1CNT",
                Register::Bg2Cnt => "BG2CNT",
                Register::Bg3Cnt => "BG3CNT",
                Register::Bg0HOfs => "BG0HOFS",
                Register::Bg0VOfs => "BG0VOFS",
                Register::Bg1HOfs => "BG1HOFS",
                Register::Bg1VOfs => "BG1VOFS",
                Register::Bg2HOfs => "BG2HOFS",
                Register::Bg2VOfs => "BG2VOFS",
                Register::Bg3HOfs => "BG3HOFS",
                Register::Bg3VOfs => "BG3VOFS",
                Register::Win0H => "WIN0H",
                Register::Win1H => "WIN1H",
                Register::Win0V => "WIN0V",
                Register::Win1V => "WIN1V",
                Register::WinIn => "WININ",
                Register::WinOut => "WINOUT",
                Register::Mosaic => "MOSAIC",
                Register::BldCnt => "BLDCNT",
                Register::BldAlpha => "BLDALPHA",
                Register::BldY => "BLDY",
            }
        }

        /// Value the register holds after power-on or reset.
        pub const fn power_on_value(self) -> u16 {
            match self {
                Register::DispCnt => DISPCNT_POWER_ON,
                _ => 0,
            }
        }
    }

    impl fmt::Display for Register {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    impl TryFrom<u32> for Register {
        type Error = Error;

        /// Resolves the register owning either byte lane at `addr`.
        fn try_from(addr: u32) -> Result<Self, Self::Error> {
            decode(addr).map(|(register, _)| register)
        }
    }

    /// Offset-indexed table mapping each byte address in
    /// `$04000000-$04000055` to its register and lane.
    ///
    /// Holes (`$02-$03`, `$20-$3F`, `$4E-$4F`) are `None`.
    pub const DECODE_TABLE: [Option<(Register, Lane)>; PPU_REGISTER_SPACE] = build_decode_table();

    const fn build_decode_table() -> [Option<(Register, Lane)>; PPU_REGISTER_SPACE] {
        let mut table = [None; PPU_REGISTER_SPACE];
        let mut i = 0;
        while i < Register::ALL.len() {
            let register = Register::ALL[i];
            let offset = register.offset();
            table[offset] = Some((register, Lane::Low));
            table[offset + 1] = Some((register, Lane::High));
            i += 1;
        }
        table
    }

    /// Resolves a bus address to its register and lane, or `None` when the
    /// address is not backed by a PPU register.
    pub const fn lookup(addr: u32) -> Option<(Register, Lane)> {
        if addr < PPU_REGISTER_BASE || addr > PPU_REGISTER_END {
            return None;
        }
        DECODE_TABLE[(addr - PPU_REGISTER_BASE) as usize]
    }

    /// Strict variant of [`lookup`] for callers that want the failure as a value.
    pub fn decode(addr: u32) -> Result<(Register, Lane), Error> {
        lookup(addr).ok_or(Error::UnmappedAddress { addr })
    }

}
