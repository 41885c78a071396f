use core::fmt;

use tracing::{debug, trace, warn};

use crate::{
    bus::IoBus,
    config::{BankConfig, UnmappedLog},
    error::AccessKind,
    memory::io::{self as io_mem, REGISTER_COUNT, Register},
};

use super::registers::{
    BgControl, BlendAlpha, BlendControl, Brightness, DisplayControl, DisplayStatus, Mosaic,
    WindowBounds, WindowControl,
};

/// CPU-visible LCD register bank (`$04000000-$04000055`).
///
/// Holds one 16-bit value per register. The bus reaches it a byte at a time
/// through [`read_byte`](Self::read_byte) / [`write_byte`](Self::write_byte);
/// the renderer reads whole registers through the named getters and never
/// deals with lanes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RegisterBank {
    regs: [u16; REGISTER_COUNT],
    config: BankConfig,
}

impl fmt::Debug for RegisterBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Hex(u16);
        impl fmt::Debug for Hex {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#06x}", self.0)
            }
        }

        f.debug_map()
            .entries(self.iter().map(|(register, value)| (register.name(), Hex(value))))
            .finish()
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBank {
    /// Creates a register bank in its power-on state.
    pub fn new() -> Self {
        Self::with_config(BankConfig::default())
    }

    pub fn with_config(config: BankConfig) -> Self {
        let mut bank = Self {
            regs: [0; REGISTER_COUNT],
            config,
        };
        bank.reset();
        bank
    }

    /// Restores every register to its power-on value (`DISPCNT = 0x0080`,
    /// everything else zero). The configuration is kept.
    pub fn reset(&mut self) {
        for register in Register::ALL {
            self.regs[register.index()] = register.power_on_value();
        }
        trace!("PPU registers reset");
    }

    pub fn config(&self) -> BankConfig {
        self.config
    }

    pub fn set_config(&mut self, config: BankConfig) {
        self.config = config;
    }

    /// Handles a CPU byte read. Unmapped addresses read as `0`.
    pub fn read_byte(&self, addr: u32) -> u8 {
        match io_mem::lookup(addr) {
            Some((register, lane)) => lane.extract(self.register(register)),
            None => {
                self.report_unmapped(AccessKind::Read, addr);
                0
            }
        }
    }

    /// Handles a CPU byte write, replacing only the addressed lane. Writes to
    /// unmapped addresses are dropped.
    pub fn write_byte(&mut self, addr: u32, value: u8) {
        match io_mem::lookup(addr) {
            Some((register, lane)) => {
                let slot = &mut self.regs[register.index()];
                *slot = lane.merge(*slot, value);
            }
            None => self.report_unmapped(AccessKind::Write, addr),
        }
    }

    /// Byte write for dispatchers that carry data on a wider bus. Only the low
    /// 8 bits of `value` are used.
    pub fn write_byte_masked(&mut self, addr: u32, value: u32) {
        self.write_byte(addr, value as u8);
    }

    /// Whole 16-bit value of `register`.
    pub fn register(&self, register: Register) -> u16 {
        self.regs[register.index()]
    }

    /// Current scanline, written by the timing driver.
    pub fn set_vcount(&mut self, line: u16) {
        self.regs[Register::VCount.index()] = line;
    }

    /// Iterates over every register and its current value in address order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, u16)> + '_ {
        Register::ALL
            .into_iter()
            .map(move |register| (register, self.register(register)))
    }

    fn report_unmapped(&self, kind: AccessKind, addr: u32) {
        match self.config.unmapped_log {
            UnmappedLog::Off => {}
            UnmappedLog::Trace => trace!("unhandled PPU register {kind} @ {addr:#010x}"),
            UnmappedLog::Debug => debug!("unhandled PPU register {kind} @ {addr:#010x}"),
            UnmappedLog::Warn => warn!("unhandled PPU register {kind} @ {addr:#010x}"),
        }
    }

    pub fn dispcnt(&self) -> u16 {
        self.register(Register::DispCnt)
    }

    pub fn dispstat(&self) -> u16 {
        self.register(Register::DispStat)
    }

    pub fn vcount(&self) -> u16 {
        self.register(Register::VCount)
    }

    pub fn bg0cnt(&self) -> u16 {
        self.register(Register::Bg0Cnt)
    }

    pub fn bg1cnt(&self) -> u16 {
        self.register(Register::Bg1Cnt)
    }

    pub fn bg2cnt(&self) -> u16 {
        self.register(Register::Bg2Cnt)
    }

    pub fn bg3cnt(&self) -> u16 {
        self.register(Register::Bg3Cnt)
    }

    pub fn bg0hofs(&self) -> u16 {
        self.register(Register::Bg0HOfs)
    }

    pub fn bg0vofs(&self) -> u16 {
        self.register(Register::Bg0VOfs)
    }

    pub fn bg1hofs(&self) -> u16 {
        self.register(Register::Bg1HOfs)
    }

    pub fn bg1vofs(&self) -> u16 {
        self.register(Register::Bg1VOfs)
    }

    pub fn bg2hofs(&self) -> u16 {
        self.register(Register::Bg2HOfs)
    }

    pub fn bg2vofs(&self) -> u16 {
        self.register(Register::Bg2VOfs)
    }

    pub fn bg3hofs(&self) -> u16 {
        self.register(Register::Bg3HOfs)
    }

    pub fn bg3vofs(&self) -> u16 {
        self.register(Register::Bg3VOfs)
    }

    pub fn win0h(&self) -> u16 {
        self.register(Register::Win0H)
    }

    pub fn win1h(&self) -> u16 {
        self.register(Register::Win1H)
    }

    pub fn win0v(&self) -> u16 {
        self.register(Register::Win0V)
    }

    pub fn win1v(&self) -> u16 {
        self.register(Register::Win1V)
    }

    pub fn winin(&self) -> u16 {
        self.register(Register::WinIn)
    }

    pub fn winout(&self) -> u16 {
        self.register(Register::WinOut)
    }

    pub fn mosaic(&self) -> u16 {
        self.register(Register::Mosaic)
    }

    pub fn bldcnt(&self) -> u16 {
        self.register(Register::BldCnt)
    }

    pub fn bldalpha(&self) -> u16 {
        self.register(Register::BldAlpha)
    }

    pub fn bldy(&self) -> u16 {
        self.register(Register::BldY)
    }

    /// Raw `BGxCNT` for layer `bg` (0..=3).
    pub fn bg_control(&self, bg: usize) -> u16 {
        self.register(Register::BG_CONTROL[bg])
    }

    /// Raw `BGxHOFS` for layer `bg` (0..=3).
    pub fn bg_hofs(&self, bg: usize) -> u16 {
        self.register(Register::BG_HOFS[bg])
    }

    /// Raw `BGxVOFS` for layer `bg` (0..=3).
    pub fn bg_vofs(&self, bg: usize) -> u16 {
        self.register(Register::BG_VOFS[bg])
    }

    pub fn display_control(&self) -> DisplayControl {
        DisplayControl::from_bits_retain(self.dispcnt())
    }

    pub fn display_status(&self) -> DisplayStatus {
        DisplayStatus::from_bits_retain(self.dispstat())
    }

    pub fn bg_control_flags(&self, bg: usize) -> BgControl {
        BgControl::from_bits_retain(self.bg_control(bg))
    }

    pub fn window_control(&self) -> WindowControl {
        WindowControl::new(self.winin(), self.winout())
    }

    /// Horizontal and vertical bounds of window `win` (0 or 1).
    pub fn window_bounds(&self, win: usize) -> (WindowBounds, WindowBounds) {
        let (h, v) = match win {
            0 => (self.win0h(), self.win0v()),
            1 => (self.win1h(), self.win1v()),
            _ => panic!("window index {win} out of range"),
        };
        (WindowBounds::from_bits(h), WindowBounds::from_bits(v))
    }

    pub fn mosaic_size(&self) -> Mosaic {
        Mosaic::from_bits(self.mosaic())
    }

    pub fn blend_control(&self) -> BlendControl {
        BlendControl::from_bits(self.bldcnt())
    }

    pub fn blend_alpha(&self) -> BlendAlpha {
        BlendAlpha::from_bits(self.bldalpha())
    }

    pub fn brightness(&self) -> Brightness {
        Brightness::from_bits(self.bldy())
    }
}

impl IoBus for RegisterBank {
    fn read_byte(&mut self, addr: u32) -> u8 {
        RegisterBank::read_byte(self, addr)
    }

    fn write_byte(&mut self, addr: u32, value: u8) {
        RegisterBank::write_byte(self, addr, value)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        memory::io::{DISPCNT_POWER_ON, IO_BASE, Lane},
        ppu::registers::BlendEffect,
        tests::TEST_COUNT,
    };

    fn quiet_bank() -> RegisterBank {
        RegisterBank::with_config(BankConfig::quiet())
    }

    fn snapshot(bank: &RegisterBank) -> Vec<(Register, u16)> {
        bank.iter().collect()
    }

    fn assert_power_on(bank: &RegisterBank) {
        for (register, value) in bank.iter() {
            let expected = if register == Register::DispCnt {
                DISPCNT_POWER_ON
            } else {
                0
            };
            assert_eq!(value, expected, "{register} after reset");
        }
    }

    #[test]
    fn starts_in_power_on_state() {
        let bank = RegisterBank::new();
        assert_power_on(&bank);
        assert_eq!(bank.dispcnt(), 0x0080);
        assert_eq!(bank.read_byte(0x0400_0000), 0x80);
        assert_eq!(bank.read_byte(0x0400_0001), 0x00);
    }

    #[test]
    fn low_lane_write_keeps_high_byte() {
        let mut rng = StdRng::seed_from_u64(0x10);
        let mut bank = quiet_bank();
        for _ in 0..TEST_COUNT {
            let register = Register::ALL[rng.random_range(0..REGISTER_COUNT)];
            let before = bank.register(register);
            let value: u8 = rng.random();
            bank.write_byte(register.addr(), value);
            assert_eq!(bank.read_byte(register.addr()), value, "{register}");
            assert_eq!(bank.register(register) >> 8, before >> 8, "{register}");
        }
    }

    #[test]
    fn high_lane_write_keeps_low_byte() {
        let mut rng = StdRng::seed_from_u64(0x11);
        let mut bank = quiet_bank();
        for _ in 0..TEST_COUNT {
            let register = Register::ALL[rng.random_range(0..REGISTER_COUNT)];
            let before = bank.register(register);
            let value: u8 = rng.random();
            bank.write_byte(register.addr() + 1, value);
            assert_eq!(bank.read_byte(register.addr() + 1), value, "{register}");
            assert_eq!(bank.register(register) & 0xFF, before & 0xFF, "{register}");
        }
    }

    #[test]
    fn lane_order_does_not_matter() {
        let mut rng = StdRng::seed_from_u64(0x12);
        for register in Register::ALL {
            let lo: u8 = rng.random();
            let hi: u8 = rng.random();
            let expected = ((hi as u16) << 8) | lo as u16;

            let mut bank = quiet_bank();
            bank.write_byte(register.lane_addr(Lane::Low), lo);
            bank.write_byte(register.lane_addr(Lane::High), hi);
            assert_eq!(bank.register(register), expected, "{register} lo->hi");

            let mut bank = quiet_bank();
            bank.write_byte(register.lane_addr(Lane::High), hi);
            bank.write_byte(register.lane_addr(Lane::Low), lo);
            assert_eq!(bank.register(register), expected, "{register} hi->lo");
        }
    }

    #[test]
    fn writes_never_leak_into_other_registers() {
        let mut rng = StdRng::seed_from_u64(0x13);
        let mut bank = quiet_bank();
        for _ in 0..TEST_COUNT {
            let register = Register::ALL[rng.random_range(0..REGISTER_COUNT)];
            let lane = if rng.random() { Lane::High } else { Lane::Low };
            let before = snapshot(&bank);
            bank.write_byte(register.lane_addr(lane), rng.random());
            for ((other, old), (_, new)) in before.into_iter().zip(bank.iter()) {
                if other != register {
                    assert_eq!(old, new, "{other} changed by write to {register}");
                }
            }
        }
    }

    #[test]
    fn unmapped_accesses_are_benign() {
        let mut rng = StdRng::seed_from_u64(0x14);
        let mut bank = quiet_bank();
        for register in Register::ALL {
            bank.write_byte(register.addr(), rng.random());
            bank.write_byte(register.addr() + 1, rng.random());
        }
        let before = snapshot(&bank);

        let unmapped = [
            IO_BASE + 0x02,
            IO_BASE + 0x03,
            IO_BASE + 0x20,
            IO_BASE + 0x3F,
            IO_BASE + 0x4E,
            IO_BASE + 0x4F,
            IO_BASE + 0x56,
            IO_BASE + 0x200,
            IO_BASE - 1,
            0,
            u32::MAX,
        ];
        for addr in unmapped {
            assert_eq!(bank.read_byte(addr), 0, "read {addr:#010x}");
            bank.write_byte(addr, 0xFF);
        }
        assert_eq!(snapshot(&bank), before);
    }

    #[test]
    fn unmapped_notice_is_emitted_at_default_level() {
        // Exercises the `warn!` path; the ctor-installed subscriber prints it.
        let mut bank = RegisterBank::new();
        assert_eq!(bank.read_byte(0x0400_0002), 0);
        bank.write_byte(0x0400_0002, 0x12);
        assert_power_on(&bank);
    }

    #[test]
    fn reset_restores_power_on_values() {
        let mut rng = StdRng::seed_from_u64(0x15);
        let mut bank = quiet_bank();
        for _ in 0..TEST_COUNT {
            let register = Register::ALL[rng.random_range(0..REGISTER_COUNT)];
            bank.write_byte(register.addr() + rng.random_range(0..2), rng.random());
        }
        bank.set_vcount(159);
        bank.reset();
        assert_power_on(&bank);
        assert_eq!(bank.config(), BankConfig::quiet());
    }

    #[test]
    fn reset_after_dispcnt_write() {
        let mut bank = quiet_bank();
        bank.write_byte(0x0400_0000, 0xFF);
        assert_eq!(bank.read_byte(0x0400_0000), 0xFF);
        bank.reset();
        assert_eq!(bank.read_byte(0x0400_0000), 0x80);
    }

    #[test]
    fn bg0cnt_byte_lanes() {
        let mut bank = quiet_bank();
        bank.write_byte(0x0400_0008, 0x01);
        bank.write_byte(0x0400_0009, 0x02);
        assert_eq!(bank.bg0cnt(), 0x0201);
        assert_eq!(bank.read_byte(0x0400_0008), 0x01);
        assert_eq!(bank.read_byte(0x0400_0009), 0x02);
    }

    #[test]
    fn wide_bus_values_are_masked() {
        let mut bank = quiet_bank();
        bank.write_byte_masked(0x0400_0054, 0xDEAD_BE1F);
        assert_eq!(bank.bldy(), 0x001F);
    }

    #[test]
    fn named_getters_match_their_registers() {
        let mut bank = quiet_bank();
        for (i, register) in Register::ALL.into_iter().enumerate() {
            bank.write_byte(register.addr(), i as u8);
            bank.write_byte(register.addr() + 1, 0xA0 | i as u8);
        }
        let expect = |register: Register| {
            let i = register.index() as u16;
            ((0xA0 | i) << 8) | i
        };

        let getters: [(Register, fn(&RegisterBank) -> u16); 25] = [
            (Register::DispCnt, RegisterBank::dispcnt),
            (Register::DispStat, RegisterBank::dispstat),
            (Register::VCount, RegisterBank::vcount),
            (Register::Bg0Cnt, RegisterBank::bg0cnt),
            (Register::Bg1Cnt, RegisterBank::bg1cnt),
            (Register::Bg2Cnt, RegisterBank::bg2cnt),
            (Register::Bg3Cnt, RegisterBank::bg3cnt),
            (Register::Bg0HOfs, RegisterBank::bg0hofs),
            (Register::Bg0VOfs, RegisterBank::bg0vofs),
            (Register::Bg1HOfs, RegisterBank::bg1hofs),
            (Register::Bg1VOfs, RegisterBank::bg1vofs),
            (Register::Bg2HOfs, RegisterBank::bg2hofs),
            (Register::Bg2VOfs, RegisterBank::bg2vofs),
            (Register::Bg3HOfs, RegisterBank::bg3hofs),
            (Register::Bg3VOfs, RegisterBank::bg3vofs),
            (Register::Win0H, RegisterBank::win0h),
            (Register::Win1H, RegisterBank::win1h),
            (Register::Win0V, RegisterBank::win0v),
            (Register::Win1V, RegisterBank::win1v),
            (Register::WinIn, RegisterBank::winin),
            (Register::WinOut, RegisterBank::winout),
            (Register::Mosaic, RegisterBank::mosaic),
            (Register::BldCnt, RegisterBank::bldcnt),
            (Register::BldAlpha, RegisterBank::bldalpha),
            (Register::BldY, RegisterBank::bldy),
        ];
        for (register, getter) in getters {
            assert_eq!(getter(&bank), expect(register), "{register}");
        }
        for bg in 0..4 {
            assert_eq!(bank.bg_control(bg), expect(Register::BG_CONTROL[bg]));
            assert_eq!(bank.bg_hofs(bg), expect(Register::BG_HOFS[bg]));
            assert_eq!(bank.bg_vofs(bg), expect(Register::BG_VOFS[bg]));
        }
    }

    #[test]
    fn vcount_setter_is_visible_on_the_bus() {
        let mut bank = quiet_bank();
        bank.set_vcount(0x00E3);
        assert_eq!(bank.vcount(), 0x00E3);
        assert_eq!(bank.read_byte(0x0400_0006), 0xE3);
        assert_eq!(bank.read_byte(0x0400_0007), 0x00);
    }

    #[test]
    fn vcount_is_not_write_protected() {
        let mut bank = quiet_bank();
        bank.write_byte(0x0400_0006, 0x42);
        assert_eq!(bank.vcount(), 0x0042);
    }

    #[test]
    fn typed_views_read_current_values() {
        let mut bank = quiet_bank();
        IoBus::write_halfword(&mut bank, 0x0400_0000, 0x1403);
        IoBus::write_halfword(&mut bank, 0x0400_000C, 0x4C85);
        IoBus::write_halfword(&mut bank, 0x0400_0040, 0x08F0);
        IoBus::write_halfword(&mut bank, 0x0400_0044, 0x2080);
        IoBus::write_halfword(&mut bank, 0x0400_004C, 0x0021);
        IoBus::write_halfword(&mut bank, 0x0400_0050, 0x0441);
        IoBus::write_halfword(&mut bank, 0x0400_0052, 0x0808);

        let dispcnt = bank.display_control();
        assert_eq!(dispcnt.bg_mode(), 3);
        assert!(dispcnt.bg_enabled(2));
        assert!(dispcnt.contains(DisplayControl::OBJ));

        let bg2 = bank.bg_control_flags(2);
        assert_eq!(bg2.priority(), 1);
        assert_eq!(bg2.char_base_block(), 1);
        assert!(bg2.contains(BgControl::PALETTE_256));
        assert_eq!(bg2.screen_base_block(), 12);
        assert_eq!(bg2.screen_size(), 1);

        let (h, v) = bank.window_bounds(0);
        assert_eq!((h.start, h.end), (0x08, 0xF0));
        assert_eq!((v.start, v.end), (0x20, 0x80));

        assert_eq!(bank.mosaic_size().bg_block(), (2, 3));
        assert_eq!(bank.blend_control().effect(), BlendEffect::Alpha);
        assert_eq!(bank.blend_alpha().eva_coeff(), 8);
        assert_eq!(bank.brightness().coeff(), 0);
        assert!(bank.display_status().is_empty());
        assert_eq!(bank.window_control(), WindowControl::default());
    }

    #[test]
    fn debug_output_lists_registers_by_name() {
        let bank = RegisterBank::new();
        let dump = format!("{bank:?}");
        assert!(dump.contains("\"DISPCNT\": 0x0080"), "{dump}");
        assert!(dump.contains("\"BLDY\": 0x0000"), "{dump}");
    }
}
