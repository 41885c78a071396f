/// Byte-addressed I/O device as seen by the bus dispatcher.
///
/// The CPU issues 8, 16 and 32-bit accesses; devices only need to implement
/// the byte lanes. Wider accesses are force-aligned the way the hardware bus
/// does it and split into little-endian byte accesses.
pub trait IoBus {
    fn read_byte(&mut self, addr: u32) -> u8;

    fn write_byte(&mut self, addr: u32, value: u8);

    /// Reads the halfword at `addr & !1`.
    fn read_halfword(&mut self, addr: u32) -> u16 {
        let addr = addr & !1;
        let lo = self.read_byte(addr) as u16;
        let hi = self.read_byte(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes the halfword at `addr & !1`, low byte first.
    fn write_halfword(&mut self, addr: u32, value: u16) {
        let addr = addr & !1;
        self.write_byte(addr, value as u8);
        self.write_byte(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Reads the word at `addr & !3`.
    fn read_word(&mut self, addr: u32) -> u32 {
        let addr = addr & !3;
        let lo = self.read_halfword(addr) as u32;
        let hi = self.read_halfword(addr.wrapping_add(2)) as u32;
        (hi << 16) | lo
    }

    /// Writes the word at `addr & !3`, low halfword first.
    fn write_word(&mut self, addr: u32, value: u32) {
        let addr = addr & !3;
        self.write_halfword(addr, value as u16);
        self.write_halfword(addr.wrapping_add(2), (value >> 16) as u16);
    }
}
