use std::sync::Arc;

use parking_lot::Mutex;

use crate::{bus::IoBus, memory::io::Register};

use super::RegisterBank;

/// Lock-guarded handle for hosts that clock the CPU and PPU on separate
/// threads.
///
/// Every access takes the lock exactly once, so a halfword or word written
/// through this handle is never observed half-updated.
#[derive(Debug, Clone, Default)]
pub struct SharedRegisterBank {
    inner: Arc<Mutex<RegisterBank>>,
}

impl SharedRegisterBank {
    pub fn new(bank: RegisterBank) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bank)),
        }
    }

    pub fn read_byte(&self, addr: u32) -> u8 {
        self.inner.lock().read_byte(addr)
    }

    pub fn write_byte(&self, addr: u32, value: u8) {
        self.inner.lock().write_byte(addr, value);
    }

    pub fn read_halfword(&self, addr: u32) -> u16 {
        IoBus::read_halfword(&mut *self.inner.lock(), addr)
    }

    pub fn write_halfword(&self, addr: u32, value: u16) {
        IoBus::write_halfword(&mut *self.inner.lock(), addr, value);
    }

    pub fn read_word(&self, addr: u32) -> u32 {
        IoBus::read_word(&mut *self.inner.lock(), addr)
    }

    pub fn write_word(&self, addr: u32, value: u32) {
        IoBus::write_word(&mut *self.inner.lock(), addr, value);
    }

    pub fn register(&self, register: Register) -> u16 {
        self.inner.lock().register(register)
    }

    pub fn set_vcount(&self, line: u16) {
        self.inner.lock().set_vcount(line);
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Runs `f` with the bank locked, e.g. to read several registers as one
    /// consistent snapshot at the start of a scanline.
    pub fn with<R>(&self, f: impl FnOnce(&mut RegisterBank) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl IoBus for SharedRegisterBank {
    fn read_byte(&mut self, addr: u32) -> u8 {
        SharedRegisterBank::read_byte(self, addr)
    }

    fn write_byte(&mut self, addr: u32, value: u8) {
        SharedRegisterBank::write_byte(self, addr, value)
    }

    fn read_halfword(&mut self, addr: u32) -> u16 {
        SharedRegisterBank::read_halfword(self, addr)
    }

    fn write_halfword(&mut self, addr: u32, value: u16) {
        SharedRegisterBank::write_halfword(self, addr, value)
    }

    fn read_word(&mut self, addr: u32) -> u32 {
        SharedRegisterBank::read_word(self, addr)
    }

    fn write_word(&mut self, addr: u32, value: u32) {
        SharedRegisterBank::write_word(self, addr, value)
    }
}
