pub mod bus;
pub mod config;
pub mod error;
pub mod memory;
pub mod ppu;

pub use bus::IoBus;
pub use config::{BankConfig, UnmappedLog};
pub use error::{AccessKind, Error};
pub use memory::io::{Lane, Register};
pub use ppu::{RegisterBank, SharedRegisterBank};
