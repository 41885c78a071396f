//! Picture Processing Unit (PPU) register layer.
//!
//! The LCD controller exposes its configuration through 16-bit registers in
//! `$04000000-$04000055`. The CPU reaches them one byte lane at a time; the
//! renderer consumes whole values once per scanline. This module owns that
//! state and the byte-lane bookkeeping. Pixel output, IRQ generation and
//! scanline timing live with the collaborators that read these registers.

pub mod registers;

mod register_bank;
mod shared;

pub use register_bank::RegisterBank;
pub use shared::SharedRegisterBank;
