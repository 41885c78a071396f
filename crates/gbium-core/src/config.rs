use core::fmt;

/// Verbosity of the notice emitted when the bus touches an address that no
/// PPU register backs.
///
/// Real software probes unused I/O routinely, so hosts that run at full speed
/// usually lower this to `Debug` or `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnmappedLog {
    /// Drop the notice entirely.
    Off,
    Trace,
    Debug,
    /// Report every unmapped access at `warn` level.
    #[default]
    Warn,
}

impl fmt::Display for UnmappedLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnmappedLog::Off => "off",
            UnmappedLog::Trace => "trace",
            UnmappedLog::Debug => "debug",
            UnmappedLog::Warn => "warn",
        };
        f.write_str(s)
    }
}

/// Host-facing knobs of the register bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BankConfig {
    /// Level used for unmapped-address notices.
    pub unmapped_log: UnmappedLog,
}

impl BankConfig {
    /// Configuration with unmapped-address notices silenced.
    pub const fn quiet() -> Self {
        Self {
            unmapped_log: UnmappedLog::Off,
        }
    }
}
