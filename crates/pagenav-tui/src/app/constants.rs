//! Application constants.

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Records in the demo source when none is configured.
pub const DEFAULT_TOTAL: u64 = 1_234;

/// How many ticks a status message stays on screen.
pub const MESSAGE_TICKS: u32 = 60;
