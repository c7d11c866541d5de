/// Digits in a NIK
pub const NIK_LENGTH: usize = 16;

/// Default cap on the lookup history
pub const MAX_HISTORY_ENTRIES: usize = 50;
