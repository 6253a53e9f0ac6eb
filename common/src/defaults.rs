pub const HUMAN_VS_COMPUTER_DELAY_MS: u64 = 500;
pub const COMPUTER_VS_COMPUTER_DELAY_MS: u64 = 1000;
pub const MAX_TURN_DELAY_MS: u64 = 10_000;
