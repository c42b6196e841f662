use anchor_lang::prelude::*;

#[constant]
pub const SEED: &str = "anchor";

// Global seeds
pub const GLOBAL_STATE_SEED: &str = "global_state";

// User related seeds
pub const USER_ACCOUNT_SEED: &str = "user";
pub const REFERRAL_SEED: &str = "referral";

// Maximum string lengths
pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DOMAIN_LENGTH: usize = 64;

// Balances are stored in hundredths of a Gold Stater so the frontend's
// two-decimal display never touches floating point on-chain.
pub const UNITS_PER_STATER: u64 = 100;

// Reward configuration
pub const DAILY_REWARD: u64 = 5 * UNITS_PER_STATER; // 5 Gold Staters per claim
pub const CLAIM_COOLDOWN_MS: i64 = 86_400_000; // 24 hours in milliseconds

// Account timestamps are milliseconds since epoch (the mini app convention);
// the Clock sysvar reports seconds.
pub const MS_PER_SECOND: i64 = 1_000;
