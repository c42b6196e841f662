pub mod accrue_referral_earnings;
pub mod claim_daily;
pub mod claim_referral_earnings;
pub mod initialize;
pub mod register_referral;
pub mod register_user;
pub mod update_config;

pub use accrue_referral_earnings::*;
pub use claim_daily::*;
pub use claim_referral_earnings::*;
pub use initialize::*;
pub use register_referral::*;
pub use register_user::*;
pub use update_config::*;

use crate::constants::MS_PER_SECOND;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Current wall-clock time in milliseconds since epoch, the unit the
/// account timestamps are stored in.
pub fn current_time_ms() -> Result<i64> {
    let now = Clock::get()?
        .unix_timestamp
        .checked_mul(MS_PER_SECOND)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    Ok(now)
}
