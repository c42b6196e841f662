use anchor_lang::prelude::*;

use crate::constants::{CLAIM_COOLDOWN_MS, DAILY_REWARD, MAX_NAME_LENGTH};
use crate::error::ErrorCode;

/// One account per Telegram user. Balance and earnings are stored in
/// hundredths of a Gold Stater.
#[account]
#[derive(InitSpace)]
pub struct UserAccount {
    pub telegram_id: u64,
    pub wallet: Pubkey,
    #[max_len(MAX_NAME_LENGTH)]
    pub display_name: String,
    pub balance: u64,
    /// Milliseconds since epoch of the last successful daily claim.
    /// Zero means the user has never claimed.
    pub last_claim_time: i64,
    /// Milliseconds since epoch of the last referral earnings claim.
    pub last_referral_claim: i64,
    pub created_at: i64,
    pub bump: u8,
}

impl UserAccount {
    /// A user is eligible once 24 hours have elapsed since the last claim,
    /// boundary inclusive. A never-claimed account is always eligible.
    /// If the clock moved backward this reports not-eligible; accepted.
    pub fn is_eligible(&self, now_ms: i64) -> bool {
        self.last_claim_time == 0 || now_ms - self.last_claim_time >= CLAIM_COOLDOWN_MS
    }

    /// Apply the daily claim. Rejects with `CooldownActive` and leaves the
    /// account untouched when the cooldown window has not elapsed.
    pub fn claim(&mut self, now_ms: i64) -> Result<u64> {
        require!(self.is_eligible(now_ms), ErrorCode::CooldownActive);

        self.balance = self
            .balance
            .checked_add(DAILY_REWARD)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.last_claim_time = now_ms;

        Ok(self.balance)
    }

    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        Ok(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_account() -> UserAccount {
        UserAccount {
            telegram_id: 42,
            wallet: Pubkey::default(),
            display_name: "tester".to_string(),
            balance: 0,
            last_claim_time: 0,
            last_referral_claim: 0,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn never_claimed_is_always_eligible() {
        let account = fresh_account();
        assert!(account.is_eligible(0));
        assert!(account.is_eligible(1));
        assert!(account.is_eligible(1_700_000_000_000));
    }

    #[test]
    fn claim_credits_daily_reward_and_stamps_time() {
        let mut account = fresh_account();
        let now = 1_700_000_000_000;

        let balance = account.claim(now).unwrap();

        assert_eq!(balance, DAILY_REWARD);
        assert_eq!(account.balance, 500); // 5.00 Gold Staters
        assert_eq!(account.last_claim_time, now);
    }

    #[test]
    fn second_claim_within_window_is_rejected_without_mutation() {
        let mut account = fresh_account();
        account.claim(1_700_000_000_000).unwrap();

        let err = account.claim(1_700_000_000_001).unwrap_err();

        assert_eq!(err, ErrorCode::CooldownActive.into());
        assert_eq!(account.balance, DAILY_REWARD);
        assert_eq!(account.last_claim_time, 1_700_000_000_000);
    }

    #[test]
    fn cooldown_boundary_is_inclusive() {
        let mut account = fresh_account();
        let t0 = 1_700_000_000_000;
        account.claim(t0).unwrap();

        assert!(!account.is_eligible(t0 + CLAIM_COOLDOWN_MS - 1));
        assert!(account.is_eligible(t0 + CLAIM_COOLDOWN_MS));

        let balance = account.claim(t0 + CLAIM_COOLDOWN_MS).unwrap();
        assert_eq!(balance, 2 * DAILY_REWARD);
    }

    #[test]
    fn backward_clock_reports_cooling_down() {
        let mut account = fresh_account();
        account.claim(1_700_000_000_000).unwrap();

        assert!(!account.is_eligible(1_600_000_000_000));
    }

    #[test]
    fn credit_adds_to_balance() {
        let mut account = fresh_account();
        account.credit(1_000).unwrap();

        assert_eq!(account.credit(200).unwrap(), 1_200);
    }

    #[test]
    fn credit_overflow_is_an_error() {
        let mut account = fresh_account();
        account.balance = u64::MAX;

        let err = account.credit(1).unwrap_err();
        assert_eq!(err, ErrorCode::ArithmeticOverflow.into());
        assert_eq!(account.balance, u64::MAX);
    }
}
