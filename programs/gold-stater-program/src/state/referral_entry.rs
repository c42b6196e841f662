use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LENGTH;

/// One entry per invited user, owned by the referrer. `referrer` is the
/// first field after the discriminator so clients can list a user's
/// referrals with a fixed-offset memcmp filter.
#[account]
#[derive(InitSpace)]
pub struct ReferralEntry {
    pub referrer: Pubkey,
    pub referred_telegram_id: u64,
    #[max_len(MAX_NAME_LENGTH)]
    pub display_name: String,
    /// Earnings accrued since the referrer last claimed, stater hundredths.
    pub daily_earnings: u64,
    pub total_earned: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl ReferralEntry {
    /// Drain pending earnings, returning the drained amount.
    pub fn reset_daily(&mut self) -> u64 {
        let drained = self.daily_earnings;
        self.daily_earnings = 0;
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UserAccount;

    fn entry(daily_earnings: u64) -> ReferralEntry {
        ReferralEntry {
            referrer: Pubkey::new_unique(),
            referred_telegram_id: 7,
            display_name: "fren".to_string(),
            daily_earnings,
            total_earned: daily_earnings,
            created_at: 0,
            bump: 254,
        }
    }

    #[test]
    fn reset_drains_pending_earnings() {
        let mut e = entry(150);

        assert_eq!(e.reset_daily(), 150);
        assert_eq!(e.daily_earnings, 0);
        assert_eq!(e.total_earned, 150);
    }

    #[test]
    fn reset_on_empty_entry_is_a_noop() {
        let mut e = entry(0);

        assert_eq!(e.reset_daily(), 0);
        assert_eq!(e.daily_earnings, 0);
    }

    // 1.50 + 0.50 staters onto a balance of 10.00 -> 12.00, entries drained;
    // an immediate second pass finds nothing to claim.
    #[test]
    fn drained_entries_credit_the_referrer_once() {
        let mut referrer = UserAccount {
            telegram_id: 1,
            wallet: Pubkey::default(),
            display_name: "referrer".to_string(),
            balance: 1_000,
            last_claim_time: 0,
            last_referral_claim: 0,
            created_at: 0,
            bump: 255,
        };
        let mut entries = [entry(150), entry(50)];

        let total: u64 = entries.iter_mut().map(ReferralEntry::reset_daily).sum();
        referrer.credit(total).unwrap();

        assert_eq!(total, 200);
        assert_eq!(referrer.balance, 1_200);
        assert!(entries.iter().all(|e| e.daily_earnings == 0));

        let again: u64 = entries.iter_mut().map(ReferralEntry::reset_daily).sum();
        assert_eq!(again, 0);
        assert_eq!(referrer.balance, 1_200);
    }
}
