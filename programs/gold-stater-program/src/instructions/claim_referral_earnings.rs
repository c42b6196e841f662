use crate::{constants::*, error::ErrorCode, instructions::current_time_ms, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ClaimReferralEarnings<'info> {
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [USER_ACCOUNT_SEED.as_bytes(), &user_account.telegram_id.to_le_bytes()],
        bump = user_account.bump,
        constraint = user_account.wallet == user.key() @ ErrorCode::UnauthorizedUser
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,
}

impl<'info> ClaimReferralEarnings<'info> {
    /// Credit all pending referral earnings to the user and zero every
    /// entry, as one instruction. Crediting and resetting in the same
    /// transaction keeps the ledger consistent: either both land or
    /// neither does.
    ///
    /// remaining_accounts: the user's ReferralEntry PDAs. A zero total is
    /// a no-op, not an error.
    pub fn claim_referral_earnings(
        &mut self,
        referral_accounts: &[AccountInfo<'info>],
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::ProgramPaused);

        let user_account = &mut self.user_account;
        let referrer_key = user_account.key();

        let mut total_claimed: u64 = 0;

        for referral_info in referral_accounts.iter() {
            require!(referral_info.is_writable, ErrorCode::InvalidReferral);
            require!(referral_info.owner == &crate::ID, ErrorCode::InvalidReferral);

            let mut referral_data = referral_info.try_borrow_mut_data()?;
            let mut entry: ReferralEntry =
                ReferralEntry::try_deserialize(&mut &referral_data[..])?;

            require!(entry.referrer == referrer_key, ErrorCode::InvalidReferral);

            let pending = entry.reset_daily();
            if pending > 0 {
                entry.try_serialize(&mut *referral_data)?;

                total_claimed = total_claimed
                    .checked_add(pending)
                    .ok_or(ErrorCode::ArithmeticOverflow)?;
            }
        }

        if total_claimed > 0 {
            let new_balance = user_account.credit(total_claimed)?;
            user_account.last_referral_claim = current_time_ms()?;

            msg!(
                "User {} claimed {}.{:02} Gold Staters from {} referrals (balance: {}.{:02})",
                user_account.telegram_id,
                total_claimed / UNITS_PER_STATER,
                total_claimed % UNITS_PER_STATER,
                referral_accounts.len(),
                new_balance / UNITS_PER_STATER,
                new_balance % UNITS_PER_STATER
            );
        } else {
            msg!(
                "User {} has no referral earnings to claim",
                user_account.telegram_id
            );
        }

        Ok(())
    }
}
