use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct AccrueReferralEarnings<'info> {
    /// The bot backend computes the 1.5% / 0.5% shares off-chain and
    /// credits the resulting amount here.
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(mut)]
    pub referral_entry: Account<'info, ReferralEntry>,
}

impl<'info> AccrueReferralEarnings<'info> {
    pub fn accrue_referral_earnings(&mut self, amount: u64) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::ProgramPaused);
        require!(amount > 0, ErrorCode::NothingToAccrue);

        let entry = &mut self.referral_entry;

        entry.daily_earnings = entry
            .daily_earnings
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        entry.total_earned = entry
            .total_earned
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        msg!(
            "Accrued {}.{:02} Gold Staters to referral {} (pending: {}.{:02})",
            amount / UNITS_PER_STATER,
            amount % UNITS_PER_STATER,
            entry.referred_telegram_id,
            entry.daily_earnings / UNITS_PER_STATER,
            entry.daily_earnings % UNITS_PER_STATER
        );

        Ok(())
    }
}
