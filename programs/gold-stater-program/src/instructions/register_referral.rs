use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(referred_telegram_id: u64)]
pub struct RegisterReferral<'info> {
    /// The bot backend records referral relationships on behalf of users.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,

    /// The referrer's account; must already exist.
    #[account(
        seeds = [USER_ACCOUNT_SEED.as_bytes(), &referrer_account.telegram_id.to_le_bytes()],
        bump = referrer_account.bump
    )]
    pub referrer_account: Account<'info, UserAccount>,

    #[account(
        init,
        payer = authority,
        space = 8 + ReferralEntry::INIT_SPACE,
        seeds = [
            REFERRAL_SEED.as_bytes(),
            referrer_account.key().as_ref(),
            &referred_telegram_id.to_le_bytes(),
        ],
        bump
    )]
    pub referral_entry: Account<'info, ReferralEntry>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterReferral<'info> {
    pub fn register_referral(
        &mut self,
        referred_telegram_id: u64,
        display_name: String,
        bumps: &RegisterReferralBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::ProgramPaused);
        require!(display_name.len() <= MAX_NAME_LENGTH, ErrorCode::NameTooLong);

        let entry = &mut self.referral_entry;

        entry.referrer = self.referrer_account.key();
        entry.referred_telegram_id = referred_telegram_id;
        entry.display_name = display_name;
        entry.daily_earnings = 0;
        entry.total_earned = 0;
        entry.created_at = Clock::get()?.unix_timestamp;
        entry.bump = bumps.referral_entry;

        msg!(
            "Referral recorded: referrer={} referred_telegram_id={}",
            self.referrer_account.telegram_id,
            referred_telegram_id
        );

        Ok(())
    }
}
