use crate::{constants::*, error::ErrorCode, instructions::current_time_ms, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ClaimDaily<'info> {
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

impl<'info> ClaimDaily<'info> {
    /// Credit the fixed daily reward if the 24-hour cooldown has elapsed.
    /// A `CooldownActive` rejection is a user notice, not a fault; the
    /// account is untouched in that case.
    pub fn claim_daily(&mut self) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::ProgramPaused);

        let now_ms = current_time_ms()?;
        let user_account = &mut self.user_account;

        let new_balance = user_account.claim(now_ms)?;

        msg!(
            "User {} claimed {}.{:02} Gold Staters (balance: {}.{:02})",
            user_account.telegram_id,
            DAILY_REWARD / UNITS_PER_STATER,
            DAILY_REWARD % UNITS_PER_STATER,
            new_balance / UNITS_PER_STATER,
            new_balance % UNITS_PER_STATER
        );

        Ok(())
    }
}
