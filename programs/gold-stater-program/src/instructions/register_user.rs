use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(telegram_id: u64)]
pub struct RegisterUser<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [USER_ACCOUNT_SEED.as_bytes(), &telegram_id.to_le_bytes()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterUser<'info> {
    /// Load-or-create contract: a first call creates the account with the
    /// zero defaults; later calls only refresh the display name.
    pub fn register_user(
        &mut self,
        telegram_id: u64,
        display_name: String,
        bumps: &RegisterUserBumps,
    ) -> Result<()> {
        require!(!self.global_state.is_paused, ErrorCode::ProgramPaused);
        require!(display_name.len() <= MAX_NAME_LENGTH, ErrorCode::NameTooLong);

        let user_account = &mut self.user_account;

        if user_account.wallet == Pubkey::default() {
            user_account.telegram_id = telegram_id;
            user_account.wallet = self.user.key();
            user_account.balance = 0;
            user_account.last_claim_time = 0;
            user_account.last_referral_claim = 0;
            user_account.created_at = Clock::get()?.unix_timestamp;
            user_account.bump = bumps.user_account;

            self.global_state.total_users = self
                .global_state
                .total_users
                .checked_add(1)
                .ok_or(ErrorCode::ArithmeticOverflow)?;

            msg!(
                "New user registered: telegram_id={} wallet={}",
                telegram_id,
                self.user.key()
            );
        } else {
            require!(
                user_account.wallet == self.user.key(),
                ErrorCode::UnauthorizedUser
            );
        }

        user_account.display_name = display_name;

        Ok(())
    }
}
