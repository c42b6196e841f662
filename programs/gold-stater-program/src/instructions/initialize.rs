use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + GlobalState::INIT_SPACE,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize_global_state(
        &mut self,
        bot_domain: String,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(
            bot_domain.len() <= MAX_DOMAIN_LENGTH,
            ErrorCode::DomainTooLong
        );

        let global_state = &mut self.global_state;

        global_state.authority = self.authority.key();
        global_state.bot_domain = bot_domain;
        global_state.is_paused = false;
        global_state.total_users = 0;
        global_state.bump = bumps.global_state;

        msg!(
            "Gold Stater program initialized by authority: {}",
            self.authority.key()
        );
        msg!("Invite link domain: {}", global_state.bot_domain);

        Ok(())
    }
}
