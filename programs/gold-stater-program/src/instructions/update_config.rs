use crate::{constants::*, error::ErrorCode, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED.as_bytes()],
        bump = global_state.bump,
        constraint = global_state.authority == authority.key() @ ErrorCode::UnauthorizedAuthority
    )]
    pub global_state: Account<'info, GlobalState>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_config(
        &mut self,
        new_bot_domain: Option<String>,
        paused: Option<bool>,
    ) -> Result<()> {
        let global_state = &mut self.global_state;

        if let Some(domain) = new_bot_domain {
            require!(domain.len() <= MAX_DOMAIN_LENGTH, ErrorCode::DomainTooLong);
            msg!("Invite link domain updated: {}", domain);
            global_state.bot_domain = domain;
        }

        if let Some(paused) = paused {
            global_state.is_paused = paused;
            msg!("Program paused: {}", paused);
        }

        Ok(())
    }
}
