pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod view;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod gold_stater_program {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, bot_domain: String) -> Result<()> {
        ctx.accounts.initialize_global_state(bot_domain, &ctx.bumps)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_bot_domain: Option<String>,
        paused: Option<bool>,
    ) -> Result<()> {
        ctx.accounts.update_config(new_bot_domain, paused)
    }

    pub fn register_user(
        ctx: Context<RegisterUser>,
        telegram_id: u64,
        display_name: String,
    ) -> Result<()> {
        ctx.accounts
            .register_user(telegram_id, display_name, &ctx.bumps)
    }

    pub fn claim_daily(ctx: Context<ClaimDaily>) -> Result<()> {
        ctx.accounts.claim_daily()
    }

    pub fn register_referral(
        ctx: Context<RegisterReferral>,
        referred_telegram_id: u64,
        display_name: String,
    ) -> Result<()> {
        ctx.accounts
            .register_referral(referred_telegram_id, display_name, &ctx.bumps)
    }

    pub fn accrue_referral_earnings(
        ctx: Context<AccrueReferralEarnings>,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.accrue_referral_earnings(amount)
    }

    pub fn claim_referral_earnings<'info>(
        ctx: Context<'_, '_, 'info, 'info, ClaimReferralEarnings<'info>>,
    ) -> Result<()> {
        ctx.accounts.claim_referral_earnings(ctx.remaining_accounts)
    }
}
