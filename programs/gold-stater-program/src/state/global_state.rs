use anchor_lang::prelude::*;

use crate::constants::MAX_DOMAIN_LENGTH;

#[account]
#[derive(InitSpace)]
pub struct GlobalState {
    pub authority: Pubkey,
    // Domain used to build invite links, e.g. "t.me/GoldStaterBot"
    #[max_len(MAX_DOMAIN_LENGTH)]
    pub bot_domain: String,
    pub is_paused: bool,
    pub total_users: u64,
    pub bump: u8,
}
