use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Validation errors
    #[msg("Display name is too long")]
    NameTooLong,
    #[msg("Bot domain is too long")]
    DomainTooLong,
    #[msg("Amount must be greater than zero")]
    NothingToAccrue,

    // Authorization errors
    #[msg("Unauthorized user")]
    UnauthorizedUser,
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,

    // Claim errors
    #[msg("Daily reward already claimed within the last 24 hours")]
    CooldownActive,

    // Referral errors
    #[msg("Referral entry does not belong to this user")]
    InvalidReferral,

    // Protocol errors
    #[msg("Program is paused")]
    ProgramPaused,

    // Math errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
