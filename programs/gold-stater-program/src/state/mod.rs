pub mod global_state;
pub mod referral_entry;
pub mod user_account;

pub use global_state::*;
pub use referral_entry::*;
pub use user_account::*;
