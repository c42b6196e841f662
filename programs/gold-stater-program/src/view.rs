//! Client-side panel selection for the mini app. Pure functions only;
//! dispatching the claim actions and the clipboard copy stay in the host.

use crate::constants::UNITS_PER_STATER;

/// The five navigable tabs of the mini app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Wallet,
    Tasks,
    Referrals,
    Profile,
}

impl Tab {
    /// Unknown tab names fall back to the dashboard.
    pub fn parse(name: &str) -> Tab {
        match name {
            "wallet" => Tab::Wallet,
            "tasks" => Tab::Tasks,
            "referrals" => Tab::Referrals,
            "profile" => Tab::Profile,
            _ => Tab::Dashboard,
        }
    }
}

/// Snapshot of on-chain state the panels render from. Amounts are in
/// stater hundredths, timestamps in milliseconds since epoch.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub telegram_id: u64,
    pub display_name: Option<String>,
    pub balance: u64,
    pub last_claim_time: i64,
    pub daily_referral_total: u64,
    pub bot_domain: String,
}

/// One of the five static panels, carrying the figures it displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Dashboard { balance: String },
    Wallet { balance: String, last_claim_time: i64 },
    Tasks,
    Referrals { daily_total: String, invite_link: String },
    Profile { telegram_id: u64, display_name: Option<String> },
}

pub fn render(tab: Tab, state: &ViewState) -> Panel {
    match tab {
        Tab::Dashboard => Panel::Dashboard {
            balance: format_staters(state.balance),
        },
        Tab::Wallet => Panel::Wallet {
            balance: format_staters(state.balance),
            last_claim_time: state.last_claim_time,
        },
        Tab::Tasks => Panel::Tasks,
        Tab::Referrals => Panel::Referrals {
            daily_total: format_staters(state.daily_referral_total),
            invite_link: invite_link(&state.bot_domain, state.telegram_id),
        },
        Tab::Profile => Panel::Profile {
            telegram_id: state.telegram_id,
            display_name: state.display_name.clone(),
        },
    }
}

pub fn invite_link(bot_domain: &str, telegram_id: u64) -> String {
    format!("https://{bot_domain}/?start={telegram_id}")
}

/// Two-decimal stater display without going through floats.
pub fn format_staters(units: u64) -> String {
    format!("{}.{:02}", units / UNITS_PER_STATER, units % UNITS_PER_STATER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ViewState {
        ViewState {
            telegram_id: 123456789,
            display_name: Some("tester".to_string()),
            balance: 1_200,
            last_claim_time: 1_700_000_000_000,
            daily_referral_total: 200,
            bot_domain: "t.me/GoldStaterBot".to_string(),
        }
    }

    #[test]
    fn unknown_tab_falls_back_to_dashboard() {
        assert_eq!(Tab::parse("dashboard"), Tab::Dashboard);
        assert_eq!(Tab::parse("wallet"), Tab::Wallet);
        assert_eq!(Tab::parse("settings"), Tab::Dashboard);
        assert_eq!(Tab::parse(""), Tab::Dashboard);
    }

    #[test]
    fn invite_link_embeds_domain_and_user_id() {
        assert_eq!(
            invite_link("t.me/GoldStaterBot", 123456789),
            "https://t.me/GoldStaterBot/?start=123456789"
        );
    }

    #[test]
    fn staters_format_with_two_decimals() {
        assert_eq!(format_staters(0), "0.00");
        assert_eq!(format_staters(500), "5.00");
        assert_eq!(format_staters(1_205), "12.05");
    }

    #[test]
    fn each_tab_renders_its_panel() {
        let s = state();

        assert_eq!(
            render(Tab::Dashboard, &s),
            Panel::Dashboard {
                balance: "12.00".to_string()
            }
        );
        assert_eq!(render(Tab::Tasks, &s), Panel::Tasks);
        assert_eq!(
            render(Tab::Referrals, &s),
            Panel::Referrals {
                daily_total: "2.00".to_string(),
                invite_link: "https://t.me/GoldStaterBot/?start=123456789".to_string(),
            }
        );
        assert_eq!(
            render(Tab::Profile, &s),
            Panel::Profile {
                telegram_id: 123456789,
                display_name: Some("tester".to_string()),
            }
        );
    }

    #[test]
    fn wallet_panel_carries_last_claim_time() {
        let panel = render(Tab::Wallet, &state());

        assert_eq!(
            panel,
            Panel::Wallet {
                balance: "12.00".to_string(),
                last_claim_time: 1_700_000_000_000,
            }
        );
    }
}
