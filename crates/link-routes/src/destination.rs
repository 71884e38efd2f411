use serde::{Deserialize, Serialize};

/// Internal navigation target a recognized deep link resolves to.
///
/// Produced only by route handlers; consumed by the host navigation layer,
/// which applies its own trust policy on top of the `signed` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Destination {
    /// Wallet home screen.
    Home,
    /// Fiat on-ramp flow, optionally pre-selecting chain, asset and amount.
    Buy {
        chain_id: Option<u64>,
        asset: Option<String>,
        amount: Option<String>,
    },
    /// Token swap flow with the pair pre-selected.
    Swap {
        from_asset: String,
        to_asset: String,
        amount: Option<String>,
    },
    /// Send flow with the recipient pre-filled.
    Send {
        to: String,
        chain_id: Option<u64>,
        amount: Option<String>,
    },
}

impl Destination {
    /// Stable screen identifier consumed by the host navigation layer.
    pub fn screen(&self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::Buy { .. } => "buy",
            Destination::Swap { .. } => "swap",
            Destination::Send { .. } => "send",
        }
    }
}
