//! Card helpers for fixtures, demo data and tests.

use super::cards_types::Card;

/// Parse hardcoded card tokens such as `["KS", "2C", "TAKER"]`.
///
/// Only for tokens known to be valid; a bad token panics.
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}

/// Parse a single hardcoded card token.
pub fn card(token: &str) -> Card {
    #[allow(clippy::expect_used)]
    token.parse().expect("hardcoded valid card token")
}
