//! Domain-level error type returned by every engine operation.
//!
//! Errors are raised at the point of violation and never retried inside the
//! engine; the caller decides whether to re-prompt the player.

use thiserror::Error;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A card value or suit outside the legal domain
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Card not owned by the player, or suit-following violated
    #[error("invalid card: {0}")]
    InvalidCard(String),
    /// Wrong seat acted
    #[error("not your turn: {0}")]
    NotYourTurn(String),
    /// Illegal special-card resolution or action in the wrong state
    #[error("invalid move: {0}")]
    InvalidMove(String),
    /// Draw attempted with nothing left in the deck
    #[error("deck is empty")]
    EmptyDeck,
}

impl DomainError {
    pub fn invalid_value(detail: impl Into<String>) -> Self {
        Self::InvalidValue(detail.into())
    }
    pub fn invalid_card(detail: impl Into<String>) -> Self {
        Self::InvalidCard(detail.into())
    }
    pub fn not_your_turn(detail: impl Into<String>) -> Self {
        Self::NotYourTurn(detail.into())
    }
    pub fn invalid_move(detail: impl Into<String>) -> Self {
        Self::InvalidMove(detail.into())
    }
}
