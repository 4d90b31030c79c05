//! Domain-level error type returned by the validator, the state machine and
//! the game flow service.
//!
//! This error type is transport-agnostic. Callers map it to their own
//! representation through [`DomainError::code`], which yields a stable
//! [`ErrorCode`].

use thiserror::Error;

use super::error_code::ErrorCode;

/// Why a command was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Command is not legal in the current phase (e.g. playing while a call is pending).
    InvalidCommandForState,
    /// Declared seat is not the seat whose turn or response it is.
    WrongActor,
    /// Command issued against a finished game.
    GameAlreadyTerminal,
    /// Card index out of range, already played, or not matching the expected card.
    InvalidCardSelection,
    /// Raise past the maximum stake, or by the team that must wait for a response.
    IllegalStakeEscalation,
    /// Seat outside 0..=3.
    InvalidSeat,
    ParseCard,
    ParseSuit,
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
}

/// Operational failures that are not the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// Internal invariant broken while applying an already-validated command.
    DataCorruption,
    /// Malformed engine configuration.
    Config,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Shorthand for a broken internal invariant.
    pub fn corruption(detail: impl Into<String>) -> Self {
        Self::Infra(InfraErrorKind::DataCorruption, detail.into())
    }

    /// Human-readable reason without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::NotFound(_, d) | DomainError::Infra(_, d) => {
                d
            }
        }
    }

    /// Stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::InvalidCommandForState => ErrorCode::InvalidCommandForState,
                ValidationKind::WrongActor => ErrorCode::WrongActor,
                ValidationKind::GameAlreadyTerminal => ErrorCode::GameAlreadyTerminal,
                ValidationKind::InvalidCardSelection => ErrorCode::InvalidCardSelection,
                ValidationKind::IllegalStakeEscalation => ErrorCode::IllegalStakeEscalation,
                ValidationKind::InvalidSeat => ErrorCode::InvalidSeat,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::ParseSuit => ErrorCode::ParseSuit,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Game => ErrorCode::UnknownGame,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::Config => ErrorCode::ConfigError,
            },
        }
    }

    /// True for rejections caused by the command itself (as opposed to engine faults).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, DomainError::Infra(..))
    }
}
