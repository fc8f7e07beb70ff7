//! Domain-level error type for the rule engine.
//!
//! Every fallible engine operation returns `Result<T, DomainError>`. All
//! validation errors are recoverable: the game state is left untouched and
//! the caller may re-prompt the same seat. Internal invariant violations are
//! programming defects and surface through `debug_assert!`, not this type.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation error kinds surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Selected cards do not form any legal combination (classifier).
    NoMatchingPattern,
    /// A play was rejected because its selection does not classify.
    IllegalCombination,
    /// Cards classify, but lose against the combination on the table.
    DoesNotBeat,
    /// Acting seat is not the seat whose turn it is.
    NotYourTurn,
    /// Selection references a card id the seat does not hold (or twice).
    CardsNotInHand,
    /// Pass attempted on an open trick.
    PassNotAllowed,
    /// Operation not valid in the current phase.
    PhaseMismatch,
    /// Card token could not be parsed.
    ParseCard,
    /// Team level outside the 2..=14 range.
    InvalidLevel,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input validation or rule violation; the detail is human-readable.
    Validation(ValidationKind, String),
    /// Anything else (invariant accessors, config problems).
    Other(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Other(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Other(_) => None,
        }
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Other(d) => write!(f, "domain error: {d}"),
        }
    }
}

impl Error for DomainError {}
