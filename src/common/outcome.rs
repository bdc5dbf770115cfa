use std::fmt;

use crate::common::money::Money;

/// Why an action left the session untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("no account is logged in")]
    NotLoggedIn,
    #[error("no account with username '{0}'")]
    UnknownUser(String),
    #[error("wrong pin")]
    WrongPin,
    #[error("amount must be a number greater than zero")]
    InvalidAmount,
    #[error("no receiver with username '{0}'")]
    UnknownReceiver(String),
    #[error("cannot transfer to the logged-in account")]
    SelfTransfer,
    #[error("balance {balance} does not cover {amount}")]
    InsufficientFunds { balance: Money, amount: Money },
    #[error("amount would take the account past the supported range")]
    AmountTooLarge,
    #[error("no movement of at least 10% of the requested loan")]
    LoanNotEligible,
    #[error("username and pin do not match the logged-in account")]
    CredentialsMismatch,
}

/// Result of dispatching one action. A rejection is never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Accepted => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(reason: Rejection) -> Self {
        Outcome::Rejected(reason)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted => f.write_str("accepted"),
            Outcome::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}
