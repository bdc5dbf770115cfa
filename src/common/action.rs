use crate::common::money::Money;

/// A user action read from the input surface and handed to the controller.
///
/// Numeric fields are `None` when the input text did not hold a number. The
/// controller rejects those the same way it rejects a non-positive amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login { username: String, pin: Option<u32> },
    Transfer { to: String, amount: Option<Money> },
    RequestLoan { amount: Option<Money> },
    CloseAccount { username: String, pin: Option<u32> },
    ToggleSort,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Transfer { .. } => "transfer",
            Action::RequestLoan { .. } => "loan",
            Action::CloseAccount { .. } => "close",
            Action::ToggleSort => "sort",
        }
    }
}
