use crate::{
    common::money::{InterestRate, Money},
    domain::ledger,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub owner: String,
    /// Derived from `owner` once when the store is built.
    pub username: String,
    pub pin: u32,
    /// Append-only history, oldest first.
    pub movements: Vec<Money>,
    pub interest_rate: InterestRate,
}

impl Account {
    /// Builds an account whose username is still unset. The store fills it in
    /// for every account at once, see [`crate::domain::username`].
    pub fn new(
        owner: impl Into<String>,
        pin: u32,
        movements: Vec<Money>,
        interest_rate: InterestRate,
    ) -> Self {
        Self {
            owner: owner.into(),
            username: String::new(),
            pin,
            movements,
            interest_rate,
        }
    }

    pub fn balance(&self) -> Money {
        ledger::compute_balance(&self.movements)
    }

    /// Whether appending `amount` keeps every ledger figure in range.
    pub fn can_append(&self, amount: Money) -> bool {
        let mut movements = self.movements.clone();
        movements.push(amount);
        ledger::is_within_range(&movements, self.interest_rate)
    }

    /// First word of the owner's name, used in the welcome line.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or("")
    }
}
