use std::collections::HashSet;

use crate::{
    common::{error::AppError, money::Money},
    domain::{account::Account, ledger, username},
};

/// The account store. Accounts are only ever added when the bank is built and
/// only ever removed by closing them.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    /// Derives every username and checks they are unique.
    pub fn new(mut accounts: Vec<Account>) -> Result<Self, AppError> {
        if let Some(acc) = accounts.iter().find(|a| a.owner.trim().is_empty()) {
            return Err(AppError::Config(format!(
                "account with pin {} has an empty owner name",
                acc.pin
            )));
        }

        if let Some(acc) = accounts
            .iter()
            .find(|a| !ledger::is_within_range(&a.movements, a.interest_rate))
        {
            return Err(AppError::Config(format!(
                "movements of '{}' add up past the supported range",
                acc.owner
            )));
        }

        username::create_usernames(&mut accounts);

        let mut seen = HashSet::new();
        for acc in &accounts {
            if !seen.insert(acc.username.as_str()) {
                return Err(AppError::Config(format!(
                    "username '{}' of '{}' is already taken",
                    acc.username, acc.owner
                )));
            }
        }

        Ok(Self { accounts })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn find_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.username == username)
    }

    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.username == username)
    }

    /// Credits `amount` to `to` and debits it from `from` in one step. Both
    /// accounts must exist and stay in range; nothing is written otherwise.
    pub fn move_funds(
        &mut self,
        from: &str,
        to: &str,
        amount: Money,
    ) -> bool {
        let (Some(src), Some(dst)) = (self.position(from), self.position(to)) else {
            return false;
        };
        if !self.accounts[src].can_append(-amount) || !self.accounts[dst].can_append(amount) {
            return false;
        }
        self.accounts[src].movements.push(-amount);
        self.accounts[dst].movements.push(amount);
        true
    }

    /// Drops the account and its whole history.
    pub fn remove(&mut self, username: &str) -> Option<Account> {
        let index = self.position(username)?;
        Some(self.accounts.remove(index))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
