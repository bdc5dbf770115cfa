use crate::domain::{account::Account, bank::Bank};

/// Everything one run of the app mutates: the account store, who is logged
/// in, and whether the movement list is shown sorted.
#[derive(Debug, Default)]
pub struct Session {
    bank: Bank,
    current: Option<String>,
    sorted: bool,
}

impl Session {
    pub fn new(bank: Bank) -> Self {
        Self {
            bank,
            current: None,
            sorted: false,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut Bank {
        &mut self.bank
    }

    pub fn current_username(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current.as_deref().and_then(|u| self.bank.find(u))
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_account().is_some()
    }

    /// Starts a fresh view for `username`; the movement list is unsorted.
    pub fn log_in(&mut self, username: &str) {
        self.current = Some(username.to_owned());
        self.sorted = false;
    }

    pub fn log_out(&mut self) {
        self.current = None;
        self.sorted = false;
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Returns the new value of the flag.
    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }
}
