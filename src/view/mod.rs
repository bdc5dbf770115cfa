//! Pure projections from the session to what the user sees. Nothing here
//! mutates state, so the renderer can be swapped without touching the
//! controller.

use crate::{
    common::money::Money,
    domain::{account::Account, ledger::Summary, session::Session},
};

pub const LOGGED_OUT_WELCOME: &str = "Log in to get started";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn of(amount: Money) -> Self {
        if amount.is_positive() {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    /// 1-based position in the listing the row was taken from.
    pub number: usize,
    pub kind: MovementKind,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    /// Rows in display order, top first.
    pub movements: Vec<MovementRow>,
    pub balance: Money,
    pub income: Money,
    /// Absolute value of the withdrawals.
    pub outcome: Money,
    pub interest: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub welcome: String,
    pub account: Option<AccountView>,
}

impl Screen {
    pub fn of(session: &Session) -> Self {
        match session.current_account() {
            Some(acc) => Self {
                welcome: format!("Welcome back, {}", acc.first_name()),
                account: Some(project_account(acc, session.is_sorted())),
            },
            None => Self {
                welcome: LOGGED_OUT_WELCOME.to_owned(),
                account: None,
            },
        }
    }
}

/// Unsorted: newest first, numbered by chronological position.
/// Sorted: ascending by amount, numbered in that order. Works on a copy, the
/// account's own movements keep their order.
pub fn project_account(acc: &Account, sorted: bool) -> AccountView {
    let movements = if sorted {
        let mut movs = acc.movements.clone();
        movs.sort();
        movs.into_iter()
            .enumerate()
            .map(|(i, amount)| row(i, amount))
            .collect()
    } else {
        acc.movements
            .iter()
            .enumerate()
            .rev()
            .map(|(i, amount)| row(i, *amount))
            .collect()
    };

    let summary = Summary::of(acc);
    AccountView {
        movements,
        balance: summary.balance,
        income: summary.income,
        outcome: summary.outcome.abs(),
        interest: summary.interest,
    }
}

fn row(index: usize, amount: Money) -> MovementRow {
    MovementRow {
        number: index + 1,
        kind: MovementKind::of(amount),
        amount,
    }
}
