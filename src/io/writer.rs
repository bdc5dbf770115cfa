use std::io::{self, Write};

use crate::{
    common::{money::Money, outcome::Outcome},
    domain::{account::Account, ledger::Summary},
    view::Screen,
};

#[derive(serde::Serialize)]
/// Internal CSV output row for the end-of-run account summary.
///
/// Headers written (in this order):
/// `username,owner,balance,income,outcome,interest`.
struct SummaryRow<'a> {
    username: &'a str,
    owner: &'a str,
    balance: String,
    income: String,
    outcome: String,
    interest: String,
}

/// Writes one summary row per account, in store order.
///
/// Amounts are plain numbers; `outcome` is the absolute sum of withdrawals.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bankist::io::writer::write_accounts;
/// use bankist::domain::{account::Account, bank::Bank};
/// use bankist::common::money::{InterestRate, Money};
///
/// let bank = Bank::new(vec![Account::new(
///     "Sarah Smith",
///     4444,
///     vec![Money::from_units(430), Money::from_units(-30)],
///     InterestRate::new(10_000),
/// )])
/// .unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, bank.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(
///     s,
///     "username,owner,balance,income,outcome,interest\nss,Sarah Smith,400,430,30,4.3\n"
/// );
/// ```
pub fn write_accounts<W: Write>(writer: W, accounts: &[Account]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        let summary = Summary::of(acc);
        let row = SummaryRow {
            username: &acc.username,
            owner: &acc.owner,
            balance: summary.balance.to_plain_string(),
            income: summary.income.to_plain_string(),
            outcome: summary.outcome.abs().to_plain_string(),
            interest: summary.interest.to_plain_string(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Paints a screen as text, amounts prefixed with `currency`.
///
/// ```text
/// Welcome back, Jonas
/// Balance: £250
///   3 withdrawal   £-400
///   2 deposit      £450
///   1 deposit      £200
/// In: £650  Out: £400  Interest: £7.8
/// ```
pub fn write_screen<W: Write>(mut writer: W, screen: &Screen, currency: &str) -> io::Result<()> {
    writeln!(writer, "{}", screen.welcome)?;

    let Some(view) = &screen.account else {
        return Ok(());
    };

    writeln!(writer, "Balance: {}", format_amount(currency, view.balance))?;
    for row in &view.movements {
        writeln!(
            writer,
            "  {:>2} {:<12} {}",
            row.number,
            row.kind.as_str(),
            format_amount(currency, row.amount)
        )?;
    }
    writeln!(
        writer,
        "In: {}  Out: {}  Interest: {}",
        format_amount(currency, view.income),
        format_amount(currency, view.outcome),
        format_amount(currency, view.interest)
    )
}

/// Echoes the result of one action, `> login: accepted`.
pub fn write_outcome<W: Write>(mut writer: W, action: &str, outcome: &Outcome) -> io::Result<()> {
    writeln!(writer, "> {action}: {outcome}")
}

pub fn format_amount(currency: &str, amount: Money) -> String {
    format!("{currency}{}", amount.to_plain_string())
}
