use crate::{
    common::{
        action::Action,
        money::{InterestRate, Money},
    },
    domain::account::Account,
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// One line of an action script. Columns an action does not use stay empty.
struct ActionRow {
    action: String,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    pin: Option<String>,
    #[serde(default)]
    amount: Option<String>,
}

#[derive(serde::Deserialize)]
/// One line of an accounts file. `movements` holds whitespace-separated
/// amounts, oldest first.
struct AccountRow {
    owner: String,
    pin: u32,
    interest_rate: String,
    #[serde(default)]
    movements: Option<String>,
}

/// Reads user actions from a CSV reader.
///
/// Supported headers: `action,user,pin,amount`. Action names are matched
/// case-insensitively (`login`, `transfer`, `loan`, `close`, `sort`). Pins and
/// amounts that are not numbers are passed on as `None` and left for the
/// controller to reject; only an unknown action name is an error here.
///
/// # Examples
///
/// ```
/// use bankist::io::reader::read_actions;
/// use bankist::common::action::Action;
/// use csv::ReaderBuilder;
///
/// let data = "action,user,pin,amount\n\
/// login,js,1111,\n\
/// loan,,,abc\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let actions: Vec<_> = read_actions(&mut rdr).collect();
///
/// assert!(matches!(&actions[0], Ok(Action::Login { pin: Some(1111), .. })));
/// assert!(matches!(&actions[1], Ok(Action::RequestLoan { amount: None })));
/// ```
pub fn read_actions<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Action, String>> + '_ {
    rdr.deserialize::<ActionRow>().enumerate().map(|(i, res)| -> Result<Action, String> {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.action.trim().to_ascii_lowercase();
        let user = row.user.unwrap_or_default().trim().to_owned();
        let pin = row.pin.as_deref().and_then(parse_pin);
        let amount = row.amount.as_deref().and_then(parse_amount);

        match kind.as_str() {
            "login" => Ok(Action::Login { username: user, pin }),
            "transfer" => Ok(Action::Transfer { to: user, amount }),
            "loan" => Ok(Action::RequestLoan { amount }),
            "close" => Ok(Action::CloseAccount { username: user, pin }),
            "sort" => Ok(Action::ToggleSort),
            other => Err(format!("unknown action: {other} on row {}", i + 1)),
        }
    })
}

/// Reads account definitions from a CSV reader.
///
/// Supported headers: `owner,pin,interest_rate,movements`. Usernames are not
/// read; they are derived when the accounts are put into a
/// [`crate::domain::bank::Bank`].
pub fn read_accounts<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<Account>, String> {
    rdr.deserialize::<AccountRow>()
        .map(|res| -> Result<Account, String> {
            let row = res.map_err(|e| e.to_string())?;
            let interest_rate = InterestRate::from_str(&row.interest_rate)
                .map_err(|e| format!("interest rate of {}: {e}", row.owner))?;
            let movements = row
                .movements
                .unwrap_or_default()
                .split_whitespace()
                .map(Money::from_str)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| format!("movements of {}: {e}", row.owner))?;

            Ok(Account::new(row.owner.trim(), row.pin, movements, interest_rate))
        })
        .collect()
}

fn parse_pin(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

fn parse_amount(s: &str) -> Option<Money> {
    Money::from_str(s).ok()
}
