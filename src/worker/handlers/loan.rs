use crate::{
    common::{
        money::Money,
        outcome::{Outcome, Rejection},
    },
    domain::session::Session,
};

pub fn handle(session: &mut Session, amount: Option<Money>) -> Outcome {
    let Some(username) = session.current_account().map(|a| a.username.clone()) else {
        return Rejection::NotLoggedIn.into();
    };

    let amount = match amount {
        Some(a) if a.is_positive() => a,
        _ => return Rejection::InvalidAmount.into(),
    };

    let Some(acc) = session.bank_mut().find_mut(&username) else {
        return Rejection::NotLoggedIn.into();
    };

    if !is_eligible(&acc.movements, amount) {
        return Rejection::LoanNotEligible.into();
    }

    if !acc.can_append(amount) {
        return Rejection::AmountTooLarge.into();
    }

    acc.movements.push(amount);
    Outcome::Accepted
}

/// At least one past movement must be worth a tenth of the loan.
fn is_eligible(movements: &[Money], amount: Money) -> bool {
    let amount = i128::from(amount.as_i64());
    movements
        .iter()
        .any(|m| i128::from(m.as_i64()) * 10 >= amount)
}
