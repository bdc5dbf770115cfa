use crate::{
    common::{
        money::Money,
        outcome::{Outcome, Rejection},
    },
    domain::session::Session,
};

pub fn handle(session: &mut Session, to: &str, amount: Option<Money>) -> Outcome {
    let Some(sender) = session.current_account() else {
        return Rejection::NotLoggedIn.into();
    };

    let amount = match amount {
        Some(a) if a.is_positive() => a,
        _ => return Rejection::InvalidAmount.into(),
    };

    let Some(receiver) = session.bank().find(to) else {
        return Rejection::UnknownReceiver(to.to_owned()).into();
    };

    if receiver.username == sender.username {
        return Rejection::SelfTransfer.into();
    }

    let balance = sender.balance();
    if balance < amount {
        return Rejection::InsufficientFunds { balance, amount }.into();
    }

    if !sender.can_append(-amount) || !receiver.can_append(amount) {
        return Rejection::AmountTooLarge.into();
    }

    let from = sender.username.clone();
    if !session.bank_mut().move_funds(&from, to, amount) {
        // both lookups above succeeded, so this only trips if they disagree
        return Rejection::UnknownReceiver(to.to_owned()).into();
    }
    Outcome::Accepted
}
