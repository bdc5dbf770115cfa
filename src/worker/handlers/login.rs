use crate::{
    common::outcome::{Outcome, Rejection},
    domain::session::Session,
};

pub fn handle(session: &mut Session, username: &str, pin: Option<u32>) -> Outcome {
    let Some(acc) = session.bank().find(username) else {
        return Rejection::UnknownUser(username.to_owned()).into();
    };

    // a pin that is not a number never matches
    if pin != Some(acc.pin) {
        return Rejection::WrongPin.into();
    }

    session.log_in(username);
    Outcome::Accepted
}
