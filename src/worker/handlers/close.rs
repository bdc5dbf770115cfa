use crate::{
    common::outcome::{Outcome, Rejection},
    domain::session::Session,
};

/// Removes the logged-in account when the credentials are its own. This is
/// permanent: the account and its history are gone.
pub fn handle(session: &mut Session, username: &str, pin: Option<u32>) -> Outcome {
    let Some(acc) = session.current_account() else {
        return Rejection::NotLoggedIn.into();
    };

    if acc.username != username || pin != Some(acc.pin) {
        return Rejection::CredentialsMismatch.into();
    }

    let username = acc.username.clone();
    session.bank_mut().remove(&username);
    session.log_out();
    Outcome::Accepted
}
