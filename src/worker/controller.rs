use crate::{
    common::{action::Action, outcome::Outcome},
    domain::session::Session,
    worker::handlers::{close, loan, login, sort, transfer},
};

/// Runs one action at a time against a session. Each call completes before
/// the next action is looked at.
#[derive(Debug, Default)]
pub struct Controller {}
impl Controller {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, session: &mut Session, action: Action) -> Outcome {
        let name = action.name();
        let outcome = match action {
            Action::Login { username, pin } => login::handle(session, &username, pin),
            Action::Transfer { to, amount } => transfer::handle(session, &to, amount),
            Action::RequestLoan { amount } => loan::handle(session, amount),
            Action::CloseAccount { username, pin } => close::handle(session, &username, pin),
            Action::ToggleSort => sort::handle(session),
        };

        match &outcome {
            Outcome::Accepted => tracing::info!(
                action = name,
                current = session.current_username().unwrap_or("-"),
                "action accepted"
            ),
            Outcome::Rejected(reason) => {
                tracing::debug!(action = name, %reason, "action rejected")
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::{money::Money, outcome::Rejection},
        domain::bank::{tests::account, Bank},
    };

    fn session() -> Session {
        Session::new(
            Bank::new(vec![
                account("Jonas Schmedtmann", 1111, &[200, 450, -400]),
                account("Jessica Davis", 2222, &[5000]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn dispatches_a_full_session() {
        let mut s = session();
        let mut c = Controller::new();

        let actions = vec![
            Action::Login { username: "js".into(), pin: Some(1111) },
            Action::Transfer { to: "jd".into(), amount: Some(Money::from_units(100)) },
            Action::RequestLoan { amount: Some(Money::from_units(1000)) },
            Action::ToggleSort,
            Action::CloseAccount { username: "js".into(), pin: Some(1111) },
        ];
        let outcomes: Vec<Outcome> = actions.into_iter().map(|a| c.process(&mut s, a)).collect();

        assert!(outcomes.iter().all(Outcome::is_accepted), "{outcomes:?}");
        assert!(s.bank().find("js").is_none());
        assert_eq!(
            s.bank().find("jd").unwrap().movements,
            vec![Money::from_units(5000), Money::from_units(100)]
        );
    }

    #[test]
    fn rejections_are_returned_not_raised() {
        let mut s = session();
        let mut c = Controller::new();

        assert_eq!(
            c.process(&mut s, Action::ToggleSort),
            Outcome::Rejected(Rejection::NotLoggedIn)
        );
        assert_eq!(
            c.process(&mut s, Action::Login { username: "js".into(), pin: Some(9999) }),
            Outcome::Rejected(Rejection::WrongPin)
        );
        assert!(!s.is_logged_in());
    }

    #[test]
    fn actions_after_close_need_a_new_login() {
        let mut s = session();
        let mut c = Controller::new();
        c.process(&mut s, Action::Login { username: "js".into(), pin: Some(1111) });
        c.process(&mut s, Action::CloseAccount { username: "js".into(), pin: Some(1111) });

        assert_eq!(
            c.process(&mut s, Action::RequestLoan { amount: Some(Money::from_units(10)) }),
            Outcome::Rejected(Rejection::NotLoggedIn)
        );
        assert_eq!(
            c.process(&mut s, Action::Login { username: "js".into(), pin: Some(1111) }),
            Outcome::Rejected(Rejection::UnknownUser("js".into()))
        );
    }
}
