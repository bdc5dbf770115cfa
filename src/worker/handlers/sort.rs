use crate::{
    common::outcome::{Outcome, Rejection},
    domain::session::Session,
};

/// Flips between chronological and ascending display. Only the view changes.
pub fn handle(session: &mut Session) -> Outcome {
    if !session.is_logged_in() {
        return Rejection::NotLoggedIn.into();
    }
    session.toggle_sort();
    Outcome::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bank::{tests::account, Bank};

    #[test]
    fn toggling_twice_restores_flag_and_never_touches_storage() {
        let mut s = Session::new(
            Bank::new(vec![account("Jonas Schmedtmann", 1111, &[200, -400, 450])]).unwrap(),
        );
        s.log_in("js");
        let before = s.current_account().unwrap().movements.clone();

        assert!(handle(&mut s).is_accepted());
        assert!(s.is_sorted());
        assert!(handle(&mut s).is_accepted());
        assert!(!s.is_sorted());

        assert_eq!(s.current_account().unwrap().movements, before);
    }

    #[test]
    fn sort_requires_login() {
        let mut s = Session::default();
        assert_eq!(handle(&mut s), Outcome::Rejected(Rejection::NotLoggedIn));
        assert!(!s.is_sorted());
    }
}
