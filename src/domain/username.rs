use crate::domain::account::Account;

/// Lowercase initials of every whitespace-separated word of `owner`.
pub fn derive_username(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Assigns a username to every account in place. Called once, right after the
/// accounts are loaded.
pub fn create_usernames(accounts: &mut [Account]) {
    for acc in accounts.iter_mut() {
        acc.username = derive_username(&acc.owner);
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::common::money::InterestRate;

    #[test_case("Jonas Schmedtmann", "js" ; "two words")]
    #[test_case("Steven Thomas Williams", "stw" ; "three words")]
    #[test_case("  sarah   Smith ", "ss" ; "extra whitespace")]
    #[test_case("Émile Zola", "éz" ; "non ascii initial")]
    #[test_case("Cher", "c" ; "single word")]
    fn derives_initials(owner: &str, expected: &str) {
        assert_eq!(derive_username(owner), expected);
    }

    #[test]
    fn create_usernames_fills_every_account() {
        let mut accounts = vec![
            Account::new("Jessica Davis", 2222, vec![], InterestRate::default()),
            Account::new("Sarah Smith", 4444, vec![], InterestRate::default()),
        ];
        create_usernames(&mut accounts);

        let names: Vec<&str> = accounts.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(names, ["jd", "ss"]);
    }
}
