//! Pure queries over a movement list. Nothing here is cached: every figure is
//! recomputed from the movements each time it is shown.
//!
//! The sums saturate rather than wrap. Every movement list the bank holds has
//! passed [`is_within_range`], and for those lists they are exact.

use bigdecimal::BigDecimal;

use crate::{
    common::money::{InterestRate, Money},
    domain::account::Account,
};

pub fn compute_balance(movements: &[Money]) -> Money {
    movements.iter().sum()
}

/// Sum of deposits.
pub fn compute_income(movements: &[Money]) -> Money {
    movements.iter().filter(|m| m.is_positive()).sum()
}

/// Signed sum of withdrawals, so never above zero.
pub fn compute_outcome(movements: &[Money]) -> Money {
    movements.iter().filter(|m| m.is_negative()).sum()
}

/// Interest on each deposit, counting only amounts of at least one unit.
pub fn compute_interest(movements: &[Money], rate: InterestRate) -> Money {
    qualifying_interest(movements, rate)
        .map(|term| term.unwrap_or(Money::MAX))
        .sum()
}

/// Whether every figure above can be computed without leaving the `Money`
/// range. Income and outcome bound every partial sum of the balance.
pub fn is_within_range(movements: &[Money], rate: InterestRate) -> bool {
    let income = checked_sum(movements.iter().filter(|m| m.is_positive()).map(|m| Some(*m)));
    let outcome = checked_sum(movements.iter().filter(|m| m.is_negative()).map(|m| Some(*m)));
    let interest = checked_sum(qualifying_interest(movements, rate));

    // the displayed outcome is its absolute value
    let outcome_fits = outcome.is_some_and(|o| o.as_i64().checked_neg().is_some());
    income.is_some() && outcome_fits && interest.is_some()
}

/// Interest per deposit, compared with one unit before any rounding. `None`
/// for a term too large for `Money`.
fn qualifying_interest(
    movements: &[Money],
    rate: InterestRate,
) -> impl Iterator<Item = Option<Money>> + '_ {
    let one = BigDecimal::from(1);
    movements
        .iter()
        .filter(|m| m.is_positive())
        .map(move |deposit| rate.interest_on(*deposit))
        .filter(move |interest| *interest >= one)
        .map(|interest| Money::from_decimal(&interest))
}

fn checked_sum(mut terms: impl Iterator<Item = Option<Money>>) -> Option<Money> {
    terms.try_fold(Money::zero(), |acc, term| acc.checked_add(term?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub balance: Money,
    pub income: Money,
    pub outcome: Money,
    pub interest: Money,
}

impl Summary {
    pub fn of(acc: &Account) -> Self {
        Self {
            balance: compute_balance(&acc.movements),
            income: compute_income(&acc.movements),
            outcome: compute_outcome(&acc.movements),
            interest: compute_interest(&acc.movements, acc.interest_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    fn movs(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_units).collect()
    }

    fn rate(s: &str) -> InterestRate {
        InterestRate::from_str(s).unwrap()
    }

    #[test_case(&[] ; "empty")]
    #[test_case(&[200, 450, -400, 3000, -650, -130, 70, 1300] ; "jonas")]
    #[test_case(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30] ; "jessica")]
    #[test_case(&[-10, -20] ; "only withdrawals")]
    fn balance_splits_into_income_and_outcome(values: &[i64]) {
        let m = movs(values);
        let income = compute_income(&m);
        let outcome = compute_outcome(&m);

        assert_eq!(Some(compute_balance(&m)), income.checked_add(outcome));
        assert!(income >= Money::zero());
        assert!(outcome <= Money::zero());
    }

    #[test]
    fn jonas_summary() {
        let m = movs(&[200, 450, -400, 3000, -650, -130, 70, 1300]);
        assert_eq!(compute_balance(&m), Money::from_units(3840));
        assert_eq!(compute_income(&m), Money::from_units(5020));
        assert_eq!(compute_outcome(&m), Money::from_units(-1180));
        // 70 * 1.2% = 0.84 is dropped
        assert_eq!(
            compute_interest(&m, rate("1.2")),
            Money::from_str("59.4").unwrap()
        );
    }

    #[test_case(&["100"], "1.2", "1.2" ; "interest of exactly one unit or more counts")]
    #[test_case(&["50"], "1.2", "0" ; "interest below one unit is dropped")]
    #[test_case(&["100", "50"], "1", "1" ; "threshold is inclusive")]
    #[test_case(&["83.3292"], "1.2", "0" ; "just below one unit is dropped before rounding")]
    #[test_case(&["83.3334"], "1.2", "1.0000" ; "just above one unit is rounded to four places")]
    #[test_case(&["-1000"], "5", "0" ; "withdrawals earn nothing")]
    fn interest_filters_small_amounts(deposits: &[&str], r: &str, expected: &str) {
        let m: Vec<Money> = deposits.iter().map(|d| Money::from_str(d).unwrap()).collect();
        assert_eq!(
            compute_interest(&m, rate(r)),
            Money::from_str(expected).unwrap()
        );
    }

    #[test]
    fn demo_sized_ledgers_are_within_range() {
        let m = movs(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30]);
        assert!(is_within_range(&m, rate("1.5")));
        assert!(is_within_range(&[], rate("1.5")));
    }

    #[test]
    fn deposits_past_the_money_range_are_out_of_range() {
        let big = Money::from_units(900_000_000_000_000);
        assert!(is_within_range(&[big], rate("1")));
        assert!(!is_within_range(&[big, Money::from_units(30_000_000_000_000)], rate("1")));
    }

    #[test]
    fn withdrawals_past_the_money_range_are_out_of_range() {
        let big = Money::from_units(-900_000_000_000_000);
        assert!(!is_within_range(&[big, big], rate("1")));
        // the absolute outcome has to fit as well
        assert!(!is_within_range(&[Money::new(i64::MIN)], rate("1")));
    }

    #[test]
    fn interest_past_the_money_range_is_out_of_range() {
        let m = movs(&[100_000_000_000_000]);
        assert!(is_within_range(&m, rate("900")));
        assert!(!is_within_range(&m, rate("1000")));
    }

    #[test]
    fn out_of_range_sums_saturate() {
        let m = [Money::MAX, Money::MAX];
        assert_eq!(compute_balance(&m), Money::MAX);
        assert_eq!(compute_income(&m), Money::MAX);
    }

    #[test]
    fn summary_bundles_every_figure() {
        let mut acc = Account::new(
            "Sarah Smith",
            4444,
            movs(&[430, 1000, 700, 50, 90]),
            rate("1"),
        );
        acc.username = "ss".into();

        let s = Summary::of(&acc);
        assert_eq!(s.balance, Money::from_units(2270));
        assert_eq!(s.income, Money::from_units(2270));
        assert_eq!(s.outcome, Money::zero());
        // 4.3 + 10 + 7; 0.5 and 0.9 are below one unit
        assert_eq!(s.interest, Money::from_str("21.3").unwrap());
    }
}
