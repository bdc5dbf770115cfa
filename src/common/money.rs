use bigdecimal::BigDecimal;
use bigdecimal::*;
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Neg;
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a currency unit.
///
/// Positive values are deposits, negative values withdrawals. Keeping the
/// value as a scaled integer means sums over a movement list are exact.
/// Addition is checked or saturating, never wrapping.
///
/// # Examples
/// ```
/// use bankist::common::money::Money;
///
/// let amount = Money::from_units(250);
/// assert_eq!(amount.as_i64(), 2_500_000);
/// assert_eq!(amount.to_plain_string(), "250");
/// assert_eq!(Money::MAX.checked_add(amount), None);
/// ```
pub struct Money(i64);

impl Money {
    pub const MAX: Money = Money(i64::MAX);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `Money::from_units(200)` is 200.
    pub fn from_units(units: i64) -> Self {
        Money(units * SCALE)
    }

    /// Rounds a value in currency units to four decimals. `None` when it does
    /// not fit.
    pub fn from_decimal(units: &BigDecimal) -> Option<Self> {
        scale(units).map(Money)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Self {
        Money(self.0.saturating_abs())
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    /// The amount in currency units, exactly.
    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.0) / BigDecimal::from(SCALE)
    }

    /// Shortest decimal form: no trailing zeros and no trailing point.
    pub fn to_plain_string(&self) -> String {
        let whole = (self.0 / SCALE).unsigned_abs();
        let frac = (self.0 % SCALE).unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        if frac == 0 {
            return format!("{sign}{whole}");
        }
        let digits = format!("{frac:04}");
        format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

/// Saturates at the ends of the range. Use [`Money::checked_add`] where an
/// overflow has to be reported.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Yearly interest as a percentage, stored with the same four decimal places
/// as [`Money`] (`1.2` percent is `12_000`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestRate(i64);

impl InterestRate {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Interest earned on `amount` at this rate, in currency units, unrounded.
    pub fn interest_on(&self, amount: Money) -> BigDecimal {
        amount.to_decimal() * BigDecimal::from(self.0) / BigDecimal::from(SCALE * 100)
    }
}

impl std::str::FromStr for InterestRate {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scaled(s).map(InterestRate)
    }
}

impl fmt::Display for InterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", Money(self.0).to_plain_string())
    }
}

fn parse_scaled(s: &str) -> Result<i64, ParseBigDecimalError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(ParseBigDecimalError::Other("empty amount".into()));
    }

    let bd: BigDecimal = t.parse()?;
    scale(&bd).ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))
}

// Scale to 4 decimal places
fn scale(units: &BigDecimal) -> Option<i64> {
    (units * BigDecimal::from(SCALE)).round(0).to_i64()
}
