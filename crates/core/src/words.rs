//! Currency amounts in words on the Crore/Lakh scale.
//!
//! 1 Crore = 10,000,000; 1 Lakh = 100,000. Amounts are rounded to the
//! nearest whole unit (half away from zero) before conversion.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;

fn push_below_hundred(n: usize, out: &mut Vec<&'static str>) {
    if n < 20 {
        if n > 0 {
            out.push(ONES[n]);
        }
    } else {
        out.push(TENS[n / 10]);
        if n % 10 > 0 {
            out.push(ONES[n % 10]);
        }
    }
}

fn push_below_thousand(n: usize, out: &mut Vec<&'static str>) {
    if n >= 100 {
        out.push(ONES[n / 100]);
        out.push("Hundred");
    }
    push_below_hundred(n % 100, out);
}

fn small(n: u128) -> usize {
    // callers only pass values below 1000
    usize::try_from(n).unwrap_or(0)
}

fn push_words(n: u128, out: &mut Vec<&'static str>) {
    let crores = n / CRORE;
    if crores > 0 {
        // A crore count above 999 is itself spelled on the same scale.
        if crores >= THOUSAND {
            push_words(crores, out);
        } else {
            push_below_thousand(small(crores), out);
        }
        out.push("Crore");
    }
    let rest = n % CRORE;

    let lakhs = rest / LAKH;
    if lakhs > 0 {
        push_below_hundred(small(lakhs), out);
        out.push("Lakh");
    }

    let thousands = (rest % LAKH) / THOUSAND;
    if thousands > 0 {
        push_below_hundred(small(thousands), out);
        out.push("Thousand");
    }

    push_below_thousand(small(rest % THOUSAND), out);
}

/// Spells a whole number, e.g. `1234567` as
/// `"Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"`.
#[must_use]
pub fn number_in_words(n: u128) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    let mut out = Vec::new();
    push_words(n, &mut out);
    out.join(" ")
}

/// Spells an amount after rounding it to a whole unit.
///
/// Negative amounts are prefixed with `"Minus"`.
#[must_use]
pub fn amount_in_words(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs().to_u128().unwrap_or(0);
    let words = number_in_words(magnitude);
    if rounded.is_sign_negative() && magnitude > 0 {
        format!("Minus {words}")
    } else {
        words
    }
}

/// Words followed by the currency suffix, e.g. `"One Hundred Taka Only"`.
#[must_use]
pub fn caption(amount: Decimal, suffix: &str) -> String {
    let words = amount_in_words(amount);
    let suffix = suffix.trim();
    if suffix.is_empty() {
        words
    } else {
        format!("{words} {suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(0, "Zero")]
    #[case(7, "Seven")]
    #[case(15, "Fifteen")]
    #[case(40, "Forty")]
    #[case(99, "Ninety Nine")]
    #[case(100, "One Hundred")]
    #[case(101, "One Hundred One")]
    #[case(1000, "One Thousand")]
    #[case(20_015, "Twenty Thousand Fifteen")]
    #[case(100_000, "One Lakh")]
    #[case(1_234_567, "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven")]
    #[case(10_000_000, "One Crore")]
    #[case(999_999_999, "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine")]
    #[case(10_000_000_000, "One Thousand Crore")]
    #[case(12_345_000_000_000, "Twelve Lakh Thirty Four Thousand Five Hundred Crore")]
    fn test_number_in_words(#[case] n: u128, #[case] expected: &str) {
        assert_eq!(number_in_words(n), expected);
    }

    #[rstest]
    #[case(dec!(0.49), "Zero")]
    #[case(dec!(0.5), "One")]
    #[case(dec!(99.5), "One Hundred")]
    #[case(dec!(1250.75), "One Thousand Two Hundred Fifty One")]
    #[case(dec!(-0.4), "Zero")]
    #[case(dec!(-250), "Minus Two Hundred Fifty")]
    fn test_amount_in_words_rounds(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(amount_in_words(amount), expected);
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption(dec!(100), "Taka Only"), "One Hundred Taka Only");
        assert_eq!(caption(dec!(100), " "), "One Hundred");
    }

    proptest! {
        /// Output is never empty and never has stray spaces.
        #[test]
        fn prop_words_are_well_formed(n in 0u128..1_000_000_000_000u128) {
            let words = number_in_words(n);
            prop_assert!(!words.is_empty());
            prop_assert!(!words.contains("  "));
            prop_assert_eq!(words.trim(), words.as_str());
        }

        /// Amounts below one crore never mention Crore.
        #[test]
        fn prop_below_one_crore_has_no_crore(n in 1u128..10_000_000u128) {
            prop_assert!(!number_in_words(n).contains("Crore"));
        }
    }
}
