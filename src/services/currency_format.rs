use rust_decimal::Decimal;

use crate::services::allocator::round_cents;

/// Formats an amount as `€ 1.234,56`: dot for thousands, comma for decimals,
/// rounded half-up to cents like the allocator.
pub fn format_euro(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (integer_part, fraction_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "€ {sign}{},{fraction_part}",
        group_thousands(integer_part)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_with_dot_thousands_and_comma_decimals() {
        assert_eq!(format_euro(dec!(1234567.891)), "€ 1.234.567,89");
        assert_eq!(format_euro(dec!(10000)), "€ 10.000,00");
        assert_eq!(format_euro(dec!(999.5)), "€ 999,50");
        assert_eq!(format_euro(dec!(0)), "€ 0,00");
    }

    #[test]
    fn rounds_half_up_like_the_allocator() {
        assert_eq!(format_euro(dec!(0.005)), "€ 0,01");
        assert_eq!(format_euro(dec!(2.675)), "€ 2,68");
        assert_eq!(format_euro(dec!(999.995)), "€ 1.000,00");
    }

    #[test]
    fn negative_amounts_keep_sign_after_symbol() {
        assert_eq!(format_euro(dec!(-1234.5)), "€ -1.234,50");
        assert_eq!(format_euro(dec!(-0.001)), "€ 0,00");
    }
}
