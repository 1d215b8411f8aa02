//! Number, currency and address formatting shared by the page and the CLI.

use crate::random::{self, RandomSource};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Group the digits of an unsigned integer: `1234567` -> `1,234,567`.
pub fn format_number(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// US-dollar formatting with grouping and two fraction digits: `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}", sign, format_cents(cents))
}

/// Same as [`format_currency`] for an amount already held in cents.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", format_number(cents / 100), cents % 100)
}

/// A synthetic wallet address: `0x` followed by 40 lowercase hex characters.
pub fn generate_address(rng: &mut dyn RandomSource) -> String {
    let mut address = String::with_capacity(42);
    address.push_str("0x");
    for _ in 0..40 {
        address.push(*random::pick(rng, HEX_CHARS) as char);
    }
    address
}

/// Display form of an address: first 6 and last 4 characters.
pub fn elide_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
