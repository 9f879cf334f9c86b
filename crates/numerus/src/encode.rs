//! Integer to Roman numeral encoding.
//!
//! The lookup table pre-expands every digit of every decimal place (e.g.
//! `800 => "DCCC"`, `8 => "VIII"`), so each decimal place contributes at most
//! one table entry and no repeat-count loop is needed.

use crate::{MAX_VALUE, MIN_VALUE};

/// Value/symbol pairs, strictly descending by value.
///
/// Read-only for the life of the process and safe to share across any number
/// of tasks.
pub static DENOMINATIONS: [(u16, &str); 30] = [
    (3000, "MMM"),
    (2000, "MM"),
    (1000, "M"),
    (900, "CM"),
    (800, "DCCC"),
    (700, "DCC"),
    (600, "DC"),
    (500, "D"),
    (400, "CD"),
    (300, "CCC"),
    (200, "CC"),
    (100, "C"),
    (90, "XC"),
    (80, "LXXX"),
    (70, "LXX"),
    (60, "LX"),
    (50, "L"),
    (40, "XL"),
    (30, "XXX"),
    (20, "XX"),
    (10, "X"),
    (9, "IX"),
    (8, "VIII"),
    (7, "VII"),
    (6, "VI"),
    (5, "V"),
    (4, "IV"),
    (3, "III"),
    (2, "II"),
    (1, "I"),
];

/// Longest numeral in the domain is `MMMDCCCLXXXVIII` (3888).
const MAX_NUMERAL_LEN: usize = 15;

/// Encodes `number` as a canonical Roman numeral.
///
/// Only defined for `1..=3999`; callers validate first. Out-of-domain input
/// trips a debug assertion and otherwise yields an unspecified string.
pub fn encode(number: u16) -> String {
    let mut numeral = String::with_capacity(MAX_NUMERAL_LEN);
    encode_into(number, &mut numeral);
    numeral
}

/// Appends the numeral for `number` to `out`. See [`encode`].
pub fn encode_into(number: u16, out: &mut String) {
    debug_assert!((MIN_VALUE..=MAX_VALUE).contains(&number));

    let mut remaining = number;
    for &(value, symbol) in &DENOMINATIONS {
        if remaining >= value {
            out.push_str(symbol);
        }
        remaining %= value;
        if remaining == 0 {
            break;
        }
    }
}
