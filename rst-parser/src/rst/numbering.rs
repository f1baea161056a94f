//! List numbering
//!
//!     Enumerated list items carry an enumerator (`3`, `c`, `iv`, `#`) wrapped in a marker
//!     (`3.`, `3)`, `(3)`). This module decides which numbering alphabet an enumerator belongs
//!     to and what number it stands for, and converts numbers back into each alphabet.
//!
//! Ambiguity
//!
//!     `i`, `v`, `x` and friends are valid both as letters and as roman numerals. An enumerator
//!     continues the previous list when it renders as the successor of the previous item in
//!     that list's alphabet. A fresh list tries roman numerals first when the token is `i` or
//!     longer than one character, so `ii.` starts a roman list at 2 while `b.` starts a letter
//!     list at 2. Multi-letter tokens that are not roman numerals are rejected.

use super::ast::{EnumeratorKind, MarkerKind};

const ROMAN_VALUES: &[(&str, u64)] = &[
    ("m", 1000),
    ("cm", 900),
    ("d", 500),
    ("cd", 400),
    ("c", 100),
    ("xc", 90),
    ("l", 50),
    ("xl", 40),
    ("x", 10),
    ("ix", 9),
    ("v", 5),
    ("iv", 4),
    ("i", 1),
];

fn roman_digit(ch: char) -> Option<u64> {
    match ch {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}

/// Lowercase roman numeral for `n`; empty for zero.
pub fn to_roman(mut n: u64) -> String {
    let mut result = String::new();
    for (numeral, value) in ROMAN_VALUES {
        while n >= *value {
            result.push_str(numeral);
            n -= value;
        }
    }
    result
}

/// Parses a roman numeral in either case.
///
/// Only canonical numerals are accepted: `iv` is 4, while `iiii`, `ic` and `vv` are rejected.
pub fn from_roman(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let lower = s.to_ascii_lowercase();
    let mut total: u64 = 0;
    let mut prev_value = 0;
    for ch in lower.chars().rev() {
        let value = roman_digit(ch)?;
        if value < prev_value {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
        }
        prev_value = value;
    }
    if total > 0 && to_roman(total) == lower {
        Some(total)
    } else {
        None
    }
}

/// Lowercase spreadsheet-column numeral: `a`..`z`, then `aa`; empty for zero.
pub fn to_letters(mut n: u64) -> String {
    let mut result = Vec::new();
    while n > 0 {
        n -= 1;
        result.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    result.reverse();
    String::from_utf8(result).unwrap_or_default()
}

/// Parses a spreadsheet-column numeral in either case.
pub fn from_letters(s: &str) -> Option<u64> {
    if s.is_empty() || !s.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    s.bytes().try_fold(0u64, |acc, byte| {
        let digit = u64::from(byte.to_ascii_lowercase() - b'a' + 1);
        acc.checked_mul(26)?.checked_add(digit)
    })
}

/// Renders `n` in the alphabet of `kind`. Bullets have no rendering.
pub fn render_enumerator(kind: EnumeratorKind, n: u64) -> Option<String> {
    match kind {
        EnumeratorKind::Bullet(_) => None,
        EnumeratorKind::Number => Some(n.to_string()),
        EnumeratorKind::SmallLetter => Some(to_letters(n)),
        EnumeratorKind::CapitalLetter => Some(to_letters(n).to_ascii_uppercase()),
        EnumeratorKind::SmallRoman => Some(to_roman(n)),
        EnumeratorKind::CapitalRoman => Some(to_roman(n).to_ascii_uppercase()),
    }
}

/// A scanned enumerator with its marker, before interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator<'a> {
    /// Marker started with `(`.
    pub open_paren: bool,
    /// Digits, `#`, or a run of same-case ASCII letters.
    pub token: &'a str,
    /// `)` or `.`.
    pub close: char,
}

impl Enumerator<'_> {
    pub fn marker_kind(&self) -> Option<MarkerKind> {
        match (self.open_paren, self.close) {
            (true, ')') => Some(MarkerKind::Enclosed),
            (false, ')') => Some(MarkerKind::Paren),
            (false, '.') => Some(MarkerKind::Dot),
            _ => None,
        }
    }
}

/// Numbering of one list item: alphabet, marker and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemNumbering {
    pub enumerator_kind: EnumeratorKind,
    pub marker_kind: MarkerKind,
    pub number: u64,
}

impl ItemNumbering {
    /// True when `next` is the item that directly follows this one in the same list.
    pub fn is_followed_by(&self, next: &ItemNumbering) -> bool {
        next.enumerator_kind == self.enumerator_kind
            && next.marker_kind == self.marker_kind
            && self.number.checked_add(1) == Some(next.number)
    }
}

/// Interprets an enumerator, given the last item of the preceding list if there is one.
///
/// Returns `None` when the marker is malformed (`(1.`), the number does not fit, or a
/// multi-letter token is not a roman numeral.
pub fn detect_numbering(
    enumerator: &Enumerator<'_>,
    prev: Option<&ItemNumbering>,
) -> Option<ItemNumbering> {
    let marker_kind = enumerator.marker_kind()?;
    let token = enumerator.token;

    if let Some(prev) = prev.filter(|prev| {
        prev.marker_kind == marker_kind && !prev.enumerator_kind.is_bullet()
    }) {
        if let Some(next) = prev.number.checked_add(1) {
            let continues = token == "#"
                || render_enumerator(prev.enumerator_kind, next)
                    .is_some_and(|expected| token.trim_start_matches('0') == expected);
            if continues {
                return Some(ItemNumbering {
                    enumerator_kind: prev.enumerator_kind,
                    marker_kind,
                    number: next,
                });
            }
        }
    }

    let numbering = |enumerator_kind, number| {
        Some(ItemNumbering {
            enumerator_kind,
            marker_kind,
            number,
        })
    };

    if token == "#" {
        return numbering(EnumeratorKind::Number, 1);
    }
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return numbering(EnumeratorKind::Number, token.parse().ok()?);
    }

    let (roman_kind, letter_kind, first_roman) =
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase()) {
            (EnumeratorKind::SmallRoman, EnumeratorKind::SmallLetter, "i")
        } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_uppercase()) {
            (EnumeratorKind::CapitalRoman, EnumeratorKind::CapitalLetter, "I")
        } else {
            return None;
        };

    let is_single = token.len() == 1;
    if token == first_roman || !is_single {
        if let Some(number) = from_roman(token) {
            return numbering(roman_kind, number);
        }
    }
    if !is_single {
        return None;
    }
    numbering(letter_kind, from_letters(token)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn enumerator(token: &str) -> Enumerator<'_> {
        Enumerator {
            open_paren: false,
            token,
            close: '.',
        }
    }

    #[rstest]
    #[case(1, "i")]
    #[case(4, "iv")]
    #[case(9, "ix")]
    #[case(14, "xiv")]
    #[case(1994, "mcmxciv")]
    fn roman_numerals(#[case] n: u64, #[case] roman: &str) {
        assert_eq!(to_roman(n), roman);
        assert_eq!(from_roman(roman), Some(n));
        assert_eq!(from_roman(&roman.to_uppercase()), Some(n));
    }

    #[rstest]
    #[case("iiii")]
    #[case("ic")]
    #[case("vv")]
    #[case("")]
    #[case("abc")]
    fn rejects_non_canonical_romans(#[case] input: &str) {
        assert_eq!(from_roman(input), None);
    }

    #[rstest]
    #[case(1, "a")]
    #[case(26, "z")]
    #[case(27, "aa")]
    #[case(52, "az")]
    #[case(703, "aaa")]
    fn letter_numerals(#[case] n: u64, #[case] letters: &str) {
        assert_eq!(to_letters(n), letters);
        assert_eq!(from_letters(letters), Some(n));
    }

    #[test]
    fn zero_renders_empty() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_letters(0), "");
        assert_eq!(from_letters("a1"), None);
    }

    #[test]
    fn overlong_letters_do_not_overflow() {
        assert_eq!(from_letters(&"z".repeat(40)), None);
    }

    #[test]
    fn fresh_start_prefers_roman_for_i() {
        let numbering = detect_numbering(&enumerator("i"), None).unwrap();
        assert_eq!(numbering.enumerator_kind, EnumeratorKind::SmallRoman);
        assert_eq!(numbering.number, 1);

        let numbering = detect_numbering(&enumerator("v"), None).unwrap();
        assert_eq!(numbering.enumerator_kind, EnumeratorKind::SmallLetter);
        assert_eq!(numbering.number, 22);

        let numbering = detect_numbering(&enumerator("IV"), None).unwrap();
        assert_eq!(numbering.enumerator_kind, EnumeratorKind::CapitalRoman);
        assert_eq!(numbering.number, 4);

        assert_eq!(detect_numbering(&enumerator("ab"), None), None);
    }

    #[test]
    fn continuation_uses_previous_alphabet() {
        let prev = ItemNumbering {
            enumerator_kind: EnumeratorKind::SmallLetter,
            marker_kind: MarkerKind::Dot,
            number: 8,
        };
        // `i` after `h` is a letter, not roman one.
        let next = detect_numbering(&enumerator("i"), Some(&prev)).unwrap();
        assert_eq!(next.enumerator_kind, EnumeratorKind::SmallLetter);
        assert_eq!(next.number, 9);
        assert!(prev.is_followed_by(&next));

        let auto = detect_numbering(&enumerator("#"), Some(&prev)).unwrap();
        assert_eq!(auto.number, 9);
    }

    #[test]
    fn continuation_ignores_leading_zeros() {
        let prev = ItemNumbering {
            enumerator_kind: EnumeratorKind::Number,
            marker_kind: MarkerKind::Dot,
            number: 9,
        };
        let next = detect_numbering(&enumerator("010"), Some(&prev)).unwrap();
        assert!(prev.is_followed_by(&next));
    }

    #[test]
    fn marker_change_starts_afresh() {
        let prev = ItemNumbering {
            enumerator_kind: EnumeratorKind::Number,
            marker_kind: MarkerKind::Paren,
            number: 1,
        };
        let next = detect_numbering(&enumerator("2"), Some(&prev)).unwrap();
        assert_eq!(next.marker_kind, MarkerKind::Dot);
        assert!(!prev.is_followed_by(&next));
    }

    #[test]
    fn malformed_marker_is_rejected() {
        let bad = Enumerator {
            open_paren: true,
            token: "1",
            close: '.',
        };
        assert_eq!(detect_numbering(&bad, None), None);
    }

    #[test]
    fn huge_numbers_are_rejected() {
        assert_eq!(detect_numbering(&enumerator("99999999999999999999999"), None), None);
    }

    proptest! {
        #[test]
        fn roman_round_trip(n in 1u64..=500) {
            prop_assert_eq!(from_roman(&to_roman(n)), Some(n));
        }

        #[test]
        fn letters_round_trip(n in 1u64..=1000) {
            prop_assert_eq!(from_letters(&to_letters(n)), Some(n));
        }
    }
}
