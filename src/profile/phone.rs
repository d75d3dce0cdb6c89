//! Composite phone input: a country selector plus national digits.
//!
//! The stored value is `"+{dial} {digits}"` as soon as one digit exists and
//! the empty string otherwise.

use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Lowercase ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

pub const DEFAULT_COUNTRY: &str = "cm";

pub const COUNTRIES: &[Country] = &[
    Country { code: "cm", name: "Cameroun", dial_code: "237" },
    Country { code: "fr", name: "France", dial_code: "33" },
    Country { code: "be", name: "Belgique", dial_code: "32" },
    Country { code: "ch", name: "Suisse", dial_code: "41" },
    Country { code: "ca", name: "Canada", dial_code: "1" },
    Country { code: "us", name: "États-Unis", dial_code: "1" },
    Country { code: "gb", name: "Royaume-Uni", dial_code: "44" },
    Country { code: "de", name: "Allemagne", dial_code: "49" },
    Country { code: "ci", name: "Côte d'Ivoire", dial_code: "225" },
    Country { code: "sn", name: "Sénégal", dial_code: "221" },
    Country { code: "ga", name: "Gabon", dial_code: "241" },
    Country { code: "ng", name: "Nigeria", dial_code: "234" },
];

pub fn find_country(code: &str) -> Option<usize> {
    COUNTRIES
        .iter()
        .position(|country| country.code.eq_ignore_ascii_case(code))
}

/// Country at `index`, falling back to the first entry.
pub fn country_at(index: usize) -> Country {
    COUNTRIES.get(index).copied().unwrap_or(COUNTRIES[0])
}

pub fn next_country(index: usize) -> usize {
    (index + 1) % COUNTRIES.len()
}

pub fn prev_country(index: usize) -> usize {
    (index + COUNTRIES.len() - 1) % COUNTRIES.len()
}

/// National digits of a stored value, whatever its prefix.
pub fn national_digits(value: &str) -> &str {
    match value.strip_prefix('+') {
        Some(rest) => rest.split_once(' ').map_or("", |(_, digits)| digits),
        None => value,
    }
}

/// Builds the stored value from a country and national digits.
pub fn compose(country: Country, digits: &str) -> String {
    if digits.is_empty() {
        String::new()
    } else {
        format!("+{} {}", country.dial_code, digits)
    }
}

/// Appends a typed character. Non-digits are ignored.
pub fn push_char(value: &str, country: Country, ch: char) -> String {
    if !ch.is_ascii_digit() {
        return value.to_string();
    }
    let mut digits = national_digits(value).to_string();
    digits.push(ch);
    compose(country, &digits)
}

/// Removes the last national digit; drops the prefix with the last digit.
pub fn pop_char(value: &str, country: Country) -> String {
    let mut digits = national_digits(value).to_string();
    digits.pop();
    compose(country, &digits)
}

/// Splits a pasted `+{dial} ...` number into a country index and its national
/// digits. `preferred` wins when several countries share the dial code.
pub fn split_international(text: &str, preferred: usize) -> Option<(usize, String)> {
    let rest = text.trim_start().strip_prefix('+')?;
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    let dials = |country: &Country| digits.starts_with(country.dial_code);

    let index = if COUNTRIES.get(preferred).is_some_and(|country| dials(country)) {
        preferred
    } else {
        COUNTRIES
            .iter()
            .enumerate()
            .filter(|&(_, country)| dials(country))
            .min_by_key(|(_, country)| Reverse(country.dial_code.len()))
            .map(|(index, _)| index)?
    };
    let national = digits[country_at(index).dial_code.len()..].to_string();
    Some((index, national))
}

/// Re-prefixes an existing value for a newly selected country.
pub fn with_country(value: &str, country: Country) -> String {
    compose(country, national_digits(value))
}
