//! `YYYY-MM-DD` input mask for the date of birth.

const MAX_LEN: usize = 10;

/// Appends a typed digit, inserting `-` after the year and the month.
pub fn push_char(value: &str, ch: char) -> String {
    let mut out = value.to_string();
    if !ch.is_ascii_digit() || out.len() >= MAX_LEN {
        return out;
    }
    if out.len() == 4 || out.len() == 7 {
        out.push('-');
    }
    out.push(ch);
    out
}

/// Removes the last digit together with a separator left dangling.
pub fn pop_char(value: &str) -> String {
    let mut out = value.to_string();
    out.pop();
    if out.ends_with('-') {
        out.pop();
    }
    out
}
