use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "mon", "tue",
    "tues", "wed", "thu", "thur", "thurs", "fri", "sat", "sun",
];

const MERIDIEMS: &[&str] = &["am", "pm"];

/// Words allowed between date parts that carry no date information themselves
const FILLERS: &[&str] = &["of", "at", "the"];

/// A date rarely carries more than day, month-as-number and year
const MAX_NUMERIC_PARTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Word,
    Number,
    Time,
    Filler,
}

/// Returns whether the text reads as a date
///
/// Accepts ISO 8601 / RFC 3339 dates and timestamps, compact `YYYYMMDD` dates,
/// and free-form dates made only of month or weekday names, day numbers (with
/// optional ordinal suffix), four-digit years, `HH:MM[:SS]` times and am/pm.
/// Omnipedia renders its date switcher links as e.g. "October 1st, 2049".
///
/// # Examples
///
/// ```
/// use ompedia_crawler::links::is_date;
///
/// assert!(is_date("October 1st, 2049"));
/// assert!(is_date("2049-10-01"));
/// assert!(!is_date("Physics"));
/// assert!(!is_date(""));
/// ```
pub fn is_date(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    if is_iso_date(text) {
        return true;
    }

    let mut has_date_part = false;
    let mut numeric_parts = 0;

    for raw in text
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '/' | '-' | '.'))
        .filter(|t| !t.is_empty())
    {
        match classify_token(&raw.to_lowercase()) {
            Some(Token::Filler) => {}
            Some(Token::Number) => {
                numeric_parts += 1;
                has_date_part = true;
            }
            Some(Token::Word) | Some(Token::Time) => has_date_part = true,
            None => return false,
        }
    }

    has_date_part && numeric_parts <= MAX_NUMERIC_PARTS
}

fn is_iso_date(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

fn classify_token(token: &str) -> Option<Token> {
    if MONTHS.contains(&token) || WEEKDAYS.contains(&token) || MERIDIEMS.contains(&token) {
        return Some(Token::Word);
    }

    if FILLERS.contains(&token) {
        return Some(Token::Filler);
    }

    if token.contains(':') {
        let is_time = NaiveTime::parse_from_str(token, "%H:%M").is_ok()
            || NaiveTime::parse_from_str(token, "%H:%M:%S").is_ok();
        return is_time.then_some(Token::Time);
    }

    let digits = strip_ordinal(token);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let is_number = match digits.len() {
        1 | 2 => digits.parse::<u32>().is_ok_and(|n| (1..=31).contains(&n)),
        4 => digits == token,
        8 => digits == token && NaiveDate::parse_from_str(digits, "%Y%m%d").is_ok(),
        _ => false,
    };
    is_number.then_some(Token::Number)
}

fn strip_ordinal(token: &str) -> &str {
    ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token)
}
