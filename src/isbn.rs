//! ISBN validation and normalization helpers.
//!
//! The catalog itself treats ISBNs as opaque non-empty strings; these
//! helpers let callers check identifiers before insertion and normalize the
//! punctuated forms found in the wild (`978-0-306-40615-7`) to the bare
//! digit form used as a lookup key.

/// Strip dashes and spaces from an ISBN.
///
/// # Examples
///
/// ```
/// use bookcat::isbn;
///
/// assert_eq!(isbn::normalize("978-0-306-40615-7"), "9780306406157");
/// assert_eq!(isbn::normalize("0 306 40615 2"), "0306406152");
/// ```
#[must_use]
pub fn normalize(isbn: &str) -> String {
    isbn.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

/// Validate an ISBN-10 checksum.
///
/// Digits are weighted 10 down to 1 and summed mod 11; the check digit may
/// be `X` (ten). Dashes and spaces are ignored.
///
/// # Examples
///
/// ```
/// use bookcat::isbn;
///
/// assert!(isbn::is_valid_isbn10("0-306-40615-2"));
/// assert!(!isbn::is_valid_isbn10("0306406153"));
/// ```
#[must_use]
pub fn is_valid_isbn10(isbn: &str) -> bool {
    let clean = normalize(isbn);
    if clean.chars().count() != 10 {
        return false;
    }

    let mut sum = 0;
    let mut weight = 10u32;
    for (position, ch) in clean.chars().enumerate() {
        let value = match ch.to_digit(10) {
            Some(digit) => digit,
            None if position == 9 && ch.eq_ignore_ascii_case(&'X') => 10,
            None => return false,
        };
        sum += value * weight;
        weight -= 1;
    }
    sum % 11 == 0
}

/// Validate an ISBN-13 checksum.
///
/// ISBN-13s start with the 978 or 979 bookland prefix; digits alternate
/// weights 1 and 3 and the sum must be divisible by 10. Dashes and spaces
/// are ignored.
///
/// # Examples
///
/// ```
/// use bookcat::isbn;
///
/// assert!(isbn::is_valid_isbn13("978-0-306-40615-7"));
/// assert!(!isbn::is_valid_isbn13("9780306406158"));
/// ```
#[must_use]
pub fn is_valid_isbn13(isbn: &str) -> bool {
    let clean = normalize(isbn);
    if clean.chars().count() != 13 {
        return false;
    }
    if !clean.starts_with("978") && !clean.starts_with("979") {
        return false;
    }

    let mut sum = 0;
    for (position, ch) in clean.chars().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        sum += digit * if position % 2 == 0 { 1 } else { 3 };
    }
    sum % 10 == 0
}

/// Validate an ISBN, auto-detecting ISBN-10 or ISBN-13 by length.
///
/// # Examples
///
/// ```
/// use bookcat::isbn;
///
/// assert!(isbn::is_valid("0306406152"));
/// assert!(isbn::is_valid("9780306406157"));
/// assert!(!isbn::is_valid("12345"));
/// ```
#[must_use]
pub fn is_valid(isbn: &str) -> bool {
    match normalize(isbn).chars().count() {
        10 => is_valid_isbn10(isbn),
        13 => is_valid_isbn13(isbn),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn10_valid() {
        assert!(is_valid_isbn10("0306406152"));
        assert!(is_valid_isbn10("043942089X"));
        assert!(is_valid_isbn10("0-439-42089-x"));
    }

    #[test]
    fn test_isbn10_invalid() {
        assert!(!is_valid_isbn10("0306406153"));
        assert!(!is_valid_isbn10("123"));
        assert!(!is_valid_isbn10("abcd123456"));
        // 'X' only counts as ten in the check-digit position
        assert!(!is_valid_isbn10("X306406152"));
    }

    #[test]
    fn test_isbn13_valid() {
        assert!(is_valid_isbn13("9780306406157"));
        assert!(is_valid_isbn13("978-0-306-40615-7"));
    }

    #[test]
    fn test_isbn13_invalid() {
        assert!(!is_valid_isbn13("9780306406158"));
        // Missing the bookland prefix
        assert!(!is_valid_isbn13("1234567890123"));
        assert!(!is_valid_isbn13("123"));
    }

    #[test]
    fn test_auto_detect() {
        assert!(is_valid("0306406152"));
        assert!(is_valid("9780306406157"));
        assert!(!is_valid("12345"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("978-0-306-40615-7"), "9780306406157");
        assert_eq!(normalize("978 0 306 40615 7"), "9780306406157");
        assert_eq!(normalize("0306406152"), "0306406152");
    }
}
