//! String utility functions

/// Anything but an ASCII letter or digit is a word boundary and is dropped,
/// so converted identifiers only ever contain `[A-Za-z0-9_]`.
fn is_word_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Convert an identifier to UpperCamelCase, removing separators.
///
/// Separators (`_`, `-`, space, `.`, and any other non-alphanumeric
/// character) start a new word and are dropped. The
/// first letter of every word is upper-cased, the rest is kept as written.
/// A letter following a digit also starts a new word.
///
/// ```
/// use book_management_server::utils::string::to_pascal_case;
///
/// assert_eq!(to_pascal_case("published-date"), "PublishedDate");
/// assert_eq!(to_pascal_case("title"), "Title");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = true;

    for c in s.trim().chars() {
        if is_word_separator(c) {
            upper_next = true;
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        upper_next = c.is_ascii_digit();
    }

    result
}

/// Convert an identifier to snake_case.
///
/// Word boundaries are detected at separators, at lower-to-upper transitions
/// (`publishedDate`) and at the end of an acronym (`HTTPServer` -> `http_server`).
///
/// ```
/// use book_management_server::utils::string::to_snake_case;
///
/// assert_eq!(to_snake_case("PublishedDate"), "published_date");
/// assert_eq!(to_snake_case("Isbn"), "isbn");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.trim().chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if is_word_separator(c) {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        }

        result.extend(c.to_lowercase());
    }

    while result.ends_with('_') {
        result.pop();
    }
    result
}
