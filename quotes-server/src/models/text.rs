//! Name formatting helpers

/// Title-case a name: the first letter of every run of letters is
/// upper-cased and the rest of the run lower-cased.
///
/// # Example
/// ```
/// use quotes_server::models::title_case;
///
/// assert_eq!(title_case("mark twain"), "Mark Twain");
/// assert_eq!(title_case("o'neil"), "O'Neil");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
