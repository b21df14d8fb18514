//! Slug canonicalization.
//!
//! Turns arbitrary user input into a slug made only of `[a-z0-9-]`, with no
//! leading, trailing or repeated hyphens.

/// Normalizes free-form input into a canonical slug.
///
/// # Rules
///
/// 1. Lowercase the input
/// 2. Replace spaces with hyphens
/// 3. Drop every character outside `[a-z0-9-]`
/// 4. Collapse runs of hyphens into one
/// 5. Trim leading and trailing hyphens
///
/// Total over its input: empty or fully-invalid input yields an empty string.
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use slug_guard::utils::canonicalize::canonicalize;
///
/// assert_eq!(canonicalize("Hello World!!"), "hello-world");
/// assert_eq!(canonicalize("--my  new__link--"), "my-new-link");
/// assert_eq!(canonicalize("!!!"), "");
/// ```
pub fn canonicalize(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.to_lowercase().chars() {
        let c = if c == ' ' { '-' } else { c };

        match c {
            '-' => pending_hyphen = true,
            'a'..='z' | '0'..='9' => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c);
            }
            _ => {}
        }
    }

    slug
}
