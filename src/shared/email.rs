/// Checks an email address against the starter's intentionally loose shape:
/// something before an `@`, something after it containing an interior dot,
/// and no whitespace anywhere.
///
/// This is a quick format filter, not RFC 5322 parsing. Addresses such as
/// `user@-hyphen.com` or `a@b..c` pass on purpose, and callers depend on
/// that boundary staying where it is. Swapping in a stricter validator
/// would change the observable behavior of every endpoint built on top.
///
/// # Examples
/// ```
/// use starter_api::shared::email::is_valid_email;
///
/// assert!(is_valid_email("test@example.com"));
/// assert!(!is_valid_email("invalid-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let mut at_index = None;

    for (i, c) in email.char_indices() {
        if c.is_whitespace() {
            return false;
        }
        if c == '@' {
            if at_index.is_some() {
                return false; // More than one @
            }
            at_index = Some(i);
        }
    }

    let at_index = match at_index {
        Some(i) => i,
        None => return false, // No @ found
    };

    let local_part = &email[..at_index];
    let domain_part = &email[at_index + 1..];

    if local_part.is_empty() {
        return false;
    }

    // The domain needs a dot with at least one character on each side.
    domain_part
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain_part.len())
}
