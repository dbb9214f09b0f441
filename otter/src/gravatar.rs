//! Avatar links for the dashboard's user menu.

/// Protocol-relative Gravatar URL for an email address.
///
/// The address is trimmed and lowercased before hashing, as Gravatar
/// expects.
///
/// ```
/// assert_eq!(
///     otter::gravatar_link("MyEmailAddress@example.com "),
///     "//www.gravatar.com/avatar/0bc83cb571cd1c50ba6f3e8a78ef1346"
/// );
/// ```
#[must_use]
pub fn gravatar_link(email: &str) -> String {
    let hash = md5::compute(email.trim().to_lowercase());
    format!("//www.gravatar.com/avatar/{hash:x}")
}
