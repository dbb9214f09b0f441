//! # Naming Conventions
//!
//! Conversions between the two names every resource carries:
//!
//! - the **class name**, `PascalCase` and singular (`UserAddress`), used to
//!   register and resolve resources;
//! - the **route name**, `snake_case` and plural (`user_addresses`), used in
//!   dashboard URLs.
//!
//! Pluralization follows regular English suffix rules only. Irregular nouns
//! (`person`/`people`) do not round-trip.

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Convert a route name into the class name of its resource.
///
/// ```
/// assert_eq!(otter::naming::class_name_from_route_name("user_addresses"), "UserAddress");
/// ```
#[must_use]
pub fn class_name_from_route_name(route_name: &str) -> String {
    singularize(&route_name.to_upper_camel_case())
}

/// Convert a class name into the route name of its resource.
///
/// An underscore is inserted before every interior uppercase letter, so
/// acronyms are split letter by letter (`HTTPLog` becomes `h_t_t_p_logs`).
///
/// ```
/// assert_eq!(otter::naming::route_name_from_class_name("UserAddress"), "user_addresses");
/// ```
#[must_use]
pub fn route_name_from_class_name(class_name: &str) -> String {
    pluralize(&split_words(class_name, '_').to_lowercase())
}

/// Strip any namespace or path prefix from a fully qualified type name.
///
/// Backslash (`App\Otter\User`), slash (`app/Otter/User`) and Rust path
/// (`crate::otter::User`) separators are all recognised.
#[must_use]
pub fn base_class_name(qualified_name: &str) -> &str {
    let tail = qualified_name
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or(qualified_name);
    tail.rsplit("::").next().unwrap_or(tail)
}

/// Conventional foreign key pointing at a model: `snake_case` name, an
/// underscore, then the model's primary key column.
#[must_use]
pub fn foreign_key(model_name: &str, primary_key: &str) -> String {
    format!("{}_{primary_key}", model_name.to_snake_case())
}

/// Human readable plural of a class name, e.g. `User Addresses`.
///
/// Words split on the same interior capitals as the route name, so
/// `HTTPLog` reads `H T T P Logs`.
#[must_use]
pub fn display_name(class_name: &str) -> String {
    pluralize(&split_words(class_name, ' '))
}

/// Insert `separator` before every uppercase letter that follows a letter
/// or digit.
fn split_words(class_name: &str, separator: char) -> String {
    let mut words = String::with_capacity(class_name.len() + 4);
    let mut previous: Option<char> = None;

    for c in class_name.chars() {
        if c.is_uppercase() && previous.is_some_and(char::is_alphanumeric) {
            words.push(separator);
        }
        words.push(c);
        previous = Some(c);
    }

    words
}

/// Regular English plural of the last word in `word`.
#[must_use]
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();

    if lower.is_empty() {
        return word.to_string();
    }

    if lower.ends_with('y') && !ends_with_any(&lower, &["ay", "ey", "iy", "oy", "uy"]) {
        format!("{}ies", &word[..word.len() - 1])
    } else if ends_with_any(&lower, &["s", "sh", "ch", "x", "z"]) {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// Regular English singular of the last word in `word`.
#[must_use]
pub fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();

    if lower.ends_with("ies") && lower.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if ends_with_any(&lower, &["sses", "shes", "ches", "xes", "statuses", "campuses", "buses"]) {
        word[..word.len() - 2].to_string()
    } else if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}
