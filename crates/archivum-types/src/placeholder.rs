/// Placeholder image endpoint template. Gold-on-black, matching the
/// archive's published palette.
const PLACEHOLDER_TEMPLATE: &str = "https://placehold.co/400x300/1e1e1e/DAA520?text=";

/// Generate a placeholder image URL for a record with no usable image.
///
/// Whitespace runs in the name collapse to single `+` separators, so
/// "Frederick  Douglass" and "Frederick Douglass" produce the same URL.
pub fn placeholder_url(name: &str) -> String {
    let formatted: Vec<&str> = name.split_whitespace().collect();
    format!("{}{}", PLACEHOLDER_TEMPLATE, formatted.join("+"))
}
