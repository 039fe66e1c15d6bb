/// CSS classes for a role tag.
///
/// The mapping is deliberately closed: labels outside it get the gray
/// default tag rather than an error, so new roles in the data never break
/// rendering.
pub fn role_tag_class(role: &str) -> &'static str {
    match role {
        "Admin" => "tag tag-red",
        "Developer" => "tag tag-blue",
        "Designer" => "tag tag-purple",
        "Manager" => "tag tag-green",
        _ => "tag tag-gray",
    }
}

/// Avatar placeholder: the first character of the display name.
pub fn avatar_label(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_string(),
        None => "?".to_string(),
    }
}
