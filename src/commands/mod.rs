pub mod schedule;
pub mod teams;

/// Title line followed by a double rule of the same width
pub fn format_header(title: &str) -> String {
    let width = title.chars().count().max(40);
    format!("\n{}\n{}\n", title, "═".repeat(width))
}
