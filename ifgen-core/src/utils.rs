//! Shared naming helpers for generated headers.

/// Extensions of interface source documents that never end up in a header name.
const SOURCE_EXTENSIONS: [&str; 2] = [".xml", ".toml"];

/// Strip a source-document extension (e.g., "Test.xml" -> "Test")
pub fn header_stem(name: &str) -> &str {
    SOURCE_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name)
}

/// Build an include guard from a file name (e.g., "Test.h" -> "TEST_H_")
pub fn include_guard(file_name: &str) -> String {
    let mut guard: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if guard.starts_with(|c: char| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard.push('_');
    guard
}

/// Split a C++ namespace path into its segments (e.g., "A::B" -> ["A", "B"])
///
/// Empty segments are dropped, so `"::A::"` yields `["A"]`.
pub fn namespace_segments(path: &str) -> Vec<&str> {
    path.split("::")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
