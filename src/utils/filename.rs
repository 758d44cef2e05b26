/// File-system-safe form of a location name for per-location output files.
///
/// Spaces and slashes become underscores, dots are dropped.
pub fn safe_location_name(location: &str) -> String {
    location
        .chars()
        .filter_map(|c| match c {
            ' ' | '/' => Some('_'),
            '.' => None,
            other => Some(other),
        })
        .collect()
}
