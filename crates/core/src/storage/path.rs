/// Normalize a vault path: `/` separators, no empty segments, no leading or
/// trailing slash. Non-breaking spaces become plain spaces.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
        .replace('\u{00A0}', " ")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Parent folder of a normalized path, or `None` for top-level entries.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[..idx]).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators() {
        assert_eq!(normalize_path("a//b/"), "a/b");
        assert_eq!(normalize_path("/a/b"), "a/b");
        assert_eq!(normalize_path("a\\b\\c.md"), "a/b/c.md");
        assert_eq!(normalize_path("./a/./b"), "a/b");
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("Daily\u{00A0}Tasks/2025"), "Daily Tasks/2025");
    }

    #[test]
    fn parents() {
        assert_eq!(parent_path("a/b/c.md"), Some("a/b"));
        assert_eq!(parent_path("a"), None);
        assert_eq!(parent_path(""), None);
    }
}
