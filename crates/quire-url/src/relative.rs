//! Relative path arithmetic between site paths.

/// Compute the URL of `target` relative to the page at `from`.
///
/// Both arguments are site paths: `/`-separated, relative to the site root.
/// A leading `/` carries no meaning and is ignored. The filesystem is never
/// consulted.
///
/// The last segment of `from` is the current document, and is dropped to get
/// the base directory, when it contains a `.` (`blog/post.html`). Otherwise
/// `from` is taken as a directory (`blog/post`, `blog/post/`). A final segment
/// spelled `.` or `..` also contains a dot, so it is dropped as a document
/// name rather than interpreted as a directory reference.
///
/// Dot segments are resolved on both sides; `..` above the root has no effect.
/// The result is `.` when both point at the same directory, and keeps the
/// trailing `/` of a directory `target`.
///
/// # Examples
///
/// ```
/// use quire_url::relative_url;
///
/// assert_eq!(relative_url("foo/bar", "foo"), "bar");
/// assert_eq!(relative_url("foo", "foo/bar"), "..");
/// assert_eq!(relative_url("foo", "foo/bar.txt"), ".");
/// assert_eq!(relative_url("foo/../../bar", "foo"), "../bar");
/// assert_eq!(relative_url("/", ""), "./");
/// ```
pub fn relative_url(target: &str, from: &str) -> String {
    let target_is_dir = target.ends_with('/');

    let base = normalized_segments(document_dir(from));
    let dest = normalized_segments(target);

    let common = base
        .iter()
        .zip(&dest)
        .take_while(|(a, b)| a == b)
        .count();

    let parts: Vec<&str> = std::iter::repeat_n("..", base.len() - common)
        .chain(dest[common..].iter().copied())
        .collect();

    let mut result = if parts.is_empty() {
        ".".to_owned()
    } else {
        parts.join("/")
    };
    if target_is_dir {
        result.push('/');
    }
    result
}

/// Resolve dot segments and redundant separators in a site path.
///
/// The result has no leading `/` and keeps a trailing `/`, except for the
/// root which is the empty string.
///
/// # Examples
///
/// ```
/// use quire_url::normalize_path;
///
/// assert_eq!(normalize_path("/guide/./a/../install.md"), "guide/install.md");
/// assert_eq!(normalize_path("guide//api/"), "guide/api/");
/// assert_eq!(normalize_path("../.."), "");
/// ```
pub fn normalize_path(path: &str) -> String {
    let mut normalized = normalized_segments(path).join("/");
    if path.ends_with('/') && !normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Directory part of a page path, following the document rule of [`relative_url`].
///
/// The returned slice has no leading `/` and may still contain dot segments.
pub(crate) fn document_dir(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    match path.rsplit_once('/') {
        Some((dir, name)) if name.contains('.') => dir,
        Some(_) => path,
        None if path.contains('.') => "",
        None => path,
    }
}

/// Number of `..` segments that climb above the root of a relative path.
///
/// `a/../../b` climbs one level, `../../x` two, `a/b/..` none.
pub(crate) fn levels_above_root(path: &str) -> usize {
    let mut depth = 0usize;
    let mut above = 0usize;
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." if depth == 0 => above += 1,
            ".." => depth -= 1,
            _ => depth += 1,
        }
    }
    above
}

/// Split a path into segments with `.`, `..` and empty segments resolved.
fn normalized_segments(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// `(target, from, expected)`; leading slashes on either side are ignored.
    const RELATIVE_CASES: &[(&str, &str, &str)] = &[
        ("foo/bar", "foo", "bar"),
        ("foo/bar.txt", "foo", "bar.txt"),
        ("foo", "foo/bar", ".."),
        ("foo", "foo/bar.txt", "."),
        ("foo/../../bar", ".", "bar"),
        ("foo/../../bar", "foo", "../bar"),
        ("foo//./bar/baz", "foo/bar/baz", "."),
        ("a/b/.././../c", ".", "c"),
        ("a/b/c/d/ee", "a/b/c/d/e", "../ee"),
        ("a/b/c/d/ee", "a/b/z/d/e", "../../../c/d/ee"),
        ("foo", "bar.", "foo"),
        ("foo", "bar./", "../foo"),
        ("foo", "foo/bar./", ".."),
        ("foo", "foo/bar./.", ".."),
        ("foo", "foo/bar././", ".."),
        ("foo/", "foo/bar././", "../"),
        ("foo", "foo", "."),
        (".foo", ".foo", ".foo"),
        (".foo/", ".foo", ".foo/"),
        (".foo", ".foo/", "."),
        (".foo/", ".foo/", "./"),
        ("///", "", "./"),
        ("a///", "", "a/"),
        ("a///", "a", "./"),
        (".", "here", ".."),
        ("..", "here", ".."),
        ("../..", "here", ".."),
        ("../../a", "here", "../a"),
        ("..", "here.txt", "."),
        ("a", "", "a"),
        ("a", "..", "a"),
        ("a", "b", "../a"),
        ("a", "b/..", "../a"),
        ("a", "b/../..", "a"),
        ("a/..../b", "a/../b", "../a/..../b"),
        ("a/я/b", "a/я/c", "../b"),
        ("a/я/b", "a/яя/c", "../../я/b"),
    ];

    #[test]
    fn test_relative_url_table() {
        for &(target, from, expected) in RELATIVE_CASES {
            assert_eq!(relative_url(target, from), expected, "{target:?} from {from:?}");
        }
    }

    #[test]
    fn test_relative_url_leading_slash_is_ignored() {
        for &(target, from, expected) in RELATIVE_CASES {
            let slashed_target = format!("/{target}");
            let slashed_from = format!("/{from}");
            for (t, f) in [
                (slashed_target.as_str(), from),
                (target, slashed_from.as_str()),
                (slashed_target.as_str(), slashed_from.as_str()),
            ] {
                assert_eq!(relative_url(t, f), expected, "{t:?} from {f:?}");
            }
        }
    }

    #[test]
    fn test_relative_url_same_path_is_dot() {
        for path in ["", "foo", "foo/bar", "foo/bar/", "a/b/c/d", "я/b"] {
            assert_eq!(relative_url(path, path).trim_end_matches('/'), ".", "{path}");
        }
    }

    #[test]
    fn test_relative_url_root_equivalences() {
        for target in ["", ".", "/."] {
            for from in ["", ".", "/", "/."] {
                assert_eq!(relative_url(target, from), ".", "{target:?} from {from:?}");
            }
        }
        assert_eq!(relative_url("/", ""), "./");
        assert_eq!(relative_url("/", "/"), "./");
        assert_eq!(relative_url("/", "."), "./");
    }

    #[test]
    fn test_relative_url_directory_target_keeps_trailing_slash() {
        assert_eq!(relative_url("css/", "guide/install/"), "../../css/");
        assert_eq!(relative_url("guide/", "guide/"), "./");
    }

    #[test]
    fn test_relative_url_dotted_names() {
        assert_eq!(relative_url("foo", "bar."), "foo");
        assert_eq!(relative_url("foo", "bar./"), "../foo");
        assert_eq!(relative_url("foo", "foo/bar./"), "..");
    }

    #[test]
    fn test_relative_url_final_dot_dot_is_treated_as_document() {
        // `foo/..` keeps `foo` as the base directory.
        assert_eq!(relative_url("foo", "foo/.."), ".");
        assert_eq!(relative_url("bar", "foo/.."), "../bar");
    }

    #[test]
    fn test_relative_url_unicode_segments_compare_exactly() {
        assert_eq!(relative_url("a/я/b", "a/я/c"), "../b");
        assert_eq!(relative_url("a/я/b", "a/яя/c"), "../../я/b");
        assert_eq!(relative_url("é/x", "e\u{301}/y"), "../../é/x");
    }

    #[test]
    fn test_relative_url_root_page_keeps_target() {
        assert_eq!(relative_url("domains/billing", ""), "domains/billing");
        assert_eq!(relative_url("domains/billing/", "index.html"), "domains/billing/");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("a/./b/../c"), "a/c");
        assert_eq!(normalize_path("a/b/"), "a/b/");
        assert_eq!(normalize_path("a/.."), "");
    }

    #[test]
    fn test_levels_above_root() {
        assert_eq!(levels_above_root("a/b"), 0);
        assert_eq!(levels_above_root("a/b/.."), 0);
        assert_eq!(levels_above_root("../some/dir/"), 1);
        assert_eq!(levels_above_root("a/../../b"), 1);
        assert_eq!(levels_above_root("../../../../above/jquery.js"), 4);
        assert_eq!(levels_above_root("./../x/../.."), 2);
    }

    #[test]
    fn test_document_dir() {
        assert_eq!(document_dir("blog/post.html"), "blog");
        assert_eq!(document_dir("blog/post/"), "blog/post/");
        assert_eq!(document_dir("blog/post"), "blog/post");
        assert_eq!(document_dir("/index.html"), "");
        assert_eq!(document_dir(""), "");
    }
}
