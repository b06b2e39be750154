//! Glob-style path matching with exclusion override

use regex::Regex;

/// Convert a glob pattern to an anchored full-string regex.
///
/// `**` matches any sequence of characters including path separators, a
/// single `*` matches any sequence excluding path separators, and every
/// other character (including `.`) is matched literally.
pub fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                chars.next();
                source.push_str(".*");
            } else {
                source.push_str("[^/]*");
            }
        } else {
            source.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4])));
        }
    }

    source.push('$');
    Regex::new(&source).ok()
}

/// Whether any file satisfies at least one inclusion pattern while
/// matching no exclusion pattern.
///
/// Exclusions are checked first per candidate: an excluded file is
/// disqualified for this rule regardless of inclusion patterns. With no
/// files the trigger is vacuously non-matching.
pub fn matches_path(files: &[String], patterns: &[String], exclusions: &[String]) -> bool {
    if files.is_empty() {
        return false;
    }

    let includes: Vec<Regex> = patterns.iter().filter_map(|p| glob_to_regex(p)).collect();
    if includes.is_empty() {
        return false;
    }
    let excludes: Vec<Regex> = exclusions.iter().filter_map(|p| glob_to_regex(p)).collect();

    files.iter().any(|file| {
        if excludes.iter().any(|re| re.is_match(file)) {
            return false;
        }
        includes.iter().any(|re| re.is_match(file))
    })
}
