use percent_encoding::percent_decode_str;
use std::collections::BTreeMap;

use super::error::RouterError;

/// A requested URL split into path, query and fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub hash: Option<String>,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, BTreeMap::new()),
        };

        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        let path = if path.is_empty() { "/" } else { path };

        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }

    /// Path segments after the leading `/`, still percent-encoded
    pub fn segments(&self) -> Vec<&str> {
        match self.path.strip_prefix('/') {
            Some("") | None => Vec::new(),
            Some(rest) => rest.split('/').collect(),
        }
    }
}

fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_form(key), decode_form(value))
        })
        .collect()
}

fn decode_form(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Canonical history base: leading `/`, no trailing `/` (the root base is `/`)
pub fn normalize_base(raw: &str) -> Result<String, RouterError> {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok("/".to_string());
    }
    if !trimmed.starts_with('/') {
        return Err(RouterError::InvalidBase {
            base: raw.to_string(),
            reason: "must start with '/'".to_string(),
        });
    }
    if trimmed
        .chars()
        .any(|c| c == '?' || c == '#' || c.is_whitespace())
    {
        return Err(RouterError::InvalidBase {
            base: raw.to_string(),
            reason: "must not contain '?', '#' or whitespace".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Strip a normalized base from a URL, on segment boundaries only. The base
/// compares ASCII case-insensitively.
pub fn strip_base<'a>(base: &str, url: &'a str) -> Option<&'a str> {
    if base == "/" {
        return Some(url);
    }
    let prefix = url.get(..base.len())?;
    if !prefix.eq_ignore_ascii_case(base) {
        return None;
    }
    let rest = &url[base.len()..];
    match rest.chars().next() {
        None => Some("/"),
        Some('/') => Some(rest),
        Some('?') | Some('#') => Some(rest),
        Some(_) => None,
    }
}
