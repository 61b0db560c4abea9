use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use super::error::RouterError;

/// Characters escaped when a parameter value is written into a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route path such as `/start_quiz/:quiz_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, RouterError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| RouterError::invalid_pattern(raw, "must start with '/'"))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                segments.push(parse_segment(raw, part)?);
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for segment in &segments {
            if let Segment::Param(name) = segment {
                if seen.contains(&name.as_str()) {
                    return Err(RouterError::invalid_pattern(
                        raw,
                        format!("parameter ':{}' appears more than once", name),
                    ));
                }
                seen.push(name);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters, in path order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match already-split, still-encoded path segments, binding parameters on success
    pub fn match_segments(&self, segments: &[&str]) -> Option<BTreeMap<String, String>> {
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (pattern, raw) in self.segments.iter().zip(segments) {
            let decoded = percent_decode_str(raw)
                .decode_utf8()
                .unwrap_or(Cow::Borrowed(*raw));
            match pattern {
                Segment::Static(literal) => {
                    if !literal.eq_ignore_ascii_case(&decoded) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if decoded.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), decoded.into_owned());
                }
            }
        }
        Some(params)
    }

    /// Substitute parameters into the pattern. Parameters the pattern does not name are ignored.
    pub fn build(
        &self,
        route: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<String, RouterError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(literal) => path.push_str(literal),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| RouterError::MissingParam {
                            route: route.to_string(),
                            param: name.clone(),
                        })?;
                    path.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }
        Ok(path)
    }

    /// Per-segment specificity: literals outrank parameters
    pub(crate) fn rank(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(_) => 2,
                Segment::Param(_) => 1,
            })
            .collect()
    }

    /// Canonical form used to detect patterns that match exactly the same paths
    pub(crate) fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(literal) => format!("/{}", literal.to_ascii_lowercase()),
                Segment::Param(_) => "/:".to_string(),
            })
            .collect()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_segment(raw: &str, part: &str) -> Result<Segment, RouterError> {
    if part.is_empty() {
        return Err(RouterError::invalid_pattern(raw, "empty path segment"));
    }
    if part.chars().any(|c| c == '?' || c == '#' || c.is_whitespace()) {
        return Err(RouterError::invalid_pattern(
            raw,
            format!("segment '{}' contains a reserved character", part),
        ));
    }

    match part.strip_prefix(':') {
        Some(name) if is_param_name(name) => Ok(Segment::Param(name.to_string())),
        Some(name) => Err(RouterError::invalid_pattern(
            raw,
            format!("invalid parameter name '{}'", name),
        )),
        None => Ok(Segment::Static(part.to_string())),
    }
}

fn is_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
