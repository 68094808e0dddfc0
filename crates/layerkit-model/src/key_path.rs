//! Key paths into external data.
//!
//! A key path is a dot-separated list of object keys with optional `[n]`
//! index accessors, e.g. `items[0].title` or `user.addresses.1.city`.
//! A purely numeric dot segment indexes an array when the current node is
//! an array and looks up a key otherwise.
//!
//! The document format never interprets key paths; only resolution does.

use std::fmt;

use crate::error::KeyPathError;

/// One accessor in a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// A parsed key path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// Parse a key path. The empty string addresses the root.
    pub fn parse(path: &str) -> Result<Self, KeyPathError> {
        let mut segments = Vec::new();
        if path.is_empty() {
            return Ok(Self { segments });
        }

        let mut position = 0usize;
        for part in path.split('.') {
            if part.is_empty() {
                return Err(KeyPathError::EmptySegment {
                    path: path.to_string(),
                    position,
                });
            }
            let (key, mut rest) = match part.find('[') {
                Some(open) => (&part[..open], &part[open..]),
                None => (part, ""),
            };
            if !key.is_empty() {
                segments.push(Segment::Key(key.to_string()));
            } else if rest.is_empty() {
                return Err(KeyPathError::EmptySegment {
                    path: path.to_string(),
                    position,
                });
            }
            while let Some(stripped) = rest.strip_prefix('[') {
                let close = stripped
                    .find(']')
                    .ok_or_else(|| KeyPathError::UnclosedBracket {
                        path: path.to_string(),
                    })?;
                let index = &stripped[..close];
                let index = index
                    .parse::<usize>()
                    .map_err(|_| KeyPathError::InvalidIndex {
                        path: path.to_string(),
                        index: index.to_string(),
                    })?;
                segments.push(Segment::Index(index));
                rest = &stripped[close + 1..];
            }
            if !rest.is_empty() {
                return Err(KeyPathError::InvalidIndex {
                    path: path.to_string(),
                    index: rest.to_string(),
                });
            }
            position += part.len() + 1;
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Navigate `root` along this path.
    ///
    /// Returns `None` as soon as the data's shape does not match: a key on
    /// a non-object, an index on a non-array, a missing key or an
    /// out-of-range index.
    pub fn evaluate<'a>(&self, root: &'a serde_json::Value) -> Option<&'a serde_json::Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match (segment, current) {
                (Segment::Key(key), serde_json::Value::Object(map)) => map.get(key)?,
                (Segment::Key(key), serde_json::Value::Array(items)) => {
                    items.get(key.parse::<usize>().ok()?)?
                }
                (Segment::Index(index), serde_json::Value::Array(items)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyPath::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_matrix() {
        assert!(KeyPath::parse("").unwrap().is_root());
        assert_eq!(
            KeyPath::parse("a.b").unwrap().segments(),
            &[Segment::Key("a".into()), Segment::Key("b".into())]
        );
        assert_eq!(
            KeyPath::parse("items[2][0].name").unwrap().segments(),
            &[
                Segment::Key("items".into()),
                Segment::Index(2),
                Segment::Index(0),
                Segment::Key("name".into()),
            ]
        );
        assert_eq!(
            KeyPath::parse("[1]").unwrap().segments(),
            &[Segment::Index(1)]
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            KeyPath::parse("a..b"),
            Err(KeyPathError::EmptySegment { position: 2, .. })
        ));
        assert!(matches!(
            KeyPath::parse("a[1"),
            Err(KeyPathError::UnclosedBracket { .. })
        ));
        assert!(matches!(
            KeyPath::parse("a[x]"),
            Err(KeyPathError::InvalidIndex { .. })
        ));
        assert!(matches!(
            KeyPath::parse("a[1]b"),
            Err(KeyPathError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn evaluate_follows_shape() {
        let data = json!({
            "user": {"name": "Ada", "tags": ["a", "b"]},
            "items": [{"title": "first"}, {"title": "second"}]
        });
        let get = |path: &str| KeyPath::parse(path).unwrap().evaluate(&data).cloned();

        assert_eq!(get("user.name"), Some(json!("Ada")));
        assert_eq!(get("items[1].title"), Some(json!("second")));
        assert_eq!(get("user.tags.0"), Some(json!("a")));
        assert_eq!(get(""), Some(data.clone()));
        assert_eq!(get("items[5].title"), None);
        assert_eq!(get("user.name.first"), None);
        assert_eq!(get("missing"), None);
    }

    #[test]
    fn display_round_trips() {
        let path = KeyPath::parse("items[0].title").unwrap();
        assert_eq!(path.to_string(), "items[0].title");
    }
}
