use std::fmt;

/// Separator between segments in the rendered form of a key path.
pub const SEPARATOR: char = '.';

/// A path from the catalog root to a node, stored as its segments.
///
/// The rendered form joins the segments with `.`:
/// - `[]` -> `""` (the root)
/// - `["title"]` -> `"title"`
/// - `["demo", "signin"]` -> `"demo.signin"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Split a dotted key into segments. The empty string is the root.
    pub fn parse(key: &str) -> Self {
        if key.is_empty() {
            return Self::root();
        }
        Self {
            segments: key.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Return a new path with `segment` appended.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}
