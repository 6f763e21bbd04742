// Category keyword denylist

/// Keywords used when neither the config file nor the command line supplies any
pub const DEFAULT_KEYWORDS: &[&str] = &["广播", "电台", "Radio", "FM", "AM"];

/// Immutable set of keywords identifying categories to drop from a playlist.
///
/// Matching is a case-sensitive substring test against the category label, so
/// `"FM Radio Network"` matches both `Radio` and `FM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    keywords: Vec<String>,
}

impl Denylist {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.is_empty())
                .collect(),
        }
    }

    /// First keyword contained in `label`, if any
    pub fn matching(&self, label: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| label.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
