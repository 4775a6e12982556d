/// Topic vocabulary used for feeds that are not already scoped to carbon
/// markets and climate policy.
pub const CLIMATE_KEYWORDS: &[&str] = &[
    "carbon",
    "emission",
    "ets",
    "climate",
    "cbam",
    "greenhouse",
    "net zero",
    "net-zero",
    "decarbon",
    "offset",
    "allowance",
    "fit for 55",
];

/// Case-insensitive substring match over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let keywords = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    pub fn climate() -> Self {
        Self::new(CLIMATE_KEYWORDS)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when any keyword occurs in the title or the excerpt.
    pub fn matches(&self, title: &str, excerpt: &str) -> bool {
        let title = title.to_lowercase();
        let excerpt = excerpt.to_lowercase();
        self.keywords
            .iter()
            .any(|k| title.contains(k.as_str()) || excerpt.contains(k.as_str()))
    }
}
