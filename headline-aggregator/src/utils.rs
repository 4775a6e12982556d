/// Text processing utilities
pub mod text {
    use std::collections::HashSet;

    /// Remove every `<...>` tag, decode HTML entities (`&#8217;`, `&hellip;`,
    /// `&nbsp;`, ...) and trim the result. Text between tags is kept as-is,
    /// including inner whitespace.
    pub fn strip_html(html: &str) -> String {
        let stripped = html
            .chars()
            .fold((String::with_capacity(html.len()), false), |(mut text, in_tag), c| {
                match c {
                    '<' => (text, true),
                    '>' if in_tag => (text, false),
                    _ if !in_tag => {
                        text.push(c);
                        (text, in_tag)
                    }
                    _ => (text, in_tag),
                }
            })
            .0;

        html_escape::decode_html_entities(&stripped).trim().to_string()
    }

    /// Collapse runs of whitespace to a single space and trim both ends.
    pub fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Alphabetically sorted copy; the input is left untouched.
    pub fn sorted<S: AsRef<str>>(items: &[S]) -> Vec<String> {
        let mut out: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
        out.sort();
        out
    }

    /// Drop empty strings and repeats, keeping first-seen order.
    pub fn uniq<S: AsRef<str>>(items: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        items
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(*s))
            .map(str::to_string)
            .collect()
    }
}

/// URL utilities
pub mod url {
    const TRACKING_MARKER: &str = "?utm_";

    /// Cut the URL at the first `?utm_` query, leaving everything before it.
    pub fn strip_tracking(url: &str) -> &str {
        match url.find(TRACKING_MARKER) {
            Some(idx) => &url[..idx],
            None => url,
        }
    }
}

/// Time utilities
pub mod time {
    use chrono::{DateTime, SecondsFormat, Utc};

    /// Wire format for `PublishedAt`: RFC 3339, UTC, whole seconds, `Z`.
    pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
