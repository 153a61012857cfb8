use std::borrow::Cow;

/// Escape the five XML-reserved characters so `text` can sit inside an SSML
/// element or attribute value.
///
/// Not idempotent: `&amp;` becomes `&amp;amp;` on a second pass. The composer
/// calls this exactly once per raw segment, at render time.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
