//! Card Markup
//!
//! Builds the event and member cards as HTML strings. Every text field from
//! the data files is escaped; asset and link URLs go through [`AssetUrl`],
//! which percent-encodes instead. URLs taken from the data must also pass a
//! scheme check: images may be relative or http(s), links must be http(s).

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

use crate::models::{EventRecord, MemberRecord};

/// Characters that could end or break out of a quoted attribute
const ATTR_URL_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A URL that is safe to place inside a quoted `src`/`href` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrl(String);

impl AssetUrl {
    /// Encode a URL that is already trusted (config paths, our own `mailto:`)
    pub fn new(raw: &str) -> Self {
        Self(utf8_percent_encode(raw, ATTR_URL_ENCODE_SET).to_string())
    }

    /// Image source from the data: a relative path or an http(s) URL
    pub fn image(raw: &str) -> Option<Self> {
        match url_scheme(raw) {
            None => Some(Self::new(raw)),
            Some(scheme) if is_web_scheme(&scheme) => Some(Self::new(raw)),
            Some(_) => None,
        }
    }

    /// Outbound link from the data: http(s) only
    pub fn web_link(raw: &str) -> Option<Self> {
        url_scheme(raw).filter(|scheme| is_web_scheme(scheme)).map(|_| Self::new(raw))
    }
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}

/// Lowercased scheme the browser would see, or `None` for a relative URL.
/// Browsers drop tabs and newlines anywhere and trim leading controls/spaces,
/// so `" java\tscript:"` still has the `javascript` scheme.
fn url_scheme(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '\t' | '\n' | '\r')).collect();
    let cleaned = cleaned.trim_start_matches(|c: char| c <= ' ');
    let end = cleaned.find([':', '/', '?', '#'])?;
    if !cleaned[end..].starts_with(':') {
        return None;
    }
    let scheme = &cleaned[..end];
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| scheme.to_ascii_lowercase())
}

impl fmt::Display for AssetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render one event card
pub fn event_card(event: &EventRecord, placeholder: &str) -> String {
    let image = event.image().and_then(AssetUrl::image).unwrap_or_else(|| AssetUrl::new(placeholder));
    let title = escape_html(&event.title);
    format!(
        concat!(
            r#"<article class="card event">"#,
            r#"<img src="{image}" alt="{title}" loading="lazy">"#,
            r#"<div class="meta">{date} • {location}</div>"#,
            r#"<h3>{title}</h3>"#,
            r#"<p>{description}</p>"#,
            r#"</article>"#,
        ),
        image = image,
        title = title,
        date = escape_html(&event.date),
        location = escape_html(&event.location),
        description = escape_html(&event.description),
    )
}

/// Render one member card. The role line and each link only appear when set;
/// a LinkedIn value that is not an http(s) URL is left out.
pub fn member_card(member: &MemberRecord, placeholder: &str) -> String {
    let photo = member.photo().and_then(AssetUrl::image).unwrap_or_else(|| AssetUrl::new(placeholder));
    let name = escape_html(&member.name);

    let role = member
        .role()
        .map(|role| format!(r#"<div class="meta">{}</div>"#, escape_html(role)))
        .unwrap_or_default();

    let mut links = String::new();
    if let Some(url) = member.linkedin().and_then(AssetUrl::web_link) {
        links.push_str(&format!(r#"<a href="{}" target="_blank" rel="noopener">LinkedIn</a>"#, url));
    }
    if let Some(email) = member.email() {
        links.push_str(&format!(r#"<a href="mailto:{}">Email</a>"#, AssetUrl::new(email)));
    }

    format!(
        concat!(
            r#"<article class="card member-card">"#,
            r#"<img src="{photo}" alt="{name}" loading="lazy">"#,
            r#"<h3>{name}</h3>"#,
            "{role}",
            r#"<div class="links">{links}</div>"#,
            r#"</article>"#,
        ),
        photo = photo,
        name = name,
        role = role,
        links = links,
    )
}

/// Concatenate cards in input order
pub fn cards<T>(records: &[T], placeholder: &str, card: fn(&T, &str) -> String) -> String {
    records.iter().map(|record| card(record, placeholder)).collect()
}
