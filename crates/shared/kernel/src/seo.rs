//! Document metadata: title, description, Open Graph and Twitter cards.
//!
//! Built once from [`SiteConfig`] and rendered as `<head>` markup.

use foh_domain::constants::FONT_STYLESHEET;
use foh_domain::site::SiteConfig;
use std::fmt::Write as _;

const DESCRIPTION: &str =
    "We're creating a cutting-edge event production platform. Stay tuned for our launch!";
const KEYWORDS: [&str; 6] = [
    "event production",
    "event management",
    "production platform",
    "audio",
    "video",
    "lighting",
];
const LOCALE: &str = "en_US";
const TWITTER_CARD: &str = "summary_large_image";

/// A single `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    /// `<meta name=".." content="..">`
    Name { name: &'static str, content: String },
    /// `<meta property=".." content="..">` (Open Graph)
    Property { property: &'static str, content: String },
}

impl MetaTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self::Name { name, content: content.into() }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self::Property { property, content: content.into() }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name { name, .. } => *name,
            Self::Property { property, .. } => *property,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Name { content, .. } | Self::Property { content, .. } => content,
        }
    }

    #[must_use]
    pub fn html(&self) -> String {
        match self {
            Self::Name { name, content } => {
                format!(r#"<meta name="{name}" content="{}">"#, escape(content))
            },
            Self::Property { property, content } => {
                format!(r#"<meta property="{property}" content="{}">"#, escape(content))
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub site_name: String,
    pub default_title: String,
    /// `%s` is replaced by the page-specific part.
    pub title_template: String,
    pub description: String,
    pub tagline: String,
    pub url: String,
    pub image: String,
}

impl Metadata {
    #[must_use]
    pub fn from_site(site: &SiteConfig) -> Self {
        let name = &site.company.name;
        Self {
            site_name: name.clone(),
            default_title: format!("{name} - Coming Soon"),
            title_template: format!("%s | {name}"),
            description: DESCRIPTION.to_owned(),
            tagline: site.company.tagline.clone(),
            url: site.site_url(),
            image: site.og_image_url(),
        }
    }

    /// Document title for a sub-view, or the default title.
    #[must_use]
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if !page.trim().is_empty() => self.title_template.replace("%s", page),
            _ => self.default_title.clone(),
        }
    }

    #[must_use]
    pub fn tags(&self) -> Vec<MetaTag> {
        vec![
            MetaTag::name("description", &self.description),
            MetaTag::name("keywords", KEYWORDS.join(", ")),
            MetaTag::name("author", &self.site_name),
            MetaTag::property("og:type", "website"),
            MetaTag::property("og:locale", LOCALE),
            MetaTag::property("og:url", &self.url),
            MetaTag::property("og:title", &self.site_name),
            MetaTag::property("og:description", &self.tagline),
            MetaTag::property("og:site_name", &self.site_name),
            MetaTag::property("og:image", &self.image),
            MetaTag::name("twitter:card", TWITTER_CARD),
            MetaTag::name("twitter:title", &self.site_name),
            MetaTag::name("twitter:description", &self.tagline),
        ]
    }

    /// Everything that goes into `<head>`: viewport, title, meta tags, canonical link, fonts.
    #[must_use]
    pub fn head_html(&self) -> String {
        let mut head = String::from(
            r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
        );
        let _ = write!(head, "<title>{}</title>", escape(&self.default_title));
        for tag in self.tags() {
            head.push_str(&tag.html());
        }
        let _ = write!(head, r#"<link rel="canonical" href="{}">"#, escape(&self.url));
        let _ = write!(head, r#"<link rel="stylesheet" href="{}">"#, escape(FONT_STYLESHEET));
        head
    }
}

/// Minimal HTML attribute/text escaping.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_template() {
        let meta = Metadata::from_site(&SiteConfig::default());
        assert_eq!(meta.page_title(None), "Front of House Productions - Coming Soon");
        assert_eq!(meta.page_title(Some("Get Notified")), "Get Notified | Front of House Productions");
        assert_eq!(meta.page_title(Some("  ")), meta.default_title);
    }

    #[test]
    fn escape_handles_quotes_and_markup() {
        assert_eq!(escape(r#"Tom & "Jerry" <b>'s"#), "Tom &amp; &quot;Jerry&quot; &lt;b&gt;&#39;s");
    }

    #[test]
    fn head_contains_social_preview() {
        let head = Metadata::from_site(&SiteConfig::default()).head_html();
        assert!(head.contains(r#"<meta property="og:url" content="https://foh-pro.com">"#));
        assert!(head.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(head.contains("We&#39;re creating a cutting-edge event production platform."));
        assert!(head.contains("<title>Front of House Productions - Coming Soon</title>"));
    }
}
