use log::warn;
use web_sys::{window, Document};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub og_type: String,
    pub no_index: bool,
}

impl SeoMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical: None,
            keywords: None,
            image: None,
            og_type: "website".to_string(),
            no_index: false,
        }
    }

    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical = Some(path.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }

    pub fn full_title(&self) -> String {
        if self.title == config::BRAND_NAME {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, config::BRAND_NAME)
        }
    }

    pub fn canonical_url(&self) -> Option<String> {
        self.canonical
            .as_ref()
            .map(|path| format!("{}{}", config::get_site_url(), path))
    }

    pub fn image_url(&self) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| format!("{}{}", config::get_site_url(), config::DEFAULT_OG_IMAGE_PATH))
    }

    pub fn robots(&self) -> &'static str {
        if self.no_index {
            "noindex, nofollow"
        } else {
            "index, follow"
        }
    }

    /// `(attribute, key, content)` for every meta tag this page wants.
    pub fn meta_tags(&self) -> Vec<(&'static str, &'static str, String)> {
        let title = self.full_title();
        let image = self.image_url();
        let mut tags = vec![
            ("name", "description", self.description.clone()),
            ("name", "author", config::BRAND_NAME.to_string()),
            ("name", "robots", self.robots().to_string()),
            ("property", "og:title", title.clone()),
            ("property", "og:description", self.description.clone()),
            ("property", "og:type", self.og_type.clone()),
            ("property", "og:site_name", config::BRAND_NAME.to_string()),
            ("property", "og:locale", "en_IN".to_string()),
            ("property", "og:image", image.clone()),
            ("property", "og:image:width", "1200".to_string()),
            ("property", "og:image:height", "630".to_string()),
            ("name", "twitter:card", "summary_large_image".to_string()),
            ("name", "twitter:title", title),
            ("name", "twitter:description", self.description.clone()),
            ("name", "twitter:image", image),
        ];
        if let Some(keywords) = &self.keywords {
            tags.push(("name", "keywords", keywords.clone()));
        }
        if let Some(url) = self.canonical_url() {
            tags.push(("property", "og:url", url));
        }
        tags
    }
}

fn upsert_meta(document: &Document, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}=\"{}\"]", attr, key);
    let element = match document.query_selector(&selector) {
        Ok(Some(existing)) => existing,
        _ => {
            let Ok(created) = document.create_element("meta") else { return };
            let _ = created.set_attribute(attr, key);
            if let Some(head) = document.head() {
                let _ = head.append_child(&created);
            }
            created
        }
    };
    if let Err(err) = element.set_attribute("content", content) {
        warn!("Failed to set meta {}: {:?}", key, err);
    }
}

fn upsert_canonical(document: &Document, href: &str) {
    let link = match document.query_selector("link[rel=\"canonical\"]") {
        Ok(Some(existing)) => existing,
        _ => {
            let Ok(created) = document.create_element("link") else { return };
            let _ = created.set_attribute("rel", "canonical");
            if let Some(head) = document.head() {
                let _ = head.append_child(&created);
            }
            created
        }
    };
    let _ = link.set_attribute("href", href);
}

fn apply(meta: &SeoMeta) {
    let Some(document) = window().and_then(|w| w.document()) else { return };
    document.set_title(&meta.full_title());
    for (attr, key, content) in meta.meta_tags() {
        upsert_meta(&document, attr, key, &content);
    }
    if let Some(url) = meta.canonical_url() {
        upsert_canonical(&document, &url);
    }
}

/// Writes the page's title, meta and canonical tags into `<head>` whenever
/// `meta` changes.
#[hook]
pub fn use_seo(meta: SeoMeta) {
    use_effect_with_deps(
        move |meta| {
            apply(meta);
            || ()
        },
        meta,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_gets_brand_suffix() {
        assert_eq!(SeoMeta::new("Contact Us", "").full_title(), "Contact Us | Shyara Marketing");
        assert_eq!(SeoMeta::new("Shyara Marketing", "").full_title(), "Shyara Marketing");
    }

    #[test]
    fn canonical_is_absolute() {
        let meta = SeoMeta::new("Samples", "").canonical("/samples");
        assert_eq!(meta.canonical_url(), Some(format!("{}/samples", config::get_site_url())));
        assert!(meta.meta_tags().iter().any(|(_, key, _)| *key == "og:url"));
        assert_eq!(SeoMeta::new("x", "").canonical_url(), None);
    }

    #[test]
    fn robots_follow_no_index_flag() {
        assert_eq!(SeoMeta::new("x", "").robots(), "index, follow");
        assert_eq!(SeoMeta::new("x", "").no_index().robots(), "noindex, nofollow");
    }

    #[test]
    fn keywords_tag_only_when_given() {
        let plain = SeoMeta::new("x", "d");
        assert!(!plain.meta_tags().iter().any(|(_, key, _)| *key == "keywords"));
        let tagged = plain.keywords("web design");
        assert!(tagged
            .meta_tags()
            .iter()
            .any(|(_, key, content)| *key == "keywords" && content == "web design"));
    }
}
