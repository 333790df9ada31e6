use serde::{Deserialize, Serialize};

use crate::models::{SampleCategory, WebsiteSample};

/// Query string of `/samples/websites`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CategoryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CategoryQuery {
    /// `?category=` with an empty value means no filter.
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Samples belonging to `active`, or all of them when no category is
/// selected. Input order is kept.
pub fn filter_samples<'a>(samples: &'a [WebsiteSample], active: Option<&str>) -> Vec<&'a WebsiteSample> {
    match active {
        None => samples.iter().collect(),
        Some(category) => samples.iter().filter(|s| s.category == category).collect(),
    }
}

pub fn find_category<'a>(categories: &'a [SampleCategory], active: Option<&str>) -> Option<&'a SampleCategory> {
    let active = active?;
    categories.iter().find(|c| c.id == active)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SamplesHeading {
    pub title: String,
    pub description: String,
    pub canonical: String,
}

/// Title and description follow the category only when the manifest knows
/// it; the canonical path keeps whatever was asked for.
pub fn samples_heading(category: Option<&SampleCategory>, active: Option<&str>) -> SamplesHeading {
    let (title, description) = match category {
        Some(cat) => (
            format!("{} Website Samples", cat.name),
            format!(
                "Explore our portfolio of {} websites. Click on any preview to see the full website.",
                cat.name.to_lowercase()
            ),
        ),
        None => (
            "Website Samples".to_string(),
            "Explore our portfolio of professionally designed websites across different industries.".to_string(),
        ),
    };
    let canonical = match active {
        Some(id) => format!("/samples/websites?category={}", urlencoding::encode(id)),
        None => "/samples/websites".to_string(),
    };
    SamplesHeading { title, description, canonical }
}

pub fn icon_glyph(icon: &str) -> Option<&'static str> {
    match icon {
        "UtensilsCrossed" => Some("🍽"),
        "Stethoscope" => Some("🩺"),
        "Stars" => Some("✨"),
        "GraduationCap" => Some("🎓"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, category: &str) -> WebsiteSample {
        WebsiteSample {
            id: id.to_string(),
            name: format!("Sample {}", id),
            description: String::new(),
            folder: id.to_string(),
            file: "index.html".to_string(),
            category: category.to_string(),
        }
    }

    fn category(id: &str, name: &str) -> SampleCategory {
        SampleCategory { id: id.to_string(), name: name.to_string(), icon: "Stars".to_string() }
    }

    fn ids(samples: &[&WebsiteSample]) -> Vec<String> {
        samples.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn no_filter_returns_everything_in_order() {
        let samples = vec![sample("a", "x"), sample("b", "y"), sample("c", "orphan")];
        assert_eq!(ids(&filter_samples(&samples, None)), vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_keeps_matching_in_order() {
        let samples = vec![sample("a", "x"), sample("b", "y"), sample("c", "x")];
        assert_eq!(ids(&filter_samples(&samples, Some("x"))), vec!["a", "c"]);
        assert!(filter_samples(&samples, Some("missing")).is_empty());
    }

    #[test]
    fn filtering_nothing_gives_nothing() {
        assert!(filter_samples(&[], None).is_empty());
        assert!(filter_samples(&[], Some("x")).is_empty());
    }

    #[test]
    fn orphaned_sample_only_shows_unfiltered() {
        let samples = vec![sample("a", "x"), sample("orphan", "gone")];
        let categories = vec![category("x", "Restaurants")];
        let visible_in_categories: usize = categories
            .iter()
            .map(|c| filter_samples(&samples, Some(&c.id)).len())
            .sum();
        assert_eq!(visible_in_categories, 1);
        assert_eq!(filter_samples(&samples, None).len(), 2);
    }

    #[test]
    fn selecting_category_then_all() {
        let categories = vec![category("a", "Restaurants"), category("b", "Clinics")];
        let samples = vec![sample("1", "a"), sample("2", "b"), sample("3", "a")];

        let query = CategoryQuery { category: Some("a".to_string()) };
        let active = query.active_category();
        assert_eq!(filter_samples(&samples, active).len(), 2);
        assert_eq!(find_category(&categories, active).map(|c| c.name.as_str()), Some("Restaurants"));

        let all = CategoryQuery::default();
        assert_eq!(filter_samples(&samples, all.active_category()).len(), 3);
    }

    #[test]
    fn empty_query_value_means_all() {
        let query = CategoryQuery { category: Some(String::new()) };
        assert_eq!(query.active_category(), None);
    }

    #[test]
    fn heading_uses_known_category() {
        let cat = category("food", "Restaurants");
        let heading = samples_heading(Some(&cat), Some("food"));
        assert_eq!(heading.title, "Restaurants Website Samples");
        assert!(heading.description.contains("portfolio of restaurants websites"));
        assert_eq!(heading.canonical, "/samples/websites?category=food");
    }

    #[test]
    fn heading_for_unknown_category_keeps_canonical() {
        let heading = samples_heading(None, Some("ghost"));
        assert_eq!(heading.title, "Website Samples");
        assert_eq!(heading.canonical, "/samples/websites?category=ghost");
        assert_eq!(samples_heading(None, None).canonical, "/samples/websites");
    }

    #[test]
    fn unknown_icon_has_no_glyph() {
        assert!(icon_glyph("Stethoscope").is_some());
        assert!(icon_glyph("Rocket").is_none());
    }

    #[test]
    fn canonical_percent_encodes_category() {
        let heading = samples_heading(None, Some("food & drink"));
        assert_eq!(heading.canonical, "/samples/websites?category=food%20%26%20drink");
    }
}
