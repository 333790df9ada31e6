use serde::{Deserialize, Serialize};

/// Names a modal dialog, e.g. `"social-media"` or `"smm-samples"`.
pub type ModalId = String;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SampleCategory {
    pub id: String,
    pub name: String,
    /// Icon key, resolved to a glyph by the category pills.
    pub icon: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct WebsiteSample {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub folder: String,
    #[serde(default)]
    pub file: String,
    /// Not required to match a declared category.
    #[serde(default)]
    pub category: String,
}

/// Shape of `/samples/websites/manifest.json`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct WebsitesManifest {
    #[serde(default)]
    pub categories: Vec<SampleCategory>,
    #[serde(default)]
    pub samples: Vec<WebsiteSample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_missing_keys_default_to_empty() {
        let manifest: WebsitesManifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.categories.is_empty());
        assert!(manifest.samples.is_empty());
    }

    #[test]
    fn sample_parses_manifest_field_names() {
        let raw = r#"{
            "categories": [{"id": "food", "name": "Restaurants", "icon": "UtensilsCrossed"}],
            "samples": [{
                "id": "bistro",
                "name": "Bistro",
                "description": "A cozy cafe",
                "folder": "bistro",
                "file": "index.html",
                "category": "food"
            }]
        }"#;
        let manifest: WebsitesManifest = serde_json::from_str(raw).unwrap();
        assert_eq!(manifest.categories[0].icon, "UtensilsCrossed");
        assert_eq!(manifest.samples[0].category, "food");
        assert_eq!(manifest.samples[0].file, "index.html");
    }
}
