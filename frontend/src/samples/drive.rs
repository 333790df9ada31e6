//! Google Drive media for the social media samples modal.
//!
//! Only the configuration side exists. With no API key or folder the hook
//! returns an empty, non-loading state, which is all it ever returns today.
//! Listing a configured folder through the Drive v3 `files` endpoint is not
//! wired up yet, so a configured folder is logged and treated the same way.

use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "image/",
            MediaKind::Video => "video/",
        }
    }

    pub fn matches_mime(self, mime_type: &str) -> bool {
        mime_type.starts_with(self.mime_prefix())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DriveMedia {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub full_url: String,
    pub kind: MediaKind,
    pub mime_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DriveConfig {
    pub api_key: &'static str,
    pub images_folder_id: &'static str,
    pub reels_folder_id: &'static str,
}

pub const DRIVE_CONFIG: DriveConfig = DriveConfig {
    api_key: "",
    images_folder_id: "",
    reels_folder_id: "",
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DriveFolders {
    pub images: Option<String>,
    pub reels: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn drive_folder_ids(config: &DriveConfig) -> DriveFolders {
    DriveFolders {
        images: non_empty(config.images_folder_id),
        reels: non_empty(config.reels_folder_id),
    }
}

pub fn is_drive_configured(config: &DriveConfig) -> bool {
    !config.api_key.is_empty() && (!config.images_folder_id.is_empty() || !config.reels_folder_id.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DriveState {
    pub media: Vec<DriveMedia>,
    pub loading: bool,
    pub error: Option<String>,
}

#[hook]
pub fn use_google_drive(folder_id: Option<String>, kind: MediaKind) -> DriveState {
    let state = use_state_eq(DriveState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(folder_id, kind)| {
                if is_drive_configured(&DRIVE_CONFIG) && folder_id.is_some() {
                    log::info!("Drive folder {:?} ({:?}) configured but not fetched", folder_id, kind);
                }
                state.set(DriveState::default());
                || ()
            },
            (folder_id, kind),
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_is_inert() {
        assert!(!is_drive_configured(&DRIVE_CONFIG));
        assert_eq!(drive_folder_ids(&DRIVE_CONFIG), DriveFolders::default());
    }

    #[test]
    fn needs_key_and_at_least_one_folder() {
        let key_only = DriveConfig { api_key: "k", ..DriveConfig::default() };
        assert!(!is_drive_configured(&key_only));

        let reels = DriveConfig { api_key: "k", reels_folder_id: "r", ..DriveConfig::default() };
        assert!(is_drive_configured(&reels));
        assert_eq!(drive_folder_ids(&reels).reels.as_deref(), Some("r"));
        assert_eq!(drive_folder_ids(&reels).images, None);

        let folder_only = DriveConfig { images_folder_id: "i", ..DriveConfig::default() };
        assert!(!is_drive_configured(&folder_only));
    }

    #[test]
    fn media_kind_matches_by_mime_prefix() {
        assert!(MediaKind::Image.matches_mime("image/jpeg"));
        assert!(MediaKind::Video.matches_mime("video/mp4"));
        assert!(!MediaKind::Image.matches_mime("video/mp4"));
        assert!(!MediaKind::Video.matches_mime("application/pdf"));
    }
}
