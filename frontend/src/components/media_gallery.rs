use yew::prelude::*;

use crate::samples::drive::{DriveState, MediaKind};

#[derive(Properties, PartialEq)]
pub struct MediaGalleryProps {
    pub state: DriveState,
    pub configured: bool,
    pub on_media_click: Callback<usize>,
}

#[function_component(MediaGallery)]
pub fn media_gallery(props: &MediaGalleryProps) -> Html {
    let state = &props.state;

    if state.loading {
        return html! {
            <div class="gallery-status">
                <span class="spinner"></span>
                <p>{"Loading media..."}</p>
            </div>
        };
    }

    if let Some(error) = &state.error {
        return html! {
            <div class="gallery-status">
                <p class="error-text">{error}</p>
            </div>
        };
    }

    if !props.configured {
        return html! {
            <div class="gallery-status">
                <div class="empty-icon">{"📂"}</div>
                <p>{"Google Drive integration coming soon!"}</p>
                <p class="muted">{"Our portfolio samples will be available here shortly."}</p>
            </div>
        };
    }

    if state.media.is_empty() {
        return html! {
            <div class="gallery-status">
                <div class="empty-icon">{"📂"}</div>
                <p>{"No samples available yet"}</p>
            </div>
        };
    }

    html! {
        <div class="media-grid">
            {
                state.media.iter().enumerate().map(|(index, item)| {
                    let on_media_click = props.on_media_click.clone();
                    let is_video = match item.mime_type.as_deref() {
                        Some(mime) => MediaKind::Video.matches_mime(mime),
                        None => item.kind == MediaKind::Video,
                    };
                    html! {
                        <button
                            key={item.id.clone()}
                            class="media-tile"
                            onclick={Callback::from(move |_: MouseEvent| on_media_click.emit(index))}
                        >
                            <img src={item.thumbnail_url.clone()} alt={item.name.clone()} />
                            {
                                if is_video {
                                    html! { <div class="media-video-badge">{"▶"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
