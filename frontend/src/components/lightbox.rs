use yew::prelude::*;

use crate::samples::drive::{DriveMedia, MediaKind};

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// The lightbox belongs to its dialog and never outlives it.
pub fn lightbox_visible(dialog_open: bool, lightbox_open: bool, len: usize) -> bool {
    dialog_open && lightbox_open && len > 0
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub media: Vec<DriveMedia>,
    pub index: usize,
    pub on_close: Callback<MouseEvent>,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let Some(current) = props.media.get(props.index) else {
        return html! {};
    };

    html! {
        <div class="lightbox">
            <button class="lightbox-close" aria-label="Close" onclick={props.on_close.clone()}>{"×"}</button>
            {
                if props.media.len() > 1 {
                    html! {
                        <>
                            <button class="lightbox-prev" aria-label="Previous" onclick={props.on_prev.clone()}>{"‹"}</button>
                            <button class="lightbox-next" aria-label="Next" onclick={props.on_next.clone()}>{"›"}</button>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <div class="lightbox-media">
                {
                    match current.kind {
                        MediaKind::Video => html! {
                            <video src={current.full_url.clone()} controls={true} autoplay={true} />
                        },
                        MediaKind::Image => html! {
                            <img src={current.full_url.clone()} alt={current.name.clone()} />
                        },
                    }
                }
            </div>
            <div class="lightbox-counter">
                {format!("{} / {}", props.index + 1, props.media.len())}
            </div>
        </div>
    }
}
