use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::components::lightbox::{lightbox_visible, next_index, prev_index, Lightbox};
use crate::components::media_gallery::MediaGallery;
use crate::links;
use crate::samples::drive::{drive_folder_ids, is_drive_configured, use_google_drive, MediaKind, DRIVE_CONFIG};

#[derive(Clone, Copy, PartialEq)]
enum SamplesTab {
    Images,
    Reels,
}

#[derive(Properties, PartialEq)]
pub struct SmmSamplesModalProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
}

#[function_component(SmmSamplesModal)]
pub fn smm_samples_modal(props: &SmmSamplesModalProps) -> Html {
    let active_tab = use_state(|| SamplesTab::Images);
    let lightbox_open = use_state(|| false);
    let lightbox_index = use_state(|| 0usize);

    let folders = drive_folder_ids(&DRIVE_CONFIG);
    let configured = is_drive_configured(&DRIVE_CONFIG);
    let images = use_google_drive(folders.images, MediaKind::Image);
    let reels = use_google_drive(folders.reels, MediaKind::Video);

    let current = match *active_tab {
        SamplesTab::Images => images.clone(),
        SamplesTab::Reels => reels.clone(),
    };
    let media_len = current.media.len();

    {
        let lightbox_open = lightbox_open.clone();
        use_effect_with_deps(
            move |open| {
                if !*open {
                    lightbox_open.set(false);
                }
                || ()
            },
            props.open,
        );
    }

    let select_tab = |tab: SamplesTab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    let open_lightbox = {
        let lightbox_open = lightbox_open.clone();
        let lightbox_index = lightbox_index.clone();
        Callback::from(move |index: usize| {
            lightbox_index.set(index);
            lightbox_open.set(true);
        })
    };

    let close_lightbox = {
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_: MouseEvent| lightbox_open.set(false))
    };

    let go_prev = {
        let lightbox_index = lightbox_index.clone();
        Callback::from(move |_: MouseEvent| lightbox_index.set(prev_index(*lightbox_index, media_len)))
    };

    let go_next = {
        let lightbox_index = lightbox_index.clone();
        Callback::from(move |_: MouseEvent| lightbox_index.set(next_index(*lightbox_index, media_len)))
    };

    let want_similar = Callback::from(|_: MouseEvent| links::open_whatsapp(links::SMM_SAMPLES_MESSAGE));

    let tab_class = |tab: SamplesTab| classes!("tab-trigger", (*active_tab == tab).then_some("active"));

    html! {
        <>
            <Dialog
                open={props.open}
                on_open_change={props.on_open_change.clone()}
                title="Social Media Samples"
                description={Some("Browse through our portfolio of social media content - from eye-catching image posts to engaging video reels.".to_string())}
                wide={true}
            >
                <div class="tabs">
                    <div class="tab-list">
                        <button class={tab_class(SamplesTab::Images)} onclick={select_tab(SamplesTab::Images)}>
                            {"🖼 Images"}
                        </button>
                        <button class={tab_class(SamplesTab::Reels)} onclick={select_tab(SamplesTab::Reels)}>
                            {"🎬 Reels"}
                        </button>
                    </div>
                    <div class="tab-content">
                        <MediaGallery state={current.clone()} {configured} on_media_click={open_lightbox} />
                    </div>
                </div>

                <div class="modal-footer">
                    <button class="outline-button" onclick={want_similar}>
                        {"Want Similar Content for Your Brand?"}
                    </button>
                </div>
            </Dialog>

            {
                if lightbox_visible(props.open, *lightbox_open, media_len) {
                    html! {
                        <Lightbox
                            media={current.media.clone()}
                            index={*lightbox_index}
                            on_close={close_lightbox}
                            on_prev={go_prev}
                            on_next={go_next}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
