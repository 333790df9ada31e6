use yew::prelude::*;

use crate::links;
use crate::models::WebsiteSample;

#[derive(Properties, PartialEq)]
pub struct WebsiteSampleCardProps {
    pub sample: WebsiteSample,
}

/// A live, scaled-down iframe preview of one sample site.
#[function_component(WebsiteSampleCard)]
pub fn website_sample_card(props: &WebsiteSampleCardProps) -> Html {
    let iframe_loaded = use_state(|| false);
    let sample = &props.sample;
    let sample_url = links::sample_preview_url(&sample.folder, &sample.file);

    let on_load = {
        let iframe_loaded = iframe_loaded.clone();
        let sample_id = sample.id.clone();
        Callback::from(move |_: Event| {
            gloo_console::log!("Preview loaded:", &sample_id);
            iframe_loaded.set(true);
        })
    };

    let open_in_new_tab = {
        let sample_url = sample_url.clone();
        Callback::from(move |_: MouseEvent| links::open_in_new_tab(&sample_url))
    };

    let inquire = {
        let name = sample.name.clone();
        Callback::from(move |_: MouseEvent| {
            links::open_whatsapp(&links::sample_inquiry_message(&name));
        })
    };

    html! {
        <div class="sample-card">
            <div class="sample-preview">
                <div class="sample-preview-frame">
                    <iframe
                        src={sample_url}
                        title={sample.name.clone()}
                        sandbox="allow-scripts allow-same-origin"
                        onload={on_load}
                    />
                </div>
                {
                    if !*iframe_loaded {
                        html! { <div class="sample-preview-loading"><span class="spinner"></span></div> }
                    } else {
                        html! {}
                    }
                }
                <div class="sample-preview-hover">
                    <button class="view-full-button" onclick={open_in_new_tab.clone()}>
                        {"View Full Site"}
                    </button>
                </div>
            </div>
            <div class="sample-body">
                <h3>{&sample.name}</h3>
                <p class="sample-description">{&sample.description}</p>
                <div class="sample-actions">
                    <button class="outline-button" onclick={open_in_new_tab}>{"Preview"}</button>
                    <button class="whatsapp-button" onclick={inquire}>{"Inquire"}</button>
                </div>
            </div>
        </div>
    }
}
