use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard;
use crate::links;

const COPIED_RESET_MS: u32 = 2000;

#[derive(Properties, PartialEq)]
pub struct ShareButtonProps {
    #[prop_or_default]
    pub category: Option<String>,
}

#[function_component(ShareButton)]
pub fn share_button(props: &ShareButtonProps) -> Html {
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        let category = props.category.clone();
        Callback::from(move |_: MouseEvent| {
            let url = links::share_url(&links::current_origin(), category.as_deref());
            let copied = copied.clone();
            spawn_local(async move {
                match clipboard::copy_text(&url).await {
                    Ok(()) => {
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
                    }
                    Err(err) => warn!("Could not copy share link: {}", err),
                }
            });
        })
    };

    html! {
        <button class="outline-button share-button" {onclick}>
            {
                if *copied {
                    html! { <><span class="share-icon">{"✓"}</span>{"Link Copied!"}</> }
                } else {
                    html! { <><span class="share-icon">{"⤴"}</span>{"Share"}</> }
                }
            }
        </button>
    }
}
