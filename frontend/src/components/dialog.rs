use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    /// Receives `false` when the user dismisses the dialog.
    pub on_open_change: Callback<bool>,
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    {
        let open = props.open;
        let on_open_change = props.on_open_change.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_open_change.emit(false);
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let dismiss = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_: MouseEvent| on_open_change.emit(false))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={dismiss.clone()}>
            <div
                class={classes!("modal-content", props.wide.then_some("modal-wide"))}
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <button class="modal-close" aria-label="Close" onclick={dismiss}>{"×"}</button>
                <div class="modal-header">
                    <h2 class="modal-title">{&props.title}</h2>
                    {
                        if let Some(description) = &props.description {
                            html! { <p class="modal-description">{description}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
