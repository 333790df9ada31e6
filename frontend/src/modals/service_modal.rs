use yew::prelude::*;

use crate::components::dialog::Dialog;
use crate::links;
use crate::modals::plans::ServiceOffer;

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub offer: &'static ServiceOffer,
    pub open: bool,
    pub on_open_change: Callback<bool>,
}

/// Plans and pricing for one service. Every call to action ends in WhatsApp.
#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let offer = props.offer;

    let custom_plan = Callback::from(move |_: MouseEvent| {
        links::open_whatsapp(&links::plan_message(offer.title, None));
    });

    html! {
        <Dialog
            open={props.open}
            on_open_change={props.on_open_change.clone()}
            title={offer.title.to_string()}
            description={Some(offer.pitch.to_string())}
            wide={true}
        >
            <div class="plan-benefits">
                <h3>{"Included with Every Plan"}</h3>
                <ul>
                    { for offer.common_features.iter().map(|feature| html! {
                        <li><span class="check">{"✓"}</span>{*feature}</li>
                    }) }
                </ul>
            </div>

            <div class="plan-grid">
                {
                    offer.plans.iter().map(|plan| {
                        let choose = Callback::from(move |_: MouseEvent| {
                            links::open_whatsapp(&links::plan_message(offer.title, Some(plan.name)));
                        });
                        html! {
                            <div key={plan.name} class={classes!("plan-card", plan.popular.then_some("popular"))}>
                                {
                                    if plan.popular {
                                        html! { <div class="plan-badge">{"Most Popular"}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <h3>{plan.name}</h3>
                                <div class="plan-price">
                                    <span class="price">{plan.price}</span>
                                    <span class="period">{plan.period}</span>
                                </div>
                                <p class="plan-description">{plan.description}</p>
                                <p class="plan-label">{"What you get"}</p>
                                <ul class="plan-features">
                                    { for plan.features.iter().map(|feature| html! {
                                        <li><span class="check">{"✓"}</span>{*feature}</li>
                                    }) }
                                </ul>
                                <button class="plan-button" onclick={choose}>{"Choose This Plan"}</button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="modal-footer">
                <button class="outline-button" onclick={custom_plan}>{"Need a Custom Plan?"}</button>
            </div>
        </Dialog>
    }
}
