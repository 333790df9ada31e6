use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub on_view_details: Callback<MouseEvent>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <div class="service-icon">{&props.icon}</div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
            <button class="service-details-button" onclick={props.on_view_details.clone()}>
                {"View Details"}
            </button>
        </div>
    }
}
