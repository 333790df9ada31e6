use serde_json::json;
use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::structured_data::{SchemaKind, StructuredData};
use crate::history::browser::use_modal_with_history;
use crate::links;
use crate::modals::plans::SERVICES;
use crate::modals::service_modal::ServiceModal;
use crate::seo::{use_seo, SeoMeta};

#[function_component]
pub fn Services() -> Html {
    let modals = use_modal_with_history();

    use_seo(
        SeoMeta::new(
            "Services",
            "Social media management, ads campaign management, website development and app development plans from Shyara Marketing.",
        )
        .canonical("/services")
        .keywords("social media management plans, ads management pricing, website development cost, app development India"),
    );

    let discuss = Callback::from(|_: MouseEvent| links::open_whatsapp(links::SERVICES_CTA_MESSAGE));

    html! {
        <Layout>
            <section class="page-hero">
                <h1>{"Our Services"}</h1>
                <p>{"Pick a service to see what every plan includes and what it costs."}</p>
            </section>

            <section class="service-list">
                {
                    SERVICES.iter().map(|service| {
                        let starting = service.plans.first().map(|p| format!("From {} {}", p.price, p.period));
                        html! {
                            <article key={service.id} class="service-row">
                                <StructuredData kind={SchemaKind::Service(json!({
                                    "name": service.title,
                                    "description": service.pitch,
                                    "areaServed": "IN"
                                }))} />
                                {
                                    service.plans.iter().map(|plan| html! {
                                        <StructuredData kind={SchemaKind::Offer(json!({
                                            "name": format!("{} - {}", service.title, plan.name),
                                            "price": plan.price,
                                            "priceCurrency": "INR"
                                        }))} />
                                    }).collect::<Html>()
                                }
                                <div class="service-icon">{service.icon}</div>
                                <div class="service-row-body">
                                    <h2>{service.title}</h2>
                                    <p>{service.pitch}</p>
                                    {
                                        if let Some(starting) = starting {
                                            html! { <p class="service-starting">{starting}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                <button class="outline-button" onclick={modals.open_callback(service.id)}>
                                    {"See Plans"}
                                </button>
                            </article>
                        }
                    }).collect::<Html>()
                }
            </section>

            <section class="footer-cta">
                <h2>{"Not Sure Where to Start?"}</h2>
                <button class="hero-cta" onclick={discuss}>{"Talk to Us on WhatsApp"}</button>
            </section>

            {
                SERVICES.iter().map(|service| html! {
                    <ServiceModal
                        key={service.id}
                        offer={service}
                        open={modals.is_open(service.id)}
                        on_open_change={modals.on_open_change(service.id)}
                    />
                }).collect::<Html>()
            }
        </Layout>
    }
}
