use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::components::service_card::ServiceCard;
use crate::history::browser::use_modal_with_history;
use crate::links;
use crate::modals::plans::SERVICES;
use crate::modals::service_modal::ServiceModal;
use crate::seo::{use_seo, SeoMeta};
use crate::Route;

#[function_component]
pub fn Home() -> Html {
    let modals = use_modal_with_history();

    use_seo(
        SeoMeta::new(
            "Digital Marketing & Technology Services",
            "Shyara Marketing helps businesses grow through social media management, advertising campaigns, website development, and app development with clarity, consistency, and measurable results.",
        )
        .canonical("/")
        .keywords("digital marketing India, social media management, website development, app development, advertising campaigns, Shyara Marketing, digital marketing agency, online marketing services"),
    );

    let talk_to_us = Callback::from(|_: MouseEvent| links::open_whatsapp(links::HERO_MESSAGE));
    let start_conversation = Callback::from(|_: MouseEvent| links::open_whatsapp(links::SERVICES_CTA_MESSAGE));

    let scroll_to_services = Callback::from(|_: MouseEvent| {
        if let Some(section) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("services"))
        {
            section.scroll_into_view();
        }
    });

    html! {
        <Layout>
            <section class="hero">
                <h1>
                    {"Grow Your Business with "}
                    <span class="accent">{"Digital Excellence"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"We help businesses grow through social media, advertising, websites, and apps, with clarity, consistency, and measurable results."}
                </p>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={talk_to_us}>{"Talk to Us →"}</button>
                    <button class="outline-button" onclick={scroll_to_services}>{"Explore Services"}</button>
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"Our Services"}</h2>
                <p>{"Comprehensive digital solutions to help your business thrive in the modern landscape."}</p>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <ServiceCard
                                key={service.id}
                                title={service.title}
                                description={service.summary}
                                icon={service.icon}
                                on_view_details={modals.open_callback(service.id)}
                            />
                        }).collect::<Html>()
                    }
                </div>
                <div class="services-more">
                    <Link<Route> to={Route::Services} classes="outline-button">
                        {"View All Services →"}
                    </Link<Route>>
                </div>
            </section>

            <section class="trust">
                <div class="trust-grid">
                    <div class="trust-item">
                        <div class="trust-number">{"100+"}</div>
                        <p>{"Projects Delivered"}</p>
                    </div>
                    <div class="trust-item">
                        <div class="trust-number">{"50+"}</div>
                        <p>{"Happy Clients"}</p>
                    </div>
                    <div class="trust-item">
                        <div class="trust-number">{"5+"}</div>
                        <p>{"Years of Experience"}</p>
                    </div>
                </div>
            </section>

            <section class="footer-cta">
                <h2>{"Ready to Grow Your Business?"}</h2>
                <p class="subtitle">
                    {"Let's discuss how we can help you achieve your goals with our digital marketing and technology solutions."}
                </p>
                <button class="hero-cta" onclick={start_conversation}>{"Start a Conversation →"}</button>
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
