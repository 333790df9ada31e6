use log::warn;
use serde_json::json;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::components::sample_card::WebsiteSampleCard;
use crate::components::share_button::ShareButton;
use crate::components::structured_data::{SchemaKind, StructuredData};
use crate::config;
use crate::links;
use crate::samples::filter::{filter_samples, find_category, icon_glyph, samples_heading, CategoryQuery};
use crate::samples::manifest::use_website_manifest;
use crate::seo::{use_seo, SeoMeta};
use crate::Route;

#[function_component]
pub fn WebsiteSamples() -> Html {
    let manifest = use_website_manifest();
    let navigator = use_navigator();
    let query = use_location()
        .and_then(|location| location.query::<CategoryQuery>().ok())
        .unwrap_or_default();
    let active = query.active_category();

    let visible = filter_samples(&manifest.samples, active);
    let heading = samples_heading(find_category(&manifest.categories, active), active);

    use_seo(
        SeoMeta::new(heading.title.clone(), heading.description.clone())
            .canonical(heading.canonical.clone())
            .keywords("website samples, web design portfolio, website examples, professional websites"),
    );

    let select = |category: Option<String>| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = &navigator else { return };
            match &category {
                Some(id) => {
                    let query = CategoryQuery { category: Some(id.clone()) };
                    if let Err(err) = navigator.push_with_query(&Route::WebsiteSamples, &query) {
                        warn!("Failed to select category {}: {:?}", id, err);
                    }
                }
                None => navigator.push(&Route::WebsiteSamples),
            }
        })
    };

    let pill_class = |selected: bool| classes!("category-pill", selected.then_some("active"));
    let talk_to_us = Callback::from(|_: MouseEvent| links::open_whatsapp(links::WEBSITE_SAMPLES_MESSAGE));

    html! {
        <Layout>
            <StructuredData kind={SchemaKind::WebPage(json!({
                "name": heading.title,
                "description": heading.description,
                "url": format!("{}{}", config::get_site_url(), heading.canonical)
            }))} />
            <section class="page-hero">
                <Link<Route> to={Route::Samples} classes="back-link">{"← Back to Samples"}</Link<Route>>
                <h1>{&heading.title}</h1>
                <p>{&heading.description}</p>
            </section>

            <section class="samples-toolbar">
                <div class="category-pills">
                    <button class={pill_class(active.is_none())} onclick={select(None)}>
                        <span class="pill-icon">{"▦"}</span>{"All"}
                    </button>
                    {
                        manifest.categories.iter().map(|cat| html! {
                            <button
                                key={cat.id.clone()}
                                class={pill_class(active == Some(cat.id.as_str()))}
                                onclick={select(Some(cat.id.clone()))}
                            >
                                {
                                    if let Some(glyph) = icon_glyph(&cat.icon) {
                                        html! { <span class="pill-icon">{glyph}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                                {&cat.name}
                            </button>
                        }).collect::<Html>()
                    }
                </div>
                <ShareButton category={active.map(str::to_string)} />
            </section>

            <section class="samples-results">
                {
                    if manifest.loading {
                        html! {
                            <div class="gallery-status">
                                <span class="spinner"></span>
                                <p>{"Loading samples..."}</p>
                            </div>
                        }
                    } else if let Some(error) = &manifest.error {
                        html! {
                            <div class="gallery-status">
                                <p class="error-text">{error}</p>
                            </div>
                        }
                    } else if visible.is_empty() {
                        html! {
                            <div class="gallery-status">
                                <div class="empty-icon">{"📂"}</div>
                                <p>
                                    {
                                        if active.is_some() {
                                            "No samples in this category yet."
                                        } else {
                                            "Website samples coming soon!"
                                        }
                                    }
                                </p>
                                <p class="muted">{"We're preparing our portfolio for you to explore."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="sample-grid">
                                {
                                    visible.iter().map(|sample| html! {
                                        <WebsiteSampleCard key={sample.id.clone()} sample={(*sample).clone()} />
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    }
                }
            </section>

            <section class="footer-cta">
                <h2>{"Want a Website Like These?"}</h2>
                <p class="subtitle">{"Let us build a stunning website tailored to your business. Get in touch today."}</p>
                <button class="hero-cta" onclick={talk_to_us}>{"Talk to Us on WhatsApp"}</button>
            </section>
        </Layout>
    }
}
