use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::components::service_card::ServiceCard;
use crate::history::browser::use_modal_with_history;
use crate::modals::smm_samples::SmmSamplesModal;
use crate::seo::{use_seo, SeoMeta};
use crate::Route;

const SMM_SAMPLES: &str = "smm-samples";

#[function_component]
pub fn Samples() -> Html {
    let modals = use_modal_with_history();
    let navigator = use_navigator();

    use_seo(
        SeoMeta::new(
            "Samples",
            "Explore our portfolio of work including social media content samples, website designs, and more. See the quality of our work before you commit.",
        )
        .canonical("/samples")
        .keywords("portfolio samples, social media samples, website samples, digital marketing portfolio, web design examples, social media content examples"),
    );

    // Website samples have their own page, social media samples open in place
    let to_website_samples = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::WebsiteSamples);
        }
    });

    html! {
        <Layout>
            <section class="page-hero">
                <h1>{"Our Work Samples"}</h1>
                <p>
                    {"See the quality of our work firsthand. Browse through our portfolio of social media content and website designs to get a feel for what we can create for your brand."}
                </p>
            </section>

            <section class="samples-grid">
                <ServiceCard
                    title="Social Media Samples"
                    description="Browse through our portfolio of engaging social media content - from scroll-stopping images to viral-ready reels."
                    icon="📸"
                    on_view_details={modals.open_callback(SMM_SAMPLES)}
                />
                <ServiceCard
                    title="Website Samples"
                    description="Explore our collection of professionally designed websites with live previews you can interact with."
                    icon="🌐"
                    on_view_details={to_website_samples}
                />
            </section>

            <SmmSamplesModal
                open={modals.is_open(SMM_SAMPLES)}
                on_open_change={modals.on_open_change(SMM_SAMPLES)}
            />
        </Layout>
    }
}
