use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::seo::{use_seo, SeoMeta};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_seo(SeoMeta::new("Page Not Found", "The page you are looking for does not exist.").no_index());

    html! {
        <Layout>
            <section class="page-hero">
                <h1>{"404"}</h1>
                <p>{"We couldn't find that page."}</p>
                <Link<Route> to={Route::Home} classes="hero-cta">{"Back to Home"}</Link<Route>>
            </section>
        </Layout>
    }
}
