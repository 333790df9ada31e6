use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::structured_data::OrganizationSchema;
use crate::config;
use crate::links;
use crate::Route;

const SITE_CSS: &str = r#"
    :root {
        --accent: #f97316;
        --ink: #111827;
        --muted: #6b7280;
        --border: #e5e7eb;
        --card: #ffffff;
        --soft: #f9fafb;
        --whatsapp: #25D366;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: var(--ink);
        background: var(--soft);
    }
    .site-layout { min-height: 100vh; display: flex; flex-direction: column; }
    .site-main { flex: 1; padding-top: 72px; }
    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 50;
        background: rgba(255, 255, 255, 0.85);
        backdrop-filter: blur(8px);
        transition: box-shadow 0.2s ease;
    }
    .top-nav.scrolled { box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); }
    .nav-content {
        max-width: 1200px; margin: 0 auto; padding: 1rem 1.5rem;
        display: flex; align-items: center; justify-content: space-between;
    }
    .nav-logo { font-weight: 700; font-size: 1.25rem; color: var(--ink); text-decoration: none; }
    .nav-right { display: flex; gap: 1.5rem; align-items: center; }
    .nav-link { color: var(--muted); text-decoration: none; }
    .nav-link:hover { color: var(--accent); }
    .nav-cta { background: var(--accent); color: #fff; padding: 0.5rem 1rem; border-radius: 8px; text-decoration: none; }
    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
    .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: var(--ink); }
    .hero, .page-hero { max-width: 820px; margin: 0 auto; padding: 5rem 1.5rem 3rem; text-align: center; }
    .hero h1 { font-size: 3rem; margin-bottom: 1.5rem; }
    .accent { color: var(--accent); }
    .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
    .hero-cta {
        background: var(--accent); color: #fff; border: none; border-radius: 10px;
        padding: 0.9rem 1.6rem; font-size: 1rem; cursor: pointer; text-decoration: none;
    }
    .outline-button {
        background: transparent; border: 1px solid var(--border); border-radius: 10px;
        padding: 0.6rem 1.2rem; cursor: pointer; color: var(--ink); text-decoration: none;
    }
    .whatsapp-button { background: var(--whatsapp); color: #fff; border: none; border-radius: 8px; padding: 0.5rem 1rem; cursor: pointer; }
    .services, .trust, .footer-cta, .samples-grid, .samples-toolbar, .samples-results, .service-list, .contact-options {
        max-width: 1100px; margin: 0 auto; padding: 3rem 1.5rem;
    }
    .services-grid, .samples-grid, .sample-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
    .service-card, .sample-card, .plan-card {
        background: var(--card); border: 1px solid var(--border); border-radius: 14px; padding: 1.5rem;
    }
    .service-icon { font-size: 2rem; }
    .trust-grid { display: grid; grid-template-columns: repeat(3, 1fr); text-align: center; }
    .trust-number { font-size: 2.5rem; font-weight: 700; color: var(--accent); }
    .footer-cta { text-align: center; }
    .modal-overlay {
        position: fixed; inset: 0; z-index: 80; background: rgba(0, 0, 0, 0.55);
        display: flex; align-items: center; justify-content: center; padding: 1rem;
    }
    .modal-content {
        position: relative; background: #fff; border-radius: 16px; padding: 2rem;
        width: 100%; max-width: 640px; max-height: 90vh; overflow-y: auto;
    }
    .modal-content.modal-wide { max-width: 960px; }
    .modal-close { position: absolute; top: 1rem; right: 1rem; border: none; background: none; font-size: 1.6rem; cursor: pointer; }
    .modal-footer { display: flex; justify-content: center; margin-top: 1.5rem; padding-top: 1rem; border-top: 1px solid var(--border); }
    .plan-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.25rem; margin-top: 1.5rem; }
    .plan-card { position: relative; display: flex; flex-direction: column; }
    .plan-card.popular { border-color: var(--accent); }
    .plan-badge {
        position: absolute; top: -0.75rem; left: 50%; transform: translateX(-50%);
        background: var(--accent); color: #fff; font-size: 0.75rem; padding: 0.2rem 0.75rem; border-radius: 999px;
    }
    .plan-price .price { font-size: 1.8rem; font-weight: 700; }
    .plan-features { list-style: none; padding: 0; }
    .plan-button { margin-top: auto; background: var(--ink); color: #fff; border: none; border-radius: 8px; padding: 0.7rem; cursor: pointer; }
    .check { color: var(--accent); margin-right: 0.5rem; }
    .category-pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .samples-toolbar { display: flex; justify-content: space-between; align-items: center; gap: 1rem; flex-wrap: wrap; }
    .category-pill { border: none; border-radius: 999px; padding: 0.5rem 1rem; background: #eef0f3; cursor: pointer; }
    .category-pill.active { background: var(--accent); color: #fff; }
    .pill-icon { margin-right: 0.4rem; }
    .sample-card { padding: 0; overflow: hidden; }
    .sample-preview { position: relative; aspect-ratio: 16 / 9; overflow: hidden; background: #eef0f3; }
    .sample-preview-frame { position: absolute; inset: 0; width: 400%; height: 400%; transform: scale(0.25); transform-origin: top left; }
    .sample-preview-frame iframe { width: 100%; height: 100%; border: 0; }
    .sample-preview-loading, .sample-preview-hover { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }
    .sample-preview-hover { opacity: 0; transition: opacity 0.2s ease; background: rgba(0, 0, 0, 0.4); }
    .sample-preview:hover .sample-preview-hover { opacity: 1; }
    .sample-body { padding: 1rem; }
    .sample-actions { display: flex; gap: 0.5rem; }
    .gallery-status { display: flex; flex-direction: column; align-items: center; padding: 4rem 1rem; color: var(--muted); }
    .spinner {
        width: 28px; height: 28px; border-radius: 50%;
        border: 3px solid var(--border); border-top-color: var(--accent);
        animation: spin 0.8s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .media-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); gap: 0.75rem; }
    .media-tile { position: relative; aspect-ratio: 1; overflow: hidden; border: none; padding: 0; border-radius: 8px; cursor: pointer; }
    .media-tile img { width: 100%; height: 100%; object-fit: cover; }
    .lightbox { position: fixed; inset: 0; z-index: 100; background: rgba(0, 0, 0, 0.95); display: flex; align-items: center; justify-content: center; }
    .lightbox-media img, .lightbox-media video { max-width: 90vw; max-height: 90vh; border-radius: 8px; }
    .lightbox button { position: absolute; color: #fff; background: none; border: none; font-size: 2.5rem; cursor: pointer; }
    .lightbox-close { top: 1rem; right: 1rem; }
    .lightbox-prev { left: 1rem; }
    .lightbox-next { right: 1rem; }
    .lightbox-counter { position: absolute; bottom: 1rem; color: #fff; }
    .tab-list { display: flex; justify-content: center; gap: 0.5rem; margin: 1rem 0; }
    .tab-trigger { border: 1px solid var(--border); background: #fff; border-radius: 8px; padding: 0.5rem 1rem; cursor: pointer; }
    .tab-trigger.active { background: var(--ink); color: #fff; }
    .whatsapp-cta, .email-cta {
        display: flex; align-items: center; gap: 1rem; width: 100%; margin-bottom: 1.25rem;
        padding: 1.25rem 1.5rem; border-radius: 14px; text-align: left; cursor: pointer; text-decoration: none;
    }
    .whatsapp-cta { background: var(--whatsapp); color: #fff; border: none; }
    .email-cta { background: var(--card); color: var(--ink); border: 1px solid var(--border); }
    .cta-arrow { margin-left: auto; }
    .contact-form { display: flex; flex-direction: column; gap: 1rem; background: var(--card); border: 1px solid var(--border); border-radius: 14px; padding: 1.5rem; margin-bottom: 1.25rem; }
    .contact-form label { display: flex; flex-direction: column; gap: 0.35rem; font-weight: 500; }
    .contact-form input, .contact-form select, .contact-form textarea { padding: 0.6rem; border: 1px solid var(--border); border-radius: 8px; font: inherit; }
    .form-notification.error { background: #fef2f2; color: #b91c1c; border-radius: 8px; padding: 0.75rem 1rem; }
    .response-time { display: flex; gap: 1rem; background: #f3f4f6; border-radius: 14px; padding: 1.5rem; }
    .site-footer { background: var(--ink); color: #d1d5db; padding: 2.5rem 1.5rem 1rem; }
    .footer-content { max-width: 1100px; margin: 0 auto; display: flex; flex-wrap: wrap; justify-content: space-between; gap: 2rem; }
    .footer-links, .footer-contact { display: flex; flex-direction: column; gap: 0.5rem; }
    .site-footer a { color: #d1d5db; text-decoration: none; }
    .footer-legal { text-align: center; font-size: 0.85rem; margin-top: 2rem; }
    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-right { display: none; }
        .nav-right.mobile-menu-open {
            display: flex; flex-direction: column; position: absolute; top: 100%; left: 0; right: 0;
            background: #fff; padding: 1rem 1.5rem;
        }
        .hero h1 { font-size: 2.2rem; }
        .trust-grid { grid-template-columns: 1fr; }
    }
"#;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new({
                let window = window.clone();
                move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 40.0);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BRAND_NAME}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">{"Services"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Samples} classes="nav-link">{"Samples"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">{"Contact"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <h3>{config::BRAND_NAME}</h3>
                    <p>{"Digital marketing and technology services for growing businesses."}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Samples}>{"Samples"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-contact">
                    <a href={links::mailto_url()}>{config::CONTACT_EMAIL}</a>
                    <a href={links::whatsapp_url(links::CONTACT_MESSAGE)} target="_blank" rel="noopener noreferrer">
                        {"WhatsApp"}
                    </a>
                </div>
            </div>
            <p class="footer-legal">
                {format!("© {} {}. All rights reserved.", year, config::LEGAL_NAME)}
            </p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="site-layout">
            <style>{SITE_CSS}</style>
            <OrganizationSchema />
            <Header />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
