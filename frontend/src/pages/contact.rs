use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::layout::Layout;
use crate::config;
use crate::contact::{ContactForm, SERVICE_OPTIONS};
use crate::links;
use crate::seo::{use_seo, SeoMeta};

#[function_component]
pub fn Contact() -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);

    use_seo(
        SeoMeta::new(
            "Contact Us",
            "Get in touch with Shyara Marketing. Reach out to us directly via WhatsApp or email and let us help you choose the right digital marketing and technology solution for your business.",
        )
        .canonical("/contact")
        .keywords("contact digital marketing agency, hire marketing company, get quote website development, digital marketing consultation, Shyara Marketing contact"),
    );

    let open_whatsapp = Callback::from(|_: MouseEvent| links::open_whatsapp(links::CONTACT_MESSAGE));

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };

    let on_business = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { business: input.value(), ..(*form).clone() });
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ContactForm { service: select.value(), ..(*form).clone() });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_whatsapp_message() {
                Ok(message) => {
                    error.set(None);
                    links::open_whatsapp(&message);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <Layout>
            <section class="page-hero">
                <h1>{"Get in Touch"}</h1>
                <p>{"Reach out to us directly - we're just a message away."}</p>
            </section>

            <section class="contact-options">
                <button class="whatsapp-cta" onclick={open_whatsapp}>
                    <span class="cta-icon">{"💬"}</span>
                    <div class="cta-text">
                        <div class="cta-title">{"Chat on WhatsApp"}</div>
                        <div class="cta-subtitle">{"Quick response within hours"}</div>
                    </div>
                    <span class="cta-arrow">{"→"}</span>
                </button>

                <a href={links::mailto_url()} class="email-cta">
                    <span class="cta-icon">{"✉"}</span>
                    <div class="cta-text">
                        <div class="cta-title">{"Email Us"}</div>
                        <div class="cta-subtitle">{config::CONTACT_EMAIL}</div>
                    </div>
                    <span class="cta-arrow">{"→"}</span>
                </a>

                <form class="contact-form" onsubmit={on_submit}>
                    <h2>{"Tell Us About Your Project"}</h2>
                    {
                        if let Some(message) = &*error {
                            html! { <div class="form-notification error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <label>
                        {"Name *"}
                        <input type="text" value={form.name.clone()} oninput={on_name} />
                    </label>
                    <label>
                        {"Business"}
                        <input type="text" value={form.business.clone()} oninput={on_business} />
                    </label>
                    <label>
                        {"Service"}
                        <select onchange={on_service}>
                            <option value="" selected={form.service.is_empty()}>{"Choose a service"}</option>
                            {
                                SERVICE_OPTIONS.iter().map(|option| html! {
                                    <option value={*option} selected={form.service == *option}>{*option}</option>
                                }).collect::<Html>()
                            }
                        </select>
                    </label>
                    <label>
                        {"Message *"}
                        <textarea value={form.message.clone()} oninput={on_message} rows="4" />
                    </label>
                    <button type="submit" class="hero-cta">{"Send on WhatsApp"}</button>
                </form>

                <div class="response-time">
                    <span class="cta-icon">{"⏱"}</span>
                    <div>
                        <h3>{"Response Time"}</h3>
                        <p>
                            {"We typically respond within 2-4 hours during business hours (IST). For urgent inquiries, WhatsApp is the fastest way to reach us."}
                        </p>
                    </div>
                </div>
            </section>
        </Layout>
    }
}
