use log::warn;
use web_sys::window;

use crate::config;

pub const HERO_MESSAGE: &str = "Hi Shyara Marketing, I visited your website and I'm looking for digital marketing / technology services for my business. Can we discuss?";
pub const SERVICES_CTA_MESSAGE: &str = "Hi Shyara Marketing, I've gone through your services and I'd like to discuss how you can help grow my business. When can we talk?";
pub const CONTACT_MESSAGE: &str = "Hi, I'd like to discuss your services.";
pub const SMM_SAMPLES_MESSAGE: &str = "Hi Shyara Marketing, I just checked out your social media samples and I love the quality. I want similar content for my brand. Can we discuss which plan would work best?";
pub const WEBSITE_SAMPLES_MESSAGE: &str = "Hi Shyara Marketing, I've gone through your website samples and I'm interested in getting a website built for my business. Can we discuss what would work best for me?";

pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

pub fn mailto_url() -> String {
    format!("mailto:{}", config::CONTACT_EMAIL)
}

pub fn plan_message(service: &str, plan: Option<&str>) -> String {
    match plan {
        Some(plan) => format!("Hi, I'm interested in the {} plan for {}.", plan, service),
        None => format!("Hi, I'd like to discuss {} services.", service),
    }
}

pub fn sample_inquiry_message(sample_name: &str) -> String {
    format!(
        "Hi Shyara Marketing, I just viewed the \"{}\" sample on your website and I'd like something similar for my business. Can we discuss the scope, timeline, and pricing?",
        sample_name
    )
}

/// Preview address of a sample site. An empty `file` points at the folder
/// and lets the server pick its index page.
pub fn sample_preview_url(folder: &str, file: &str) -> String {
    if file.is_empty() {
        format!("{}/{}/", config::SAMPLES_BASE_PATH, folder)
    } else {
        format!("{}/{}/{}", config::SAMPLES_BASE_PATH, folder, file)
    }
}

pub fn share_url(origin: &str, category: Option<&str>) -> String {
    match category {
        Some(category) => format!(
            "{}{}?category={}",
            origin,
            config::SAMPLES_BASE_PATH,
            urlencoding::encode(category)
        ),
        None => format!("{}{}", origin, config::SAMPLES_BASE_PATH),
    }
}

pub fn current_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| config::get_site_url().to_string())
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else { return };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open {}: {:?}", url, err);
    }
}

pub fn open_whatsapp(message: &str) {
    open_in_new_tab(&whatsapp_url(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_percent_encodes_message() {
        assert_eq!(
            whatsapp_url(CONTACT_MESSAGE),
            "https://wa.me/919584661610?text=Hi%2C%20I%27d%20like%20to%20discuss%20your%20services."
        );
    }

    #[test]
    fn plan_messages() {
        assert_eq!(
            plan_message("Social Media Management", Some("Growth")),
            "Hi, I'm interested in the Growth plan for Social Media Management."
        );
        assert_eq!(
            plan_message("App Development", None),
            "Hi, I'd like to discuss App Development services."
        );
    }

    #[test]
    fn inquiry_quotes_sample_name() {
        let url = whatsapp_url(&sample_inquiry_message("Spice Garden"));
        assert!(url.contains("%22Spice%20Garden%22"));
    }

    #[test]
    fn preview_url_with_and_without_file() {
        assert_eq!(sample_preview_url("bistro", "index.html"), "/samples/websites/bistro/index.html");
        assert_eq!(sample_preview_url("bistro", ""), "/samples/websites/bistro/");
    }

    #[test]
    fn share_url_carries_category() {
        assert_eq!(
            share_url("https://shyaramarketing.com", Some("food")),
            "https://shyaramarketing.com/samples/websites?category=food"
        );
        assert_eq!(
            share_url("https://shyaramarketing.com", None),
            "https://shyaramarketing.com/samples/websites"
        );
    }
}
