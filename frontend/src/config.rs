pub const BRAND_NAME: &str = "Shyara Marketing";
pub const LEGAL_NAME: &str = "Shyara Tech Solutions (OPC) Pvt. Ltd.";
pub const CONTACT_EMAIL: &str = "marketing.shyara@gmail.com";
pub const WHATSAPP_NUMBER: &str = "919584661610";

// Static assets served next to the wasm bundle
pub const SAMPLES_BASE_PATH: &str = "/samples/websites";
pub const MANIFEST_PATH: &str = "/samples/websites/manifest.json";
pub const DEFAULT_OG_IMAGE_PATH: &str = "/og-image.png";

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://shyaramarketing.com"
}
