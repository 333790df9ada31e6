use serde_json::{json, Map, Value};
use yew::prelude::*;

use crate::config;

/// One schema.org document. The payload kinds carry page-specific fields that
/// are merged over the fixed part, so a payload key wins on collision.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaKind {
    Organization,
    LocalBusiness,
    Service(Value),
    Offer(Value),
    WebPage(Value),
}

impl SchemaKind {
    pub fn schema(&self) -> Value {
        match self {
            SchemaKind::Organization => organization_schema(),
            SchemaKind::LocalBusiness => local_business_schema(),
            SchemaKind::Service(data) => merged(
                json!({
                    "@context": "https://schema.org",
                    "@type": "Service",
                    "provider": { "@type": "Organization", "name": config::BRAND_NAME }
                }),
                data,
            ),
            SchemaKind::Offer(data) => merged(
                json!({
                    "@context": "https://schema.org",
                    "@type": "Offer",
                    "seller": { "@type": "Organization", "name": config::BRAND_NAME }
                }),
                data,
            ),
            SchemaKind::WebPage(data) => merged(
                json!({
                    "@context": "https://schema.org",
                    "@type": "WebPage",
                    "isPartOf": {
                        "@type": "WebSite",
                        "name": config::BRAND_NAME,
                        "url": config::get_site_url()
                    }
                }),
                data,
            ),
        }
    }
}

// Non-object payloads are ignored.
fn merged(mut base: Value, data: &Value) -> Value {
    if let (Some(target), Some(extra)) = (base.as_object_mut(), data.as_object()) {
        let extra: &Map<String, Value> = extra;
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
    base
}

pub fn organization_schema() -> Value {
    let site = config::get_site_url();
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": config::BRAND_NAME,
        "legalName": config::LEGAL_NAME,
        "url": site,
        "logo": format!("{}/logo.png", site),
        "description": "Digital marketing and technology services company helping businesses grow through social media, advertising, websites, and apps.",
        "email": config::CONTACT_EMAIL,
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "IN"
        },
        "sameAs": []
    })
}

pub fn local_business_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": config::BRAND_NAME,
        "description": "Digital marketing and technology services company in India",
        "url": config::get_site_url(),
        "email": config::CONTACT_EMAIL,
        "priceRange": "₹₹",
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "IN"
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": "22.7196",
            "longitude": "75.8577"
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct StructuredDataProps {
    pub kind: SchemaKind,
}

#[function_component(StructuredData)]
pub fn structured_data(props: &StructuredDataProps) -> Html {
    html! {
        <script type="application/ld+json">
            { props.kind.schema().to_string() }
        </script>
    }
}

/// Site-wide documents rendered by the layout.
#[function_component(OrganizationSchema)]
pub fn organization_schema_tag() -> Html {
    html! {
        <>
            <StructuredData kind={SchemaKind::Organization} />
            <StructuredData kind={SchemaKind::LocalBusiness} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_schema_names_the_agency() {
        let schema = SchemaKind::Organization.schema();
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["name"], config::BRAND_NAME);
        assert_eq!(schema["email"], config::CONTACT_EMAIL);
        assert_eq!(schema["address"]["addressCountry"], "IN");
    }

    #[test]
    fn local_business_has_address_and_coordinates() {
        let schema = SchemaKind::LocalBusiness.schema();
        assert_eq!(schema["@type"], "LocalBusiness");
        assert_eq!(schema["priceRange"], "₹₹");
        assert_eq!(schema["address"]["@type"], "PostalAddress");
        assert_eq!(schema["geo"]["@type"], "GeoCoordinates");
        assert_eq!(schema["geo"]["latitude"], "22.7196");
        assert_eq!(schema["geo"]["longitude"], "75.8577");
    }

    #[test]
    fn service_names_provider_and_takes_payload() {
        let schema = SchemaKind::Service(json!({ "name": "Ads Management", "areaServed": "IN" })).schema();
        assert_eq!(schema["@type"], "Service");
        assert_eq!(schema["provider"]["name"], config::BRAND_NAME);
        assert_eq!(schema["name"], "Ads Management");
        assert_eq!(schema["areaServed"], "IN");
    }

    #[test]
    fn offer_names_seller_and_payload_wins() {
        let schema = SchemaKind::Offer(json!({ "price": "4999", "seller": "someone else" })).schema();
        assert_eq!(schema["@type"], "Offer");
        assert_eq!(schema["price"], "4999");
        assert_eq!(schema["seller"], "someone else");
    }

    #[test]
    fn webpage_is_part_of_the_site() {
        let schema = SchemaKind::WebPage(json!({ "name": "Website Samples" })).schema();
        assert_eq!(schema["@type"], "WebPage");
        assert_eq!(schema["isPartOf"]["@type"], "WebSite");
        assert_eq!(schema["isPartOf"]["url"], config::get_site_url());
        assert_eq!(schema["name"], "Website Samples");
    }

    #[test]
    fn non_object_payload_is_ignored() {
        let schema = SchemaKind::Service(Value::Null).schema();
        assert_eq!(schema["@type"], "Service");
        assert_eq!(schema.as_object().map(|o| o.len()), Some(3));
    }
}
