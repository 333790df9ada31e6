#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffer {
    /// Modal id used with the history controller
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
    pub pitch: &'static str,
    pub common_features: &'static [&'static str],
    pub plans: &'static [Plan],
}

pub static SERVICES: [ServiceOffer; 4] = [
    ServiceOffer {
        id: "social-media",
        title: "Social Media Management",
        summary: "Build a consistent presence with strategic content and community engagement.",
        icon: "📣",
        pitch: "Transform your brand into a social media powerhouse. We handle everything - from scroll-stopping content to building a loyal community - so you can focus on running your business.",
        common_features: &[
            "Zero Hidden Fees on Ads - 100% of your ad budget goes to your ads",
            "Daily Story Content to keep your brand top-of-mind",
            "Full Community Management - we respond to comments, DMs & reviews for you",
            "Trend-First Strategy - stay relevant with viral-ready content",
            "Detailed Monthly Reports with actionable insights",
        ],
        plans: &[
            Plan {
                name: "Starter",
                price: "₹7,999",
                period: "/ Month",
                description: "Launch your brand online with a strong, consistent presence.",
                features: &[
                    "8 Scroll-Stopping Reels/month",
                    "12 Professionally Designed Posts/month",
                ],
                popular: false,
            },
            Plan {
                name: "Growth",
                price: "₹14,999",
                period: "/ Month",
                description: "Dominate your niche with high-volume content and smart ad strategies.",
                features: &[
                    "16 Viral-Ready Reels/month",
                    "16 Professionally Designed Posts/month",
                    "Strategic Ad Planning before every campaign",
                ],
                popular: true,
            },
            Plan {
                name: "Scale",
                price: "₹25,000",
                period: "/ Month",
                description: "The complete social media department for brands ready to lead their industry.",
                features: &[
                    "16 Premium Reels/month",
                    "32 High-Impact Posts/month",
                    "Multi-Platform Optimization",
                    "Quarterly Growth Roadmap with industry insights",
                ],
                popular: false,
            },
        ],
    },
    ServiceOffer {
        id: "ads",
        title: "Ads Campaign Management",
        summary: "Drive results with data-driven ad campaigns and continuous optimization.",
        icon: "🎯",
        pitch: "Turn ad spend into customers. We plan, launch and tune campaigns on Meta and Google so every rupee is accounted for.",
        common_features: &[
            "Audience research and targeting setup",
            "Ad creatives and copy included",
            "Weekly performance check-ins",
        ],
        plans: &[
            Plan {
                name: "Launch",
                price: "₹9,999",
                period: "/ Month",
                description: "One platform, one goal, done properly.",
                features: &["1 Ad Platform", "Up to 3 Active Campaigns", "Monthly Report"],
                popular: false,
            },
            Plan {
                name: "Performance",
                price: "₹19,999",
                period: "/ Month",
                description: "Multi-platform campaigns with continuous A/B testing.",
                features: &[
                    "Meta + Google Ads",
                    "Up to 8 Active Campaigns",
                    "A/B Testing on Creatives",
                    "Conversion Tracking Setup",
                ],
                popular: true,
            },
        ],
    },
    ServiceOffer {
        id: "website",
        title: "Website Development",
        summary: "Fast, functional websites designed to convert and scale with your business.",
        icon: "🌐",
        pitch: "From a one-page presence to a full online store, built fast, mobile-first and ready for search engines.",
        common_features: &[
            "Mobile-first responsive design",
            "Basic SEO setup",
            "WhatsApp and contact integration",
        ],
        plans: &[
            Plan {
                name: "Landing Page",
                price: "₹9,999",
                period: "one-time",
                description: "A single high-converting page for your business.",
                features: &["1 Page", "Contact Form", "1 Round of Revisions"],
                popular: false,
            },
            Plan {
                name: "Business Website",
                price: "₹24,999",
                period: "one-time",
                description: "Everything a growing business needs online.",
                features: &["Up to 8 Pages", "Blog Setup", "Google Business Integration", "3 Rounds of Revisions"],
                popular: true,
            },
            Plan {
                name: "E-commerce",
                price: "₹49,999",
                period: "one-time",
                description: "Sell online with payments, inventory and order tracking.",
                features: &["Product Catalogue", "Payment Gateway", "Order Management", "Training Session"],
                popular: false,
            },
        ],
    },
    ServiceOffer {
        id: "app",
        title: "App Development",
        summary: "Mobile apps that solve real problems, from MVPs to complex platforms.",
        icon: "📱",
        pitch: "We design and build Android and iOS apps, from a first MVP to a production platform.",
        common_features: &[
            "Android and iOS from one codebase",
            "Store submission handled for you",
            "30 days of post-launch support",
        ],
        plans: &[
            Plan {
                name: "MVP",
                price: "Custom",
                period: "quote",
                description: "Validate your idea with a focused first version.",
                features: &["Core Feature Set", "Basic Admin Panel", "Analytics Setup"],
                popular: false,
            },
            Plan {
                name: "Platform",
                price: "Custom",
                period: "quote",
                description: "A complete product with backend, payments and scale in mind.",
                features: &["Custom Backend", "Payments", "Push Notifications", "Ongoing Maintenance"],
                popular: true,
            },
        ],
    },
];

pub fn find_service(id: &str) -> Option<&'static ServiceOffer> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn each_service_highlights_one_plan() {
        for service in SERVICES.iter() {
            let popular = service.plans.iter().filter(|p| p.popular).count();
            assert_eq!(popular, 1, "{} should have exactly one popular plan", service.id);
        }
    }

    #[test]
    fn lookup_by_modal_id() {
        assert_eq!(find_service("website").map(|s| s.title), Some("Website Development"));
        assert!(find_service("smm-samples").is_none());
    }
}
