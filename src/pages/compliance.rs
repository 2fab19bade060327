use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::card::Card;
use crate::components::hero_banner::HeroBanner;
use crate::hooks::{use_scroll_reveal, use_scroll_to_top};
use crate::reveal::marker_for;
use crate::Route;

pub mod environmental_standards;

struct ComplianceArea {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    link: Route,
}

const COMPLIANCE_AREAS: [ComplianceArea; 6] = [
    ComplianceArea {
        title: "Quality Management System",
        description: "ISO 9001:2015 certified system ensuring consistent quality for OEM, aftermarket, and industrial applications.",
        icon: "🏅",
        link: Route::QualityManagementSystem,
    },
    ComplianceArea {
        title: "Environmental Standards",
        description: "Eco-conscious production methods, waste reduction, and resource-efficient manufacturing aligned with international environmental directives.",
        icon: "🌿",
        link: Route::EnvironmentalStandards,
    },
    ComplianceArea {
        title: "Occupational Health & Safety",
        description: "Strict workplace safety protocols and employee well-being programs to maintain a hazard-free environment.",
        icon: "⛑️",
        link: Route::OccupationalHealthSafety,
    },
    ComplianceArea {
        title: "Material Compliance",
        description: "All materials meet or exceed RoHS, REACH, and FDA requirements, supporting global export compliance.",
        icon: "📋",
        link: Route::MaterialComplianceCertifications,
    },
    ComplianceArea {
        title: "Safety & Quality Standards",
        description: "Rigorous in-process quality controls, traceability systems, and final inspection protocols across all production lines.",
        icon: "🛡️",
        link: Route::SafetyQualityStandards,
    },
    ComplianceArea {
        title: "Industry Approvals",
        description: "Certified supplier for leading automotive brands and industries worldwide. Recognized by major OEMs and regulatory bodies.",
        icon: "✅",
        link: Route::IndustryApprovals,
    },
];

const CERTIFICATIONS: [(&str, &str); 4] = [
    ("ISO 9001:2015", "Certified Quality Management System"),
    ("RoHS Compliant", "Restriction of Hazardous Substances"),
    ("REACH Compliant", "European Chemical Regulation"),
    ("FDA Grade Materials", "Safe for food and medical contact"),
];

const CUSTOMER_BENEFITS: [&str; 4] = [
    "Consistent product quality",
    "Regulatory compliance for exports",
    "Reduced supply chain risks",
    "Access to OEM and global markets",
];

const OPERATION_BENEFITS: [&str; 4] = [
    "Continuous improvement culture",
    "Efficiency in production workflows",
    "Workplace safety leadership",
    "Environmental stewardship",
];

const SHOWCASE: [(&str, &str); 3] = [
    ("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=600&fit=crop", "Quality Management"),
    ("https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800&h=600&fit=crop", "Environmental Standards"),
    ("https://images.unsplash.com/photo-1521737711867-e3b97375f902?w=800&h=600&fit=crop", "Safety Compliance"),
];

fn benefit_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="check-list">
            { for items.iter().map(|item| html! { <li><span class="check" aria-hidden="true">{"✔"}</span>{ *item }</li> }) }
        </ul>
    }
}

#[function_component(Compliance)]
pub fn compliance() -> Html {
    use_scroll_to_top();
    use_scroll_reveal();

    html! {
        <div class="page page-fade-in">
            <HeroBanner
                background_image="https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1920&h=1080&fit=crop"
                title={html! { <span class="accent">{"Compliance"}</span> }}
                subtitle="Global standards, responsible manufacturing"
            />

            <section class="section-padding tone-dark">
                <div class="container">
                    <div class="centered narrow scale-in">
                        <h2 class="section-title">{"Our Commitment to "}<span class="highlight">{"Excellence"}</span></h2>
                        <p class="lead">
                            {"At Millat Polymer & Rubber (Pvt) Ltd, compliance means more than ticking boxes. It's about building trust. We integrate quality, environmental care, and safety into every layer of our operations to meet and exceed the demands of global markets."}
                        </p>
                        <p>
                            {"Our processes are guided by internationally recognized standards, continuous improvement principles, and a strong culture of accountability."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="section-padding tone-light">
                <div class="container">
                    <div class="grid grid-3 spaced">
                        {
                            for SHOWCASE.iter().enumerate().map(|(index, (src, alt))| html! {
                                <div class={marker_for(index, 3)}>
                                    <img class="showcase-image scale-hover" src={*src} alt={*alt} />
                                </div>
                            })
                        }
                    </div>
                    <div class="centered spaced scale-in">
                        <h2 class="section-title">{"Compliance "}<span class="highlight">{"Areas"}</span></h2>
                        <p class="section-subtitle">
                            {"Our integrated compliance framework spans product quality, material safety, environmental responsibility, and workplace health."}
                        </p>
                    </div>
                    <div class="grid grid-3">
                        {
                            for COMPLIANCE_AREAS.iter().enumerate().map(|(index, area)| html! {
                                <Link<Route> to={area.link.clone()} classes={classes!(marker_for(index, 3), "card-link")}>
                                    <Card class={classes!("card-surface", "lift-hover", "full-height")}>
                                        <div class="icon-badge">{ area.icon }</div>
                                        <h3 class="card-title">{ area.title }</h3>
                                        <p class="muted">{ area.description }</p>
                                        <div class="learn-more">{"Learn More →"}</div>
                                    </Card>
                                </Link<Route>>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section-padding tone-dark">
                <div class="container">
                    <div class="centered spaced scale-in">
                        <h2 class="section-title">{"Our "}<span class="highlight">{"Certifications"}</span></h2>
                        <p class="section-subtitle">
                            {"Globally recognized certifications that reinforce our role as a reliable and compliant manufacturing partner."}
                        </p>
                    </div>
                    <div class="grid grid-4">
                        {
                            for CERTIFICATIONS.iter().enumerate().map(|(index, (name, description))| html! {
                                <Card class={classes!("card-surface", marker_for(index, 2), "centered", "lift-hover")}>
                                    <div class="icon-badge">{"🏅"}</div>
                                    <h3 class="card-title">{ *name }</h3>
                                    <p class="muted small">{ *description }</p>
                                </Card>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section-padding tone-light">
                <div class="container">
                    <div class="centered narrow scale-in">
                        <h2 class="section-title">{"Benefits of Our "}<span class="highlight">{"Compliance"}</span></h2>
                        <div class="panel grid grid-2">
                            <div>
                                <h3 class="panel-title">{"For Our Customers"}</h3>
                                { benefit_list(&CUSTOMER_BENEFITS) }
                            </div>
                            <div>
                                <h3 class="panel-title">{"For Our Operations"}</h3>
                                { benefit_list(&OPERATION_BENEFITS) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <CallToAction
                title="Need Compliance Documentation?"
                text="Request our compliance certificates, technical specifications, and safety documentation."
                label="Contact Us"
                to={Route::Contact}
            />
        </div>
    }
}
