use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::card::Card;
use crate::components::hero_banner::HeroBanner;
use crate::hooks::{use_scroll_reveal, use_scroll_to_top};
use crate::reveal::marker_for;
use crate::Route;

const PRACTICES: [(&str, &str, &str); 3] = [
    (
        "Waste Reduction",
        "Systematic waste minimization, in-house scrap recycling, and responsible disposal of industrial waste.",
        "♻️",
    ),
    (
        "Water Recycling",
        "Closed-loop water treatment systems to reduce fresh water usage in cooling and cleaning processes.",
        "💧",
    ),
    (
        "Renewable Energy",
        "Solar power integration and high-efficiency equipment to reduce carbon emissions across operations.",
        "⚡",
    ),
];

struct ImpactStat {
    metric: &'static str,
    description: &'static str,
    period: &'static str,
}

// TODO: confirm these figures against the latest sustainability report.
const IMPACT: [ImpactStat; 4] = [
    ImpactStat { metric: "40%", description: "Waste Reduction", period: "Since 2022" },
    ImpactStat { metric: "30%", description: "Energy Savings", period: "Annual" },
    ImpactStat { metric: "25%", description: "Water Conservation", period: "Yearly" },
    ImpactStat { metric: "2,500", description: "Trees Planted", period: "To Date" },
];

const GALLERY: [(&str, &str); 3] = [
    ("https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800&h=600&fit=crop", "Environmental Protection"),
    ("https://images.unsplash.com/photo-1581092921462-20524563c940?w=800&h=600&fit=crop", "Renewable Energy"),
    ("https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?w=800&h=600&fit=crop", "Sustainable Manufacturing"),
];

#[function_component(EnvironmentalStandards)]
pub fn environmental_standards() -> Html {
    use_scroll_to_top();
    use_scroll_reveal();

    html! {
        <div class="page page-fade-in">
            <HeroBanner
                background_image="https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=1920&h=1080&fit=crop"
                title={html! { <>{"Environmental "}<span class="accent">{"Standards"}</span></> }}
                subtitle="Eco-conscious manufacturing for a sustainable future"
            />

            <section class="section-padding tone-white">
                <div class="container">
                    <div class="centered narrow scale-in">
                        <h2 class="section-title">{"Millat's "}<span class="highlight">{"Environmental Responsibility"}</span></h2>
                        <p class="lead">
                            {"Millat Polymer & Rubber (Pvt) Ltd is committed to protecting the environment while delivering high-performance products. Our environmental management initiatives aim to reduce our ecological footprint through smarter resource use, cleaner production, and ongoing innovation."}
                        </p>
                        <p>
                            {"From reducing industrial waste to optimizing energy and water usage, we embed sustainability into every stage of our manufacturing process."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="section-padding tone-light">
                <div class="container">
                    <div class="grid grid-3 spaced">
                        {
                            for GALLERY.iter().enumerate().map(|(index, (src, alt))| html! {
                                <div class={marker_for(index, 3)}>
                                    <img class="showcase-image scale-hover" src={*src} alt={*alt} loading="lazy" />
                                </div>
                            })
                        }
                    </div>
                    <div class="centered spaced scale-in">
                        <h2 class="section-title">{"Key Environmental "}<span class="highlight">{"Practices"}</span></h2>
                        <p class="section-subtitle">
                            {"Our sustainability initiatives focus on measurable outcomes and industry-leading practices."}
                        </p>
                    </div>
                    <div class="grid grid-3">
                        {
                            for PRACTICES.iter().enumerate().map(|(index, (title, description, icon))| html! {
                                <Card title={*title} class={classes!("card-surface", marker_for(index, 3), "centered", "lift-hover")}>
                                    <div class="icon-badge">{ *icon }</div>
                                    <p class="muted">{ *description }</p>
                                </Card>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section-padding tone-white">
                <div class="container">
                    <div class="centered spaced scale-in">
                        <h2 class="section-title">{"Environmental "}<span class="highlight">{"Impact"}</span></h2>
                        <p class="section-subtitle">
                            {"Measuring progress ensures that our environmental goals translate into real-world benefits."}
                        </p>
                    </div>
                    <div class="grid grid-4">
                        {
                            for IMPACT.iter().enumerate().map(|(index, stat)| html! {
                                <Card class={classes!("card-surface", marker_for(index, 2), "centered", "lift-hover")}>
                                    <div class="icon-badge">{"🍃"}</div>
                                    <h3 class="stat-metric">{ stat.metric }</h3>
                                    <p class="stat-label">{ stat.description }</p>
                                    <p class="muted small">{ stat.period }</p>
                                </Card>
                            })
                        }
                    </div>
                </div>
            </section>

            <CallToAction
                title="Learn About Our CSR Initiatives"
                text="Explore how our environmental strategies align with our Corporate Social Responsibility goals."
                label="CSR Initiatives"
                to={Route::CsrInitiatives}
            />
        </div>
    }
}
