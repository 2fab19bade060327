use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::card::Card;
use crate::components::hero_banner::HeroBanner;
use crate::hooks::{use_scroll_reveal, use_scroll_to_top};
use crate::reveal::marker_for;
use crate::Route;

struct Highlight {
    title: &'static str,
    text: &'static str,
    image: &'static str,
    to: Route,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Manufacturing Facilities",
        text: "Dedicated production lines for rubber, plastic, and PVC components with in-house testing and warehousing.",
        image: "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?w=800&h=600&fit=crop",
        to: Route::ManufacturingFacilities,
    },
    Highlight {
        title: "Compliance",
        text: "ISO 9001:2015 quality management, RoHS, REACH, and FDA grade materials for global export.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=600&fit=crop",
        to: Route::Compliance,
    },
    Highlight {
        title: "Industries Served",
        text: "Automotive, agriculture, construction, water supply, HVAC, marine, energy, and more.",
        image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=800&h=600&fit=crop",
        to: Route::Industries,
    },
];

const STRENGTHS: [(&str, &str); 4] = [
    ("In-House Compounding", "Material recipes mixed and tested under our own roof."),
    ("Custom Moulding", "Tooling and moulds designed for your drawings and samples."),
    ("Quality Assured", "In-process inspection and traceability on every line."),
    ("Export Ready", "Documentation and certifications for international buyers."),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    use_scroll_reveal();

    html! {
        <div class="page page-fade-in">
            <HeroBanner
                background_image="https://images.unsplash.com/photo-1565793298595-6a879b1d9492?w=1920&h=1080&fit=crop"
                title={html! { <>{"Millat Polymer & "}<span class="accent">{"Rubber"}</span></> }}
                subtitle="Precision polymer, rubber, and PVC components for OEM, aftermarket, and industrial partners."
            />

            <section class="section-padding tone-white">
                <div class="container">
                    <div class="centered narrow scale-in">
                        <h2 class="section-title">{"Engineered "}<span class="highlight">{"Reliability"}</span></h2>
                        <p class="lead">
                            {"From compounding raw materials to moulding finished parts, we manufacture components that keep vehicles, machinery, and infrastructure running."}
                        </p>
                    </div>
                    <div class="grid grid-4">
                        {
                            for STRENGTHS.iter().enumerate().map(|(index, (title, text))| html! {
                                <Card title={*title} class={classes!("card-surface", marker_for(index, 2), "centered", "lift-hover")}>
                                    <p class="muted">{ *text }</p>
                                </Card>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section-padding tone-light">
                <div class="container">
                    <div class="grid grid-3">
                        {
                            for HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| html! {
                                <Link<Route> to={highlight.to.clone()} classes={classes!(marker_for(index, 3), "card-link")}>
                                    <Card
                                        title={highlight.title}
                                        image={highlight.image}
                                        image_alt={highlight.title}
                                        class={classes!("card-surface", "lift-hover", "full-height")}
                                    >
                                        <p class="muted">{ highlight.text }</p>
                                        <div class="learn-more">{"Learn More →"}</div>
                                    </Card>
                                </Link<Route>>
                            })
                        }
                    </div>
                </div>
            </section>

            <CallToAction
                title="Have a Part in Mind?"
                text="Send us your drawings or samples and our team will get back to you with a quote."
                label="Get in Touch"
                to={Route::Contact}
            />
        </div>
    }
}
