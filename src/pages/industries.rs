use yew::prelude::*;

use crate::components::card::Card;
use crate::components::hero_banner::HeroBanner;
use crate::hooks::{use_scroll_reveal, use_scroll_to_top};
use crate::reveal::marker_for;

struct Industry {
    title: &'static str,
    image: &'static str,
    text: &'static str,
    icon: &'static str,
}

const INDUSTRIES: [Industry; 10] = [
    Industry {
        title: "Automotive & OEM",
        image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=800&h=600&fit=crop",
        text: "Rubber and plastic components for cars, motorcycles, rickshaws, and electric vehicles.",
        icon: "🚗",
    },
    Industry {
        title: "Agriculture",
        image: "https://images.unsplash.com/photo-1574323347407-f5e1ad6d020b?w=800&h=600&fit=crop",
        text: "Hoses, gaskets, and rubber parts for irrigation and machinery.",
        icon: "🌾",
    },
    Industry {
        title: "Construction & Infrastructure",
        image: "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?w=800&h=600&fit=crop",
        text: "Rubber expansion joints, water stoppers, and sealing strips for tunnels and bridges.",
        icon: "🏗️",
    },
    Industry {
        title: "Water Supply & Drainage",
        image: "https://cdn.pixabay.com/photo/2019/08/15/17/56/production-4408573_640.jpg",
        text: "EPDM gaskets, PVC pipes, and utility seals for fluid and sewage control systems.",
        icon: "💧",
    },
    Industry {
        title: "HVAC & Ducting",
        image: "https://i.postimg.cc/cHNmvT4G/download.jpg",
        text: "Rubber and plastic parts used in heating, ventilation, and air-conditioning systems.",
        icon: "❄️",
    },
    Industry {
        title: "Marine & Shipbuilding",
        image: "https://i.postimg.cc/0j4Kw2dK/images.jpg",
        text: "Corrosion-resistant rubber hoses and gaskets for marine environments.",
        icon: "⚓",
    },
    Industry {
        title: "Energy & Power",
        image: "https://i.postimg.cc/R0vhqH5b/images.jpg",
        text: "Rubber insulation components, seals, and pipe systems used in power generation and renewable energy.",
        icon: "⚡",
    },
    Industry {
        title: "Electronics & Appliances",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=2070&auto=format&fit=crop",
        text: "Plastic housings, grommets, and vibration dampers for appliances and electronics.",
        icon: "💻",
    },
    Industry {
        title: "Health & Safety",
        image: "https://i.postimg.cc/Mp6XpB83/images.jpg",
        text: "Rubber hot water bottles, grip pads, and anti-slip safety items.",
        icon: "🏥",
    },
    Industry {
        title: "Custom Molding & Industrial",
        image: "https://cdn.pixabay.com/photo/2014/09/13/21/47/tools-444499_640.jpg",
        text: "Tailored rubber and plastic molded parts for a wide range of industrial machinery.",
        icon: "🔧",
    },
];

#[function_component(Industries)]
pub fn industries() -> Html {
    use_scroll_to_top();
    use_scroll_reveal();

    html! {
        <div class="page page-fade-in">
            <HeroBanner
                background_image="https://bistaterubber.com/wp-content/uploads/2023/07/Industrial-Rubber-Products-Fueling-Innovation-in-Varied-Industries-1200x675.jpg"
                title={html! { <>{"Industries We "}<span class="accent">{"Serve"}</span></> }}
                subtitle="Driving Excellence Across Sectors with Reliable Polymer & Rubber Solutions."
            />

            <section class="section-padding tone-dark">
                <div class="container">
                    <div class="grid grid-3">
                        {
                            for INDUSTRIES.iter().enumerate().map(|(index, industry)| html! {
                                <Card
                                    image={industry.image}
                                    image_alt={industry.title}
                                    class={classes!("card-surface", marker_for(index, 3), "group", "lift-hover")}
                                >
                                    <div class="industry-heading">
                                        <span class="industry-icon">{ industry.icon }</span>
                                        <h3 class="card-title">{ industry.title }</h3>
                                    </div>
                                    <p class="muted">{ industry.text }</p>
                                </Card>
                            })
                        }
                    </div>
                </div>
            </section>
        </div>
    }
}
