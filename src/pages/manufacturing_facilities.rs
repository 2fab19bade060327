use std::num::NonZeroUsize;

use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::card::Card;
use crate::components::hero_banner::HeroBanner;
use crate::components::image_lightbox::ImageLightbox;
use crate::hooks::{use_scroll_reveal, use_scroll_to_top};
use crate::lightbox::{GalleryImage, Lightbox, LightboxAction};
use crate::reveal::marker_for;
use crate::Route;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "Production Halls",
        "Multiple dedicated production lines for rubber, plastic, and PVC components.",
        "🏭",
    ),
    (
        "Storage Areas",
        "Climate-controlled warehouses for raw materials and finished goods to maintain product integrity.",
        "📦",
    ),
    (
        "Testing & R&D Labs",
        "Fully equipped quality control and research laboratories to ensure product performance and innovation.",
        "🧪",
    ),
    (
        "Administrative Offices",
        "Modern workspaces housing our engineering, sales, design, and management teams.",
        "🏢",
    ),
];

const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "https://images.unsplash.com/photo-1565793298595-6a879b1d9492?w=800&h=600&fit=crop",
        alt: "Modern manufacturing facility exterior",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?w=800&h=600&fit=crop",
        alt: "Production floor with advanced machinery",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=600&fit=crop",
        alt: "Injection molding equipment in operation",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1587293852726-70cdb56c2866?w=800&h=600&fit=crop",
        alt: "Material compounding and mixing area",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1582719471384-894fbb16e074?w=800&h=600&fit=crop",
        alt: "Quality control and testing laboratory",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=800&h=600&fit=crop",
        alt: "Warehouse and logistics area",
    },
];

const GALLERY_LEN: NonZeroUsize = match NonZeroUsize::new(GALLERY.len()) {
    Some(len) => len,
    None => panic!("facility gallery is empty"),
};

#[function_component(ManufacturingFacilities)]
pub fn manufacturing_facilities() -> Html {
    use_scroll_to_top();
    use_scroll_reveal();

    let lightbox = use_reducer(|| Lightbox::new(GALLERY_LEN));

    let dispatch = |action: fn() -> LightboxAction| {
        let lightbox = lightbox.clone();
        Callback::from(move |_: ()| lightbox.dispatch(action()))
    };
    let on_close = dispatch(|| LightboxAction::Close);
    let on_next = dispatch(|| LightboxAction::Next);
    let on_prev = dispatch(|| LightboxAction::Prev);

    html! {
        <div class="page page-fade-in">
            <HeroBanner
                background_image="https://images.unsplash.com/photo-1565793298595-6a879b1d9492?w=1920&h=1080&fit=crop"
                title={html! { <>{"World-Class "}<span class="accent">{"Manufacturing Facilities"}</span></> }}
                subtitle="Precision • Capacity • Excellence"
            />

            <section class="section-padding tone-white">
                <div class="container">
                    <div class="centered narrow scale-in">
                        <h2 class="section-title">{"Our Manufacturing "}<span class="highlight">{"Facility"}</span></h2>
                        <p class="lead">
                            {"Our manufacturing complex in Lahore, Pakistan integrates production, quality testing, and warehousing under one roof. Designed for efficiency and scalability, it lets a skilled workforce meet diverse client needs across automotive, industrial, and infrastructure sectors."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="section-padding tone-light">
                <div class="container">
                    <div class="centered spaced scale-in">
                        <h2 class="section-title">{"Facility "}<span class="highlight">{"Features"}</span></h2>
                        <p class="section-subtitle">
                            {"Every element of our facility is designed to support world-class polymer manufacturing."}
                        </p>
                    </div>
                    <div class="grid grid-4">
                        {
                            for FEATURES.iter().enumerate().map(|(index, (title, description, icon))| html! {
                                <Card title={*title} class={classes!("card-surface", marker_for(index, 2), "centered", "lift-hover")}>
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
                        <h2 class="section-title">{"Photo "}<span class="highlight">{"Gallery"}</span></h2>
                        <p class="section-subtitle">
                            {"Explore a glimpse of our facility, production processes, and operational capabilities."}
                        </p>
                    </div>
                    <div class="grid grid-3 gallery">
                        {
                            for GALLERY.iter().enumerate().map(|(index, image)| {
                                let open = {
                                    let lightbox = lightbox.clone();
                                    Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(index)))
                                };
                                html! {
                                    <div class={classes!(marker_for(index, 3), "gallery-tile")} onclick={open}>
                                        <img src={image.src} alt={image.alt} loading="lazy" />
                                    </div>
                                }
                            })
                        }
                    </div>
                </div>
            </section>

            <CallToAction
                title="Explore Our Production Processes"
                text="Discover how Millat Polymer & Rubber's advanced production methods ensure consistent quality and efficiency."
                label="Explore Our Production Processes"
                to={Route::ProductionProcesses}
            />

            <ImageLightbox
                images={GALLERY}
                current_index={lightbox.index()}
                is_open={lightbox.is_open()}
                on_close={on_close}
                on_next={on_next}
                on_prev={on_prev}
            />
        </div>
    }
}
