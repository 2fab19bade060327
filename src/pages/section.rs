use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::card::Card;
use crate::components::hero_banner::HeroBanner;
use crate::hooks::{use_scroll_reveal, use_scroll_to_top};
use crate::navigation::{locate, title_from_path, NavLink, NAVIGATION};
use crate::reveal::marker_for;
use crate::Route;

const SECTION_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1565793298595-6a879b1d9492?w=1920&h=1080&fit=crop";

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub path: AttrValue,
}

/// Overview page for navigation paths without a dedicated template. The
/// hero, breadcrumb and link grid all come from the navigation tree.
#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    use_scroll_to_top();
    use_scroll_reveal();

    let located = locate(&props.path, NAVIGATION);
    let title = located
        .map(|found| found.name().to_string())
        .unwrap_or_else(|| title_from_path(&props.path));

    // Children for a top-level entry, siblings for a dropdown item.
    let (heading, links): (String, Vec<&'static NavLink>) = match located {
        Some(found) if found.child.is_none() => (
            format!("Explore {}", found.entry.name),
            found.entry.dropdown.iter().collect(),
        ),
        Some(found) => (
            format!("More in {}", found.entry.name),
            found
                .entry
                .dropdown
                .iter()
                .filter(|item| Some(item.href) != found.child.map(|child| child.href))
                .collect(),
        ),
        None => (String::new(), Vec::new()),
    };
    let parent = located.and_then(|found| found.child.map(|_| found.entry));

    html! {
        <div class="page page-fade-in">
            <HeroBanner
                background_image={SECTION_BACKGROUND}
                title={html! { <span class="accent">{ title.clone() }</span> }}
            />

            <section class="section-padding tone-white">
                <div class="container">
                    {
                        if let Some(parent) = parent {
                            html! {
                                <p class="breadcrumb">
                                    <Link<Route> to={Route::from_href(parent.href)}>{ parent.name }</Link<Route>>
                                    {" / "}
                                    <span>{ title.clone() }</span>
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div class="centered narrow scale-in">
                        <h2 class="section-title">{ title.clone() }</h2>
                        <p class="lead">
                            {"Detailed information for this section is being prepared. Our team is happy to share specifications, samples, and documentation on request."}
                        </p>
                    </div>
                </div>
            </section>

            {
                if links.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="section-padding tone-light">
                            <div class="container">
                                <div class="centered spaced scale-in">
                                    <h2 class="section-title">{ heading }</h2>
                                </div>
                                <div class="grid grid-3">
                                    {
                                        for links.iter().enumerate().map(|(index, item)| html! {
                                            <Link<Route> to={Route::from_href(item.href)} classes={classes!(marker_for(index, 3), "card-link")}>
                                                <Card title={item.name} class={classes!("card-surface", "lift-hover", "full-height")}>
                                                    <div class="learn-more">{"Learn More →"}</div>
                                                </Card>
                                            </Link<Route>>
                                        })
                                    }
                                </div>
                            </div>
                        </section>
                    }
                }
            }

            <CallToAction
                title="Talk to Our Team"
                text="Request specifications, samples, or a quote for your application."
                label="Contact Us"
                to={Route::Contact}
            />
        </div>
    }
}
