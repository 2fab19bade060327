use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::company;
use crate::config::HEADER_SCROLL_THRESHOLD;
use crate::hooks::report_listener_removal;
use crate::Route;
use crate::navigation::{active_paths, NavEntry, NAVIGATION};

#[derive(Properties, PartialEq)]
struct NavItemProps {
    entry: &'static NavEntry,
    active: bool,
    active_child: Option<&'static str>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let entry = props.entry;
    let link_class = classes!("nav-link", props.active.then(|| "active"));

    if !entry.has_dropdown() {
        return html! {
            <div class="nav-item">
                <Link<Route> to={Route::from_href(entry.href)} classes={link_class}>
                    { entry.name }
                </Link<Route>>
            </div>
        };
    }

    html! {
        <div class="nav-item has-dropdown">
            <Link<Route> to={Route::from_href(entry.href)} classes={link_class}>
                { entry.name }
                <span class="chevron" aria-hidden="true">{"▾"}</span>
            </Link<Route>>
            <div class="dropdown">
                {
                    for entry.dropdown.iter().map(|item| {
                        let current = props.active_child == Some(item.href);
                        html! {
                            <Link<Route>
                                to={Route::from_href(item.href)}
                                classes={classes!("dropdown-link", current.then(|| "current"))}
                            >
                                { item.name }
                            </Link<Route>>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let registered = web_sys::window().and_then(|window| {
                    let callback = {
                        let window = window.clone();
                        Closure::<dyn Fn()>::new(move || {
                            if let Ok(scroll_y) = window.scroll_y() {
                                is_scrolled.set(scroll_y > HEADER_SCROLL_THRESHOLD);
                            }
                        })
                    };
                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => Some((window, callback)),
                        Err(e) => {
                            warn!("Header scroll listener not registered: {:?}", e);
                            None
                        }
                    }
                });

                move || {
                    if let Some((window, callback)) = registered {
                        report_listener_removal(
                            "Header",
                            "scroll",
                            window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ),
                        );
                    }
                }
            },
            (),
        );
    }

    // Close the mobile menu whenever the route changes
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            path.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let active = active_paths(&path, NAVIGATION);
    let active_child = NAVIGATION
        .iter()
        .flat_map(|entry| entry.dropdown.iter())
        .map(|item| item.href)
        .find(|href| active.contains(href));

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src={company::LOGO} alt="Millat Polymer Logo" />
                </Link<Route>>

                <nav class="desktop-nav">
                    {
                        for NAVIGATION.iter().map(|entry| html! {
                            <NavItem
                                key={entry.href}
                                entry={entry}
                                active={active.contains(entry.href)}
                                active_child={active_child}
                            />
                        })
                    }
                </nav>

                <Link<Route> to={Route::Contact} classes="header-cta">
                    {"get in"}<br />{"touch"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <nav class="mobile-menu">
                            {
                                for NAVIGATION.iter().map(|entry| html! {
                                    <div class="mobile-group" key={entry.href}>
                                        <Link<Route>
                                            to={Route::from_href(entry.href)}
                                            classes={classes!("mobile-link", active.contains(entry.href).then(|| "active"))}
                                        >
                                            { entry.name }
                                        </Link<Route>>
                                        { for entry.dropdown.iter().map(|item| html! {
                                            <Link<Route> to={Route::from_href(item.href)} classes="mobile-sublink">
                                                { item.name }
                                            </Link<Route>>
                                        }) }
                                    </div>
                                })
                            }
                            <Link<Route> to={Route::Contact} classes="mobile-link mobile-cta">
                                {"Get in touch"}
                            </Link<Route>>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
