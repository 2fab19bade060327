use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::company;
use crate::components::hero_banner::HeroBanner;
use crate::config::ACKNOWLEDGEMENT_MS;
use crate::contact_draft::{ContactDraft, ContactField};
use crate::hooks::{use_scroll_reveal, use_scroll_to_top};

/// `name` and `value` of the input or textarea that fired the event.
fn changed_field(e: &InputEvent) -> Option<(String, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

#[derive(Properties, PartialEq)]
struct ContactMethodProps {
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
    #[prop_or_default]
    external: bool,
}

#[function_component(ContactMethod)]
fn contact_method(props: &ContactMethodProps) -> Html {
    let (target, rel) = if props.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    html! {
        <a href={props.href} target={target} rel={rel} class="contact-method">
            <div class="method-icon">{ props.icon }</div>
            <div>
                <h3>{ props.title }</h3>
                <p class="muted">{ props.detail }</p>
            </div>
        </a>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    use_scroll_reveal();

    let draft = use_state(ContactDraft::default);
    let acknowledged = use_state(|| false);

    // Hide the acknowledgement after a while; unmounting cancels the timer.
    {
        let acknowledged = acknowledged.clone();
        use_effect_with_deps(
            move |shown| {
                let timeout = shown.then(|| {
                    let acknowledged = acknowledged.clone();
                    Timeout::new(ACKNOWLEDGEMENT_MS, move || acknowledged.set(false))
                });
                move || drop(timeout)
            },
            *acknowledged,
        );
    }

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let Some((name, value)) = changed_field(&e) else {
                return;
            };
            let mut next = (*draft).clone();
            if next.apply_input(&name, value) {
                draft.set(next);
            } else {
                warn!("Ignoring input from unknown field `{}`", name);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let acknowledged = acknowledged.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut current = (*draft).clone();
            let submission = current.submit();
            match serde_json::to_string(&submission) {
                Ok(json) => info!("Contact form submitted: {}", json),
                Err(e) => warn!("Could not serialize contact submission: {}", e),
            }
            draft.set(current);
            acknowledged.set(true);
        })
    };

    let dismiss = {
        let acknowledged = acknowledged.clone();
        Callback::from(move |_: MouseEvent| acknowledged.set(false))
    };

    html! {
        <div class="page page-fade-in">
            <HeroBanner
                background_image="/images/footer-bg.jpg"
                title={html! { <><span class="accent">{"Contact"}</span>{" Us"}</> }}
                subtitle="We're here to help with your polymer needs. Whether you have a question about our products, need a custom quote, or want to discuss a project, please get in touch."
            />

            {
                if *acknowledged {
                    html! {
                        <div class="toast" role="status" onclick={dismiss}>
                            {"Message Sent!"}
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <section class="section-padding tone-dark">
                <div class="container">
                    <div class="grid grid-2 wide-gap">
                        <div class="slide-in-left">
                            <div class="panel">
                                <h2 class="panel-heading">{"Get In Touch"}</h2>
                                <form class="contact-form" onsubmit={on_submit}>
                                    <input
                                        type="text"
                                        name="name"
                                        placeholder="John Doe"
                                        value={draft.get(ContactField::Name).to_string()}
                                        oninput={on_input.clone()}
                                        required=true
                                    />
                                    <input
                                        type="email"
                                        name="email"
                                        placeholder="you@example.com"
                                        value={draft.get(ContactField::Email).to_string()}
                                        oninput={on_input.clone()}
                                        required=true
                                    />
                                    <input
                                        type="text"
                                        name="subject"
                                        placeholder="e.g. Quote Request"
                                        value={draft.get(ContactField::Subject).to_string()}
                                        oninput={on_input.clone()}
                                        required=true
                                    />
                                    <textarea
                                        name="message"
                                        rows="6"
                                        placeholder="Please describe your requirements..."
                                        value={draft.get(ContactField::Message).to_string()}
                                        oninput={on_input}
                                        required=true
                                    />
                                    <button type="submit" class="btn-primary">
                                        <span aria-hidden="true">{"➤"}</span>
                                        <span>{"Send Message"}</span>
                                    </button>
                                </form>
                            </div>
                        </div>

                        <div class="slide-in-right stack">
                            <h2 class="panel-heading">{"Our Location"}</h2>
                            <div class="map-card">
                                <img src={company::MAP_IMAGE} alt="Millat Polymer Location Map" />
                                <div class="map-link">
                                    <a href={company::MAP_HREF} target="_blank" rel="noopener noreferrer">
                                        {"See in Maps"}
                                    </a>
                                </div>
                            </div>

                            <div class="panel address">
                                <span class="method-icon" aria-hidden="true">{"📍"}</span>
                                <div>
                                    <h3>{ company::SHORT_NAME }</h3>
                                    <p class="muted">
                                        { company::ADDRESS_LINES[0] }<br />
                                        { company::ADDRESS_LINES[1] }
                                    </p>
                                </div>
                            </div>

                            <div class="stack">
                                <ContactMethod href={company::PHONE_HREF} icon="📞" title="Phone" detail={company::PHONE_DISPLAY} />
                                <ContactMethod href={company::EMAIL_HREF} icon="✉️" title="Email" detail={company::EMAIL} />
                                <ContactMethod href={company::WHATSAPP_HREF} icon="💬" title="WhatsApp" detail="Chat on WhatsApp" external=true />
                            </div>

                            <div class="social-links">
                                <a href={company::FACEBOOK_HREF} target="_blank" rel="noopener noreferrer" aria-label="Facebook">{"f"}</a>
                                <a href={company::LINKEDIN_HREF} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"in"}</a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
