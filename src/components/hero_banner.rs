use stylist::yew::styled_component;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroBannerProps {
    pub background_image: AttrValue,
    /// Title markup; wrap words in `<span class="accent">` to tint them.
    pub title: Html,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[styled_component]
pub fn HeroBanner(props: &HeroBannerProps) -> Html {
    let banner = css!(
        r#"
        position: relative;
        min-height: 60vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        background-size: cover;
        background-position: center;
        color: #ffffff;

        .hero-overlay {
            position: absolute;
            inset: 0;
            background: linear-gradient(180deg, rgba(15, 23, 42, 0.55), rgba(30, 58, 138, 0.75));
        }

        .hero-content {
            position: relative;
            max-width: 56rem;
            padding: 6rem 1.5rem;
        }

        h1 {
            font-size: clamp(2.25rem, 5vw, 3.75rem);
            font-weight: 700;
            margin-bottom: 1.5rem;
        }

        .accent {
            color: #d1d5db;
        }

        p {
            font-size: 1.25rem;
            opacity: 0.9;
        }
    "#
    );

    html! {
        <section
            class={classes!("hero-banner", banner)}
            style={format!("background-image: url('{}');", props.background_image)}
        >
            <div class="hero-overlay"></div>
            <div class="hero-content scale-in">
                <h1>{ props.title.clone() }</h1>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! { <p>{subtitle.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}
