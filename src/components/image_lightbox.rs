use stylist::yew::styled_component;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::lightbox::GalleryImage;

#[derive(Properties, PartialEq)]
pub struct ImageLightboxProps {
    pub images: &'static [GalleryImage],
    pub current_index: usize,
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_prev: Callback<()>,
}

#[styled_component]
pub fn ImageLightbox(props: &ImageLightboxProps) -> Html {
    {
        let is_open = props.is_open;
        let on_close = props.on_close.clone();
        let on_next = props.on_next.clone();
        let on_prev = props.on_prev.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !is_open {
                return;
            }
            match e.key().as_str() {
                "Escape" => on_close.emit(()),
                "ArrowRight" => on_next.emit(()),
                "ArrowLeft" => on_prev.emit(()),
                _ => {}
            }
        });
    }

    let overlay = css!(
        r#"
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.9);

        figure {
            max-width: 90vw;
            max-height: 85vh;
            text-align: center;
        }

        img {
            max-width: 90vw;
            max-height: 75vh;
            border-radius: 1rem;
            object-fit: contain;
        }

        figcaption {
            color: #e5e7eb;
            margin-top: 1rem;
        }

        button {
            position: absolute;
            background: rgba(255, 255, 255, 0.1);
            color: #ffffff;
            border: none;
            border-radius: 9999px;
            width: 3rem;
            height: 3rem;
            font-size: 1.5rem;
            cursor: pointer;
        }

        button:hover {
            background: rgba(255, 255, 255, 0.25);
        }

        .lightbox-close { top: 1.5rem; right: 1.5rem; }
        .lightbox-prev { left: 1.5rem; }
        .lightbox-next { right: 1.5rem; }
    "#
    );

    let image = match props.images.get(props.current_index) {
        Some(image) if props.is_open => *image,
        _ => return html! {},
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let button = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            callback.emit(());
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={classes!("lightbox", overlay)} onclick={on_backdrop} role="dialog" aria-modal="true">
            <button class="lightbox-close" aria-label="Close" onclick={button(&props.on_close)}>{"✕"}</button>
            <button class="lightbox-prev" aria-label="Previous image" onclick={button(&props.on_prev)}>{"‹"}</button>
            <figure onclick={keep_open}>
                <img src={image.src} alt={image.alt} />
                <figcaption>
                    {format!("{} ({} / {})", image.alt, props.current_index + 1, props.images.len())}
                </figcaption>
            </figure>
            <button class="lightbox-next" aria-label="Next image" onclick={button(&props.on_next)}>{"›"}</button>
        </div>
    }
}
