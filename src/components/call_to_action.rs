use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub title: AttrValue,
    pub text: AttrValue,
    pub label: AttrValue,
    pub to: Route,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    html! {
        <section class="section-padding cta-section">
            <div class="container centered">
                <div class="scale-in narrow">
                    <h2 class="section-title">{ props.title.clone() }</h2>
                    <p class="cta-text">{ props.text.clone() }</p>
                    <Link<Route> to={props.to.clone()} classes="cta-button">
                        <span>{ props.label.clone() }</span>
                        <span class="arrow" aria-hidden="true">{"→"}</span>
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
