use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_scroll_to_top;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page page-fade-in not-found">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"The page you are looking for has moved or does not exist."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">{"Back to Home"}</Link<Route>>
        </div>
    }
}
