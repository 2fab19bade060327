use yew::prelude::*;
use yew_router::prelude::*;

use crate::company;
use crate::navigation::NAVIGATION;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-column">
                    <img class="footer-logo" src={company::LOGO} alt="Millat Polymer Logo" />
                    <p>{"Polymer, rubber and PVC components for OEM, aftermarket and industrial customers."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        {
                            for NAVIGATION.iter().map(|entry| html! {
                                <li key={entry.href}>
                                    <Link<Route> to={Route::from_href(entry.href)} classes="footer-link">
                                        { entry.name }
                                    </Link<Route>>
                                </li>
                            })
                        }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <p>
                        { company::ADDRESS_LINES[0] }<br />
                        { company::ADDRESS_LINES[1] }
                    </p>
                    <p><a href={company::PHONE_HREF}>{ company::PHONE_DISPLAY }</a></p>
                    <p><a href={company::EMAIL_HREF}>{ company::EMAIL }</a></p>
                    <div class="footer-social">
                        <a href={company::FACEBOOK_HREF} target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                        <a href={company::LINKEDIN_HREF} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {}. All rights reserved.", company::NAME) }</p>
            </div>
        </footer>
    }
}
