use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod company;
mod config;
mod contact_draft;
mod error;
mod hooks;
mod lightbox;
mod navigation;
mod reveal;
mod components {
    pub mod call_to_action;
    pub mod card;
    pub mod footer;
    pub mod header;
    pub mod hero_banner;
    pub mod image_lightbox;
}
mod pages {
    pub mod home;
    pub mod compliance;
    pub mod contact;
    pub mod industries;
    pub mod manufacturing_facilities;
    pub mod section;
    pub mod not_found;
}

use components::{footer::Footer, header::Header};
use pages::{
    home::Home,
    compliance::{Compliance, environmental_standards::EnvironmentalStandards},
    contact::Contact,
    industries::Industries,
    manufacturing_facilities::ManufacturingFacilities,
    section::SectionPage,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/our-story")]
    OurStory,
    #[at("/vision-mission-values")]
    VisionMissionValues,
    #[at("/leadership-team")]
    LeadershipTeam,
    #[at("/csr-initiatives")]
    CsrInitiatives,
    #[at("/achievements-awards")]
    AchievementsAwards,
    #[at("/manufacturing")]
    Manufacturing,
    #[at("/manufacturing-facilities")]
    ManufacturingFacilities,
    #[at("/production-processes")]
    ProductionProcesses,
    #[at("/quality-control-testing")]
    QualityControlTesting,
    #[at("/in-house-tooling-moulding")]
    InHouseToolingMoulding,
    #[at("/material-compounding")]
    MaterialCompounding,
    #[at("/rd-innovation")]
    RdInnovation,
    #[at("/products")]
    Products,
    #[at("/capabilities")]
    Capabilities,
    #[at("/capabilities/in-house-compounding")]
    InHouseCompounding,
    #[at("/capabilities/technical-expertise")]
    TechnicalExpertise,
    #[at("/capabilities/testing-quality-assurance")]
    TestingQualityAssurance,
    #[at("/capabilities/product-customization")]
    ProductCustomization,
    #[at("/capabilities/large-scale-production")]
    LargeScaleProduction,
    #[at("/capabilities/prototype-development")]
    PrototypeDevelopment,
    #[at("/capabilities/supply-chain-logistics")]
    SupplyChainLogistics,
    #[at("/compliance")]
    Compliance,
    #[at("/compliance/quality-management-system")]
    QualityManagementSystem,
    #[at("/compliance/environmental-standards")]
    EnvironmentalStandards,
    #[at("/compliance/occupational-health-safety")]
    OccupationalHealthSafety,
    #[at("/compliance/material-compliance-certifications")]
    MaterialComplianceCertifications,
    #[at("/compliance/safety-quality-standards")]
    SafetyQualityStandards,
    #[at("/compliance/industry-approvals")]
    IndustryApprovals,
    #[at("/certifications")]
    Certifications,
    #[at("/industries")]
    Industries,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a plain path from the navigation tree.
    pub fn from_href(href: &str) -> Self {
        Route::recognize(href).unwrap_or(Route::NotFound)
    }
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Compliance => {
            info!("Rendering Compliance page");
            html! { <Compliance /> }
        },
        Route::EnvironmentalStandards => {
            info!("Rendering Environmental Standards page");
            html! { <EnvironmentalStandards /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Industries => {
            info!("Rendering Industries page");
            html! { <Industries /> }
        },
        Route::ManufacturingFacilities => {
            info!("Rendering Manufacturing Facilities page");
            html! { <ManufacturingFacilities /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
        section => {
            let path = section.to_path();
            info!("Rendering section page {}", path);
            // Keyed so moving between two section pages remounts the
            // page and re-attaches the scroll reveal.
            html! { <SectionPage key={path.clone()} path={path} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;
    use navigation::NAVIGATION;

    #[test]
    fn test_every_navigation_href_has_a_route() {
        for entry in NAVIGATION {
            assert_ne!(Route::from_href(entry.href), Route::NotFound, "{}", entry.href);
            for item in entry.dropdown {
                assert_ne!(Route::from_href(item.href), Route::NotFound, "{}", item.href);
            }
        }
    }

    #[test]
    fn test_routes_round_trip_through_paths() {
        for route in [
            Route::Home,
            Route::EnvironmentalStandards,
            Route::IndustryApprovals,
            Route::Contact,
        ] {
            assert_eq!(Route::from_href(&route.to_path()), route);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::from_href("/nope"), Route::NotFound);
    }
}
