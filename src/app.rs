use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use tracing::info;

use crate::browser::load_site_config;
use crate::components::toaster::{ToastContext, Toaster};
use crate::pages::landing::LandingPage;

#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    info!(
        "Site config: submit latency {:?}, success hold {:?}",
        config.submit_latency(),
        config.success_hold()
    );

    provide_context(ToastContext::new(config.toast_duration()));
    provide_context(config);

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"Page not found"</p> }>
                <Route path=path!("/") view=LandingPage />
            </Routes>
            <Toaster />
        </Router>
    }
}
