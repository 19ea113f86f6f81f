//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::analyze::AnalyzePage;
use crate::pages::home::HomePage;
use crate::state::dashboard::DashboardState;
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing for
/// the two demo surfaces.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(session);
    provide_context(dashboard);

    view! {
        <Title text="Text BI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("analyze") view=AnalyzePage/>
            </Routes>
        </Router>
    }
}
