//! Entry surface: splash/login until the session gate unlocks, then the
//! mock dashboard. The switch is state-driven; there is no URL for the
//! dashboard and no way back once unlocked.

use leptos::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::splash::SplashPage;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().unlocked() fallback=|| view! { <SplashPage/> }>
            <DashboardPage/>
        </Show>
    }
}
