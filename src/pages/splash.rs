//! Splash sequence and the mock login form.
//!
//! The intro plays once on mount from the declarative schedule; unmounting
//! the page (or unlocking early) cancels whatever has not fired yet.

use leptos::prelude::*;

use crate::state::session::{FixedCredentials, SessionState};
use crate::state::splash::SplashState;
use crate::util::backdrop;

#[component]
pub fn SplashPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let splash = RwSignal::new(SplashState::default());

    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let handle = crate::util::sequence::play(crate::state::splash::SCHEDULE, move |step| {
            splash.update(|s| s.apply(step));
        });
        on_cleanup(move || handle.cancel());
    }

    // The photo backdrop tracks the login panel's visibility.
    Effect::new(move || backdrop::apply(splash.get().backdrop));

    let do_login = move || {
        let id = identifier.get();
        let pw = secret.get();
        session.update(|s| {
            let _ = s.attempt_login(&FixedCredentials::default(), &id, &pw);
        });
    };

    let on_secret_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_login();
        }
    };

    let login_aria_hidden = move || if splash.get().login_visible { "false" } else { "true" };

    view! {
        <div class="splash-root">
            <div
                class="logo-assemble"
                class:logo-zoom=move || splash.get().logo_zoom
                class:logo-fade=move || splash.get().logo_fade
            >
                {(1_usize..=4)
                    .map(|n| {
                        view! {
                            <div
                                class=format!("logo-part logo-part--{n}")
                                class:fly-in=move || splash.get().parts_in[n - 1]
                            ></div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div
                class="login-panel"
                class:show=move || splash.get().login_visible
                aria-hidden=login_aria_hidden
            >
                <h1 class="login-title">"Text BI"</h1>
                <input
                    class="login-input"
                    type="text"
                    placeholder="사번"
                    prop:value=move || identifier.get()
                    on:input=move |ev| identifier.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="비밀번호"
                    prop:value=move || secret.get()
                    on:input=move |ev| secret.set(event_target_value(&ev))
                    on:keydown=on_secret_keydown
                />
                <button class="login-button" on:click=move |_| do_login()>
                    "로그인"
                </button>
                <Show when=move || !session.get().message.is_empty()>
                    <p class="login-message">{move || session.get().message}</p>
                </Show>
            </div>
        </div>
    }
}
