//! Chat bubble list that keeps itself scrolled to the newest message.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Message list for the dashboard query flow. Bubbles carry pre-escaped
/// markup from `ChatMessage`, so injection here is safe by construction.
#[component]
pub fn ChatList() -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Follow the conversation end whenever a message arrives.
    Effect::new(move || {
        let _ = dash.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = list_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-list" node_ref=list_ref>
            {move || {
                let messages = dash.get().messages;
                if messages.is_empty() {
                    return view! {
                        <div class="chat-list__empty">"질문을 실행하면 대화가 여기에 쌓입니다."</div>
                    }
                        .into_any();
                }

                messages
                    .into_iter()
                    .map(|msg| {
                        view! {
                            <div class="chat-message chat-message--user">
                                <div>
                                    <div class="chat-bubble chat-bubble--user" inner_html=msg.html></div>
                                    <div class="chat-meta">"사용자"</div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
