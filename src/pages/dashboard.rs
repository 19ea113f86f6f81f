//! Mock dashboard shell: header clock, tab navigation, quick templates,
//! and the mock query action feeding the chat list and chart.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything rendered here comes from fixed local data; the only moving
//! part is `DashboardState`, which the mock query action mutates in one
//! place so the fixed regions and chart stay consistent.

use leptos::prelude::*;

use crate::components::chart_host::ChartHost;
use crate::components::chat_list::ChatList;
use crate::state::dashboard::{DashboardState, DashboardTab, QUICK_TEMPLATES};
use crate::state::metrics::MOCK_KPI_LABELS;
use crate::util::backdrop;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let dash = expect_context::<RwSignal<DashboardState>>();
    let clock_text = RwSignal::new(String::new());

    // The splash backdrop must not survive into the dashboard.
    backdrop::apply(false);

    #[cfg(feature = "csr")]
    {
        use crate::util::clock;

        clock_text.set(clock::now_formatted());
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    clock::TICK_PERIOD_MS,
                )))
                .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                clock_text.set(clock::now_formatted());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_query = move |_| {
        dash.update(|d| {
            let _ = d.run_mock_query();
        });
    };

    let on_query_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            dash.update(|d| {
                let _ = d.run_mock_query();
            });
        }
    };

    view! {
        <div class="dashboard-root">
            <header class="dashboard-header">
                <div class="dashboard-header__title">"Text BI · 구매 대시보드"</div>
                <div class="dashboard-header__clock">{move || clock_text.get()}</div>
            </header>

            <div class="dashboard-body">
                <aside class="dashboard-sidebar">
                    <div class="sidebar-title">"메뉴"</div>
                    <nav class="nav-section">
                        {DashboardTab::ALL
                            .iter()
                            .map(|&tab| {
                                view! {
                                    <button
                                        class="nav-item"
                                        class:active=move || dash.get().active_tab == tab
                                        on:click=move |_| dash.update(|d| d.select_tab(tab))
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>

                    <div class="sidebar-title">"자주 쓰는 분석"</div>
                    <div class="quick-section">
                        {QUICK_TEMPLATES
                            .iter()
                            .map(|&(label, question)| {
                                view! {
                                    <button
                                        class="quick-query"
                                        on:click=move |_| dash.update(|d| d.copy_template(question))
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </aside>

                <main class="dashboard-main">
                    <Show
                        when=move || dash.get().active_tab == DashboardTab::Dashboard
                        fallback=|| {
                            view! {
                                <section class="section-card">
                                    <p class="placeholder">"준비 중입니다."</p>
                                </section>
                            }
                        }
                    >
                        <section class="section-card">
                            <div class="query-row">
                                <input
                                    class="query-input"
                                    type="text"
                                    placeholder="예: 작년과 올해 수주금액 비교해줘"
                                    prop:value=move || dash.get().query_input
                                    on:input=move |ev| {
                                        dash.update(|d| d.query_input = event_target_value(&ev));
                                    }
                                    on:keydown=on_query_keydown
                                />
                                <button class="button-primary" on:click=on_query>
                                    "질의 실행"
                                </button>
                            </div>
                            <ChatList/>
                        </section>

                        <section class="section-card">
                            <div class="section-title">"요약 인사이트 & KPI"</div>
                            <p class="insight-text">
                                {move || {
                                    let insight = dash.get().insight;
                                    if insight.is_empty() {
                                        "질의를 실행하면 분석 결과가 표시됩니다.".to_owned()
                                    } else {
                                        insight
                                    }
                                }}
                            </p>
                            <div class="kpi-grid">
                                {MOCK_KPI_LABELS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, &label)| {
                                        view! {
                                            <div class="kpi-card">
                                                <div class="kpi-label">{label}</div>
                                                <div class="kpi-value">
                                                    {move || dash.get().kpi_values[i].clone()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>

                        <section class="section-card">
                            <div class="section-title">"결과 상세"</div>
                            <ChartHost/>
                            <pre class="sql-box">{move || dash.get().sql_preview}</pre>
                        </section>
                    </Show>
                </main>
            </div>
        </div>
    }
}
