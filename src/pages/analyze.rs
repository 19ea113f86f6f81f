//! Natural-language query panel with templates, KPI cards, and the mock
//! result detail.
//!
//! ERROR HANDLING
//! ==============
//! Every request failure collapses into one fixed fallback answer; the
//! detailed cause goes to the console log. `loading` is cleared on both
//! completion arms of the same task, so the button can never stay stuck.

#[cfg(test)]
#[path = "analyze_test.rs"]
mod analyze_test;

use leptos::prelude::*;

use crate::components::template_list::TemplateList;
use crate::state::metrics::{ANALYZE_KPIS, MOCK_TABLE_ROWS, SAMPLE_SQL};
use crate::state::query::QueryState;

/// Placeholder shown in the insight box before any answer arrives.
const INSIGHT_PLACEHOLDER: &str =
    "왼쪽 상단에서 질문을 입력하고 'AI 분석 실행'을 누르면, 여기에서 AI가 요약한 인사이트가 표시됩니다.";

fn analyze_button_label(loading: bool) -> &'static str {
    if loading { "AI 분석 중..." } else { "AI 분석 실행" }
}

fn insight_display(answer: &str) -> &str {
    if answer.is_empty() { INSIGHT_PLACEHOLDER } else { answer }
}

/// Kick off one submission unless a call is already in flight.
fn submit(query: RwSignal<QueryState>) {
    let mut started = false;
    query.update(|q| started = q.begin_submit());
    if !started {
        return;
    }

    #[cfg(feature = "csr")]
    {
        let question = query.get_untracked().question;
        leptos::task::spawn_local(async move {
            match crate::net::api::ask(&question).await {
                Ok(answer) => query.update(|q| q.finish_success(answer)),
                Err(err) => {
                    log::error!("analysis request failed: {err}");
                    query.update(|q| q.finish_failure());
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        // No browser transport; settle immediately with the fallback.
        query.update(QueryState::finish_failure);
    }
}

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let query = RwSignal::new(QueryState::default());

    let on_analyze = move |_| submit(query);
    let on_template = Callback::new(move |text: &'static str| {
        query.update(|q| q.select_template(text));
    });

    view! {
        <div class="app">
            <header class="header">
                <div class="header-title">"Text BI · AI 구매 분석 데모"</div>
                <div class="header-right">"PoC 환경" <span class="badge">"DEV"</span></div>
            </header>

            <div class="body">
                <aside class="sidebar">
                    <div class="sidebar-title">"자주 쓰는 분석"</div>
                    <TemplateList on_select=on_template/>
                </aside>

                <main class="main">
                    <section class="section-card">
                        <div class="section-title">
                            "오늘의 질문" <span class="tag">"질의 모드"</span>
                        </div>
                        <p class="section-hint">
                            "자연어로 질문하면 AI가 SQL을 만들고, 결과를 자동으로 시각화합니다."
                        </p>
                        <div class="query-row">
                            <input
                                class="query-input"
                                type="text"
                                placeholder="예: 작년과 올해 수주금액 비교해줘"
                                prop:value=move || query.get().question
                                on:input=move |ev| {
                                    query.update(|q| q.question = event_target_value(&ev));
                                }
                            />
                            <button
                                class="button-primary"
                                on:click=on_analyze
                                disabled=move || query.get().loading
                            >
                                {move || analyze_button_label(query.get().loading)}
                            </button>
                        </div>
                    </section>

                    <section class="section-card">
                        <div class="section-title">"요약 인사이트 & KPI"</div>
                        <div class="summary-layout">
                            <p class="insight-text">
                                {move || {
                                    let state = query.get();
                                    insight_display(&state.answer).to_owned()
                                }}
                            </p>
                            <div class="kpi-grid">
                                {ANALYZE_KPIS
                                    .iter()
                                    .map(|kpi| {
                                        view! {
                                            <div class="kpi-card">
                                                <div class="kpi-label">{kpi.label}</div>
                                                <div class="kpi-value">{kpi.value}</div>
                                                <div class="kpi-sub">{kpi.note}</div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    </section>

                    <section class="section-card">
                        <div class="section-title">"결과 상세"</div>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"연도"</th>
                                    <th>"수주금액"</th>
                                    <th>"증감률"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {MOCK_TABLE_ROWS
                                    .iter()
                                    .map(|&(year, amount, delta)| {
                                        view! {
                                            <tr>
                                                <td>{year}</td>
                                                <td>{amount}</td>
                                                <td>{delta}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                        <p class="section-hint">"생성된 SQL (참고용 / 지금은 고정 Mock)"</p>
                        <pre class="sql-box">{SAMPLE_SQL}</pre>
                    </section>
                </main>
            </div>
        </div>
    }
}
