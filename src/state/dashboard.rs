//! Mock dashboard shell state: tab selection, quick templates, the chat
//! list, and the fixed regions the mock query action overwrites.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::state::metrics::{MOCK_INSIGHT, MOCK_KPI_VALUES, MOCK_SQL_PREVIEW};
use crate::util::chart::ChartSlot;
use crate::util::escape::escape_html;

/// Named dashboard pages; exactly one is active at a time by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Dashboard,
    History,
    Report,
    Data,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Dashboard,
        DashboardTab::History,
        DashboardTab::Report,
        DashboardTab::Data,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Dashboard => "📊 대시보드",
            DashboardTab::History => "🕒 분석 히스토리",
            DashboardTab::Report => "📑 리포트 요약",
            DashboardTab::Data => "🗂 데이터",
        }
    }
}

/// One rendered chat bubble. `html` is escaped at construction, so the view
/// can inject it as markup without re-checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub html: String,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            html: escape_html(text),
        }
    }
}

/// Quick presets shown on the dashboard (label, question).
pub const QUICK_TEMPLATES: &[(&str, &str)] = &[
    ("연도별 수주금액 비교", "연도별 수주금액 추세와 증가율을 요약해줘."),
    ("공급사별 TOP 10 발주금액", "최근 1년 동안 공급사별 TOP 10 발주금액을 요약해줘."),
    ("품목별 월별 수주 추세", "품목별 월별 수주 추세를 한 줄로 요약해줘."),
];

/// Everything the dashboard shell mutates after unlock.
#[derive(Clone, Debug)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub query_input: String,
    pub messages: Vec<ChatMessage>,
    pub insight: String,
    pub sql_preview: String,
    pub kpi_values: [String; 3],
    pub chart: ChartSlot,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            active_tab: DashboardTab::default(),
            query_input: String::new(),
            messages: Vec::new(),
            insight: String::new(),
            sql_preview: String::new(),
            kpi_values: ["-".to_owned(), "-".to_owned(), "-".to_owned()],
            chart: ChartSlot::default(),
        }
    }
}

impl DashboardState {
    /// Activate one page, deactivating whichever was current.
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    /// Quick-preset copy: pure overwrite of the query input, no submission.
    pub fn copy_template(&mut self, text: &str) {
        self.query_input = text.to_owned();
    }

    /// Run the mock query action. Blank (trimmed) input is a no-op and
    /// returns `false`. Otherwise: append an escaped user bubble, overwrite
    /// the insight / SQL / KPI regions with the fixed placeholders, and
    /// bump the chart slot (disposing the previous instance).
    pub fn run_mock_query(&mut self) -> bool {
        let text = self.query_input.trim().to_owned();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(&text));
        self.insight = MOCK_INSIGHT.to_owned();
        self.sql_preview = MOCK_SQL_PREVIEW.to_owned();
        self.kpi_values = MOCK_KPI_VALUES.map(str::to_owned);
        self.chart.replace();
        true
    }
}
