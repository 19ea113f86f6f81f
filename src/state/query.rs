//! Query panel state: question, answer, and the in-flight flag.
//!
//! DESIGN
//! ======
//! Submission bookkeeping lives here as plain methods so the two laws the
//! panel relies on — at most one in-flight call, `loading` cleared on every
//! completion — hold by construction and are testable off the browser.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Sample question preset into the input on first render.
pub const DEFAULT_QUESTION: &str = "작년과 올해 수주금액 비교해줘";

/// Fixed fallback shown when the analytics call fails for any reason.
pub const FALLBACK_ANSWER: &str =
    "분석 중 오류가 발생했습니다. (백엔드 서버가 꺼져 있거나 CORS/네트워크 문제일 수 있습니다.)";

/// A preset question offered by the template picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisTemplate {
    pub label: &'static str,
    pub question: &'static str,
}

/// The fixed preset set. Selecting one overwrites the question wholesale
/// and never triggers a submission.
pub const TEMPLATES: [AnalysisTemplate; 3] = [
    AnalysisTemplate {
        label: "연도별 수주금액 비교",
        question: "연도별 수주금액 추세와 증가율을 요약해줘.",
    },
    AnalysisTemplate {
        label: "공급사별 TOP 10 발주금액",
        question: "최근 1년 동안 공급사별 TOP 10 발주금액을 요약해줘.",
    },
    AnalysisTemplate {
        label: "품목별 월별 수주 추세",
        question: "품목별 월별 수주 추세를 한 줄로 요약해줘.",
    },
];

/// State for the natural-language query panel.
#[derive(Clone, Debug)]
pub struct QueryState {
    pub question: String,
    pub answer: String,
    pub loading: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            question: DEFAULT_QUESTION.to_owned(),
            answer: String::new(),
            loading: false,
        }
    }
}

impl QueryState {
    /// Start a submission. Returns `false` (and changes nothing) while a
    /// previous call is still in flight, so rapid double-clicks issue
    /// exactly one request. The question itself is not validated: empty
    /// submissions are forwarded as-is.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.answer.clear();
        true
    }

    /// Record a successful response.
    pub fn finish_success(&mut self, answer: String) {
        self.answer = answer;
        self.loading = false;
    }

    /// Record a failed request. Every failure class collapses into the one
    /// fixed fallback message.
    pub fn finish_failure(&mut self) {
        self.answer = FALLBACK_ANSWER.to_owned();
        self.loading = false;
    }

    /// Overwrite the question with a template's literal text.
    pub fn select_template(&mut self, text: &str) {
        self.question = text.to_owned();
    }
}
