use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_question_is_sample_query() {
    let state = QueryState::default();
    assert_eq!(state.question, "작년과 올해 수주금액 비교해줘");
}

#[test]
fn default_answer_empty_and_not_loading() {
    let state = QueryState::default();
    assert!(state.answer.is_empty());
    assert!(!state.loading);
}

// =============================================================
// Submission laws
// =============================================================

#[test]
fn begin_submit_sets_loading_and_clears_answer() {
    let mut state = QueryState::default();
    state.answer = "stale".to_owned();
    assert!(state.begin_submit());
    assert!(state.loading);
    assert!(state.answer.is_empty());
}

#[test]
fn begin_submit_refuses_while_in_flight() {
    let mut state = QueryState::default();
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
    assert!(!state.begin_submit());
}

#[test]
fn success_path_sets_answer_and_ends_loading() {
    let mut state = QueryState::default();
    assert!(state.begin_submit());
    state.finish_success("매출이 23% 증가했습니다".to_owned());
    assert_eq!(state.answer, "매출이 23% 증가했습니다");
    assert!(!state.loading);
}

#[test]
fn failure_path_sets_fallback_and_ends_loading() {
    let mut state = QueryState::default();
    assert!(state.begin_submit());
    state.finish_failure();
    assert_eq!(state.answer, FALLBACK_ANSWER);
    assert!(!state.loading);
}

#[test]
fn submit_is_allowed_again_after_completion() {
    let mut state = QueryState::default();
    assert!(state.begin_submit());
    state.finish_failure();
    assert!(state.begin_submit());
    state.finish_success("ok".to_owned());
    assert!(state.begin_submit());
}

// =============================================================
// Templates
// =============================================================

#[test]
fn template_selection_copies_literal_text() {
    for tpl in TEMPLATES {
        let mut state = QueryState::default();
        state.select_template(tpl.question);
        assert_eq!(state.question, tpl.question);
    }
}

#[test]
fn templates_have_distinct_labels_and_questions() {
    for (i, a) in TEMPLATES.iter().enumerate() {
        for b in TEMPLATES.iter().skip(i + 1) {
            assert_ne!(a.label, b.label);
            assert_ne!(a.question, b.question);
        }
    }
}

#[test]
fn empty_question_submission_is_not_rejected() {
    let mut state = QueryState::default();
    state.question.clear();
    assert!(state.begin_submit());
}
