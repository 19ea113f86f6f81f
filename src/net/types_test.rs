use super::*;

#[test]
fn request_serializes_with_question_field() {
    let body = AskRequest { question: "작년과 올해 수주금액 비교해줘".to_owned() };
    let json = serde_json::to_string(&body).expect("serializes");
    assert_eq!(json, r#"{"question":"작년과 올해 수주금액 비교해줘"}"#);
}

#[test]
fn response_deserializes_from_answer_field() {
    let parsed: AskResponse =
        serde_json::from_str(r#"{"answer":"매출이 23% 증가했습니다"}"#).expect("parses");
    assert_eq!(parsed.answer, "매출이 23% 증가했습니다");
}

#[test]
fn response_rejects_missing_answer() {
    let parsed = serde_json::from_str::<AskResponse>(r"{}");
    assert!(parsed.is_err());
}
