use super::*;

#[test]
fn endpoint_targets_local_test_llm() {
    assert_eq!(ASK_ENDPOINT, "http://localhost:8000/test-llm");
}

#[test]
fn error_display_carries_the_failure_class() {
    assert_eq!(
        RequestError::Transport("refused".to_owned()).to_string(),
        "transport failure: refused"
    );
    assert_eq!(RequestError::Status(502).to_string(), "server returned status 502");
    assert_eq!(
        RequestError::Decode("missing field".to_owned()).to_string(),
        "malformed response body: missing field"
    );
}
