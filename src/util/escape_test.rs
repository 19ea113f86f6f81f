use super::*;

#[test]
fn script_tag_renders_literally() {
    assert_eq!(escape_html("<script>x</script>"), "&lt;script&gt;x&lt;/script&gt;");
}

#[test]
fn all_five_significant_characters_escape() {
    assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
}

#[test]
fn ampersand_escapes_before_other_entities() {
    // An already-escaped sequence gets its ampersand escaped exactly once.
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(escape_html("작년과 올해 수주금액 비교해줘"), "작년과 올해 수주금액 비교해줘");
    assert_eq!(escape_html(""), "");
}

#[test]
fn escaped_output_contains_no_raw_markup() {
    let out = escape_html(r#"<img src=x onerror="alert('x')">"#);
    assert!(!out.contains('<'));
    assert!(!out.contains('>'));
    assert!(!out.contains('"'));
}
