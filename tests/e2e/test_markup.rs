use crate::e2e::helpers;

use helpers::{glossary_json, settings_json, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_markup_for_capable_vendor(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "Welcome to Tsitsernakaberd.",
                "terms": glossary_json(),
                "settings": settings_json("polly"),
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let document = response.str_field("markupDocument");
    assert!(document.contains(r#"xml:lang="en""#));
    assert!(document.contains(r#"rate="95%""#));
    assert!(document.contains(
        r#"<phoneme alphabet="ipa" ph="t͡sit͡sɛrnɑkɑˈbɛrt">Tsitsernakaberd</phoneme>"#
    ));
    assert!(response.warnings().is_empty());
    assert_eq!(response.str_field("language"), "en");
    assert_eq!(response.str_field("container"), "mp3");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_give_longest_term_precedence(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "Western Armenia was affected",
                "terms": glossary_json(),
                "settings": settings_json("google"),
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let document = response.str_field("markupDocument");
    assert_eq!(document.matches("<phoneme").count(), 1);
    assert!(document.contains(r#"ph="ˈwɛstərn ɑrˈmeniə">Western Armenia</phoneme>"#));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_degrade_for_plain_text_vendor(ctx: &TestContext) {
    let mut settings = settings_json("elevenlabs");
    settings["pauseIntensity"] = json!(1.0);
    settings["outputContainer"] = json!("wav");

    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "Welcome to Tsitsernakaberd. Stone, bronze, and memory.",
                "terms": glossary_json(),
                "settings": settings,
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let document = response.str_field("markupDocument");
    assert!(!document.contains("<phoneme"));
    assert!(!document.contains("<emphasis"));
    assert!(!document.contains("<break"));
    assert!(document.contains(r#"<prosody rate="95%">"#));

    let warnings = response.warnings();
    assert_eq!(warnings.len(), 3);
    assert!(warnings[1].contains("phoneme overrides"));
    assert_eq!(response.str_field("container"), "mp3");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_detect_language_when_missing(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "Добро пожаловать в мемориальный комплекс. Вечный огонь горит в центре.",
                "terms": [],
                "settings": settings_json("azure")
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.str_field("language"), "ru");
    assert!(response
        .str_field("markupDocument")
        .contains(r#"xml:lang="ru""#));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_truncate_preview_content(ctx: &TestContext) {
    let head = "a".repeat(500);
    let content = format!("{}ZZZ should never be narrated", head);

    let response = ctx
        .client
        .post(
            "/api/markup/preview",
            &json!({
                "content": content,
                "terms": [],
                "settings": settings_json("openai"),
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let document = response.str_field("markupDocument");
    assert!(document.contains(&format!("{}...</prosody>", head)));
    assert!(!document.contains("ZZZ"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_empty_content(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "",
                "settings": settings_json("polly"),
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.str_field("markupDocument").ends_with("</speak>"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_enforce_content_length_limit(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "a".repeat(ctx.config.max_content_chars + 1),
                "settings": settings_json("polly"),
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("characters or less");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_enforce_glossary_size_limit(ctx: &TestContext) {
    let terms: Vec<_> = (0..=ctx.config.max_terms)
        .map(|i| json!({ "text": format!("Term{}", i), "category": "person" }))
        .collect();

    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "Hello",
                "terms": terms,
                "settings": settings_json("polly"),
                "language": "en"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("terms or less");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_vendor_in_settings(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/synthesize",
            &json!({
                "content": "Hello",
                "settings": settings_json("festival"),
                "language": "en"
            }),
        )
        .await
        .unwrap();

    assert!(response.status.is_client_error());
    response.assert_error_message("Malformed request body");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/api/markup/synthesize", "{ not json")
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}
