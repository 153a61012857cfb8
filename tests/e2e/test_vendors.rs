use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_vendor_capabilities(ctx: &TestContext) {
    let response = ctx.client.get("/api/vendors").await.unwrap();

    response.assert_status(StatusCode::OK);

    let vendors = response.body.as_ref().and_then(|b| b.as_array()).unwrap();
    assert_eq!(vendors.len(), 5);
    for vendor in vendors {
        assert!(vendor.get("vendor").is_some());
        assert!(vendor.get("supportsMarkup").is_some());
        assert!(vendor.get("supportsPhonemeOverride").is_some());
        assert!(vendor.get("supportedContainers").is_some());
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_single_vendor_capability(ctx: &TestContext) {
    let response = ctx.client.get("/api/vendors/ElevenLabs").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("vendor").and_then(|v| v.as_str()), Some("elevenlabs"));
    assert_eq!(body.get("supportsMarkup").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(body.get("supportedContainers"), Some(&json!(["mp3"])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_vendor(ctx: &TestContext) {
    let response = ctx.client.get("/api/vendors/festival").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("unknown vendor");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_no_warnings_for_capable_vendor(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/warnings",
            &json!({ "vendor": "azure", "terms": helpers::glossary_json() }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.warnings().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_warn_about_ignored_phonemes(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/warnings",
            &json!({ "vendor": "openai", "terms": helpers::glossary_json() }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let warnings = response.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("limited markup support"));
    assert!(warnings[1].contains("phoneme overrides"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_only_warn_about_markup_without_transcriptions(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/markup/warnings",
            &json!({
                "vendor": "elevenlabs",
                "terms": [{ "text": "Komitas", "category": "person" }]
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.warnings().len(), 1);
}
