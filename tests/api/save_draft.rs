use crate::helpers::{spawn_app, SaveResult, Toast, ACCESS_TOKEN};
use blog_editor_nav::components::SaveDraftOutcome;
use blog_editor_nav::context::ToastId;
use blog_editor_nav::domain::{BlogDraft, EditorDocument};
use blog_editor_nav::error::{BizErrorEnum, DraftAction};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

const SAVING: &str = "Saving Draft...";
const SAVED: &str = "Draft saved Successfully, you can always continue later. 🥳👍";

#[tokio::test]
async fn save_draft_posts_the_draft_and_returns_home() {
    // Arrange
    let app = spawn_app().await;
    let blog = app.blog();
    let expected_body = json!({
        "title": blog.title,
        "banner": blog.banner,
        "description": blog.description,
        "content": crate::helpers::authored_document(),
        "tags": blog.tags,
        "draft": true
    });
    Mock::given(path("/blog/create-blog"))
        .and(method("POST"))
        .and(header("Authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "draft-1"})))
        .expect(1)
        .mount(&app.backend)
        .await;

    // Act
    let outcome = app.navbar.save_draft().await;

    // Assert
    assert_eq!(
        outcome.unwrap(),
        SaveDraftOutcome::Saved(json!({"id": "draft-1"}))
    );
    assert_eq!(app.navigator.visited(), vec!["/".to_string()]);
    assert!(!app.navbar.is_draft_disabled());
    assert_eq!(
        app.notifier.toasts(),
        vec![
            Toast::Loading(SAVING.into()),
            Toast::Dismiss(ToastId(0)),
            Toast::Success(SAVED.into()),
        ]
    );
}

#[tokio::test]
async fn save_draft_without_title_sends_nothing() {
    let app = spawn_app().await;
    app.set_blog(BlogDraft {
        title: "".into(),
        ..app.blog()
    });
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let outcome = app.navbar.save_draft().await;

    assert!(matches!(
        outcome,
        Err(BizErrorEnum::MissingTitle(DraftAction::SaveDraft))
    ));
    assert_eq!(app.save_calls(), 0);
    assert!(!app.navbar.is_draft_disabled());
    assert_eq!(
        app.notifier.toasts(),
        vec![Toast::Error(
            "Please write the blog title to save as a draft!".into()
        )]
    );
}

#[tokio::test]
async fn save_draft_reports_an_editor_that_is_not_ready() {
    let app = spawn_app().await;
    app.set_editor_ready(false);
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let outcome = app.navbar.save_draft().await;

    assert!(matches!(outcome, Err(BizErrorEnum::EditorNotReady)));
    assert!(!app.navbar.is_draft_disabled());
    assert!(app.navigator.visited().is_empty());
    assert_eq!(
        app.notifier.toasts(),
        vec![
            Toast::Loading(SAVING.into()),
            Toast::Dismiss(ToastId(0)),
            Toast::Error("Text editor is not ready yet. Please try again.".into()),
        ]
    );
}

#[tokio::test]
async fn an_empty_draft_can_still_be_saved() {
    let app = spawn_app().await;
    app.set_save_result(SaveResult::Document(EditorDocument::default()));
    Mock::given(path("/blog/create-blog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.backend)
        .await;

    let outcome = app.navbar.save_draft().await;

    assert!(outcome.is_ok());
    assert_eq!(app.navigator.visited(), vec!["/".to_string()]);
}

#[tokio::test]
async fn concurrent_saves_send_a_single_request() {
    let app = spawn_app().await;
    Mock::given(path("/blog/create-blog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "draft-1"})))
        .expect(1)
        .mount(&app.backend)
        .await;

    let (first, second) = tokio::join!(app.navbar.save_draft(), app.navbar.save_draft());

    assert!(matches!(first, Ok(SaveDraftOutcome::Saved(_))));
    assert_eq!(second.unwrap(), SaveDraftOutcome::AlreadyInFlight);
    assert_eq!(app.save_calls(), 1);
    assert_eq!(app.navigator.visited().len(), 1);
}

#[tokio::test]
async fn a_failed_request_keeps_the_user_on_the_editor() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&app.backend)
        .await;

    let outcome = app.navbar.save_draft().await;

    let cause = match outcome {
        Err(BizErrorEnum::NetworkFailed(cause)) => cause.to_string(),
        other => panic!("expected a network failure, got {:?}", other),
    };
    assert!(!app.navbar.is_draft_disabled());
    assert!(app.navigator.visited().is_empty());
    assert_eq!(
        app.notifier.errors(),
        vec![format!("Failed to save the draft: {}", cause)]
    );
}

#[tokio::test]
async fn a_failed_editor_save_sends_nothing() {
    let app = spawn_app().await;
    app.set_save_result(SaveResult::Fails);
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let outcome = app.navbar.save_draft().await;

    assert!(matches!(outcome, Err(BizErrorEnum::SaveFailed(_))));
    assert!(app.navigator.visited().is_empty());
    assert_eq!(
        app.notifier.errors(),
        vec!["Failed to save the editor content.".to_string()]
    );
}

#[tokio::test]
async fn the_draft_button_can_be_used_again_after_a_failure() {
    let app = spawn_app().await;
    app.set_editor_ready(false);
    let _ = app.navbar.save_draft().await;

    app.set_editor_ready(true);
    Mock::given(path("/blog/create-blog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.backend)
        .await;
    let outcome = app.navbar.save_draft().await;

    assert!(matches!(outcome, Ok(SaveDraftOutcome::Saved(_))));
}

#[tokio::test]
async fn the_draft_button_is_rendered_disabled_while_saving() {
    let app = spawn_app().await;
    Mock::given(path("/blog/create-blog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&app.backend)
        .await;

    let (outcome, html) = tokio::join!(app.navbar.save_draft(), async { app.navbar.render() });

    assert!(outcome.is_ok());
    assert!(html.contains(r#"<button class="draft disable">Save Draft</button>"#));
    assert!(app.navbar.render().contains(r#"<button class="draft">"#));
}
