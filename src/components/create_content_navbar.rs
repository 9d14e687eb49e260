use crate::blog_client::BlogClient;
use crate::components::ActionButton;
use crate::constant::{
    DISABLED_CLASS, DRAFT_SAVED_MSG, HOME_ROUTE, NEW_BLOG_HEADING, SAVING_DRAFT_MSG,
};
use crate::context::{EditorContext, EditorState, Navigator, Notifier};
use crate::domain::BlogDraft;
use crate::error::{BizErrorEnum, DraftAction};
use crate::request::CreateBlogData;
use crate::session_state::UserSession;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Content saved into the draft and the editor switched to the publish page.
    Ready,
    /// The editor was not ready; nothing happened and nothing is reported.
    EditorNotReady,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveDraftOutcome {
    /// Backend response of `/blog/create-blog`.
    Saved(serde_json::Value),
    /// A previous save of this draft is still running.
    AlreadyInFlight,
}

/// Navbar of the blog editor: drives the "Publish" and "Save Draft" buttons.
pub struct CreateContentNavbar {
    editor: Arc<dyn EditorContext>,
    session: UserSession,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    blog_client: Arc<BlogClient>,
    draft_button: ActionButton,
}

impl CreateContentNavbar {
    pub fn new(
        editor: Arc<dyn EditorContext>,
        session: UserSession,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        blog_client: Arc<BlogClient>,
    ) -> Self {
        Self {
            editor,
            session,
            notifier,
            navigator,
            blog_client,
            draft_button: ActionButton::default(),
        }
    }

    pub fn is_draft_disabled(&self) -> bool {
        self.draft_button.is_disabled()
    }

    /// Draft title, or a placeholder while it is empty.
    pub fn heading(&self) -> String {
        let blog = self.editor.blog();
        if blog.has_title() {
            blog.title
        } else {
            NEW_BLOG_HEADING.to_string()
        }
    }

    /// Validates the draft and moves the editor to the publish page.
    ///
    /// Nothing is sent to the backend here.
    #[tracing::instrument(name = "Request blog publish", skip(self))]
    pub async fn request_publish(&self) -> Result<PublishOutcome, BizErrorEnum> {
        let blog = self.editor.blog();
        let outcome = self.prepare_publish(blog).await;
        if let Err(e) = &outcome {
            self.report(e);
        }
        outcome
    }

    async fn prepare_publish(&self, blog: BlogDraft) -> Result<PublishOutcome, BizErrorEnum> {
        if !blog.has_banner() {
            return Err(BizErrorEnum::MissingBanner);
        }
        if !blog.has_title() {
            return Err(BizErrorEnum::MissingTitle(DraftAction::Publish));
        }

        let text_editor = self.editor.text_editor();
        if !text_editor.is_ready() {
            tracing::debug!("Text editor is not ready, ignoring publish request");
            return Ok(PublishOutcome::EditorNotReady);
        }

        let document = text_editor.save().await.map_err(BizErrorEnum::SaveFailed)?;
        if document.is_empty() {
            return Err(BizErrorEnum::EmptyContent);
        }
        self.editor.set_blog(blog.with_content(document));
        let state = EditorState::Publish;
        tracing::info!("Switching editor to {}", state.as_str());
        self.editor.set_editor_state(state);
        Ok(PublishOutcome::Ready)
    }

    /// Saves the draft to the backend and returns to the home page.
    ///
    /// Calls made while a previous save is in flight are ignored.
    #[tracing::instrument(name = "Save blog draft", skip(self))]
    pub async fn save_draft(&self) -> Result<SaveDraftOutcome, BizErrorEnum> {
        if self.draft_button.is_disabled() {
            return Ok(SaveDraftOutcome::AlreadyInFlight);
        }

        let blog = self.editor.blog();
        if !blog.has_title() {
            let e = BizErrorEnum::MissingTitle(DraftAction::SaveDraft);
            self.report(&e);
            return Err(e);
        }

        let Some(guard) = self.draft_button.try_disable() else {
            return Ok(SaveDraftOutcome::AlreadyInFlight);
        };
        let loading = self.notifier.loading(SAVING_DRAFT_MSG);

        let outcome = self.persist_draft(&blog).await;

        // the button is enabled again before any outcome is shown
        drop(guard);
        self.notifier.dismiss(loading);
        match outcome {
            Ok(data) => {
                self.notifier.success(DRAFT_SAVED_MSG);
                self.navigator.navigate_to(HOME_ROUTE);
                Ok(SaveDraftOutcome::Saved(data))
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    async fn persist_draft(&self, blog: &BlogDraft) -> Result<serde_json::Value, BizErrorEnum> {
        let text_editor = self.editor.text_editor();
        if !text_editor.is_ready() {
            return Err(BizErrorEnum::EditorNotReady);
        }
        // Empty content is a valid draft
        let content = text_editor.save().await.map_err(BizErrorEnum::SaveFailed)?;
        self.blog_client
            .create_blog(&self.session, &CreateBlogData::draft(blog, &content))
            .await
    }

    fn report(&self, e: &BizErrorEnum) {
        if e.is_validation() {
            tracing::warn!("Blog draft rejected: {}", e);
        } else {
            tracing::error!("{:?}", e);
        }
        self.notifier.error(&e.to_string());
    }

    pub fn render(&self) -> String {
        let draft_class = if self.is_draft_disabled() {
            format!("draft {}", DISABLED_CLASS)
        } else {
            "draft".to_string()
        };
        format!(
            r#"<nav class="create-content-nav"><div><a href="{}"><i class="fa-solid fa-backward"></i></a><h4>{}</h4></div><div><button class="publish">Publish</button><button class="{}">Save Draft</button></div></nav>"#,
            HOME_ROUTE,
            htmlescape::encode_minimal(&self.heading()),
            draft_class,
        )
    }
}
