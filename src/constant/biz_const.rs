/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// backend endpoints and client routes
pub const CREATE_BLOG_PATH: &str = "/blog/create-blog";
pub const HOME_ROUTE: &str = "/";
pub const BLOG_ROUTE_PREFIX: &str = "/blog/";

/// editor states owned by the surrounding editor page
pub const EDITOR_STATE_EDITOR: &str = "editor";
pub const EDITOR_STATE_PUBLISH: &str = "publish";

/// navbar
pub const NEW_BLOG_HEADING: &str = "New Blog 📝";
pub const DISABLED_CLASS: &str = "disable";

/// notifications
pub const SAVING_DRAFT_MSG: &str = "Saving Draft...";
pub const DRAFT_SAVED_MSG: &str = "Draft saved Successfully, you can always continue later. 🥳👍";
