mod action_button;
mod create_content_navbar;
mod trending_blog_post;

pub use action_button::{ActionButton, InFlightGuard};
pub use create_content_navbar::{CreateContentNavbar, PublishOutcome, SaveDraftOutcome};
pub use trending_blog_post::{render_trending_feed, TrendingBlogPost};
