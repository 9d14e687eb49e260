mod create_blog_data;

pub use create_blog_data::CreateBlogData;
