use crate::constant::BLOG_ROUTE_PREFIX;
use crate::context::DayFormatter;
use crate::domain::TrendingEntry;
use htmlescape::encode_minimal;

/// One ranked entry of the trending feed.
pub struct TrendingBlogPost<'a> {
    blog: &'a TrendingEntry,
    index: usize,
}

impl<'a> TrendingBlogPost<'a> {
    /// `index` is the 0-based position in the feed.
    pub fn new(blog: &'a TrendingEntry, index: usize) -> Self {
        Self { blog, index }
    }

    /// "01" to "10" for the first ten entries, the bare index after that.
    pub fn rank_label(&self) -> String {
        if self.index < 10 {
            format!("{:02}", self.index + 1)
        } else {
            self.index.to_string()
        }
    }

    pub fn author_handle(&self) -> String {
        format!(
            "@{}-{}",
            self.blog.author.first_name, self.blog.author.last_name
        )
    }

    /// First four characters of `publishedAt`, no calendar parsing involved.
    pub fn published_year(&self) -> String {
        self.blog.published_at.chars().take(4).collect()
    }

    pub fn published_on(&self, formatter: &dyn DayFormatter) -> String {
        format!(
            "{}, {}",
            formatter.day_name(&self.blog.published_at),
            self.published_year()
        )
    }

    pub fn href(&self) -> String {
        format!(
            "{}{}",
            BLOG_ROUTE_PREFIX,
            urlencoding::encode(&self.blog.blog_id)
        )
    }

    pub fn render(&self, formatter: &dyn DayFormatter) -> String {
        format!(
            r#"<a href="{}" class="trending-link"><div class="trend-index"><h1 class="index">{}</h1><div><p class="author">{}<span>{}</span></p><div><h1 class="title">{}</h1></div></div></div></a>"#,
            encode_minimal(&self.href()),
            self.rank_label(),
            encode_minimal(&self.author_handle()),
            encode_minimal(&self.published_on(formatter)),
            encode_minimal(&self.blog.title),
        )
    }
}

/// Renders the feed in order, ranking entries by position.
pub fn render_trending_feed(entries: &[TrendingEntry], formatter: &dyn DayFormatter) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, blog)| TrendingBlogPost::new(blog, index).render(formatter))
        .collect()
}
