pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}
