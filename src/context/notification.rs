/// Handle of a notification that stays on screen until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// Toast sink of the host application.
pub trait Notifier: Send + Sync {
    fn loading(&self, msg: &str) -> ToastId;

    fn success(&self, msg: &str);

    fn error(&self, msg: &str);

    fn dismiss(&self, id: ToastId);
}
