//! Port interface for host navigation

/// Transfers control to another screen of the host application.
///
/// A UI shell routes to the path; a CLI prints a prompt. Never invoked by the
/// HTTP transport itself.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
