/// User id whose profile the demo viewer sees at `/profile`
pub const DEMO_PROFILE_USER_ID: &str = "user_1";

/// Author id stamped on comments written by the demo viewer
pub const DEMO_COMMENT_AUTHOR_ID: &str = "current_user";

/// Identifies who is looking at the feed.
///
/// Like and save flags are stored on the post itself, so every viewer shares
/// them. Anything that would become per-viewer state takes a
/// `ViewerContext` so a real identity can be threaded through later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerContext {
    pub viewer_type: ViewerType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerType {
    /// The single unauthenticated demo viewer
    Demo,
}

impl ViewerContext {
    pub fn demo() -> Self {
        Self {
            viewer_type: ViewerType::Demo,
        }
    }

    /// Id of the user record backing this viewer's profile
    pub fn profile_user_id(&self) -> &str {
        match self.viewer_type {
            ViewerType::Demo => DEMO_PROFILE_USER_ID,
        }
    }

    /// Id recorded as the author of comments this viewer writes
    pub fn author_id(&self) -> &str {
        match self.viewer_type {
            ViewerType::Demo => DEMO_COMMENT_AUTHOR_ID,
        }
    }
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::demo()
    }
}
