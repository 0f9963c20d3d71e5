use crate::db::Database;
use snapfeed_types::ViewerContext;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Who requests are served for; always the demo viewer without auth
    pub viewer: ViewerContext,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            viewer: ViewerContext::demo(),
        }
    }
}
