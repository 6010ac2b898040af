use std::sync::Arc;

use crate::handler::RfpHandler;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub handler: RfpHandler,
}
