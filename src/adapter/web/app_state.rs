use std::sync::Arc;

use crate::adapter::config::AppConfig;
use crate::core::port::create_user::CreateUserInputBoundary;

pub struct AppState {
    pub config: Arc<AppConfig>,
    pub user_create_use_case: Arc<dyn CreateUserInputBoundary>,
}
