use std::sync::Arc;

use crate::adapter::config::AppConfig;
use crate::adapter::web::app_state::AppState;
use crate::core::use_case::create_user::CreateUserUseCase;

pub struct AppInitializer;

impl AppInitializer {
    /// Wires every dependency the routes need. Nothing is registered globally.
    pub fn initialize(config: AppConfig) -> Arc<AppState> {
        let user_create_use_case = Arc::new(CreateUserUseCase::new());

        Arc::new(AppState {
            config: Arc::new(config),
            user_create_use_case,
        })
    }
}
