use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::PgUserRepository;

/// Shared application state injected into all handlers.
///
/// The raw pool is kept alongside the service for the health check.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires the service stack on top of a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            db: pool,
        }
    }
}
