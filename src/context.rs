//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        bookings::{BookingsService, PgBookingsService},
        listings::{ListingsService, PgListingsService},
        users::{PgUsersService, UsersService},
    },
};

/// Failure to bring the application context up.
#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// The domain services an embedding HTTP layer calls into.
#[derive(Clone)]
pub struct AppContext {
    pub bookings: Arc<dyn BookingsService>,
    pub listings: Arc<dyn ListingsService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            bookings: Arc::new(PgBookingsService::new(db.clone())),
            listings: Arc::new(PgListingsService::new(db.clone())),
            users: Arc::new(PgUsersService::new(db)),
        })
    }
}
