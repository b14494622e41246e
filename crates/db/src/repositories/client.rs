//! Client repository.
//!
//! Clients are managed by a separate module; this repository only reads them.

use std::sync::Arc;

use crate::entities::{Client, client};
use sea_orm::{DatabaseConnection, EntityTrait};
use work_projects_common::{AppError, AppResult};

/// Read-only client repository.
#[derive(Clone)]
pub struct ClientRepository {
    db: Arc<DatabaseConnection>,
}

impl ClientRepository {
    /// Create a new client repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a client by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<client::Model>> {
        Client::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a client by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<client::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client: {id}")))
    }
}
