use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Engineer;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait EngineerRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Engineer>>;

    /// All engineers ordered by name.
    async fn find_many(&self) -> AppResult<Vec<Engineer>>;

    async fn create(&self, engineer: &Engineer) -> AppResult<Engineer>;

    async fn update(&self, engineer: &Engineer) -> AppResult<Engineer>;

    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
