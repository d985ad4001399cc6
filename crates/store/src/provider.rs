use async_trait::async_trait;

use ledgerview_core::RecordSet;

use crate::error::StoreError;

/// Read-only access to the current record set.
///
/// Each call returns an independent snapshot; requests never share mutable
/// state through this trait.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    async fn snapshot(&self) -> Result<RecordSet, StoreError>;
}
