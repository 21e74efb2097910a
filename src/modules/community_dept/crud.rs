use crate::modules::community_dept::model::CommunityDept;
use bson::{doc, oid::ObjectId};
use mongodb::error::{CommandError, ErrorKind};
use mongodb::{Collection, Database, IndexModel};
use thiserror::Error;
use tracing::info;

const COLLECTION_NAME: &str = "communitydepts";

/// Server error code returned by dropIndexes for an unknown index name.
const INDEX_NOT_FOUND: i32 = 27;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("index `{0}` not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub struct CommunityDeptCrud {
    collection: Collection<CommunityDept>,
}

impl CommunityDeptCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, dept: CommunityDept) -> Result<ObjectId, mongodb::error::Error> {
        let result = self.collection.insert_one(dept).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    pub async fn find_by_id(
        &self,
        id: &ObjectId,
    ) -> Result<Option<CommunityDept>, mongodb::error::Error> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn create_index(
        &self,
        index: IndexModel,
    ) -> Result<String, mongodb::error::Error> {
        let result = self.collection.create_index(index).await?;
        Ok(result.index_name)
    }

    /// Drops the named index, surfacing an unknown name as
    /// [`IndexError::NotFound`] so callers can decide whether that matters.
    pub async fn drop_index(&self, name: &str) -> Result<(), IndexError> {
        match self.collection.drop_index(name).await {
            Ok(()) => {
                info!(index = name, "dropped index");
                Ok(())
            }
            Err(err) if is_index_not_found(&err) => Err(IndexError::NotFound(name.to_string())),
            Err(err) => Err(IndexError::Database(err)),
        }
    }

    pub async fn list_indexes(&self) -> Result<Vec<IndexModel>, mongodb::error::Error> {
        use futures::TryStreamExt;

        let cursor = self.collection.list_indexes().await?;
        cursor.try_collect().await
    }
}

fn is_index_not_found(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Command(CommandError {
            code: INDEX_NOT_FOUND,
            ..
        })
    )
}
