use crate::modules::recurring_task::model::RecurringTask;
use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

const COLLECTION_NAME: &str = "recurringtasks";

pub struct RecurringTaskCrud {
    collection: Collection<RecurringTask>,
}

impl RecurringTaskCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, task: RecurringTask) -> Result<ObjectId, mongodb::error::Error> {
        let result = self.collection.insert_one(task).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    pub async fn find_by_community_dept(
        &self,
        dept_id: &ObjectId,
    ) -> Result<Vec<RecurringTask>, mongodb::error::Error> {
        use futures::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! { "communityDept": dept_id })
            .await?;

        cursor.try_collect().await
    }

    pub async fn count(&self) -> Result<u64, mongodb::error::Error> {
        self.collection.count_documents(doc! {}).await
    }
}
