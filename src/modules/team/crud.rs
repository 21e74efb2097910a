use crate::modules::team::model::Team;
use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

const COLLECTION_NAME: &str = "teams";

pub struct TeamCrud {
    collection: Collection<Team>,
}

impl TeamCrud {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NAME),
        }
    }

    pub async fn create(&self, team: Team) -> Result<ObjectId, mongodb::error::Error> {
        let result = self.collection.insert_one(team).await?;
        Ok(result.inserted_id.as_object_id().unwrap())
    }

    pub async fn find_by_community_dept(
        &self,
        dept_id: &ObjectId,
    ) -> Result<Vec<Team>, mongodb::error::Error> {
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
