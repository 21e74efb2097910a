use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecurringTask {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(rename = "communityDept")]
    pub community_dept: ObjectId,
    pub frequency: String,
    pub active: bool,
    pub created_at: bson::DateTime,
}

impl RecurringTask {
    pub fn new(title: String, community_dept: ObjectId, frequency: String) -> Self {
        Self {
            id: None,
            title,
            community_dept,
            frequency,
            active: true,
            created_at: bson::DateTime::now(),
        }
    }
}
