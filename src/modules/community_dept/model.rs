use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommunityDept {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(rename = "CreatedBy")]
    pub created_by: ObjectId,
    pub created_at: bson::DateTime,
}

impl CommunityDept {
    pub fn new(name: String, created_by: ObjectId) -> Self {
        Self {
            id: None,
            name,
            created_by,
            created_at: bson::DateTime::now(),
        }
    }
}
