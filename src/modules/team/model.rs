use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Team {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(rename = "communityDept")]
    pub community_dept: ObjectId,
    #[serde(default)]
    pub members: Vec<ObjectId>,
    pub created_at: bson::DateTime,
}

impl Team {
    pub fn new(name: String, community_dept: ObjectId) -> Self {
        Self {
            id: None,
            name,
            community_dept,
            members: Vec::new(),
            created_at: bson::DateTime::now(),
        }
    }
}
