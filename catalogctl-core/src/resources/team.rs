//! Catalog teams

use serde::{Deserialize, Serialize};

use crate::kind::ResourceKind;
use crate::resource::{CatalogResource, Resource};

/// A group of users, stored under `teams/<id>.md`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_direct_message_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_teams_direct_message_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Ids of member users
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    #[serde(default)]
    pub markdown: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            markdown: markdown.into(),
            ..Default::default()
        }
    }
}

impl Resource for Team {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogResource for Team {
    fn kind() -> ResourceKind {
        ResourceKind::teams()
    }
}
