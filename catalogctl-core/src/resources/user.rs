//! Catalog users

use serde::{Deserialize, Serialize};

use crate::kind::ResourceKind;
use crate::resource::{CatalogResource, Resource};

/// A person in the catalog, stored under `users/<id>.md`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_direct_message_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_teams_direct_message_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default)]
    pub markdown: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            markdown: markdown.into(),
            ..Default::default()
        }
    }
}

impl Resource for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogResource for User {
    fn kind() -> ResourceKind {
        ResourceKind::users()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::into_document;
    use serde_yaml::Value;

    #[test]
    fn test_unset_fields_are_not_written() {
        let user = User::new("u1", "Alice", "bio");

        let (metadata, body) = into_document(&user).unwrap();
        let keys: Vec<_> = metadata.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(body, "bio");
    }

    #[test]
    fn test_camel_case_keys() {
        let user = User {
            avatar_url: Some("https://example.com/a.png".to_string()),
            slack_direct_message_url: Some("https://slack.example.com/u1".to_string()),
            hidden: Some(true),
            ..User::new("u1", "Alice", "bio")
        };

        let (metadata, _) = into_document(&user).unwrap();
        assert!(metadata.contains_key("avatarUrl"));
        assert!(metadata.contains_key("slackDirectMessageUrl"));
        assert_eq!(metadata.get("hidden"), Some(&Value::Bool(true)));
    }
}
