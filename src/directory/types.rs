use serde::{Deserialize, Serialize};

/// Default directory host. Overridable through config for mirrors and tests.
pub const DEFAULT_BASE_URL: &str = "https://api.publicapis.org";

/// The two read-only resources the directory exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Entries,
    Categories,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Entries => "/entries",
            Resource::Categories => "/categories",
        }
    }

    /// Joins the resource path onto a base URL, tolerating a trailing slash.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// A single API listed in the directory.
///
/// Wire keys are capitalized (`API`, `HTTPS`, ...) and mapped onto
/// snake_case fields. Entries carry no identity; they compare by value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    #[serde(rename = "API")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Auth")]
    pub auth: String,
    #[serde(rename = "HTTPS")]
    pub https: bool,
    #[serde(rename = "Cors")]
    pub cors: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Category")]
    pub category: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntriesResponse {
    pub count: i64,
    pub entries: Vec<Entry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoriesResponse {
    pub count: i64,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Entries.path(), "/entries");
        assert_eq!(Resource::Categories.path(), "/categories");
    }

    #[test]
    fn test_resource_url_trims_trailing_slash() {
        assert_eq!(
            Resource::Entries.url("https://api.publicapis.org/"),
            "https://api.publicapis.org/entries"
        );
        assert_eq!(
            Resource::Categories.url(DEFAULT_BASE_URL),
            "https://api.publicapis.org/categories"
        );
    }

    #[test]
    fn test_entry_decodes_capitalized_wire_keys() {
        let json = r#"{
            "API": "Cat Facts",
            "Description": "Daily cat facts",
            "Auth": "",
            "HTTPS": true,
            "Cors": "no",
            "Link": "https://alexwohlbruck.github.io/cat-facts/",
            "Category": "Animals"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "Cat Facts");
        assert_eq!(entry.description, "Daily cat facts");
        assert_eq!(entry.auth, "");
        assert!(entry.https);
        assert_eq!(entry.cors, "no");
        assert_eq!(entry.category, "Animals");
    }

    #[test]
    fn test_entry_rejects_lowercase_keys() {
        let json = r#"{"name": "x", "description": "", "auth": "", "https": true,
            "cors": "", "link": "", "category": ""}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_categories_response_decodes() {
        let json = r#"{"count": 2, "categories": ["Animals", "Anime"]}"#;
        let response: CategoriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.categories, vec!["Animals", "Anime"]);
    }
}
