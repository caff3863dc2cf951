use serde::{Deserialize, Serialize};

/// One installable tool from the catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Unique tool name, used for lookup and display
    pub name: String,
    /// Category the tool belongs to (e.g. "information_gathering")
    pub category: String,
    /// Upstream project page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Short one-line description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shell commands executed in order to install the tool
    pub steps: Vec<String>,
}

/// Raw catalogue document as it appears in the embedded TOML.
///
/// Fields are optional here so that validation can produce precise
/// `MalformedCatalogue` errors instead of opaque deserialization failures.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalogue {
    #[serde(default)]
    pub prerequisites: RawPrerequisites,
    #[serde(default)]
    pub tools: Vec<RawTool>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPrerequisites {
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTool {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

fn default_category() -> String {
    "uncategorized".to_string()
}
