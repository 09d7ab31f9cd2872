use serde::Deserialize;

/// `tipo` in the dataset is either a single string with separators
/// or an already-split list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCategories {
    One(String),
    Many(Vec<String>),
}

/// `valor_cop` in the dataset is either a bare number or a decorated
/// string like "$12.500.000".
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

/// Record shape as it appears in projects.json, before normalization.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProject {
    pub cliente: String,
    pub obra: String,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub tipo: Option<RawCategories>,
    #[serde(default)]
    pub valor_cop: Option<RawValue>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub contacto: Option<String>,
}

/// Canonical record every report and view works from. Produced once at
/// the load boundary; nothing downstream re-checks raw shapes.
#[derive(Debug, Clone)]
pub struct Project {
    pub client: String,
    pub work: String,
    pub date: String,
    pub categories: Vec<String>,
    pub value_cop: u64,
    pub description: Option<String>,
    pub contact: Option<String>,
}

impl Project {
    /// Haystack for the free-text filter: client, work and description
    /// joined with single spaces, original casing.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.client,
            self.work,
            self.description.as_deref().unwrap_or("")
        )
    }
}
