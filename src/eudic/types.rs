use serde::{
    Deserialize,
    Serialize,
};

/// A remote JSON payload, kept as-is.
pub type NoteRecord = serde_json::Map<String, serde_json::Value>;

/// One entry of a study list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyListWord {
    pub word: String,
    /// Short explanation shown by the dictionary app.
    #[serde(default)]
    pub exp: Option<String>,
    #[serde(default)]
    pub add_time: Option<String>,
    #[serde(default)]
    pub star: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Option<T>,
}
