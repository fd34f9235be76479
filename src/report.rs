use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ── Input ──

/// One collection's configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionInput {
    pub persona: Persona,
    pub job_to_be_done: JobToBeDone,
    /// Echoed into the output untouched.
    pub documents: Vec<Value>,
}

/// `persona` object: `role` is read, the whole object is echoed as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub role: String,
    raw: Value,
}

/// `job_to_be_done` object: `task` is read, the whole object is echoed as given.
#[derive(Debug, Clone, PartialEq)]
pub struct JobToBeDone {
    pub task: String,
    raw: Value,
}

fn string_field<E: serde::de::Error>(raw: &Value, key: &'static str) -> Result<String, E> {
    match raw.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(E::custom(format!("`{}` must be a string", key))),
        None => Err(E::missing_field(key)),
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(d)?;
        if !raw.is_object() {
            return Err(D::Error::custom("`persona` must be an object"));
        }
        let role = string_field(&raw, "role")?;
        Ok(Persona { role, raw })
    }
}

impl Serialize for Persona {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(s)
    }
}

impl<'de> Deserialize<'de> for JobToBeDone {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(d)?;
        if !raw.is_object() {
            return Err(D::Error::custom("`job_to_be_done` must be an object"));
        }
        let task = string_field(&raw, "task")?;
        Ok(JobToBeDone { task, raw })
    }
}

impl Serialize for JobToBeDone {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(s)
    }
}

// ── Output ──

#[derive(Debug, Clone, Serialize)]
pub struct CollectionResult {
    pub metadata: Metadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub persona: Persona,
    pub job_to_be_done: JobToBeDone,
    pub documents: Vec<Value>,
    pub timestamp: String,
    pub analysis_summary: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtractedSection {
    pub document: String,
    pub section_title: String,
    pub importance_rank: usize,
    pub page_number: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}
