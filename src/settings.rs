use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

/// File layout and run behaviour. Scoring weights are not configurable.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub input_file: String,
    pub output_file: String,
    pub documents_dir: String,
    pub document_extension: String,
    pub collection_prefix: String,
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_file: "challenge1b_input.json".into(),
            output_file: "challenge1b_solution_output.json".into(),
            documents_dir: "PDFs".into(),
            document_extension: "pdf".into(),
            collection_prefix: "collection".into(),
            parallel: false,
        }
    }
}

impl Settings {
    /// Defaults, then `DIGEST_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("DIGEST"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let d = Settings::default();
        let settings = Config::builder()
            .set_default("input_file", d.input_file)?
            .set_default("output_file", d.output_file)?
            .set_default("documents_dir", d.documents_dir)?
            .set_default("document_extension", d.document_extension)?
            .set_default("collection_prefix", d.collection_prefix)?
            .set_default("parallel", d.parallel)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
