use thiserror::Error;

/// Reasons a configured layer could not be loaded.
///
/// These are per-layer: a failed layer is reported as a warning and left out
/// of the view, the rest of the render pass continues.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data source does not exist or could not be read.
    #[error("data source not found: {id}")]
    NotFound { id: String },

    /// The bytes are not valid JSON.
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but not an object that could hold a FeatureCollection.
    #[error("{name} is not a GeoJSON object")]
    Shape { name: String },
}

impl LoadError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Both malformed JSON and a non-object document count as parse failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Shape { .. })
    }
}
