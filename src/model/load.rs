//! Load semantic models from their JSON interchange form.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::TypeModel;

/// Errors that occur while reading a model file.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A model file holds either one type or a batch of types.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModelFile {
    Batch(Vec<TypeModel>),
    Single(Box<TypeModel>),
}

/// Parse one or more type models from JSON text.
pub fn parse_types(json: &str) -> Result<Vec<TypeModel>, ModelError> {
    let types = match serde_json::from_str::<ModelFile>(json)? {
        ModelFile::Batch(types) => types,
        ModelFile::Single(ty) => vec![*ty],
    };
    tracing::debug!(count = types.len(), "parsed type models");
    Ok(types)
}

/// Read and parse a model file.
pub fn load_types(path: &Path) -> Result<Vec<TypeModel>, ModelError> {
    let json = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_types(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;

    #[test]
    fn single_object_and_batch() {
        let single = r#"{"name":"A","native_name":"A","kind":"class"}"#;
        let types = parse_types(single).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].kind, TypeKind::Class);

        let batch = r#"[{"name":"A","native_name":"A","kind":"class"},
                        {"name":"I","native_name":"PI","kind":"interface"}]"#;
        let types = parse_types(batch).unwrap();
        assert_eq!(types.len(), 2);
        assert_eq!(types[1].native_name, "PI");
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = parse_types(r#"{"name":"A","native_name":"A","kind":"record"}"#).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_types(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
