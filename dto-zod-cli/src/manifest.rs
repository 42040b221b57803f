//! Descriptor manifest loading.
//!
//! A manifest lists DTOs and their fields:
//!
//! ```json
//! { "dtos": [ { "name": "User", "fields": [ { "name": "id", "type": "UUID" } ] } ] }
//! ```
//!
//! The same shape is accepted in TOML (`[[dtos]]` tables).

use crate::error::{CliResult, ManifestError};
use dto_zod::descriptor::is_identifier;
use dto_zod::DtoDescriptor;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    dtos: Vec<DtoDescriptor>,
}

/// Manifest encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse manifest content into DTO descriptors, in file order.
pub fn parse_manifest(
    path: &Path,
    content: &str,
    format: ManifestFormat,
) -> Result<Vec<DtoDescriptor>, ManifestError> {
    let manifest: Manifest = match format {
        ManifestFormat::Json => {
            serde_json::from_str(content).map_err(|e| ManifestError::InvalidJson {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        ManifestFormat::Toml => toml::from_str(content).map_err(|e| ManifestError::InvalidToml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
    };

    for dto in &manifest.dtos {
        if !is_identifier(&dto.name) {
            return Err(ManifestError::InvalidDtoName {
                name: dto.name.clone(),
                path: path.to_path_buf(),
            });
        }
    }

    Ok(manifest.dtos)
}

/// Read and parse a single manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<DtoDescriptor>, ManifestError> {
    let format = ManifestFormat::from_path(path).ok_or_else(|| ManifestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_manifest(path, &content, format)
}

/// Load every manifest, keeping DTOs in manifest then declaration order.
///
/// A DTO name seen in two places is an error, since both would be written
/// to the same schema file.
pub fn load_all(paths: &[PathBuf]) -> CliResult<Vec<DtoDescriptor>> {
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut dtos = Vec::new();

    for path in paths {
        let loaded = load_manifest(path)?;
        tracing::debug!(manifest = %path.display(), dtos = loaded.len(), "Loaded manifest");

        for dto in loaded {
            if let Some(first) = seen.get(&dto.name) {
                return Err(ManifestError::DuplicateDto {
                    name: dto.name,
                    first: first.clone(),
                    second: path.clone(),
                }
                .into());
            }
            seen.insert(dto.name.clone(), path.clone());
            dtos.push(dto);
        }
    }

    Ok(dtos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use dto_zod::FieldDescriptor;
    use std::fs;
    use tempfile::TempDir;

    const USER_JSON: &str = r#"{
  "dtos": [
    {
      "name": "User",
      "fields": [
        { "name": "id", "type": "UUID" },
        { "name": "tags", "type": "java.util.List<java.lang.String>" },
        { "name": "roles", "type": "List", "collection": true, "element": "Role" }
      ]
    }
  ]
}"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ManifestFormat::from_path(Path::new("user.dto.json")),
            Some(ManifestFormat::Json)
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("user.dto.toml")),
            Some(ManifestFormat::Toml)
        );
        assert_eq!(ManifestFormat::from_path(Path::new("user.dto.yaml")), None);
    }

    #[test]
    fn test_parse_json_manifest() {
        let dtos = parse_manifest(Path::new("user.dto.json"), USER_JSON, ManifestFormat::Json)
            .unwrap();

        assert_eq!(dtos.len(), 1);
        let user = &dtos[0];
        assert_eq!(user.name, "User");
        assert_eq!(user.fields[0], FieldDescriptor::new("id", "UUID"));
        assert_eq!(
            user.fields[1],
            FieldDescriptor::new("tags", "java.util.List<java.lang.String>")
        );
        assert_eq!(
            user.fields[2],
            FieldDescriptor::collection("roles", "List", "Role")
        );
    }

    #[test]
    fn test_parse_toml_manifest() {
        let content = r#"
[[dtos]]
name = "Address"

[[dtos.fields]]
name = "street"
type = "String"

[[dtos.fields]]
name = "zip"
type = "Integer"

[[dtos]]
name = "Empty"
"#;
        let dtos =
            parse_manifest(Path::new("address.dto.toml"), content, ManifestFormat::Toml).unwrap();

        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].name, "Address");
        assert_eq!(dtos[0].fields.len(), 2);
        assert_eq!(dtos[1].name, "Empty");
        assert!(dtos[1].fields.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_dto_name() {
        let content = r#"{ "dtos": [ { "name": "user-dto" } ] }"#;
        let err =
            parse_manifest(Path::new("bad.dto.json"), content, ManifestFormat::Json).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidDtoName { name, .. } if name == "user-dto"));
    }

    #[test]
    fn test_parse_reports_invalid_json() {
        let err = parse_manifest(Path::new("bad.dto.json"), "{ dtos: ", ManifestFormat::Json)
            .unwrap_err();
        assert!(matches!(err, ManifestError::InvalidJson { .. }));
    }

    #[test]
    fn test_load_all_detects_duplicates() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.dto.json");
        let b = dir.path().join("b.dto.json");
        fs::write(&a, r#"{ "dtos": [ { "name": "User" } ] }"#).unwrap();
        fs::write(&b, r#"{ "dtos": [ { "name": "Role" }, { "name": "User" } ] }"#).unwrap();

        let err = load_all(&[a.clone(), b.clone()]).unwrap_err();
        match err {
            CliError::Manifest(ManifestError::DuplicateDto {
                name,
                first,
                second,
            }) => {
                assert_eq!(name, "User");
                assert_eq!(first, a);
                assert_eq!(second, b);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_all_keeps_order() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.dto.json");
        let b = dir.path().join("b.dto.toml");
        fs::write(&a, r#"{ "dtos": [ { "name": "Zeta" }, { "name": "Alpha" } ] }"#).unwrap();
        fs::write(&b, "[[dtos]]\nname = \"Middle\"\n").unwrap();

        let dtos = load_all(&[a, b]).unwrap();
        let names: Vec<_> = dtos.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Middle"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_manifest(Path::new("/nonexistent/user.dto.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
