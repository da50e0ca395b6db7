use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::phase_profile::{PhaseWeights, ProfileError, ProfileKind, ProfileTable};

#[derive(Error, Debug)]
pub enum ProfileYamlError {
    #[error("failed to read profile table {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse profile table: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("profile table is empty")]
    Empty,
    #[error("unknown profile name: {0}")]
    UnknownProfile(String),
    #[error("profile {kind} is defined more than once (as {name})")]
    DuplicateProfile { kind: ProfileKind, name: String },
    #[error("invalid profile weights: {0}")]
    InvalidWeights(#[from] ProfileError),
}

/// Reads a profile table such as
///
/// ```yaml
/// linear: [7, 13, 20, 27, 33]
/// constant: [12, 22, 22, 22, 22]
/// ```
///
/// Every entry must name a known profile and carry five weights summing to 100.
pub fn load_profile_table_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<ProfileTable, ProfileYamlError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading profile table");
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_profile_table_from_yaml_str(&contents)
}

pub fn deserialize_profile_table_from_yaml_str(
    input: &str,
) -> Result<ProfileTable, ProfileYamlError> {
    let records: BTreeMap<String, Vec<u32>> = serde_yaml::from_str(input)?;
    if records.is_empty() {
        return Err(ProfileYamlError::Empty);
    }

    let mut table = ProfileTable::new();
    for (name, weights) in records {
        let kind = ProfileKind::from_name(&name)
            .ok_or_else(|| ProfileYamlError::UnknownProfile(name.clone()))?;
        if table.contains(kind) {
            return Err(ProfileYamlError::DuplicateProfile { kind, name });
        }
        table.insert(kind, PhaseWeights::new(kind.name(), &weights)?);
    }
    Ok(table)
}

/// Falls back to the built-in profiles when no table file is given.
pub fn load_profile_table_if_provided(
    path: Option<&str>,
) -> Result<ProfileTable, ProfileYamlError> {
    match path {
        Some(path) => load_profile_table_from_yaml_file(path),
        None => Ok(ProfileTable::builtin()),
    }
}
