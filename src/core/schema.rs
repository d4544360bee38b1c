use crate::domain::ports::ArtifactSource;
use crate::utils::error::{PriceError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Number of fixed numeric slots ahead of the one-hot location columns.
pub const FIXED_SLOTS: usize = 3;

/// Slot assignment mirrors the column order the model was trained on.
/// This is a load-time contract, not alphabetical.
pub const SQFT_SLOT: usize = 0;
pub const BATH_SLOT: usize = 1;
pub const BHK_SLOT: usize = 2;

#[derive(Debug, Deserialize)]
struct ColumnsFile {
    data_columns: Vec<String>,
}

/// Ordered feature-column schema loaded from the columns artifact.
///
/// Columns `0..3` are total_sqft, bath and bhk in that exact order; the
/// remainder are one-hot location indicators, lower-cased in the artifact.
/// Immutable after load.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    columns: Vec<String>,
    location_index: HashMap<String, usize>,
}

impl SchemaStore {
    pub fn from_columns(columns: Vec<String>) -> Result<Self> {
        if columns.len() < FIXED_SLOTS {
            return Err(PriceError::ArtifactLoadError {
                message: format!(
                    "schema needs at least {} columns, got {}",
                    FIXED_SLOTS,
                    columns.len()
                ),
            });
        }

        // Only location columns go into the index, so a location name can
        // never resolve to one of the fixed numeric slots.
        let location_index = columns
            .iter()
            .enumerate()
            .skip(FIXED_SLOTS)
            .map(|(i, name)| (name.to_lowercase(), i))
            .collect();

        Ok(Self {
            columns,
            location_index,
        })
    }

    pub async fn load<S: ArtifactSource>(source: &S, columns_path: &str) -> Result<Self> {
        let raw = source.read_file(columns_path).await?;
        let parsed: ColumnsFile = serde_json::from_slice(&raw)?;
        Self::from_columns(parsed.data_columns)
    }

    /// Feature-vector width expected by the model.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Location names in load order, i.e. `columns[3..]`.
    pub fn locations(&self) -> &[String] {
        &self.columns[FIXED_SLOTS..]
    }

    /// Case-insensitive lookup among the location columns.
    pub fn location_slot(&self, name: &str) -> Option<usize> {
        self.location_index.get(&name.to_lowercase()).copied()
    }
}
