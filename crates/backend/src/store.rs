use std::path::{Path, PathBuf};

use merceditas_shared::models::{Feature, FeatureCollection};

/// The study-area load failed. Terminal for the attempt: the caller
/// surfaces it and no partial snapshot is produced.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory snapshot of the study-area features, loaded once at startup
/// from a GeoJSON FeatureCollection (the shapefile is converted offline).
///
/// Feature order is whatever the source provides. Geometry payloads are
/// held opaquely and never validated or repaired here. A valid collection
/// with zero features is a successful, empty snapshot.
#[derive(Debug)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    pub async fn load(path: &Path) -> Result<Self, LoadError> {
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let collection: FeatureCollection =
            serde_json::from_str(&data).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            features = collection.features.len(),
            path = %path.display(),
            "Loaded study area geometry"
        );

        Ok(FeatureStore {
            features: collection.features,
        })
    }

    /// Build a store from already-parsed features.
    pub fn from_features(features: Vec<Feature>) -> Self {
        FeatureStore { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("area_estudio.geojson");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"Sector": "Agua Viva", "MPIO_CNBRE": "Guatapé", "Shape_Area": 102.5},
                "geometry": {"type": "Polygon", "coordinates": [[[-75.2, 6.2], [-75.1, 6.2], [-75.1, 6.3], [-75.2, 6.2]]]}
            },
            {
                "type": "Feature",
                "properties": {"Sector": "Bosques del Sur", "MPIO_CNBRE": "Sonsón"},
                "geometry": {"type": "Polygon", "coordinates": [[[-75.4, 5.7], [-75.3, 5.7], [-75.3, 5.8], [-75.4, 5.7]]]}
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_load_parses_features_in_source_order() {
        let (_dir, path) = write_temp(SAMPLE);
        let store = FeatureStore::load(&path).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.features()[0].properties.municipality, "Guatapé");
        assert_eq!(store.features()[1].properties.sector, "Bosques del Sur");
        assert!(store.features()[1].properties.shape_area.is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.geojson");
        let err = FeatureStore::load(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("nope.geojson"));
    }

    #[tokio::test]
    async fn test_load_corrupt_json_is_parse_error() {
        let (_dir, path) = write_temp("{ this is not geojson");
        let err = FeatureStore::load(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_load_zero_features_is_empty_snapshot_not_error() {
        let (_dir, path) = write_temp(r#"{"type": "FeatureCollection", "features": []}"#);
        let store = FeatureStore::load(&path).await.unwrap();
        assert!(store.is_empty());
    }
}
