use serde::{Deserialize, Serialize};

/// Canonical identity of a territorial sector.
///
/// `Unknown` is the fallback for labels that match no rule and `Unlabeled`
/// covers empty/blank labels. Both are valid outcomes, not errors, and both
/// miss the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorId {
    AguaViva,
    BosquesDelSur,
    CorredorGranadino,
    NucleoDeExpansion,
    Unknown,
    Unlabeled,
}

impl SectorId {
    /// Whether this identity is one of the four named sectors tracked by
    /// the catalog.
    pub fn is_named(self) -> bool {
        !matches!(self, SectorId::Unknown | SectorId::Unlabeled)
    }
}

impl std::fmt::Display for SectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectorId::AguaViva => write!(f, "Agua Viva"),
            SectorId::BosquesDelSur => write!(f, "Bosques del Sur"),
            SectorId::CorredorGranadino => write!(f, "Corredor Granadino"),
            SectorId::NucleoDeExpansion => write!(f, "Núcleo de Expansión"),
            SectorId::Unknown => write!(f, "Unknown"),
            SectorId::Unlabeled => write!(f, "Unlabeled"),
        }
    }
}

/// Display metadata for one sector, as shown in the info panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    pub id: SectorId,
    pub slug: String,
    pub title: String,
    pub emoji: String,
    pub color: String,
    pub municipios: String,
    pub description: String,
}

/// Attribute columns carried over from the source shapefile.
///
/// Labels are free text and are not guaranteed to match any catalog entry
/// verbatim; unknown extra columns are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeProperties {
    #[serde(rename = "Sector", default)]
    pub sector: String,
    #[serde(rename = "MPIO_CNBRE", default)]
    pub municipality: String,
    #[serde(rename = "Shape_Area", default)]
    pub shape_area: Option<f64>,
}

/// One GeoJSON feature from the study-area dataset.
///
/// The geometry payload is opaque to the core; it is handed through to the
/// rendering boundary untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: ShapeProperties,
    #[serde(default)]
    pub geometry: serde_json::Value,
}

impl Feature {
    /// Short label for tooltip rendering: municipality plus the raw sector
    /// text as it appears in the dataset.
    pub fn display_label(&self) -> String {
        format!(
            "{} · {}",
            self.properties.municipality, self.properties.sector
        )
    }
}

/// A GeoJSON FeatureCollection as produced by shapefile conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}
