use crate::catalog::SectorCatalog;
use crate::models::SectorId;

/// Neutral gray fill for features whose identity has no catalog entry.
pub const FALLBACK_FILL: &str = "#94a3b8";

/// Visual style for one rendered polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub fill_color: String,
    pub weight: f64,
    pub color: String,
    pub dash_array: String,
    pub fill_opacity: f64,
}

/// Derive the style for a feature from its canonical identity and the
/// current selection/hover state.
///
/// `is_selected_feature` means this exact polygon is the current selection;
/// `in_selected_sector` means the feature's identity equals the selection's
/// identity (which also highlights sibling polygons of the same sector).
/// The two are deliberately separate inputs.
///
/// While hovered, weight/outline/opacity take a fixed emphasis style that
/// ignores selection state, but the fill still comes from the feature's own
/// identity so that un-hovering reverts to the selection-derived style.
pub fn resolve(
    catalog: &SectorCatalog,
    id: SectorId,
    hovered: bool,
    is_selected_feature: bool,
    in_selected_sector: bool,
) -> StyleDescriptor {
    let fill_color = catalog
        .lookup(id)
        .map(|s| s.color.clone())
        .unwrap_or_else(|| FALLBACK_FILL.to_string());

    if hovered {
        return StyleDescriptor {
            fill_color,
            weight: 3.0,
            color: "#666".to_string(),
            dash_array: String::new(),
            fill_opacity: 0.7,
        };
    }

    StyleDescriptor {
        fill_color,
        weight: if is_selected_feature { 4.0 } else { 1.0 },
        color: if is_selected_feature {
            "#333".to_string()
        } else {
            "white".to_string()
        },
        dash_array: "3".to_string(),
        fill_opacity: if in_selected_sector { 0.8 } else { 0.5 },
    }
}
