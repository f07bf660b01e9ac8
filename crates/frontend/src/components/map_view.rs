use dioxus::prelude::*;
use merceditas_shared::catalog::SectorCatalog;
use merceditas_shared::models::SectorId;
use merceditas_shared::selection::Selection;
use merceditas_shared::{normalize, style};
use std::rc::Rc;

use crate::api::FeatureData;
use crate::coords;

/// SVG viewport dimensions and the fit padding around the study area.
pub const VIEW_WIDTH: f64 = 960.0;
pub const VIEW_HEIGHT: f64 = 640.0;
pub const VIEW_PADDING: f64 = 40.0;

/// One polygon prepared for rendering: canonical identity resolved from the
/// raw label and geometry projected into the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFeature {
    pub index: usize,
    pub sector_id: SectorId,
    pub sector_label: String,
    pub municipality: String,
    pub shape_area: Option<f64>,
    pub tooltip: String,
    pub path: String,
}

/// Resolve identities and bounds-fit all geometries into the viewport.
/// Features with unparsable or non-polygonal geometry keep an empty path
/// and simply render nothing.
pub fn prepare_features(data: &[FeatureData]) -> Vec<MapFeature> {
    let geometries: Vec<serde_json::Value> = data
        .iter()
        .map(|f| serde_json::from_str(&f.geometry_json).unwrap_or(serde_json::Value::Null))
        .collect();
    let bounds = coords::collection_bounds(geometries.iter());

    data.iter()
        .zip(&geometries)
        .enumerate()
        .map(|(index, (f, geometry))| MapFeature {
            index,
            sector_id: normalize::normalize(&f.sector_label),
            sector_label: f.sector_label.clone(),
            municipality: f.municipality.clone(),
            shape_area: f.shape_area,
            tooltip: f.tooltip.clone(),
            path: bounds
                .as_ref()
                .map(|b| coords::geometry_path(geometry, b, VIEW_WIDTH, VIEW_HEIGHT, VIEW_PADDING))
                .unwrap_or_default(),
        })
        .collect()
}

#[component]
pub fn MapView(
    features: Vec<MapFeature>,
    catalog: Rc<SectorCatalog>,
    selection: Signal<Selection<usize>>,
    hovered: Signal<Option<usize>>,
    on_select: EventHandler<usize>,
) -> Element {
    let mut hovered = hovered;
    let mut cursor = use_signal(|| (0.0f64, 0.0f64));

    let selected_index = selection.read().current().copied();
    let selected_sector = selected_index
        .and_then(|i| features.get(i))
        .map(|f| f.sector_id);
    let hovered_index: Option<usize> = *hovered.read();

    // Selection-exact vs. same-sector are two independent comparisons.
    let polygons: Vec<(usize, String, style::StyleDescriptor)> = features
        .iter()
        .filter(|f| !f.path.is_empty())
        .map(|f| {
            let s = style::resolve(
                &catalog,
                f.sector_id,
                hovered_index == Some(f.index),
                selected_index == Some(f.index),
                selected_sector == Some(f.sector_id),
            );
            (f.index, f.path.clone(), s)
        })
        .collect();

    let hovered_feature = hovered_index.and_then(|i| features.iter().find(|f| f.index == i));
    let (cursor_x, cursor_y) = *cursor.read();

    rsx! {
        div { class: "map-area",
            svg {
                class: "sector-map",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",
                onmousemove: move |evt| {
                    let p = evt.client_coordinates();
                    cursor.set((p.x, p.y));
                },
                onmouseleave: move |_| hovered.set(None),
                for (index, d, s) in polygons {
                    path {
                        key: "{index}",
                        d: "{d}",
                        fill: "{s.fill_color}",
                        fill_opacity: "{s.fill_opacity}",
                        stroke: "{s.color}",
                        stroke_width: "{s.weight}",
                        stroke_dasharray: "{s.dash_array}",
                        onclick: move |_| on_select.call(index),
                        onmouseenter: move |_| hovered.set(Some(index)),
                    }
                }
            }
            if let Some(f) = hovered_feature {
                div {
                    class: "map-tooltip",
                    style: "left: {cursor_x + 14.0}px; top: {cursor_y + 14.0}px;",
                    strong { "{f.municipality}" }
                    br {}
                    "{f.sector_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature_data(label: &str, municipality: &str, geometry: &str) -> FeatureData {
        FeatureData {
            sector_label: label.to_string(),
            municipality: municipality.to_string(),
            shape_area: Some(100.0),
            tooltip: format!("{municipality} · {label}"),
            geometry_json: geometry.to_string(),
        }
    }

    const SQUARE: &str = r#"{"type":"Polygon","coordinates":[[[-75.4,6.0],[-75.2,6.0],[-75.2,6.2],[-75.4,6.2],[-75.4,6.0]]]}"#;

    #[test]
    fn test_prepare_resolves_identities() {
        let prepared = prepare_features(&[
            feature_data("Sector Agua Viva", "Guatapé", SQUARE),
            feature_data("bosque", "Sonsón", SQUARE),
            feature_data("", "Desconocido", SQUARE),
        ]);
        assert_eq!(prepared[0].sector_id, SectorId::AguaViva);
        assert_eq!(prepared[1].sector_id, SectorId::BosquesDelSur);
        assert_eq!(prepared[2].sector_id, SectorId::Unlabeled);
    }

    #[test]
    fn test_prepare_builds_paths_within_viewport() {
        let prepared = prepare_features(&[feature_data("Agua Viva", "Guatapé", SQUARE)]);
        assert!(prepared[0].path.starts_with('M'));
        assert!(prepared[0].path.ends_with('Z'));
    }

    #[test]
    fn test_prepare_tolerates_bad_geometry() {
        let prepared = prepare_features(&[
            feature_data("Agua Viva", "Guatapé", SQUARE),
            feature_data("Granadino", "Granada", "not json"),
            feature_data("Granadino", "San Carlos", "null"),
        ]);
        assert_eq!(prepared.len(), 3);
        assert!(!prepared[0].path.is_empty());
        assert!(prepared[1].path.is_empty());
        assert!(prepared[2].path.is_empty());
    }

    #[test]
    fn test_prepare_empty_input() {
        assert!(prepare_features(&[]).is_empty());
    }

    #[test]
    fn test_prepare_keeps_source_order_and_indices() {
        let prepared = prepare_features(&[
            feature_data("Agua Viva", "Peñol", SQUARE),
            feature_data("Corredor Granadino", "Granada", SQUARE),
        ]);
        assert_eq!(prepared[0].index, 0);
        assert_eq!(prepared[0].municipality, "Peñol");
        assert_eq!(prepared[1].index, 1);
        assert_eq!(prepared[1].municipality, "Granada");
    }
}
