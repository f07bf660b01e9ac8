use dioxus::prelude::*;
use merceditas_shared::catalog::SectorCatalog;
use std::rc::Rc;

use crate::components::map_view::MapFeature;

fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) => format!("{:.0}", a.round()),
        None => "N/A".to_string(),
    }
}

#[component]
pub fn InfoPanel(
    selected: Option<MapFeature>,
    catalog: Rc<SectorCatalog>,
    on_close: EventHandler<()>,
) -> Element {
    let Some(feature) = selected else {
        return rsx! {
            div { class: "panel placeholder",
                div { class: "placeholder-icon", "🗺️" }
                h2 { "Explora el Territorio" }
                p { "Selecciona una zona en el mapa para ver la información detallada del sector." }
            }
        };
    };

    // Catalog miss is the expected fallback path for unmatched labels.
    let Some(sector) = catalog.lookup(feature.sector_id).cloned() else {
        return rsx! {
            div { class: "panel",
                button { class: "back-link", onclick: move |_| on_close.call(()), "← Volver al mapa" }
                h2 { "{feature.sector_label}" }
                p { class: "muted", "No hay descripción detallada disponible para este sector." }
                div { class: "data-grid",
                    div { class: "data-cell",
                        span { class: "data-label", "Municipio (MPIO_CNBRE)" }
                        span { class: "data-value", "{feature.municipality}" }
                    }
                    div { class: "data-cell",
                        span { class: "data-label", "Área (Shape_Area)" }
                        span { class: "data-value", {format_area(feature.shape_area)} }
                    }
                }
            }
        };
    };

    rsx! {
        div { class: "panel",
            div { class: "color-bar", style: "background-color: {sector.color};" }
            div { class: "panel-body",
                button { class: "back-link", onclick: move |_| on_close.call(()), "← Volver al mapa" }
                div { class: "panel-title",
                    span { class: "sector-emoji", "{sector.emoji}" }
                    h2 { "{sector.title}" }
                }
                section {
                    h3 { "Municipios" }
                    p { class: "municipios", "{sector.municipios}" }
                }
                section {
                    h3 { "Descripción del Territorio" }
                    p { class: "description", "{sector.description}" }
                }
                section { class: "polygon-data",
                    h4 { "Datos del Polígono Seleccionado" }
                    div { class: "data-grid",
                        div { class: "data-cell",
                            span { class: "data-label", "Municipio (MPIO_CNBRE)" }
                            span { class: "data-value", "{feature.municipality}" }
                        }
                        div { class: "data-cell",
                            span { class: "data-label", "Área (Shape_Area)" }
                            span { class: "data-value", {format_area(feature.shape_area)} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_area_rounds() {
        assert_eq!(format_area(Some(78145.7)), "78146");
        assert_eq!(format_area(Some(0.2)), "0");
    }

    #[test]
    fn test_format_area_absent() {
        assert_eq!(format_area(None), "N/A");
    }
}
