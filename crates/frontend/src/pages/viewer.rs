use dioxus::prelude::*;
use merceditas_shared::catalog::SectorCatalog;
use merceditas_shared::selection::Selection;
use std::rc::Rc;

use crate::api;
use crate::components::info_panel::InfoPanel;
use crate::components::map_view::{prepare_features, MapView};

const HEADER_TITLE: &str = "Más allá de las alertas tempranas: descifrando el vínculo entre los \
    focos de deforestación y las dinámicas del paisaje para mejorar las estrategias de \
    conservación de la biodiversidad en el oriente Antioqueño (Colombia)";

#[component]
pub fn Viewer() -> Element {
    let features_resource = use_resource(|| api::fetch_features());
    let sectors_resource = use_resource(|| api::fetch_sectors());
    let catalog = use_hook(|| Rc::new(SectorCatalog::builtin()));

    let mut selection = use_signal(Selection::<usize>::new);
    let hovered = use_signal(|| None::<usize>);
    let mut sidebar_open = use_signal(|| false);

    let body = match &*features_resource.read() {
        None => rsx! {
            div { class: "status loading",
                div { class: "spinner" }
                p { "Cargando cartografía..." }
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "status load-error",
                h3 { "Error de Carga" }
                p { "No se pudo cargar la cartografía del área de estudio." }
                p { class: "detail", "{e}" }
            }
        },
        Some(Ok(data)) => {
            let features = prepare_features(data);
            let selected = selection
                .read()
                .current()
                .and_then(|i| features.get(*i))
                .cloned();
            let panel_catalog = catalog.clone();
            let open = *sidebar_open.read() && selected.is_some();

            rsx! {
                main { class: "content",
                    aside { class: if open { "sidebar open" } else { "sidebar" },
                        InfoPanel {
                            selected: selected,
                            catalog: panel_catalog,
                            on_close: move |_| {
                                selection.write().clear();
                                sidebar_open.set(false);
                            },
                        }
                    }
                    MapView {
                        features: features,
                        catalog: catalog.clone(),
                        selection: selection,
                        hovered: hovered,
                        on_select: move |index| {
                            selection.write().select(index);
                            sidebar_open.set(true);
                        },
                    }
                }
            }
        }
    };

    // Legend comes from the backend catalog; until it arrives the header
    // simply has no chips.
    let legend = match &*sectors_resource.read() {
        Some(Ok(s)) => s.clone(),
        _ => vec![],
    };

    rsx! {
        div { class: "app",
            header { class: "header",
                h1 { "{HEADER_TITLE}" }
                if !legend.is_empty() {
                    div { class: "legend",
                        for s in legend {
                            span { class: "legend-item", key: "{s.slug}",
                                span {
                                    class: "legend-swatch",
                                    style: "background-color: {s.color};"
                                }
                                "{s.title}"
                            }
                        }
                    }
                }
            }
            {body}
        }
    }
}
