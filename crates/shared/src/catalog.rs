use crate::models::{Sector, SectorId};

/// Immutable table of sector display metadata.
///
/// Built once at startup and shared by reference; `Unknown` and `Unlabeled`
/// always miss, which is the expected path for features whose label maps to
/// no tracked sector (consumers render a fallback, not an error).
#[derive(Debug, Clone, PartialEq)]
pub struct SectorCatalog {
    entries: Vec<Sector>,
}

impl SectorCatalog {
    /// The built-in catalog for the Oriente Antioqueño study area.
    pub fn builtin() -> Self {
        let entries = vec![
            Sector {
                id: SectorId::AguaViva,
                slug: "agua_viva".to_string(),
                title: "Sector Agua Viva".to_string(),
                emoji: "🌊".to_string(),
                color: "#0ea5e9".to_string(),
                municipios: "Alejandría, Concepción, San Vicente Ferrer, San Rafael, Peñol, Guatapé"
                    .to_string(),
                description: "El sector Agua Viva corresponde a una subregión estratégica del \
                    Oriente Antioqueño caracterizada por su alta importancia hídrica, asociada a \
                    sistemas de embalses, cuencas abastecedoras y zonas de regulación \
                    ecosistémica. Este sector cumple un rol fundamental en la provisión de \
                    servicios ecosistémicos relacionados con el recurso hídrico, tanto a escala \
                    regional como metropolitana. Sin embargo, enfrenta presiones crecientes \
                    derivadas de actividades turísticas, expansión urbana localizada, \
                    infraestructura vial y cambios en el uso del suelo rural. La pérdida de \
                    cobertura vegetal en áreas de recarga y la fragmentación de los ecosistemas \
                    ribereños representan riesgos significativos para la conectividad ecológica \
                    y la calidad del agua. En este contexto, la identificación temprana de focos \
                    de deforestación y la evaluación de su impacto sobre la conectividad entre \
                    parches naturales resulta clave para la gestión preventiva del territorio y \
                    la protección de los sistemas hídricos."
                    .to_string(),
            },
            Sector {
                id: SectorId::BosquesDelSur,
                slug: "bosques_sur".to_string(),
                title: "Sector Bosques del Sur".to_string(),
                emoji: "🌳".to_string(),
                color: "#16a34a".to_string(),
                municipios: "Sonsón, El Carmen de Viboral, San Francisco, Nariño".to_string(),
                description: "El sector Bosques del Sur agrupa municipios que conservan extensas \
                    áreas de cobertura boscosa y ecosistemas estratégicos de montaña, \
                    fundamentales para la conectividad ecológica entre el Oriente Antioqueño y \
                    otras regiones del departamento. Esta subárea presenta una alta diversidad \
                    biológica y cumple funciones clave como refugio de fauna, regulación \
                    climática local y soporte de actividades productivas rurales. No obstante, \
                    la deforestación asociada a la ampliación de la frontera agropecuaria, la \
                    apertura de vías secundarias y el desarrollo disperso genera procesos de \
                    fragmentación progresiva. Estos cambios suelen ocurrir de manera gradual y \
                    poco visible, lo que dificulta su detección oportuna. La implementación de \
                    alertas tempranas permite anticipar la pérdida de conectividad y priorizar \
                    acciones de conservación en núcleos críticos, antes de que se comprometa la \
                    integridad funcional del paisaje."
                    .to_string(),
            },
            Sector {
                id: SectorId::CorredorGranadino,
                slug: "corredor_granadino".to_string(),
                title: "Sector Corredor Granadino".to_string(),
                emoji: "🌿".to_string(),
                color: "#84cc16".to_string(),
                municipios: "Cocorná, San Luis, San Carlos, Granada".to_string(),
                description: "El Corredor Granadino constituye una franja de conexión ecológica \
                    clave dentro del Oriente Antioqueño, articulando ecosistemas de bosque, \
                    zonas agrícolas y áreas de transición entre regiones. Su ubicación \
                    estratégica lo convierte en un eje fundamental para la movilidad de especies \
                    y el flujo de procesos ecológicos a escala regional. Sin embargo, la presión \
                    por el desarrollo de infraestructura, proyectos productivos y asentamientos \
                    rurales dispersos ha incrementado el riesgo de interrupción de estos \
                    corredores funcionales. En este sector, pequeños cambios en la cobertura \
                    vegetal pueden tener efectos desproporcionados sobre la conectividad del \
                    paisaje. Por ello, el monitoreo sistemático de alertas de deforestación y su \
                    análisis desde una perspectiva de conectividad resulta esencial para \
                    identificar puntos críticos, orientar decisiones de ordenamiento territorial \
                    y prevenir la ruptura de corredores ecológicos estratégicos."
                    .to_string(),
            },
            Sector {
                id: SectorId::NucleoDeExpansion,
                slug: "nucleo_expansion".to_string(),
                title: "Sector Núcleo de Expansión".to_string(),
                emoji: "🏙️".to_string(),
                color: "#f59e0b".to_string(),
                municipios: "Argelia, Abejorral, El Santuario, Rionegro, Retiro, Marinilla, La \
                    Unión, La Ceja"
                    .to_string(),
                description: "El sector Núcleo de Expansión se caracteriza por una dinámica \
                    acelerada de crecimiento urbano, transformación del suelo y consolidación de \
                    infraestructuras, especialmente en los municipios con mayor articulación al \
                    sistema metropolitano. Este proceso genera una presión constante sobre la \
                    cobertura vegetal remanente y sobre las áreas que funcionan como nodos de \
                    conectividad ecológica entre zonas urbanas y rurales. La fragmentación en \
                    este sector no suele manifestarse como grandes eventos de deforestación, \
                    sino como una acumulación de cambios pequeños pero persistentes, que \
                    debilitan progresivamente la red ecológica. En este contexto, las alertas \
                    tempranas orientadas a la conectividad permiten anticipar impactos, \
                    priorizar áreas de conservación y apoyar decisiones municipales que integren \
                    el crecimiento urbano con la protección de los ecosistemas estratégicos."
                    .to_string(),
            },
        ];
        SectorCatalog { entries }
    }

    /// Look up the metadata for a canonical identity. `None` for `Unknown`
    /// and `Unlabeled`.
    pub fn lookup(&self, id: SectorId) -> Option<&Sector> {
        self.entries.iter().find(|s| s.id == id)
    }

    pub fn entries(&self) -> &[Sector] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_identities_hit() {
        let catalog = SectorCatalog::builtin();
        for id in [
            SectorId::AguaViva,
            SectorId::BosquesDelSur,
            SectorId::CorredorGranadino,
            SectorId::NucleoDeExpansion,
        ] {
            let sector = catalog.lookup(id).unwrap();
            assert_eq!(sector.id, id);
            assert!(sector.color.starts_with('#'));
            assert!(!sector.municipios.is_empty());
            assert!(!sector.description.is_empty());
        }
    }

    #[test]
    fn test_unknown_and_unlabeled_miss() {
        let catalog = SectorCatalog::builtin();
        assert!(catalog.lookup(SectorId::Unknown).is_none());
        assert!(catalog.lookup(SectorId::Unlabeled).is_none());
    }

    #[test]
    fn test_exactly_one_entry_per_identity() {
        let catalog = SectorCatalog::builtin();
        assert_eq!(catalog.entries().len(), 4);
        for entry in catalog.entries() {
            let hits = catalog
                .entries()
                .iter()
                .filter(|s| s.id == entry.id)
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_colors_match_reference_palette() {
        let catalog = SectorCatalog::builtin();
        assert_eq!(catalog.lookup(SectorId::AguaViva).unwrap().color, "#0ea5e9");
        assert_eq!(
            catalog.lookup(SectorId::BosquesDelSur).unwrap().color,
            "#16a34a"
        );
        assert_eq!(
            catalog.lookup(SectorId::CorredorGranadino).unwrap().color,
            "#84cc16"
        );
        assert_eq!(
            catalog.lookup(SectorId::NucleoDeExpansion).unwrap().color,
            "#f59e0b"
        );
    }
}
