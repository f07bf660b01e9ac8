use std::sync::Arc;

use async_graphql::{Context, Enum, Object, SimpleObject};
use merceditas_shared::{
    catalog::SectorCatalog,
    models::{Feature, Sector, SectorId},
    normalize,
};

use crate::store::FeatureStore;

// Re-export SectorId as a GraphQL enum
#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlSectorId {
    AguaViva,
    BosquesDelSur,
    CorredorGranadino,
    NucleoDeExpansion,
    Unknown,
    Unlabeled,
}

impl From<SectorId> for GqlSectorId {
    fn from(id: SectorId) -> Self {
        match id {
            SectorId::AguaViva => GqlSectorId::AguaViva,
            SectorId::BosquesDelSur => GqlSectorId::BosquesDelSur,
            SectorId::CorredorGranadino => GqlSectorId::CorredorGranadino,
            SectorId::NucleoDeExpansion => GqlSectorId::NucleoDeExpansion,
            SectorId::Unknown => GqlSectorId::Unknown,
            SectorId::Unlabeled => GqlSectorId::Unlabeled,
        }
    }
}

impl From<GqlSectorId> for SectorId {
    fn from(id: GqlSectorId) -> Self {
        match id {
            GqlSectorId::AguaViva => SectorId::AguaViva,
            GqlSectorId::BosquesDelSur => SectorId::BosquesDelSur,
            GqlSectorId::CorredorGranadino => SectorId::CorredorGranadino,
            GqlSectorId::NucleoDeExpansion => SectorId::NucleoDeExpansion,
            GqlSectorId::Unknown => SectorId::Unknown,
            GqlSectorId::Unlabeled => SectorId::Unlabeled,
        }
    }
}

// GraphQL output types

#[derive(SimpleObject)]
pub struct GqlSector {
    pub id: GqlSectorId,
    pub slug: String,
    pub title: String,
    pub emoji: String,
    pub color: String,
    pub municipios: String,
    pub description: String,
}

impl From<&Sector> for GqlSector {
    fn from(s: &Sector) -> Self {
        GqlSector {
            id: s.id.into(),
            slug: s.slug.clone(),
            title: s.title.clone(),
            emoji: s.emoji.clone(),
            color: s.color.clone(),
            municipios: s.municipios.clone(),
            description: s.description.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlFeature {
    pub sector_label: String,
    pub sector_id: GqlSectorId,
    pub municipality: String,
    pub shape_area: Option<f64>,
    pub tooltip: String,
    /// Opaque GeoJSON geometry, serialized as a JSON string.
    pub geometry_json: String,
}

impl From<&Feature> for GqlFeature {
    fn from(f: &Feature) -> Self {
        GqlFeature {
            sector_label: f.properties.sector.clone(),
            sector_id: normalize::normalize(&f.properties.sector).into(),
            municipality: f.properties.municipality.clone(),
            shape_area: f.properties.shape_area,
            tooltip: f.display_label(),
            geometry_json: f.geometry.to_string(),
        }
    }
}

// Query root

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn sectors(&self, ctx: &Context<'_>) -> Vec<GqlSector> {
        let catalog = ctx.data::<Arc<SectorCatalog>>().unwrap();
        catalog.entries().iter().map(GqlSector::from).collect()
    }

    /// Catalog lookup. `UNKNOWN` and `UNLABELED` always miss; that miss is
    /// the expected fallback path, not an error.
    async fn sector(&self, ctx: &Context<'_>, id: GqlSectorId) -> Option<GqlSector> {
        let catalog = ctx.data::<Arc<SectorCatalog>>().unwrap();
        catalog.lookup(id.into()).map(GqlSector::from)
    }

    async fn features(&self, ctx: &Context<'_>, sector: Option<GqlSectorId>) -> Vec<GqlFeature> {
        let store = ctx.data::<Arc<FeatureStore>>().unwrap();
        store
            .features()
            .iter()
            .filter(|f| match sector {
                Some(id) => normalize::normalize(&f.properties.sector) == id.into(),
                None => true,
            })
            .map(GqlFeature::from)
            .collect()
    }
}

pub type Schema =
    async_graphql::Schema<QueryRoot, async_graphql::EmptyMutation, async_graphql::EmptySubscription>;

pub fn build_schema(catalog: Arc<SectorCatalog>, store: Arc<FeatureStore>) -> Schema {
    async_graphql::Schema::build(
        QueryRoot,
        async_graphql::EmptyMutation,
        async_graphql::EmptySubscription,
    )
    .data(catalog)
    .data(store)
    .finish()
}
