use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

fn api_url() -> String {
    // In production, same origin. In dev, might be different.
    let window = web_sys::window().unwrap();
    let origin = window.location().origin().unwrap();
    format!("{}/graphql", origin)
}

async fn query<T: for<'de> Deserialize<'de>>(
    query_str: &str,
    variables: Option<serde_json::Value>,
) -> Result<T, String> {
    let req = GraphQLRequest {
        query: query_str.to_string(),
        variables,
    };

    let resp = reqwest::Client::new()
        .post(api_url())
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let gql_resp: GraphQLResponse<T> = resp.json().await.map_err(|e| e.to_string())?;

    if let Some(errors) = gql_resp.errors {
        if !errors.is_empty() {
            return Err(errors[0].message.clone());
        }
    }

    gql_resp.data.ok_or_else(|| "No data returned".to_string())
}

// Types mirroring the GraphQL schema

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureData {
    pub sector_label: String,
    pub municipality: String,
    pub shape_area: Option<f64>,
    pub tooltip: String,
    pub geometry_json: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorData {
    pub slug: String,
    pub title: String,
    pub color: String,
}

// API functions

#[derive(Deserialize)]
pub struct FeaturesResponse {
    pub features: Vec<FeatureData>,
}

pub async fn fetch_features() -> Result<Vec<FeatureData>, String> {
    let resp: FeaturesResponse = query(
        r#"query { features { sectorLabel municipality shapeArea tooltip geometryJson } }"#,
        None,
    )
    .await?;
    Ok(resp.features)
}

#[derive(Deserialize)]
pub struct SectorsResponse {
    pub sectors: Vec<SectorData>,
}

/// Catalog as served by the backend; used for the map legend.
pub async fn fetch_sectors() -> Result<Vec<SectorData>, String> {
    let resp: SectorsResponse =
        query(r#"query { sectors { slug title color } }"#, None).await?;
    Ok(resp.sectors)
}
