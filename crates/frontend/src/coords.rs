/// Bounds-fitting for opaque GeoJSON geometry.
///
/// The core never interprets geometry; this module is view glue that walks
/// the raw coordinate arrays, computes the dataset's bounding box and fits
/// it into the SVG viewport (the same job Leaflet's `fitBounds` does for a
/// tiled map). Plain equirectangular treatment — at the study area's scale
/// no projection library is warranted.
use serde_json::Value;

/// Geographic bounding box in dataset coordinates (lon/lat).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Visit every `[lon, lat, ...]` position nested anywhere inside a GeoJSON
/// coordinates value, regardless of nesting depth.
fn walk_positions(value: &Value, visit: &mut dyn FnMut(f64, f64)) {
    let Some(items) = value.as_array() else {
        return;
    };
    // A position is an array starting with two numbers.
    if let (Some(lon), Some(lat)) = (
        items.first().and_then(Value::as_f64),
        items.get(1).and_then(Value::as_f64),
    ) {
        visit(lon, lat);
        return;
    }
    for item in items {
        walk_positions(item, visit);
    }
}

/// Bounding box of a set of geometries. `None` when no position exists
/// (empty collection, null geometries).
pub fn collection_bounds<'a, I>(geometries: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut bounds: Option<Bounds> = None;
    for geometry in geometries {
        walk_positions(&geometry["coordinates"], &mut |lon, lat| {
            let b = bounds.get_or_insert(Bounds {
                min_lon: lon,
                min_lat: lat,
                max_lon: lon,
                max_lat: lat,
            });
            b.min_lon = b.min_lon.min(lon);
            b.min_lat = b.min_lat.min(lat);
            b.max_lon = b.max_lon.max(lon);
            b.max_lat = b.max_lat.max(lat);
        });
    }
    bounds
}

/// Project a lon/lat position into viewport pixels.
///
/// Aspect-preserving fit with the content centered inside the padded
/// viewport; the Y axis is inverted (north up, SVG Y down).
pub fn project(
    lon: f64,
    lat: f64,
    bounds: &Bounds,
    view_w: f64,
    view_h: f64,
    padding: f64,
) -> (f64, f64) {
    let usable_w = (view_w - 2.0 * padding).max(0.0);
    let usable_h = (view_h - 2.0 * padding).max(0.0);

    let sx = if bounds.width() > 0.0 {
        usable_w / bounds.width()
    } else {
        f64::INFINITY
    };
    let sy = if bounds.height() > 0.0 {
        usable_h / bounds.height()
    } else {
        f64::INFINITY
    };
    let scale = sx.min(sy);
    // Degenerate bounds (single point) land in the viewport center.
    let scale = if scale.is_finite() { scale } else { 0.0 };

    let offset_x = padding + (usable_w - bounds.width() * scale) / 2.0;
    let offset_y = padding + (usable_h - bounds.height() * scale) / 2.0;

    (
        offset_x + (lon - bounds.min_lon) * scale,
        offset_y + (bounds.max_lat - lat) * scale,
    )
}

/// Outer rings of a Polygon or MultiPolygon geometry, as lon/lat pairs.
/// Holes are dropped; other geometry types yield nothing.
pub fn outer_rings(geometry: &Value) -> Vec<Vec<(f64, f64)>> {
    fn ring_points(ring: &Value) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        walk_positions(ring, &mut |lon, lat| points.push((lon, lat)));
        points
    }

    match geometry["type"].as_str() {
        Some("Polygon") => geometry["coordinates"]
            .as_array()
            .and_then(|rings| rings.first())
            .map(|outer| vec![ring_points(outer)])
            .unwrap_or_default(),
        Some("MultiPolygon") => geometry["coordinates"]
            .as_array()
            .map(|polygons| {
                polygons
                    .iter()
                    .filter_map(|p| p.as_array().and_then(|rings| rings.first()))
                    .map(ring_points)
                    .collect()
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// SVG path for a geometry's outer rings, projected into the viewport.
/// Empty string when the geometry has no drawable ring.
pub fn geometry_path(
    geometry: &Value,
    bounds: &Bounds,
    view_w: f64,
    view_h: f64,
    padding: f64,
) -> String {
    let mut path = String::new();
    for ring in outer_rings(geometry) {
        for (i, (lon, lat)) in ring.iter().enumerate() {
            let (x, y) = project(*lon, *lat, bounds, view_w, view_h, padding);
            if i == 0 {
                path.push_str(&format!("M{x:.2},{y:.2}"));
            } else {
                path.push_str(&format!(" L{x:.2},{y:.2}"));
            }
        }
        if !ring.is_empty() {
            path.push_str(" Z ");
        }
    }
    path.trim_end().to_string()
}
