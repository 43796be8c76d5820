use crate::types::{Coordinate, Route};
use log::debug;
use serde::Deserialize;
use std::time::Duration;

/// Wire format of an OSRM `/route/v1` response. Geometry is requested as
/// GeoJSON, so coordinates arrive in (lng, lat) order.
#[derive(Deserialize, Debug)]
struct RouteResponse {
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize, Debug)]
struct OsrmRoute {
    geometry: Geometry,
    /// Meters.
    distance: f64,
    /// Seconds.
    duration: f64,
}

#[derive(Deserialize, Debug)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

pub struct RouteFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl RouteFetcher {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Fetches a single driving route through start, the via points in order,
    /// and end. Any failure (transport, HTTP status, payload) is one error.
    pub async fn fetch_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        via: &[Coordinate],
    ) -> Result<Route, Box<dyn std::error::Error>> {
        let url = self.route_url(start, end, via);
        debug!("Fetching route from: {}", url);
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_route_body(&body)
    }

    fn route_url(&self, start: Coordinate, end: Coordinate, via: &[Coordinate]) -> String {
        let waypoints = std::iter::once(&start)
            .chain(via.iter())
            .chain(std::iter::once(&end))
            .map(|c| format!("{},{}", c.lng, c.lat))
            .collect::<Vec<_>>()
            .join(";");
        format!(
            "{}/route/v1/driving/{}?overview=full&geometries=geojson",
            self.base_url, waypoints
        )
    }
}

/// Normalizes the first route of an OSRM body: path flipped to (lat, lng),
/// meters to kilometers, seconds to minutes.
pub fn parse_route_body(body: &str) -> Result<Route, Box<dyn std::error::Error>> {
    let response: RouteResponse = serde_json::from_str(body)?;
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or("response contains no routes")?;
    Ok(Route {
        path: route
            .geometry
            .coordinates
            .iter()
            .map(|&[lng, lat]| Coordinate::new(lat, lng))
            .collect(),
        distance_km: route.distance / 1000.0,
        duration_min: route.duration / 60.0,
    })
}
