mod config;
mod map;
mod osrm;
mod routes;
mod types;

use crate::osrm::RouteFetcher;
use crate::types::Coordinate;
use log::{info, warn};
use std::path::Path;

// Université Pédagogique Nationale
const UPN: Coordinate = Coordinate::new(-4.40416, 15.25830);
// Université Révérend Kim
const UNIVERSITE_KIM: Coordinate = Coordinate::new(-4.37200, 15.39200);

// Intermediate points forcing alternative routes distinct from the direct one.
const VIA_POINTS: [Coordinate; 4] = [
    Coordinate::new(-4.390, 15.300),
    Coordinate::new(-4.410, 15.320),
    Coordinate::new(-4.420, 15.350),
    Coordinate::new(-4.380, 15.380),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = config::CONFIG.clone();

    let fetcher = RouteFetcher::new(config.router_url.clone(), config.request_timeout)?;
    let route_list = routes::fetch_all(&fetcher, UPN, UNIVERSITE_KIM, &VIA_POINTS).await;
    let extremes = routes::extremes(&route_list);

    let doc = map::render_routes(UPN, UNIVERSITE_KIM, &route_list, extremes);
    doc.save(Path::new(&config.out_file))?;
    info!("map written to {}", config.out_file);

    if config.open_viewer {
        if let Err(err) = open::that(&config.out_file) {
            warn!("could not open {} in a viewer: {}", config.out_file, err);
        }
    }

    for (i, route) in route_list.iter().enumerate() {
        if let Some(route) = route {
            println!(
                "Route #{}: distance = {:.2} km, duration = {:.0} min",
                i + 1,
                route.distance_km,
                route.duration_min
            );
        }
    }

    Ok(())
}
