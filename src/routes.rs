use crate::osrm::RouteFetcher;
use crate::types::{Coordinate, Route};
use log::warn;

/// Fetches the direct route followed by one route per via point, one request
/// at a time. Failed fetches become `None` so index 0 is always the direct
/// route and index i >= 1 the route through via point i - 1.
pub async fn fetch_all(
    fetcher: &RouteFetcher,
    start: Coordinate,
    end: Coordinate,
    via_points: &[Coordinate],
) -> Vec<Option<Route>> {
    let mut routes = Vec::with_capacity(via_points.len() + 1);
    routes.push(try_fetch(fetcher, start, end, &[]).await);
    for via in via_points {
        routes.push(try_fetch(fetcher, start, end, std::slice::from_ref(via)).await);
    }
    routes
}

async fn try_fetch(
    fetcher: &RouteFetcher,
    start: Coordinate,
    end: Coordinate,
    via: &[Coordinate],
) -> Option<Route> {
    match fetcher.fetch_route(start, end, via).await {
        Ok(route) => Some(route),
        Err(err) => {
            warn!("route fetch failed: {}", err);
            None
        }
    }
}

/// Indices of the minimum- and maximum-distance routes among the present
/// entries. First occurrence wins on ties. `None` when nothing was fetched.
pub fn extremes(routes: &[Option<Route>]) -> Option<(usize, usize)> {
    let mut shortest: Option<(usize, f64)> = None;
    let mut longest: Option<(usize, f64)> = None;
    for (i, route) in routes.iter().enumerate() {
        let Some(route) = route else { continue };
        if shortest.is_none_or(|(_, d)| route.distance_km < d) {
            shortest = Some((i, route.distance_km));
        }
        if longest.is_none_or(|(_, d)| route.distance_km > d) {
            longest = Some((i, route.distance_km));
        }
    }
    Some((shortest?.0, longest?.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(distance_km: f64) -> Option<Route> {
        Some(Route {
            path: vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
            distance_km,
            duration_min: distance_km * 2.0,
        })
    }

    #[test]
    fn test_extremes_bound_all_present_distances() {
        let routes = vec![route(12.5), route(9.1), None, route(14.0), route(9.1)];
        let (shortest, longest) = extremes(&routes).unwrap();
        let shortest_distance = routes[shortest].as_ref().unwrap().distance_km;
        let longest_distance = routes[longest].as_ref().unwrap().distance_km;
        for r in routes.iter().flatten() {
            assert!(shortest_distance <= r.distance_km);
            assert!(longest_distance >= r.distance_km);
        }
    }

    #[test]
    fn test_extremes_first_occurrence_wins_on_tie() {
        let routes = vec![route(9.1), route(9.1), route(9.1)];
        assert_eq!(extremes(&routes), Some((0, 0)));
    }

    #[test]
    fn test_single_route_is_both_extremes() {
        let routes = vec![route(10.0)];
        assert_eq!(extremes(&routes), Some((0, 0)));
    }

    #[test]
    fn test_single_present_route_among_failures() {
        let routes = vec![None, route(10.0), None];
        assert_eq!(extremes(&routes), Some((1, 1)));
    }

    #[test]
    fn test_extremes_ignore_failed_entries() {
        let routes = vec![None, route(20.0), route(5.0), None];
        assert_eq!(extremes(&routes), Some((2, 1)));
    }

    #[test]
    fn test_no_routes_no_extremes() {
        assert_eq!(extremes(&[]), None);
        assert_eq!(extremes(&[None, None]), None);
    }
}
