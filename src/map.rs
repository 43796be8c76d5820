use crate::types::{Coordinate, Route};
use std::fs;
use std::path::Path;

/// Colors cycled over computed routes by index. Failed fetches keep their
/// slot so each via point always maps to the same color.
pub const PALETTE: [&str; 7] = [
    "green", "red", "blue", "orange", "purple", "darkcyan", "magenta",
];
pub const SHORTEST_COLOR: &str = "green";
pub const LONGEST_COLOR: &str = "red";
pub const DIRECT_COLOR: &str = "black";

const EXTREME_WEIGHT: u32 = 6;
const ROUTE_WEIGHT: u32 = 4;

const START_LABEL: &str = "Université Pédagogique Nationale";
const END_LABEL: &str = "You have arrived at Université Révérend Kim!";
const DIRECT_LABEL: &str = "Direct line between UPN and Université Révérend Kim";

const LEGEND_HTML: &str = r#"<div style="
 position: fixed;
 bottom: 50px; left: 10px; width: 200px; height: 120px;
 background-color: white; z-index: 9999; padding: 10px; border: 2px solid grey;
">
<b>Legend</b><br>
<i style="background:green; width:12px; height:12px; display:inline-block"></i> Shortest<br>
<i style="background:red; width:12px; height:12px; display:inline-block"></i> Longest<br>
<i style="background:blue; width:12px; height:12px; display:inline-block"></i> Alternative<br>
<i style="background:black; width:12px; height:12px; display:inline-block"></i> Direct line<br>
</div>"#;

/// Color for the route at `index` given the extremum indices. The shortest
/// route wins when one route is both shortest and longest.
pub fn route_color(index: usize, shortest: usize, longest: usize) -> &'static str {
    if index == shortest {
        SHORTEST_COLOR
    } else if index == longest {
        LONGEST_COLOR
    } else {
        PALETTE[index % PALETTE.len()]
    }
}

fn route_weight(index: usize, shortest: usize, longest: usize) -> u32 {
    if index == shortest || index == longest {
        EXTREME_WEIGHT
    } else {
        ROUTE_WEIGHT
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PolylineStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
}

/// A self-contained Leaflet page assembled overlay by overlay.
pub struct MapDocument {
    center: Coordinate,
    zoom: u8,
    overlays: Vec<String>,
    legend: Option<&'static str>,
}

impl MapDocument {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            overlays: Vec::new(),
            legend: None,
        }
    }

    pub fn add_marker(&mut self, at: Coordinate, popup: &str) {
        self.overlays.push(format!(
            "L.marker([{}, {}]).addTo(map).bindPopup('{}');",
            at.lat,
            at.lng,
            escape_js(popup)
        ));
    }

    pub fn add_polyline(&mut self, path: &[Coordinate], style: PolylineStyle, popup: &str) {
        self.overlays.push(format!(
            "L.polyline({}, {{color: '{}', weight: {}, opacity: {}}}).addTo(map).bindPopup('{}');",
            latlngs_js(path),
            style.color,
            style.weight,
            style.opacity,
            escape_js(popup)
        ));
    }

    pub fn set_legend(&mut self, html: &'static str) {
        self.legend = Some(html);
    }

    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Routes UPN - Université Révérend Kim</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
{legend}
<script>
var map = L.map('map').setView([{lat}, {lng}], {zoom});
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
{overlays}
</script>
</body>
</html>
"#,
            legend = self.legend.unwrap_or(""),
            lat = self.center.lat,
            lng = self.center.lng,
            zoom = self.zoom,
            overlays = self.overlays.join("\n")
        )
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.render())
    }
}

/// Plots the endpoint markers, the direct line, and every fetched route with
/// the shortest and longest highlighted, plus the legend.
pub fn render_routes(
    start: Coordinate,
    end: Coordinate,
    routes: &[Option<Route>],
    extremes: Option<(usize, usize)>,
) -> MapDocument {
    let mut doc = MapDocument::new(Coordinate::midpoint(start, end), 13);
    doc.add_marker(start, START_LABEL);
    doc.add_marker(end, END_LABEL);
    doc.add_polyline(
        &[start, end],
        PolylineStyle {
            color: DIRECT_COLOR,
            weight: 2,
            opacity: 0.7,
        },
        DIRECT_LABEL,
    );

    for (i, route) in routes.iter().enumerate() {
        let Some(route) = route else { continue };
        let (color, weight) = match extremes {
            Some((shortest, longest)) => (
                route_color(i, shortest, longest),
                route_weight(i, shortest, longest),
            ),
            None => (PALETTE[i % PALETTE.len()], ROUTE_WEIGHT),
        };
        let popup = format!(
            "Route #{}<br>Distance: {:.2} km<br>Duration: {:.1} min",
            i + 1,
            route.distance_km,
            route.duration_min
        );
        doc.add_polyline(
            &route.path,
            PolylineStyle {
                color,
                weight,
                opacity: 0.8,
            },
            &popup,
        );
    }

    doc.set_legend(LEGEND_HTML);
    doc
}

fn latlngs_js(path: &[Coordinate]) -> String {
    let points = path
        .iter()
        .map(|c| format!("[{}, {}]", c.lat, c.lng))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", points)
}

/// Escapes text for embedding in a single-quoted JS string literal.
fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace("</", "<\\/")
        .replace('\n', "\\n")
}
