// src/config.rs

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::{env, time::Duration};

// Define the Config struct
#[derive(Clone, Debug)]
pub struct Config {
    pub router_url: String,
    pub request_timeout: Duration,
    pub out_file: String,
    pub open_viewer: bool,
}

// Initialize dotenv and config only once
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Loads .env (only the first time it's called)

    Config {
        router_url: env::var("ROUTER_URL")
            .unwrap_or_else(|_| String::from("http://router.project-osrm.org")),
        request_timeout: env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10)),
        out_file: env::var("OUT_FILE")
            .unwrap_or_else(|_| String::from("routes_upn_universite_kim_alternatives.html")),
        open_viewer: env::var("OPEN_VIEWER")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(true),
    }
});
