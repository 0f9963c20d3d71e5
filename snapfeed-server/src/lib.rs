// Library exports for snapfeed-server
// The binary and the integration tests both build the router from here

pub mod api;
pub mod config;
pub mod db;
pub mod router;
pub mod state;
