//! Business logic services

pub mod booking_calendar;
pub mod daily_summary;
pub mod network;
pub mod params;
pub mod route_optimizer;
pub mod traffic;
pub mod travel_time;

pub use daily_summary::summarize_day;
pub use network::RoutingNetwork;
pub use params::RoutingParams;
pub use route_optimizer::optimize_route;
pub use travel_time::TravelTimeEstimator;
