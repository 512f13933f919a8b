//! Domain types for the bus route finder.
//!
//! A route is the set of stop records sharing a [`RouteNo`]. Records are
//! validated at construction, so the table and query code can trust them.

mod format;
mod route;
mod stop;

pub use format::{format_fare, format_time};
pub use route::{InvalidRouteNo, RouteNo};
pub use stop::StopRecord;
