//! HTTP front end for the movie catalog: HTML pages rendered ahead of time
//! or per request, a JSON API and Prometheus metrics.

pub mod api;
pub mod metrics;
pub mod pages;
pub mod prerender;
pub mod state;
