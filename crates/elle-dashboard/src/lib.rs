//! # Elle dashboard
//!
//! Terminal dashboard for the Elle wind turbine. It shows simulated
//! telemetry refreshed on a timer and a chat panel backed by a
//! generative-text endpoint.
//!
//! The core is headless: [`app::Dashboard`] owns a [`state::SessionState`]
//! and projects it onto any [`surface::Surface`] through
//! [`render::render`]. The terminal front-end ([`tui`], [`ui`],
//! [`runtime`]) is one such surface plus an action loop.
//!
//! ```rust
//! use elle_dashboard::app::Dashboard;
//! use elle_dashboard::surface::ViewSurface;
//! use elle_dashboard::telemetry::SimulatedSource;
//!
//! let mut dashboard = Dashboard::new(ViewSurface::default(), SimulatedSource::seeded(42), 2026);
//! assert_eq!(dashboard.surface().wind_speed, "N/A");
//!
//! dashboard.refresh();
//! assert!(dashboard.surface().wind_speed.ends_with(" m/s"));
//! ```

pub mod advisory;
pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod telemetry;
pub mod tui;
pub mod ui;

pub use error::DashboardError;
