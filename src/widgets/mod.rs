//! Widget components for the dashboard cluster.
//!
//! - [`temp_gauge`]: vertical temperature bar with gradient fill
//! - [`tachometer`]: quarter-arc + straight-run RPM gauge
//! - [`fuel_gauge`]: 200-degree fuel arc with level bands
//! - [`speedometer`]: digital speed readout
//! - [`menu`]: bottom mode-selection bar
//! - [`banner`]: cyclic team banner
//! - [`warning_light`]: show/hide indicator light
//!
//! # Architecture
//!
//! Every widget owns its state and renders into a [`crate::render::CommandList`]
//! for an `(x, y, w, h)` viewport, in layering order: background, backing,
//! fill, ticks, labels, value text. Mutating operations mark the widget
//! dirty; the host consumes the flag with `take_dirty()` and repaints only
//! what changed (plus full-clear events tracked by
//! [`crate::render::RenderState`]).
//!
//! Gauge widgets wrap a [`crate::state::GaugeState`], so every mutation wraps
//! into `[0, max_value]` and rendering never sees an out-of-range value.

mod banner;
mod fuel_gauge;
mod menu;
mod speedometer;
mod tachometer;
mod temp_gauge;
mod warning_light;

pub use banner::Banner;
pub use fuel_gauge::FuelGauge;
pub use menu::MenuBar;
pub use speedometer::Speedometer;
pub use tachometer::Tachometer;
pub use temp_gauge::TempGauge;
pub use warning_light::WarningLight;
