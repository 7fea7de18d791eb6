//! Mode panels for the variable section of the dashboard.
//!
//! The menu bar selects a [`crate::modes::Mode`]; the host dispatches the
//! panel viewport to the matching draw function here. Every panel renders
//! into a [`crate::render::CommandList`], like the gauge widgets.
//!
//! - [`startup`]: HID and diff-switch instructions (the default panel)
//! - [`twostep_panel`]: two-step RPM bound entry UI
//! - [`status`]: competition status (committed bounds)
//! - [`diagnostic`]: visible error panel for unavailable modes
//!
//! Modes without an implemented panel route to [`diagnostic::draw_diagnostic`]
//! - an unrecognized or unserved selection must produce a visible error
//! state, never a silent blank.

mod diagnostic;
mod startup;
mod status;
mod twostep_panel;

pub use diagnostic::draw_diagnostic;
pub use startup::draw_startup;
pub use status::draw_status;
pub use twostep_panel::draw_two_step;
