//! Map state and view state.
//!
//! `MapState` holds the derived data, `ViewState` what is on display.
//! Controls drive the view through `ViewCommand`s.

pub mod map;
pub mod state;

pub use map::MapState;
pub use state::{apply, apply_all, ViewCommand, ViewState};
