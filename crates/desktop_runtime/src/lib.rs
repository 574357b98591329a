pub mod apps;
pub mod components;
pub mod focus;
pub mod icons;
pub mod model;
pub mod reducer;
pub mod registry;
mod runtime_context;
pub mod view_state;

pub use components::DesktopShell;
pub use focus::{FocusChannel, FocusEvent};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError};
pub use registry::{WindowPatch, WindowRegistry};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use view_state::WindowViewState;
