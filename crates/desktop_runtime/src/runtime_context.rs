//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the shared window registry, the focus channel, and the
//! viewport observer, and exposes them to components through a single
//! context value with a reducer dispatch callback. UI composition stays in
//! [`crate::components`].

use leptos::*;

use crate::{
    focus::FocusChannel,
    model::Size,
    reducer::{reduce_desktop, DesktopAction},
    registry::WindowRegistry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and dispatching
/// [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Shared registry of open windows.
    pub registry: RwSignal<WindowRegistry>,
    /// Pending taskbar-focus notifications.
    pub focus: RwSignal<FocusChannel>,
    /// Current browser viewport size.
    pub viewport: RwSignal<Size>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and keeps
/// the viewport signal in sync with the browser window.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let registry = create_rw_signal(WindowRegistry::default());
    let focus = create_rw_signal(FocusChannel::default());
    let viewport = create_rw_signal(browser_viewport_size());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut windows = registry.get_untracked();
        let mut channel = focus.get_untracked();
        let previous_windows = windows.clone();
        let previous_channel = channel.clone();

        match reduce_desktop(&mut windows, &mut channel, action) {
            Ok(()) => {
                if windows != previous_windows {
                    registry.set(windows);
                }
                if channel != previous_channel {
                    focus.set(channel);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(browser_viewport_size());
    });
    on_cleanup(move || resize_listener.remove());

    provide_context(DesktopRuntimeContext {
        registry,
        focus,
        viewport,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

fn browser_viewport_size() -> Size {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let w = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0) as i32;
            let h = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0) as i32;
            if w > 0 && h > 0 {
                return Size { w, h };
            }
        }
    }

    Size { w: 1280, h: 720 }
}
