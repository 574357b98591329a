//! Desktop shell UI composition and interaction surfaces.

mod clock;
mod launcher;
mod taskbar;
mod window;

use leptos::*;

use self::{launcher::LauncherIcon, taskbar::Taskbar, window::DesktopWindow};
use crate::{apps, model::Point, runtime_context::use_desktop_runtime};

#[component]
/// Renders the full desktop shell: launcher grid, window layer, taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="desktop-shell">
            <div class="desktop-surface">
                <div class="desktop-icon-grid" role="list" aria-label="Desktop shortcuts">
                    <For
                        each=apps::desktop_launchers
                        key=|launcher| launcher.window_id.0
                        let:launcher
                    >
                        <LauncherIcon launcher=launcher />
                    </For>
                </div>

                <div class="desktop-window-layer">
                    <For
                        each=move || runtime.registry.get().list().to_vec()
                        key=|win| win.id.0
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </div>
            </div>

            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
