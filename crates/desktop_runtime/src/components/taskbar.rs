use std::time::Duration;

use leptos::*;

use super::clock::{format_clock_date, format_clock_time, ClockSnapshot};
use crate::{
    icons::{icon_for_id, IconName, ShellIcon},
    model::WindowId,
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

#[component]
/// Fixed bottom bar: one button per open window (insertion order) plus the
/// clock. Clicking a window button raises it and pings it to resync.
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let clock_now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let focus_window = move |window_id: WindowId| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    };

    view! {
        <nav class="taskbar" aria-label="Taskbar">
            <div class="taskbar-apps">
                <span class="taskbar-home">
                    <ShellIcon icon=IconName::Launcher />
                </span>
                <For
                    each=move || runtime.registry.get().list().to_vec()
                    key=|win| win.id.0
                    let:win
                >
                    {{
                        let window_id = win.id;
                        view! {
                            <button
                                type="button"
                                class="taskbar-window-button"
                                aria-label=format!("Focus {}", win.name)
                                title=win.name.clone()
                                on:click=move |_| focus_window(window_id)
                            >
                                <ShellIcon icon=icon_for_id(&win.icon_id) />
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-clock">
                <span class="clock-time">{move || format_clock_time(clock_now.get())}</span>
                <span class="clock-date">{move || format_clock_date(clock_now.get())}</span>
            </div>
        </nav>
    }
}
