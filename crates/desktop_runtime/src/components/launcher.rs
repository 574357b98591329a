use leptos::*;

use crate::{
    apps::LauncherDescriptor,
    icons::{icon_for_id, IconSize, ShellIcon},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

#[component]
/// A desktop shortcut icon. Double-activation opens the associated
/// window; opening an already-open window is a no-op.
pub(super) fn LauncherIcon(launcher: LauncherDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = move |_| {
        runtime.dispatch_action(DesktopAction::OpenWindow(launcher.open_request()));
    };

    view! {
        <button
            type="button"
            class="desktop-launcher"
            role="listitem"
            aria-label=format!("Open {}", launcher.label)
            on:dblclick=open
        >
            <span class="launcher-glyph">
                <ShellIcon icon=icon_for_id(launcher.icon_id) size=IconSize::Lg />
            </span>
            <span class="launcher-label">{launcher.label}</span>
        </button>
    }
}
