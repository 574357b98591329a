use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{pointer_from_pointer_event, stop_mouse_event};
use crate::{
    apps,
    icons::{icon_for_id, IconName, IconSize, ShellIcon},
    model::{ResizeEdge, WindowId, Z_INDEX_FLOOR},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
    view_state::{DragSession, ResizeSession, WindowViewState},
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
/// One manipulable window: shared chrome (titlebar drag, maximize toggle,
/// close, resize handles, click-to-front) around an app body chosen by the
/// record's app id.
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    // Display metadata and launch params are immutable after creation;
    // read them once at mount.
    let record = match runtime
        .registry
        .with_untracked(|registry| registry.get(window_id).cloned())
    {
        Some(record) => record,
        None => return ().into_view(),
    };

    // Local geometry cache; the registry record stays canonical for z-order.
    let view_state = create_rw_signal(WindowViewState::from_record(&record));
    let drag = create_rw_signal(None::<DragSession>);
    let resizing = create_rw_signal(None::<ResizeSession>);

    let z_index = create_memo(move |_| {
        runtime
            .registry
            .with(|registry| registry.get(window_id).map(|record| record.z_index))
            .unwrap_or(Z_INDEX_FLOOR)
    });

    // Taskbar focus events: pull the registry geometry into the local
    // cache, then consume the event.
    create_effect(move |_| {
        if !runtime.focus.with(|channel| channel.has_pending(window_id)) {
            return;
        }
        if let Some(current) = runtime
            .registry
            .with_untracked(|registry| registry.get(window_id).cloned())
        {
            view_state.update(|view| view.sync_from_record(&current));
        }
        runtime.dispatch_action(DesktopAction::AcknowledgeFocus { window_id });
    });

    let raise = move || runtime.dispatch_action(DesktopAction::RaiseWindow { window_id });
    let sync_geometry = move || {
        let view = view_state.get_untracked();
        runtime.dispatch_action(DesktopAction::SyncWindowGeometry {
            window_id,
            position: view.position,
            size: view.size,
        });
    };

    let close = move || runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let toggle_maximize = move || {
        raise();
        let viewport = runtime.viewport.get_untracked();
        view_state.update(|view| view.toggle_maximize(viewport));
        sync_geometry();
    };

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if view_state.get_untracked().maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        raise();
        drag.set(Some(DragSession {
            pointer_start: pointer_from_pointer_event(&ev),
            origin: view_state.get_untracked().position,
        }));
    };
    let update_move = move |ev: web_sys::PointerEvent| {
        let Some(session) = drag.get_untracked() else {
            return;
        };
        let next = session.position_at(pointer_from_pointer_event(&ev));
        view_state.update(|view| view.position = next);
        raise();
        sync_geometry();
    };
    let end_move = move |_ev: web_sys::PointerEvent| {
        if drag.get_untracked().is_some() {
            drag.set(None);
        }
    };

    let style = move || {
        let view = view_state.get();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            view.position.x,
            view.position.y,
            view.size.w,
            view.size.h,
            z_index.get()
        )
    };
    let maximize_icon = move || {
        if view_state.get().maximized {
            IconName::WindowRestore
        } else {
            IconName::WindowMaximize
        }
    };
    let maximize_label = move || {
        if view_state.get().maximized {
            "Restore window"
        } else {
            "Maximize window"
        }
    };

    let body = apps::mount_app_body(record.app_id, record.launch_params.clone());
    let title = record.name.clone();
    let title_icon = icon_for_id(&record.icon_id);

    view! {
        <section
            class="desktop-window"
            class:maximized=move || view_state.get().maximized
            style=style
            role="dialog"
            aria-label=title.clone()
            on:pointerdown=move |_| raise()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:pointermove=update_move
                on:pointerup=end_move
                on:pointercancel=end_move
                on:dblclick=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-title">
                    <span class="titlebar-app-icon">
                        <ShellIcon icon=title_icon />
                    </span>
                    <span>{title.clone()}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        aria-label=maximize_label
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            toggle_maximize();
                        }
                    >
                        {move || view! { <ShellIcon icon=maximize_icon() size=IconSize::Xs /> }}
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            close();
                        }
                    >
                        <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                    </button>
                </div>
            </header>

            <div class="window-body">{body}</div>

            <Show when=move || !view_state.get().maximized fallback=|| ()>
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::North view_state=view_state resizing=resizing />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::South view_state=view_state resizing=resizing />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::East view_state=view_state resizing=resizing />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::West view_state=view_state resizing=resizing />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthEast view_state=view_state resizing=resizing />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthWest view_state=view_state resizing=resizing />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthEast view_state=view_state resizing=resizing />
                <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthWest view_state=view_state resizing=resizing />
            </Show>
        </section>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(
    window_id: WindowId,
    edge: ResizeEdge,
    view_state: RwSignal<WindowViewState>,
    resizing: RwSignal<Option<ResizeSession>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let begin = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::RaiseWindow { window_id });
        let view = view_state.get_untracked();
        resizing.set(Some(ResizeSession {
            edge,
            pointer_start: pointer_from_pointer_event(&ev),
            origin: view.position,
            size_start: view.size,
        }));
    };
    let update = move |ev: web_sys::PointerEvent| {
        let Some(session) = resizing.get_untracked() else {
            return;
        };
        let viewport = runtime.viewport.get_untracked();
        let pointer = pointer_from_pointer_event(&ev);
        view_state.update(|view| view.apply_resize(&session, pointer, viewport));
    };
    // The registry is patched once, on resize-stop.
    let finish = move |_ev: web_sys::PointerEvent| {
        if resizing.get_untracked().is_none() {
            return;
        }
        resizing.set(None);
        let view = view_state.get_untracked();
        runtime.dispatch_action(DesktopAction::SyncWindowGeometry {
            window_id,
            position: view.position,
            size: view.size,
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=begin
            on:pointermove=update
            on:pointerup=finish
            on:pointercancel=finish
        />
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
