//! Reducer actions and transition logic for the desktop window manager.

use thiserror::Error;

use crate::{
    focus::FocusChannel,
    model::{OpenWindowRequest, Point, Size, WindowId},
    registry::{WindowPatch, WindowRegistry},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate the shared registry and
/// the focus channel.
pub enum DesktopAction {
    /// Open a window from a launcher request; a no-op when a window with
    /// the same id is already registered.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id, removing its registry record.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack (click-to-front).
    RaiseWindow {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Raise a window and notify it to resync from its registry record
    /// (taskbar activation).
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Mirror a window's locally-held geometry into its registry record.
    SyncWindowGeometry {
        /// Window whose record should be patched.
        window_id: WindowId,
        /// Current top-left corner.
        position: Point,
        /// Current size.
        size: Size,
    },
    /// Consume the pending focus event addressed to a window.
    AcknowledgeFocus {
        /// Window that finished resyncing.
        window_id: WindowId,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference a missing window.
pub enum ReducerError {
    /// The target window id was not found in the registry.
    #[error("window not found")]
    WindowNotFound,
}

/// Applies a [`DesktopAction`] to the shared window-manager state.
///
/// This function is the authoritative transition engine: every mutation of
/// the registry or the focus channel flows through it, synchronously, on
/// the UI thread.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a
/// window that is not registered.
pub fn reduce_desktop(
    registry: &mut WindowRegistry,
    focus: &mut FocusChannel,
    action: DesktopAction,
) -> Result<(), ReducerError> {
    match action {
        DesktopAction::OpenWindow(request) => {
            let window_id = request.id;
            if !registry.insert(request.into_record()) {
                // Idempotent open: the launcher was double-activated while
                // its window is already on screen.
                return Ok(());
            }
            registry.bring_to_front(window_id);
            Ok(())
        }
        DesktopAction::CloseWindow { window_id } => {
            if !registry.remove(window_id) {
                return Err(ReducerError::WindowNotFound);
            }
            focus.take(window_id);
            Ok(())
        }
        DesktopAction::RaiseWindow { window_id } => registry
            .bring_to_front(window_id)
            .map(|_| ())
            .ok_or(ReducerError::WindowNotFound),
        DesktopAction::FocusWindow { window_id } => {
            registry
                .bring_to_front(window_id)
                .ok_or(ReducerError::WindowNotFound)?;
            focus.publish(window_id);
            Ok(())
        }
        DesktopAction::SyncWindowGeometry {
            window_id,
            position,
            size,
        } => {
            if registry.update(window_id, WindowPatch::geometry(position, size)) {
                Ok(())
            } else {
                Err(ReducerError::WindowNotFound)
            }
        }
        DesktopAction::AcknowledgeFocus { window_id } => {
            focus.take(window_id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, Z_INDEX_FLOOR};

    fn open(registry: &mut WindowRegistry, focus: &mut FocusChannel, id: u64) -> WindowId {
        let window_id = WindowId(id);
        reduce_desktop(
            registry,
            focus,
            DesktopAction::OpenWindow(OpenWindowRequest::new(window_id, AppId::Notepad)),
        )
        .expect("open window");
        window_id
    }

    #[test]
    fn open_registers_one_record_and_raises_it() {
        let mut registry = WindowRegistry::default();
        let mut focus = FocusChannel::default();

        let first = open(&mut registry, &mut focus, 1);
        let second = open(&mut registry, &mut focus, 2);

        assert_eq!(registry.len(), 2);
        let z_first = registry.get(first).expect("first").z_index;
        let z_second = registry.get(second).expect("second").z_index;
        assert!(z_first > Z_INDEX_FLOOR);
        assert!(z_second > z_first);
    }

    #[test]
    fn reopening_an_open_window_is_a_noop() {
        let mut registry = WindowRegistry::default();
        let mut focus = FocusChannel::default();

        let win = open(&mut registry, &mut focus, 1);
        let before = registry.list().to_vec();

        reduce_desktop(
            &mut registry,
            &mut focus,
            DesktopAction::OpenWindow(OpenWindowRequest::new(win, AppId::Explorer)),
        )
        .expect("idempotent open");

        assert_eq!(registry.list(), before.as_slice());
    }

    #[test]
    fn taskbar_focus_raises_above_other_windows_and_notifies() {
        let mut registry = WindowRegistry::default();
        let mut focus = FocusChannel::default();

        let a = open(&mut registry, &mut focus, 1);
        let b = open(&mut registry, &mut focus, 2);
        assert!(registry.get(b).expect("b").z_index > registry.get(a).expect("a").z_index);

        reduce_desktop(
            &mut registry,
            &mut focus,
            DesktopAction::FocusWindow { window_id: a },
        )
        .expect("focus a");

        assert!(registry.get(a).expect("a").z_index > registry.get(b).expect("b").z_index);
        assert!(focus.has_pending(a));
        assert!(!focus.has_pending(b));

        reduce_desktop(
            &mut registry,
            &mut focus,
            DesktopAction::AcknowledgeFocus { window_id: a },
        )
        .expect("ack");
        assert!(focus.is_empty());
    }

    #[test]
    fn close_removes_exactly_the_matching_record() {
        let mut registry = WindowRegistry::default();
        let mut focus = FocusChannel::default();

        let a = open(&mut registry, &mut focus, 1);
        let b = open(&mut registry, &mut focus, 2);
        let kept = registry.get(b).expect("b").clone();

        reduce_desktop(
            &mut registry,
            &mut focus,
            DesktopAction::CloseWindow { window_id: a },
        )
        .expect("close a");

        assert_eq!(registry.list(), std::slice::from_ref(&kept));
        assert_eq!(
            reduce_desktop(
                &mut registry,
                &mut focus,
                DesktopAction::CloseWindow { window_id: a },
            ),
            Err(ReducerError::WindowNotFound)
        );
    }

    #[test]
    fn closing_a_window_drops_its_pending_focus_event() {
        let mut registry = WindowRegistry::default();
        let mut focus = FocusChannel::default();

        let win = open(&mut registry, &mut focus, 1);
        reduce_desktop(
            &mut registry,
            &mut focus,
            DesktopAction::FocusWindow { window_id: win },
        )
        .expect("focus");
        reduce_desktop(
            &mut registry,
            &mut focus,
            DesktopAction::CloseWindow { window_id: win },
        )
        .expect("close");

        assert!(focus.is_empty());
    }

    #[test]
    fn geometry_sync_patches_the_registry_record() {
        let mut registry = WindowRegistry::default();
        let mut focus = FocusChannel::default();

        let win = open(&mut registry, &mut focus, 1);
        let position = Point { x: 64, y: 48 };
        let size = Size { w: 500, h: 320 };

        reduce_desktop(
            &mut registry,
            &mut focus,
            DesktopAction::SyncWindowGeometry {
                window_id: win,
                position,
                size,
            },
        )
        .expect("sync");

        let record = registry.get(win).expect("record");
        assert_eq!(record.position, position);
        assert_eq!(record.size, size);

        assert_eq!(
            reduce_desktop(
                &mut registry,
                &mut focus,
                DesktopAction::SyncWindowGeometry {
                    window_id: WindowId(9),
                    position,
                    size,
                },
            ),
            Err(ReducerError::WindowNotFound)
        );
    }
}
