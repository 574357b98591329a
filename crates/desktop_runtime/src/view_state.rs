//! Per-window local view state: the geometry cache each mounted window
//! keeps alongside its registry record, plus the drag/resize/maximize
//! transitions that mutate it.

use crate::model::{Point, ResizeEdge, Size, WindowRecord, TASKBAR_HEIGHT_PX};

/// Minimum width a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 200;
/// Minimum height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowViewState {
    pub position: Point,
    pub size: Size,
    pub prev_position: Point,
    pub prev_size: Size,
    pub maximized: bool,
}

/// Active titlebar drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_start: Point,
    pub origin: Point,
}

impl DragSession {
    /// Window position for the current pointer location.
    pub fn position_at(&self, pointer: Point) -> Point {
        self.origin.offset(
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        )
    }
}

/// Active edge/corner resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub pointer_start: Point,
    pub origin: Point,
    pub size_start: Size,
}

impl WindowViewState {
    pub fn from_record(record: &WindowRecord) -> Self {
        Self {
            position: record.position,
            size: record.size,
            prev_position: record.position,
            prev_size: record.size,
            maximized: false,
        }
    }

    /// Copies the registry record's geometry into the cache (focus-event
    /// resync).
    pub fn sync_from_record(&mut self, record: &WindowRecord) {
        self.position = record.position;
        self.size = record.size;
    }

    /// Toggles between Open-Normal and Open-Maximized. Entering maximize
    /// saves the current geometry and fills the viewport above the
    /// taskbar; exiting restores the saved geometry exactly.
    pub fn toggle_maximize(&mut self, viewport: Size) {
        if self.maximized {
            self.position = self.prev_position;
            self.size = self.prev_size;
            self.maximized = false;
        } else {
            self.prev_position = self.position;
            self.prev_size = self.size;
            self.position = Point::default();
            self.size = Size {
                w: viewport.w,
                h: viewport.h - TASKBAR_HEIGHT_PX,
            };
            self.maximized = true;
        }
    }

    /// Applies an in-progress resize, clamped between the minimum window
    /// size and the viewport. West/north edges keep the opposite corner
    /// anchored even when a dimension hits its bound.
    pub fn apply_resize(&mut self, session: &ResizeSession, pointer: Point, viewport: Size) {
        let dx = pointer.x - session.pointer_start.x;
        let dy = pointer.y - session.pointer_start.y;
        let edge = session.edge;

        let mut w = session.size_start.w;
        if edge.grows_east() {
            w += dx;
        } else if edge.grows_west() {
            w -= dx;
        }
        let mut h = session.size_start.h;
        if edge.grows_south() {
            h += dy;
        } else if edge.grows_north() {
            h -= dy;
        }

        w = w.clamp(MIN_WINDOW_WIDTH, viewport.w.max(MIN_WINDOW_WIDTH));
        h = h.clamp(MIN_WINDOW_HEIGHT, viewport.h.max(MIN_WINDOW_HEIGHT));

        let x = if edge.grows_west() {
            session.origin.x + (session.size_start.w - w)
        } else {
            session.origin.x
        };
        let y = if edge.grows_north() {
            session.origin.y + (session.size_start.h - h)
        } else {
            session.origin.y
        };

        self.position = Point { x, y };
        self.size = Size { w, h };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, OpenWindowRequest, WindowId};

    fn view_at(position: Point, size: Size) -> WindowViewState {
        let mut request = OpenWindowRequest::new(WindowId(1), AppId::Notepad);
        request.position = Some(position);
        request.size = Some(size);
        WindowViewState::from_record(&request.into_record())
    }

    #[test]
    fn maximize_fills_viewport_above_taskbar_and_restores_exactly() {
        let viewport = Size { w: 1280, h: 720 };
        let mut view = view_at(Point { x: 20, y: 20 }, Size { w: 600, h: 400 });

        view.toggle_maximize(viewport);
        assert!(view.maximized);
        assert_eq!(view.position, Point { x: 0, y: 0 });
        assert_eq!(
            view.size,
            Size {
                w: 1280,
                h: 720 - TASKBAR_HEIGHT_PX
            }
        );

        view.toggle_maximize(viewport);
        assert!(!view.maximized);
        assert_eq!(view.position, Point { x: 20, y: 20 });
        assert_eq!(view.size, Size { w: 600, h: 400 });
    }

    #[test]
    fn unmaximize_restores_geometry_saved_after_intervening_drags() {
        let viewport = Size { w: 1024, h: 768 };
        let mut view = view_at(Point { x: 20, y: 20 }, Size { w: 600, h: 400 });

        let drag = DragSession {
            pointer_start: Point { x: 100, y: 100 },
            origin: view.position,
        };
        view.position = drag.position_at(Point { x: 175, y: 160 });
        assert_eq!(view.position, Point { x: 95, y: 80 });

        view.toggle_maximize(viewport);
        view.toggle_maximize(viewport);
        assert_eq!(view.position, Point { x: 95, y: 80 });
        assert_eq!(view.size, Size { w: 600, h: 400 });
    }

    #[test]
    fn resize_clamps_to_minimum_and_viewport() {
        let viewport = Size { w: 800, h: 600 };
        let mut view = view_at(Point { x: 50, y: 50 }, Size { w: 300, h: 200 });
        let session = ResizeSession {
            edge: ResizeEdge::SouthEast,
            pointer_start: Point { x: 0, y: 0 },
            origin: view.position,
            size_start: view.size,
        };

        view.apply_resize(&session, Point { x: -5000, y: -5000 }, viewport);
        assert_eq!(
            view.size,
            Size {
                w: MIN_WINDOW_WIDTH,
                h: MIN_WINDOW_HEIGHT
            }
        );

        view.apply_resize(&session, Point { x: 5000, y: 5000 }, viewport);
        assert_eq!(view.size, viewport);
    }

    #[test]
    fn west_edge_resize_moves_origin_and_anchors_at_minimum() {
        let viewport = Size { w: 800, h: 600 };
        let mut view = view_at(Point { x: 100, y: 100 }, Size { w: 300, h: 200 });
        let session = ResizeSession {
            edge: ResizeEdge::West,
            pointer_start: Point { x: 0, y: 0 },
            origin: view.position,
            size_start: view.size,
        };

        view.apply_resize(&session, Point { x: 40, y: 0 }, viewport);
        assert_eq!(view.position, Point { x: 140, y: 100 });
        assert_eq!(view.size, Size { w: 260, h: 200 });

        // Pushing past the minimum keeps the east edge anchored at x = 400.
        view.apply_resize(&session, Point { x: 250, y: 0 }, viewport);
        assert_eq!(view.size.w, MIN_WINDOW_WIDTH);
        assert_eq!(view.position.x + view.size.w, 400);
    }

    #[test]
    fn north_corner_resize_adjusts_both_axes() {
        let viewport = Size { w: 800, h: 600 };
        let mut view = view_at(Point { x: 100, y: 100 }, Size { w: 300, h: 200 });
        let session = ResizeSession {
            edge: ResizeEdge::NorthEast,
            pointer_start: Point { x: 0, y: 0 },
            origin: view.position,
            size_start: view.size,
        };

        view.apply_resize(&session, Point { x: 30, y: -20 }, viewport);
        assert_eq!(view.position, Point { x: 100, y: 80 });
        assert_eq!(view.size, Size { w: 330, h: 220 });
    }
}
