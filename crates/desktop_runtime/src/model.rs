use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lowest z-index a managed window may occupy; bring-to-front never
/// produces a value at or below an existing one.
pub const Z_INDEX_FLOOR: i32 = 1000;
/// Height of the taskbar strip at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 50;

const CASCADE_STEP_PX: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppId {
    Notepad,
    Explorer,
}

impl AppId {
    pub fn name(self) -> &'static str {
        match self {
            Self::Notepad => "Notepad",
            Self::Explorer => "File Explorer",
        }
    }

    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Notepad => "notepad",
            Self::Explorer => "folder",
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            Self::Notepad => Size { w: 600, h: 400 },
            Self::Explorer => Size { w: 800, h: 600 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Default spawn position for a window: a cascading offset derived
    /// from its id so freshly opened windows do not stack exactly.
    pub fn cascade_for(id: WindowId) -> Self {
        let step = (id.0 as i32) * CASCADE_STEP_PX;
        Self { x: step, y: step }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub name: String,
    pub icon_id: String,
    pub launch_params: Value,
    pub position: Point,
    pub size: Size,
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub app_id: AppId,
    pub name: Option<String>,
    pub icon_id: Option<String>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub launch_params: Value,
}

impl OpenWindowRequest {
    pub fn new(id: WindowId, app_id: AppId) -> Self {
        Self {
            id,
            app_id,
            name: None,
            icon_id: None,
            position: None,
            size: None,
            launch_params: Value::Null,
        }
    }

    /// Resolves request defaults into a full registry record. The record
    /// starts at the z floor; the reducer raises it on insert.
    pub fn into_record(self) -> WindowRecord {
        WindowRecord {
            id: self.id,
            app_id: self.app_id,
            name: self.name.unwrap_or_else(|| self.app_id.name().to_string()),
            icon_id: self
                .icon_id
                .unwrap_or_else(|| self.app_id.icon_id().to_string()),
            launch_params: self.launch_params,
            position: self.position.unwrap_or_else(|| Point::cascade_for(self.id)),
            size: self.size.unwrap_or_else(|| self.app_id.default_size()),
            z_index: Z_INDEX_FLOOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub fn grows_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn grows_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn grows_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn grows_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }
}
