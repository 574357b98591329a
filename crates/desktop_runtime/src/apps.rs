//! Built-in launcher catalog and app body mounting.

use leptos::*;
use serde_json::{json, Value};

use desktop_app_explorer::ExplorerApp;
use desktop_app_notepad::NotepadApp;

use crate::model::{AppId, OpenWindowRequest, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static description of one desktop launcher icon.
pub struct LauncherDescriptor {
    pub window_id: WindowId,
    pub app_id: AppId,
    pub label: &'static str,
    pub icon_id: &'static str,
    initial_folder: Option<&'static str>,
}

impl LauncherDescriptor {
    /// Builds the open request dispatched on double-activation.
    pub fn open_request(&self) -> OpenWindowRequest {
        let mut request = OpenWindowRequest::new(self.window_id, self.app_id);
        request.name = Some(self.label.to_string());
        request.icon_id = Some(self.icon_id.to_string());
        if let Some(folder) = self.initial_folder {
            request.launch_params = json!({ "folder": folder });
        }
        request
    }
}

/// The launcher icons shown on the desktop surface, in grid order.
pub fn desktop_launchers() -> Vec<LauncherDescriptor> {
    vec![
        LauncherDescriptor {
            window_id: WindowId(1),
            app_id: AppId::Notepad,
            label: "Notepad",
            icon_id: "notepad",
            initial_folder: None,
        },
        LauncherDescriptor {
            window_id: WindowId(2),
            app_id: AppId::Explorer,
            label: "Documents",
            icon_id: "folder",
            initial_folder: Some("documents"),
        },
        LauncherDescriptor {
            window_id: WindowId(3),
            app_id: AppId::Explorer,
            label: "Downloads",
            icon_id: "folder",
            initial_folder: Some("downloads"),
        },
        LauncherDescriptor {
            window_id: WindowId(4),
            app_id: AppId::Explorer,
            label: "Recycle Bin",
            icon_id: "recycle-bin",
            initial_folder: Some("recycle-bin"),
        },
    ]
}

/// Mounts the app body for a window record's app id.
pub fn mount_app_body(app_id: AppId, launch_params: Value) -> View {
    match app_id {
        AppId::Notepad => view! { <NotepadApp launch_params=launch_params /> }.into_view(),
        AppId::Explorer => view! { <ExplorerApp launch_params=launch_params /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn launcher_ids_are_unique() {
        let launchers = desktop_launchers();
        let mut ids: Vec<_> = launchers.iter().map(|l| l.window_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), launchers.len());
    }

    #[test]
    fn folder_launchers_carry_their_initial_folder() {
        let request = desktop_launchers()
            .into_iter()
            .find(|l| l.label == "Recycle Bin")
            .expect("recycle bin launcher")
            .open_request();

        assert_eq!(request.app_id, AppId::Explorer);
        assert_eq!(
            request.launch_params.get("folder").and_then(Value::as_str),
            Some("recycle-bin")
        );
    }
}
