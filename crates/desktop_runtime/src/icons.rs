//! Centralized icon abstraction for the desktop shell.
//!
//! Semantic icon identifiers plus a single SVG renderer so shell
//! components do not embed ad-hoc SVG snippets. The catalog uses a subset
//! of Fluent UI System Icons (regular 24px) mapped to shell semantics.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Text document / notepad icon.
    DocumentText,
    /// Explorer / folder icon.
    ExplorerFolder,
    /// Recycle-bin icon.
    RecycleBin,
    /// Taskbar home glyph.
    Launcher,
    /// Window maximize control icon.
    WindowMaximize,
    /// Window restore control icon.
    WindowRestore,
    /// Dismiss/close icon.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::DocumentText => "document-text",
            Self::ExplorerFolder => "explorer-folder",
            Self::RecycleBin => "recycle-bin",
            Self::Launcher => "launcher",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Raw SVG body markup for the icon.
    fn svg_body(self) -> &'static str {
        match self {
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::ExplorerFolder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::RecycleBin => {
                r#"<path d="M12 1.75c1.16 0 2.11.88 2.24 2l.01.25h5a.75.75 0 0 1 .1 1.5h-1.07l-1.09 12.91a3.25 3.25 0 0 1-3.24 2.98H10.05a3.25 3.25 0 0 1-3.24-2.98L5.72 5.5H4.75a.75.75 0 0 1-.1-1.5h5.1c0-1.24 1.01-2.25 2.25-2.25Zm6.78 3.75H5.22l1.08 12.78c.08.91.84 1.6 1.75 1.6h7.9c.91 0 1.67-.69 1.75-1.6L18.78 5.5ZM10.5 8.75c.38 0 .7.28.74.65l.01.1v7a.75.75 0 0 1-1.5.1v-7.1c0-.41.34-.75.75-.75Zm3 0c.38 0 .7.28.74.65l.01.1v7a.75.75 0 0 1-1.5.1v-7.1c0-.41.34-.75.75-.75ZM12 3.25c-.38 0-.7.28-.74.65l-.01.1h1.5c0-.41-.34-.75-.75-.75Z"/>"#
            }
            Self::Launcher => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h4.5v6.75H4.5v-5Zm6.25 6.5V19.5h-4.5c-.97 0-1.75-.78-1.75-1.75v-5h6.25Zm1.5 6.75v-6.75h7.25v5c0 .97-.78 1.75-1.75 1.75h-5.5Zm7.25-8.25h-7.25V4.5h5.5c.97 0 1.75.78 1.75 1.75v5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (window controls).
    Xs,
    /// 16px standard icon (titlebar/taskbar).
    #[default]
    Sm,
    /// 24px large icon (desktop launchers).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Lg => 24,
        }
    }
}

/// Maps a registry `icon_id` token to its catalog icon.
pub fn icon_for_id(icon_id: &str) -> IconName {
    match icon_id {
        "folder" => IconName::ExplorerFolder,
        "recycle-bin" => IconName::RecycleBin,
        _ => IconName::DocumentText,
    }
}

#[component]
/// Renders a catalog icon as inline SVG.
pub fn ShellIcon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Rendered size.
    #[prop(default = IconSize::default())]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();
    view! {
        <svg
            class="shell-icon"
            data-icon=icon.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
