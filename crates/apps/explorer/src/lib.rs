//! File-explorer desktop app over a static mock file tree.

mod fs_tree;

pub use fs_tree::{count_nodes, find_node, sample_file_tree, ExplorerState, FsNode, FsNodeKind};

use leptos::*;
use serde_json::Value;

#[component]
/// Explorer app window contents: a collapsible folder tree scoped by the
/// launcher's initial folder.
pub fn ExplorerApp(
    /// App launch parameters (optional `folder` id to start expanded).
    launch_params: Value,
) -> impl IntoView {
    let initial_folder = launch_params
        .get("folder")
        .and_then(Value::as_str)
        .unwrap_or("desktop")
        .to_string();

    let state = create_rw_signal(ExplorerState::with_expanded(&initial_folder));
    let tree = sample_file_tree();
    let header_label = find_node(&tree, &initial_folder)
        .map(|node| node.name)
        .unwrap_or("Desktop");
    let total_items = count_nodes(&tree);

    let rendered_tree = {
        let tree = tree.clone();
        move || {
            let snapshot = state.get();
            render_nodes(&tree, 0, &snapshot, state)
        }
    };

    view! {
        <div class="app-explorer">
            <div class="explorer-header">
                <div class="explorer-title">{header_label}</div>
                <div class="explorer-path">{format!("Location: {initial_folder}")}</div>
            </div>

            <div class="explorer-tree" role="tree" aria-label="Folders">
                {rendered_tree}
            </div>

            <div class="explorer-statusbar">
                <span>{format!("{total_items} item(s)")}</span>
            </div>
        </div>
    }
}

fn render_nodes(
    nodes: &[FsNode],
    depth: usize,
    snapshot: &ExplorerState,
    state: RwSignal<ExplorerState>,
) -> View {
    let mut rows = Vec::new();
    for node in nodes {
        let indent = format!("padding-left:{}px;", depth * 20);
        match node.kind {
            FsNodeKind::Folder => {
                let id = node.id;
                let expanded = snapshot.is_expanded(id);
                rows.push(
                    view! {
                        <button
                            type="button"
                            class="fs-row fs-folder"
                            style=indent
                            role="treeitem"
                            aria-expanded=expanded.to_string()
                            on:click=move |_| state.update(|s| s.toggle(id))
                        >
                            <span class="tree-glyph">{if expanded { "[-]" } else { "[+]" }}</span>
                            <span>{node.name}</span>
                        </button>
                    }
                    .into_view(),
                );
                if expanded {
                    rows.push(render_nodes(&node.children, depth + 1, snapshot, state));
                }
            }
            FsNodeKind::File => {
                let class_name = if node.id == "recycle-bin" {
                    "fs-row fs-file fs-recycle"
                } else {
                    "fs-row fs-file"
                };
                rows.push(
                    view! {
                        <div class=class_name style=indent role="treeitem">
                            <span>{node.name}</span>
                        </div>
                    }
                    .into_view(),
                );
            }
        }
    }
    rows.collect_view()
}
