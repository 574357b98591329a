//! Mock file-system tree and folder-expansion state for the explorer.
//!
//! The tree is static demo data; nothing here touches a real file system.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsNodeKind {
    Folder,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsNode {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: FsNodeKind,
    pub children: Vec<FsNode>,
}

impl FsNode {
    fn folder(id: &'static str, name: &'static str, children: Vec<FsNode>) -> Self {
        Self {
            id,
            name,
            kind: FsNodeKind::Folder,
            children,
        }
    }

    fn file(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            kind: FsNodeKind::File,
            children: Vec::new(),
        }
    }
}

/// The demo tree shown by every explorer window.
pub fn sample_file_tree() -> Vec<FsNode> {
    vec![
        FsNode::folder(
            "desktop",
            "Desktop",
            vec![FsNode::file("recycle-bin", "Recycle Bin")],
        ),
        FsNode::folder(
            "documents",
            "Documents",
            vec![
                FsNode::folder("work", "Work", vec![FsNode::file("work-notes", "Work.txt")]),
                FsNode::folder(
                    "personal",
                    "Personal",
                    vec![FsNode::file("personal-notes", "Personal2.txt")],
                ),
            ],
        ),
        FsNode::folder(
            "downloads",
            "Downloads",
            vec![
                FsNode::file("music", "Music.mp3"),
                FsNode::file("document", "Document.docx"),
            ],
        ),
        FsNode::folder("pictures", "Pictures", Vec::new()),
    ]
}

/// Total node count across the whole tree.
pub fn count_nodes(nodes: &[FsNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

/// Depth-first lookup by node id.
pub fn find_node<'a>(nodes: &'a [FsNode], id: &str) -> Option<&'a FsNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Which folders are currently expanded in one explorer window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerState {
    expanded: BTreeSet<String>,
}

impl ExplorerState {
    /// Starts with `folder` expanded (the launcher's initial folder).
    pub fn with_expanded(folder: &str) -> Self {
        let mut state = Self::default();
        state.expanded.insert(folder.to_string());
        state
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn collect_ids(nodes: &[FsNode], out: &mut Vec<&'static str>) {
        for node in nodes {
            out.push(node.id);
            collect_ids(&node.children, out);
        }
    }

    #[test]
    fn tree_ids_are_unique() {
        let tree = sample_file_tree();
        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn count_covers_every_nested_node() {
        let tree = sample_file_tree();
        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        assert_eq!(count_nodes(&tree), ids.len());
    }

    #[test]
    fn find_node_reaches_nested_files() {
        let tree = sample_file_tree();
        let node = find_node(&tree, "work-notes").expect("nested file");
        assert_eq!(node.name, "Work.txt");
        assert_eq!(node.kind, FsNodeKind::File);
        assert!(find_node(&tree, "missing").is_none());
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = ExplorerState::default();
        assert!(!state.is_expanded("documents"));

        state.toggle("documents");
        assert!(state.is_expanded("documents"));

        state.toggle("documents");
        assert!(!state.is_expanded("documents"));
    }

    #[test]
    fn initial_folder_starts_expanded() {
        let state = ExplorerState::with_expanded("downloads");
        assert!(state.is_expanded("downloads"));
        assert!(!state.is_expanded("documents"));
    }
}
