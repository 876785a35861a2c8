//! Path reconstruction from SPF predecessor links

use crate::graph::{LinkStateDatabase, NodeIndex};

/// Walk predecessor links from `target` back to the root and return router
/// names in root-to-target order.
///
/// `predecessors[i]` is `None` for the root and for routers that were never
/// reached; callers only pass targets with a known distance.
pub fn reconstruct_path(
    db: &dyn LinkStateDatabase,
    predecessors: &[Option<NodeIndex>],
    target: NodeIndex,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(node) = current {
        path.push(db.name(node).to_string());
        current = predecessors.get(node.index()).copied().flatten();
    }

    path.reverse();
    path
}
