use std::collections::HashMap;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{RoomId, RoomTree, Side};

/// Conversion of a room tree into a printable `termtree` layout.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for RoomTree {
    /// Builds the layout bottom-up from a post-order walk, so deep trees
    /// need no recursion.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let mut built: HashMap<RoomId, Tree<String>> = HashMap::new();
        let mut top = None;

        for (id, room) in self.iter_postorder() {
            let side = room.parent().and_then(|parent| {
                let parent = self.get(parent)?;
                match (parent.left(), parent.right()) {
                    (Some(left), _) if left == id => Some(Side::Left),
                    (_, Some(right)) if right == id => Some(Side::Right),
                    _ => None,
                }
            });
            let label = match side {
                Some(Side::Left) => format!("[L] {}", room.name()),
                Some(Side::Right) => format!("[R] {}", room.name()),
                None => room.name().to_string(),
            };

            let mut node = Tree::new(label);
            for child in [room.left(), room.right()].into_iter().flatten() {
                if let Some(subtree) = built.remove(&child) {
                    node.push(subtree);
                }
            }
            if Some(id) == self.root() {
                top = Some(node);
            } else {
                built.insert(id, node);
            }
        }

        top.unwrap_or_else(|| Tree::new("Empty map".to_string()))
    }
}
