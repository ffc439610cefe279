use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{debug, instrument, warn};

use crate::domain::error::{DomainError, DomainResult, Side};

/// Stable handle to a room stored in a [`RoomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(Index);

/// A location in the mansion.
#[derive(Debug)]
pub struct Room {
    name: String,
    /// Room owning this one, None for the root and for detached rooms
    parent: Option<RoomId>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<RoomId> {
        self.parent
    }

    pub fn left(&self) -> Option<RoomId> {
        self.left
    }

    pub fn right(&self) -> Option<RoomId> {
        self.right
    }

    pub fn child(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-based binary tree of rooms.
///
/// Rooms are addressed by generational indices, so a handle to a released
/// room never resolves to a different room later on. Every child has
/// exactly one parent; [`attach_left`](Self::attach_left) and
/// [`attach_right`](Self::attach_right) refuse edges that would break that.
#[derive(Debug)]
pub struct RoomTree {
    /// Arena storage for all rooms
    rooms: Arena<Room>,
    /// Entry room, None for empty trees
    root: Option<RoomId>,
}

impl Default for RoomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomTree {
    pub fn new() -> Self {
        Self {
            rooms: Arena::new(),
            root: None,
        }
    }

    /// Creates a childless room. The first room created becomes the root.
    ///
    /// The name is copied into storage reserved fallibly, so running out of
    /// memory surfaces as [`DomainError::Allocation`] instead of aborting.
    #[instrument(level = "trace", skip(self))]
    pub fn create_room(&mut self, name: &str) -> DomainResult<RoomId> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(name.len())
            .map_err(|_| DomainError::Allocation { len: name.len() })?;
        owned.push_str(name);

        let id = RoomId(self.rooms.insert(Room {
            name: owned,
            parent: None,
            left: None,
            right: None,
        }));
        if self.root.is_none() {
            self.root = Some(id);
        }
        Ok(id)
    }

    /// Makes an existing parentless room the entry point of the tree.
    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, id: RoomId) -> DomainResult<()> {
        let room = self.room(id)?;
        if let Some(parent) = room.parent {
            return Err(DomainError::AlreadyAttached {
                child: room.name.clone(),
                parent: self.room(parent)?.name.clone(),
            });
        }
        self.root = Some(id);
        Ok(())
    }

    pub fn attach_left(&mut self, parent: RoomId, child: RoomId) -> DomainResult<()> {
        self.attach(parent, child, Side::Left)
    }

    pub fn attach_right(&mut self, parent: RoomId, child: RoomId) -> DomainResult<()> {
        self.attach(parent, child, Side::Right)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: RoomId, child: RoomId, side: Side) -> DomainResult<()> {
        let parent_room = self.room(parent)?;
        let child_room = self.room(child)?;

        if let Some(existing) = parent_room.child(side) {
            return Err(DomainError::SlotOccupied {
                parent: parent_room.name.clone(),
                side,
                existing: self.room(existing)?.name.clone(),
            });
        }
        if self.is_ancestor(child, parent) {
            return Err(DomainError::CycleDetected {
                parent: parent_room.name.clone(),
                child: child_room.name.clone(),
            });
        }
        if self.root == Some(child) {
            return Err(DomainError::RootAttached(child_room.name.clone()));
        }
        if let Some(owner) = child_room.parent {
            return Err(DomainError::AlreadyAttached {
                child: child_room.name.clone(),
                parent: self.room(owner)?.name.clone(),
            });
        }

        if let Some(room) = self.rooms.get_mut(parent.0) {
            match side {
                Side::Left => room.left = Some(child),
                Side::Right => room.right = Some(child),
            }
        }
        if let Some(room) = self.rooms.get_mut(child.0) {
            room.parent = Some(parent);
        }
        Ok(())
    }

    /// True if `ancestor` is `node` itself or lies on its parent chain.
    #[instrument(level = "trace", skip(self))]
    pub fn is_ancestor(&self, ancestor: RoomId, node: RoomId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|room| room.parent);
        }
        false
    }

    /// True if `child` is the direct left or right child of `parent`.
    pub fn is_child_of(&self, parent: RoomId, child: RoomId) -> bool {
        self.get(parent)
            .map(|room| room.left == Some(child) || room.right == Some(child))
            .unwrap_or(false)
    }

    /// Releases every room, children before parents, and returns the count.
    ///
    /// Calling it on an empty or already destroyed tree releases nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn destroy(&mut self) -> usize {
        let order: Vec<RoomId> = self.iter_postorder().map(|(id, _)| id).collect();
        let mut released = 0;
        for id in order {
            if self.rooms.remove(id.0).is_some() {
                released += 1;
            }
        }

        let detached = self.rooms.drain().count();
        if detached > 0 {
            warn!("released {} rooms never attached to the tree", detached);
        }
        self.root = None;

        debug!("released {} rooms", released + detached);
        released + detached
    }

    pub fn root(&self) -> Option<RoomId> {
        self.root
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room(&self, id: RoomId) -> DomainResult<&Room> {
        self.get(id).ok_or(DomainError::UnknownRoom(id))
    }

    pub fn name(&self, id: RoomId) -> Option<&str> {
        self.get(id).map(Room::name)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> RoomIterator<'_> {
        RoomIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Number of rooms on the longest root-to-leaf path.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(RoomId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, level)) = stack.pop() {
            if let Some(room) = self.get(id) {
                deepest = deepest.max(level);
                stack.extend(room.left.map(|c| (c, level + 1)));
                stack.extend(room.right.map(|c| (c, level + 1)));
            }
        }
        deepest
    }

    /// Names of all leaf rooms, left to right.
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, room)| room.is_leaf())
            .map(|(_, room)| room.name.clone())
            .collect()
    }
}

/// Pre-order traversal, left before right.
pub struct RoomIterator<'a> {
    tree: &'a RoomTree,
    stack: Vec<RoomId>,
}

impl<'a> RoomIterator<'a> {
    fn new(tree: &'a RoomTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for RoomIterator<'a> {
    type Item = (RoomId, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if let Some(room) = self.tree.get(id) {
                // Push right first so left is visited first
                self.stack.extend(room.right);
                self.stack.extend(room.left);
                return Some((id, room));
            }
        }
        None
    }
}

/// Post-order traversal: both children before their parent.
pub struct PostOrderIterator<'a> {
    tree: &'a RoomTree,
    stack: Vec<(RoomId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a RoomTree) -> Self {
        Self {
            tree,
            stack: tree.root().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (RoomId, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, visited)) = self.stack.pop() {
            if let Some(room) = self.tree.get(id) {
                if visited {
                    return Some((id, room));
                }
                self.stack.push((id, true));
                self.stack.extend(room.right.map(|c| (c, false)));
                self.stack.extend(room.left.map(|c| (c, false)));
            }
        }
        None
    }
}
