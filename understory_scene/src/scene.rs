// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: node storage, sibling lists, transforms.

use alloc::{vec, vec::Vec};
use kurbo::{Affine, Rect};

use crate::stats::SceneStats;
use crate::types::{NodeContent, NodeId, NodeKind};
use crate::util::transform_rect_bbox;

/// A retained scene of typed nodes.
///
/// Nodes live in a generational arena. Every node owns an ordered list of
/// children stored as a doubly linked sibling list, so moving a child to the
/// start or end of its parent's list, or next to another sibling, is O(1).
///
/// Nodes are created detached with [`Scene::insert`] and attached with one of
/// the linking operations ([`Scene::append_child`], [`Scene::prepend_child`],
/// [`Scene::insert_after`], [`Scene::insert_before`]). Linking a node that
/// already has a parent moves it. [`Scene::remove`] destroys a node together
/// with its subtree; [`Scene::detach`] only unlinks it.
///
/// ## Example
///
/// ```rust
/// use kurbo::Affine;
/// use understory_scene::{NodeContent, Scene};
///
/// let mut scene = Scene::new();
/// let root = scene.insert(NodeContent::Group);
/// let a = scene.insert(NodeContent::Transform);
/// let b = scene.insert(NodeContent::Transform);
/// scene.append_child(root, a);
/// scene.append_child(root, b);
///
/// // Move `a` behind `b`.
/// scene.append_child(root, a);
/// assert_eq!(scene.first_child(root), Some(b));
/// assert_eq!(scene.last_child(root), Some(a));
///
/// scene.set_transform(a, Affine::translate((10.0, 0.0)));
/// assert_eq!(scene.world_transform(a), Some(Affine::translate((10.0, 0.0))));
/// ```
#[derive(Default)]
pub struct Scene {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    stats: SceneStats,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Scene")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
    child_count: usize,
    transform: Affine,
    content: NodeContent,
}

impl Node {
    fn new(generation: u32, content: NodeContent) -> Self {
        Self {
            generation,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            child_count: 0,
            transform: Affine::IDENTITY,
            content,
        }
    }
}

/// Iterator over the children of a node, in sibling order.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    scene: &'a Scene,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.scene.node(current).next_sibling;
        Some(current)
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new detached node with the given payload.
    pub fn insert(&mut self, content: NodeContent) -> NodeId {
        self.stats.created += 1;
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, content));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, content)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        NodeId::new(idx, generation)
    }

    /// Destroy a node and its whole subtree, unlinking it from its parent.
    ///
    /// Stale identifiers are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.unlink(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let mut child = self.node(current).first_child;
            while let Some(c) = child {
                child = self.node(c).next_sibling;
                stack.push(c);
            }
            self.nodes[current.idx()] = None;
            self.free_list.push(current.idx());
            self.stats.destroyed += 1;
        }
    }

    /// Unlink a node from its parent without destroying it.
    pub fn detach(&mut self, id: NodeId) {
        if self.is_alive(id) {
            self.unlink(id);
        }
    }

    /// Link `child` as the last child of `parent`, moving it if it is already linked.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.can_link(parent, child) {
            return;
        }
        self.unlink(child);
        let old_last = self.node(parent).last_child;
        {
            let c = self.node_mut(child);
            c.parent = Some(parent);
            c.prev_sibling = old_last;
        }
        match old_last {
            Some(last) => self.node_mut(last).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
        let p = self.node_mut(parent);
        p.last_child = Some(child);
        p.child_count += 1;
    }

    /// Link `child` as the first child of `parent`, moving it if it is already linked.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.can_link(parent, child) {
            return;
        }
        self.unlink(child);
        let old_first = self.node(parent).first_child;
        {
            let c = self.node_mut(child);
            c.parent = Some(parent);
            c.next_sibling = old_first;
        }
        match old_first {
            Some(first) => self.node_mut(first).prev_sibling = Some(child),
            None => self.node_mut(parent).last_child = Some(child),
        }
        let p = self.node_mut(parent);
        p.first_child = Some(child);
        p.child_count += 1;
    }

    /// Link `node` directly after `anchor` in the anchor's parent.
    ///
    /// Does nothing if `anchor` has no parent.
    pub fn insert_after(&mut self, node: NodeId, anchor: NodeId) {
        if node == anchor || !self.is_alive(anchor) {
            return;
        }
        let Some(parent) = self.node(anchor).parent else {
            return;
        };
        if !self.can_link(parent, node) {
            return;
        }
        self.unlink(node);
        let next = self.node(anchor).next_sibling;
        {
            let n = self.node_mut(node);
            n.parent = Some(parent);
            n.prev_sibling = Some(anchor);
            n.next_sibling = next;
        }
        self.node_mut(anchor).next_sibling = Some(node);
        match next {
            Some(next) => self.node_mut(next).prev_sibling = Some(node),
            None => self.node_mut(parent).last_child = Some(node),
        }
        self.node_mut(parent).child_count += 1;
    }

    /// Link `node` directly before `anchor` in the anchor's parent.
    ///
    /// Does nothing if `anchor` has no parent.
    pub fn insert_before(&mut self, node: NodeId, anchor: NodeId) {
        if node == anchor || !self.is_alive(anchor) {
            return;
        }
        let Some(parent) = self.node(anchor).parent else {
            return;
        };
        if !self.can_link(parent, node) {
            return;
        }
        self.unlink(node);
        let prev = self.node(anchor).prev_sibling;
        {
            let n = self.node_mut(node);
            n.parent = Some(parent);
            n.prev_sibling = prev;
            n.next_sibling = Some(anchor);
        }
        self.node_mut(anchor).prev_sibling = Some(node);
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = Some(node),
            None => self.node_mut(parent).first_child = Some(node),
        }
        self.node_mut(parent).child_count += 1;
    }

    /// Destroy every child of `parent`.
    pub fn remove_all_children(&mut self, parent: NodeId) {
        while let Some(child) = self.first_child(parent) {
            self.remove(child);
        }
    }

    /// Destroy every sibling following `anchor`.
    ///
    /// With `anchor == None` all children of `parent` are destroyed.
    pub fn remove_children_after(&mut self, parent: NodeId, anchor: Option<NodeId>) {
        let Some(anchor) = anchor else {
            self.remove_all_children(parent);
            return;
        };
        debug_assert!(
            self.parent_of(anchor) == Some(parent),
            "anchor must be a child of parent"
        );
        while let Some(next) = self.next_sibling(anchor) {
            self.remove(next);
        }
    }

    /// Update the local transform of a node.
    pub fn set_transform(&mut self, id: NodeId, transform: Affine) {
        if let Some(n) = self.node_opt_mut(id) {
            n.transform = transform;
        }
    }

    /// Returns the local transform of a live node.
    pub fn transform(&self, id: NodeId) -> Option<Affine> {
        self.node_opt(id).map(|n| n.transform)
    }

    /// Returns the transform from a node's local space into the scene root space.
    pub fn world_transform(&self, id: NodeId) -> Option<Affine> {
        let node = self.node_opt(id)?;
        let mut transform = node.transform;
        let mut current = node.parent;
        while let Some(parent) = current {
            let p = self.node(parent);
            transform = p.transform * transform;
            current = p.parent;
        }
        Some(transform)
    }

    /// Returns the scene-space bounding box of a node's painted content.
    ///
    /// Grouping nodes have no painted content and return `None`.
    pub fn world_bounds(&self, id: NodeId) -> Option<Rect> {
        let bounds = self.node_opt(id)?.content.local_bounds()?;
        let transform = self.world_transform(id)?;
        Some(transform_rect_bbox(transform, bounds))
    }

    /// Returns the payload of a live node.
    pub fn content(&self, id: NodeId) -> Option<&NodeContent> {
        self.node_opt(id).map(|n| &n.content)
    }

    /// Returns the payload of a live node mutably.
    pub fn content_mut(&mut self, id: NodeId) -> Option<&mut NodeContent> {
        self.node_opt_mut(id).map(|n| &mut n.content)
    }

    /// Replace the payload of a live node.
    pub fn set_content(&mut self, id: NodeId, content: NodeContent) {
        if let Some(n) = self.node_opt_mut(id) {
            n.content = content;
        }
    }

    /// Returns the kind of a live node.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node_opt(id).map(|n| n.content.kind())
    }

    /// Returns the parent of a node if live, or `None` for detached or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Returns the first child of a node.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.first_child)
    }

    /// Returns the last child of a node.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.last_child)
    }

    /// Returns the sibling following a node.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.next_sibling)
    }

    /// Returns the sibling preceding a node.
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.prev_sibling)
    }

    /// Returns the number of children of a node, or zero if it is stale.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node_opt(id).map_or(0, |n| n.child_count)
    }

    /// Iterate the children of a node in sibling order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            scene: self,
            next: self.first_child(id),
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Returns the creation and destruction counters.
    pub fn stats(&self) -> SceneStats {
        self.stats
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    /// Both nodes are live, distinct, and `child` is not an ancestor of `parent`.
    fn can_link(&self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || !self.is_alive(parent) || !self.is_alive(child) {
            return false;
        }
        let mut current = self.node(parent).parent;
        while let Some(ancestor) = current {
            debug_assert_ne!(ancestor, child, "linking a node under its own descendant");
            if ancestor == child {
                return false;
            }
            current = self.node(ancestor).parent;
        }
        true
    }

    fn unlink(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let n = self.node_mut(id);
            let links = (n.parent, n.prev_sibling, n.next_sibling);
            n.parent = None;
            n.prev_sibling = None;
            n.next_sibling = None;
            links
        };
        let Some(parent) = parent else {
            return;
        };
        match prev {
            Some(prev) => self.node_mut(prev).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }
        self.node_mut(parent).child_count -= 1;
    }
}
