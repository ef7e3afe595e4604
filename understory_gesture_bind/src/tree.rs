// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element tree access.
//!
//! The binding layer never owns the UI tree. It asks an [`ElementTree`] which
//! keys are elements and who their parents are; [`ParentMap`] is a ready-made
//! implementation for hosts without one.
//!
//! ```
//! use understory_gesture_bind::tree::{ElementTree, ParentMap, bubble_path, is_descendant_or_self};
//!
//! let mut tree = ParentMap::new();
//! tree.insert_root(1_u32);
//! tree.insert(2, 1);
//! tree.insert(3, 2);
//!
//! assert_eq!(bubble_path(&tree, 3), vec![3, 2, 1]);
//! assert!(is_descendant_or_self(&tree, 3, 1));
//! assert!(!is_descendant_or_self(&tree, 1, 3));
//! assert!(!tree.contains(&9));
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// Parent lookup over the host's elements.
///
/// Parent chains must end; a cycle makes ancestor walks loop forever.
pub trait ElementTree<K> {
    /// Returns `true` if `node` is an element that can be bound.
    fn contains(&self, node: &K) -> bool;

    /// Parent of `node`, or `None` at a root.
    fn parent(&self, node: &K) -> Option<K>;
}

/// An [`ElementTree`] backed by a child-to-parent map.
#[derive(Clone, Debug)]
pub struct ParentMap<K> {
    parents: HashMap<K, Option<K>>,
}

impl<K> Default for ParentMap<K> {
    fn default() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ParentMap<K> {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root element.
    pub fn insert_root(&mut self, node: K) {
        self.parents.insert(node, None);
    }

    /// Add `node` under `parent`, or move it there.
    pub fn insert(&mut self, node: K, parent: K) {
        self.parents.insert(node, Some(parent));
    }

    /// Remove `node`. Its children keep pointing at it.
    pub fn remove(&mut self, node: &K) -> bool {
        self.parents.remove(node).is_some()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if the tree has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl<K: Copy + Eq + Hash> ElementTree<K> for ParentMap<K> {
    fn contains(&self, node: &K) -> bool {
        self.parents.contains_key(node)
    }

    fn parent(&self, node: &K) -> Option<K> {
        self.parents.get(node).copied().flatten()
    }
}

/// `node` followed by each of its ancestors up to the root.
pub fn bubble_path<K: Copy, T: ElementTree<K> + ?Sized>(tree: &T, node: K) -> Vec<K> {
    let mut path = Vec::new();
    let mut cur = Some(node);
    while let Some(n) = cur {
        path.push(n);
        cur = tree.parent(&n);
    }
    path
}

/// Returns `true` if `node` is `ancestor` or lies below it.
pub fn is_descendant_or_self<K, T>(tree: &T, node: K, ancestor: K) -> bool
where
    K: Copy + Eq,
    T: ElementTree<K> + ?Sized,
{
    let mut cur = Some(node);
    while let Some(n) = cur {
        if n == ancestor {
            return true;
        }
        cur = tree.parent(&n);
    }
    false
}

/// The first element on `node`'s bubble path that satisfies `pred`.
pub fn nearest_ancestor_or_self<K, T>(tree: &T, node: K, mut pred: impl FnMut(&K) -> bool) -> Option<K>
where
    K: Copy,
    T: ElementTree<K> + ?Sized,
{
    let mut cur = Some(node);
    while let Some(n) = cur {
        if pred(&n) {
            return Some(n);
        }
        cur = tree.parent(&n);
    }
    None
}
