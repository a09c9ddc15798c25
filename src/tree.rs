//! Case-insensitive binary search tree with containment-based lookup.
//!
//! Words are ordered by their case-folded form. The first casing inserted for a
//! folded key is the one kept; later variants are ignored.
//!
//! Lookup is unusual: at every node on the way down it first checks whether
//! the query and the node's word contain one another, and stops there if so.
//! Otherwise it descends by ordinary comparison. Only the single descent path
//! is ever visited, so a word that contains the query but lies off that path
//! is not found.
//!
//! ```
//! use docsift::tree::SubstringSearchTree;
//!
//! let mut tree = SubstringSearchTree::new();
//! for word in ["mango", "apple", "zebra"] {
//!     tree.insert(word);
//! }
//!
//! let hit = tree.search("ZEB").unwrap();
//! assert_eq!(hit.word, "zebra");
//! assert_eq!(hit.depth, 1);
//! ```
//!
//! # Shared roots
//!
//! The root node lives behind an `Rc<RefCell<_>>`. Cloning a tree clones the
//! handle, not the nodes: both trees then see every later insertion made below
//! the shared root. History snapshots rely on this.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::analysis::fold_case;

/// A node of the search tree.
///
/// Sorted input produces a single long spine, so every walk over the nodes
/// (insertion, counting, comparison, dropping) uses a loop or an explicit
/// stack rather than recursion.
pub struct TreeNode {
    word: String,
    folded: String,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(word: &str) -> Self {
        TreeNode {
            word: word.to_string(),
            folded: fold_case(word),
            left: None,
            right: None,
        }
    }

    /// The stored word, in the casing it was first inserted with.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Left child.
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Right child.
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.left().into_iter().chain(self.right())
    }

    fn matches(&self, folded_query: &str) -> bool {
        self.folded.contains(folded_query) || folded_query.contains(self.folded.as_str())
    }

    fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            height = height.max(level);
            pending.extend(node.children().map(|child| (child, level + 1)));
        }
        height
    }

    fn collect_in_order(&self, out: &mut Vec<String>) {
        let mut pending: Vec<&TreeNode> = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            out.push(node.word.clone());
            current = node.right();
        }
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Detach children before they drop so no node ever drops a subtree.
        let mut pending: Vec<Box<TreeNode>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.word != b.word {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(x), Some(y)) => pending.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TreeNode {}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("word", &self.word)
            .field("left", &self.left().map(TreeNode::word))
            .field("right", &self.right().map(TreeNode::word))
            .finish()
    }
}

/// Inserts below `node`. Returns `true` when a new node was created.
fn insert_below(node: &mut TreeNode, word: &str, folded: &str) -> bool {
    let mut node = node;
    loop {
        let slot = match folded.cmp(node.folded.as_str()) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };

        match slot {
            Some(child) => node = &mut **child,
            None => {
                *slot = Some(Box::new(TreeNode::new(word)));
                return true;
            }
        }
    }
}

/// A successful tree lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeMatch {
    /// The stored word of the node that matched
    pub word: String,
    /// Number of edges between the root and the matching node
    pub depth: usize,
}

/// Binary search tree over case-folded words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstringSearchTree {
    root: Option<Rc<RefCell<TreeNode>>>,
}

impl SubstringSearchTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        SubstringSearchTree::default()
    }

    /// Insert a word.
    ///
    /// Returns `false`, leaving the tree untouched, when a word with the same
    /// case-folded form is already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let folded = fold_case(word);
        match &self.root {
            Some(root) => insert_below(&mut root.borrow_mut(), word, &folded),
            None => {
                self.root = Some(Rc::new(RefCell::new(TreeNode::new(word))));
                true
            }
        }
    }

    /// Look up `query` along its descent path.
    ///
    /// Returns the first node on the path whose folded word contains the
    /// folded query or is contained in it.
    pub fn search(&self, query: &str) -> Option<TreeMatch> {
        let folded_query = fold_case(query);
        let root = self.root.as_ref()?.borrow();

        let mut node: &TreeNode = &root;
        let mut depth = 0;
        loop {
            if node.matches(&folded_query) {
                return Some(TreeMatch {
                    word: node.word.clone(),
                    depth,
                });
            }

            let next = if folded_query.as_str() < node.folded.as_str() {
                node.left()
            } else {
                node.right()
            };
            node = next?;
            depth += 1;
        }
    }

    /// Run `f` against the root node, if any.
    ///
    /// The root stays borrowed while `f` runs, so `f` must not insert into
    /// any tree sharing this root.
    pub(crate) fn with_root<R>(&self, f: impl FnOnce(&TreeNode) -> R) -> Option<R> {
        self.root.as_ref().map(|root| f(&root.borrow()))
    }

    /// The word stored at the root.
    pub fn root_word(&self) -> Option<String> {
        self.with_root(|root| root.word.clone())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.with_root(TreeNode::len).unwrap_or(0)
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.with_root(TreeNode::height).unwrap_or(0)
    }

    /// Stored words in case-insensitive order.
    pub fn words_in_order(&self) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(root) = &self.root {
            root.borrow().collect_in_order(&mut words);
        }
        words
    }

    /// Check if both trees hold the same root node (not merely equal ones).
    pub fn shares_root_with(&self, other: &SubstringSearchTree) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
