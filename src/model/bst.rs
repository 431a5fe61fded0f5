use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{OpError, OpResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(value: i64) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree without duplicates. Each child is owned by its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstModel {
    root: Option<Box<TreeNode>>,
    highlighted: Option<i64>,
}

impl BstModel {
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut tree = Self::default();
        for v in values {
            tree.insert(v);
        }
        tree
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        fn count(n: Option<&TreeNode>) -> usize {
            n.map_or(0, |n| 1 + count(n.left.as_deref()) + count(n.right.as_deref()))
        }
        count(self.root())
    }

    /// Value of the node marked by the last search, if it is still present.
    pub fn highlighted(&self) -> Option<i64> {
        self.highlighted.filter(|&v| self.contains(v))
    }

    /// Inserts `value`; returns `false` and leaves the tree untouched when the
    /// value is already present.
    pub fn insert(&mut self, value: i64) -> bool {
        fn insert_into(slot: &mut Option<Box<TreeNode>>, value: i64) -> bool {
            match slot {
                None => {
                    *slot = Some(TreeNode::leaf(value));
                    true
                }
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => insert_into(&mut node.left, value),
                    Ordering::Greater => insert_into(&mut node.right, value),
                    Ordering::Equal => false,
                },
            }
        }

        let inserted = insert_into(&mut self.root, value);
        if inserted {
            self.highlighted = None;
        }
        inserted
    }

    /// Removes `value`. A node with two children takes the value of its
    /// in-order successor.
    pub fn remove(&mut self, value: i64) -> OpResult<()> {
        if remove_from(&mut self.root, value) {
            self.highlighted = None;
            Ok(())
        } else {
            Err(OpError::NotFound { value, place: "tree" })
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.path_to(value).last() == Some(&value)
    }

    /// Marks `value` for the next render when present.
    pub fn search(&mut self, value: i64) -> bool {
        let found = self.contains(value);
        self.highlighted = found.then_some(value);
        found
    }

    /// Values compared while descending towards `value`, root first. Ends at
    /// `value` itself when it is present.
    pub fn path_to(&self, value: i64) -> Vec<i64> {
        let mut path = Vec::new();
        let mut cursor = self.root();
        while let Some(node) = cursor {
            path.push(node.value);
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => None,
            };
        }
        path
    }

    pub fn in_order(&self) -> Vec<i64> {
        fn walk(n: Option<&TreeNode>, out: &mut Vec<i64>) {
            if let Some(n) = n {
                walk(n.left.as_deref(), out);
                out.push(n.value);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(self.root(), &mut out);
        out
    }

    pub fn pre_order(&self) -> Vec<i64> {
        fn walk(n: Option<&TreeNode>, out: &mut Vec<i64>) {
            if let Some(n) = n {
                out.push(n.value);
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::new();
        walk(self.root(), &mut out);
        out
    }

    pub fn post_order(&self) -> Vec<i64> {
        fn walk(n: Option<&TreeNode>, out: &mut Vec<i64>) {
            if let Some(n) = n {
                walk(n.left.as_deref(), out);
                walk(n.right.as_deref(), out);
                out.push(n.value);
            }
        }
        let mut out = Vec::new();
        walk(self.root(), &mut out);
        out
    }
}

fn remove_from(slot: &mut Option<Box<TreeNode>>, value: i64) -> bool {
    let Some(node) = slot.as_mut() else {
        return false;
    };
    match value.cmp(&node.value) {
        Ordering::Less => return remove_from(&mut node.left, value),
        Ordering::Greater => return remove_from(&mut node.right, value),
        Ordering::Equal => {}
    }

    let Some(mut node) = slot.take() else {
        return false;
    };
    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            match take_min(&mut right) {
                Some(successor) => Some(Box::new(TreeNode {
                    value: successor,
                    left: Some(left),
                    right,
                })),
                None => Some(left),
            }
        }
    };
    true
}

/// Detaches the smallest node of the subtree and returns its value.
fn take_min(slot: &mut Option<Box<TreeNode>>) -> Option<i64> {
    if slot.as_ref()?.left.is_some() {
        return take_min(&mut slot.as_mut()?.left);
    }
    let mut node = slot.take()?;
    *slot = node.right.take();
    Some(node.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut t = BstModel::from_values([50, 30, 70]);
        let before = t.clone();
        assert!(!t.insert(30));
        assert_eq!(t, before);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_in_order_is_sorted() {
        let t = BstModel::from_values([41, 20, 65, 11, 29, 50, 91, 32, 72, 99, 20, 65]);
        let values = t.in_order();
        assert!(is_sorted(&values));
        assert_eq!(values.len(), 10);
    }

    #[test]
    fn test_traversal_orders() {
        let t = BstModel::from_values([50, 30, 70, 20, 40]);
        assert_eq!(t.in_order(), vec![20, 30, 40, 50, 70]);
        assert_eq!(t.pre_order(), vec![50, 30, 20, 40, 70]);
        assert_eq!(t.post_order(), vec![20, 40, 30, 70, 50]);
    }

    #[test]
    fn test_remove_cases() {
        let mut t = BstModel::from_values([50, 30, 70, 20, 40, 60, 80, 65]);

        // leaf
        t.remove(20).unwrap();
        assert_eq!(t.in_order(), vec![30, 40, 50, 60, 65, 70, 80]);

        // one child
        t.remove(60).unwrap();
        assert_eq!(t.in_order(), vec![30, 40, 50, 65, 70, 80]);

        // two children, root
        t.remove(50).unwrap();
        assert_eq!(t.root().map(|n| n.value), Some(65));
        assert_eq!(t.in_order(), vec![30, 40, 65, 70, 80]);

        assert_eq!(t.remove(50), Err(OpError::NotFound { value: 50, place: "tree" }));
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn test_search_and_path() {
        let mut t = BstModel::from_values([50, 30, 70, 40]);
        assert_eq!(t.path_to(40), vec![50, 30, 40]);
        assert_eq!(t.path_to(45), vec![50, 30, 40]);
        assert!(t.search(40));
        assert_eq!(t.highlighted(), Some(40));
        assert!(!t.search(45));
        assert_eq!(t.highlighted(), None);
    }
}
