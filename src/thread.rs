use std::collections::HashMap;

use crate::entities::review;

/// Reviews of one movie arranged as a forest.
///
/// Nodes live in an arena keyed by review id; parent/child edges are kept in
/// an explicit index instead of being rediscovered from `parent_id`. A review
/// whose parent is missing (deleted, or never part of this movie) is a root.
#[derive(Clone, Debug, Default)]
pub struct ReviewThread {
    nodes: HashMap<i32, review::Model>,
    children: HashMap<i32, Vec<i32>>,
    roots: Vec<i32>,
}

impl ReviewThread {
    pub fn build(reviews: impl IntoIterator<Item = review::Model>) -> Self {
        let nodes: HashMap<i32, review::Model> = reviews.into_iter().map(|r| (r.id, r)).collect();

        let mut children: HashMap<i32, Vec<i32>> = HashMap::new();
        let mut roots = Vec::new();
        for node in nodes.values() {
            match node.parent_id.filter(|p| *p != node.id && nodes.contains_key(p)) {
                Some(parent) => children.entry(parent).or_default().push(node.id),
                None => roots.push(node.id),
            }
        }

        roots.sort_unstable();
        for ids in children.values_mut() {
            ids.sort_unstable();
        }

        Self { nodes, children, roots }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: i32) -> Option<&review::Model> {
        self.nodes.get(&id)
    }

    pub fn roots(&self) -> impl Iterator<Item = &review::Model> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn children(&self, id: i32) -> impl Iterator<Item = &review::Model> {
        self.children.get(&id).into_iter().flatten().filter_map(|id| self.nodes.get(id))
    }

    /// Depth-first walk yielding each review with its nesting depth.
    ///
    /// Nodes caught in a parent cycle are unreachable from any root and are
    /// not yielded.
    pub fn walk(&self) -> Vec<(usize, &review::Model)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, i32)> = self.roots.iter().rev().map(|id| (0, *id)).collect();

        while let Some((depth, id)) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            out.push((depth, node));
            if let Some(kids) = self.children.get(&id) {
                stack.extend(kids.iter().rev().map(|kid| (depth + 1, *kid)));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i32, parent_id: Option<i32>) -> review::Model {
        review::Model {
            id,
            email: format!("user{id}@example.com"),
            name: format!("user{id}"),
            text: "text".into(),
            parent_id,
            movie_id: 1,
        }
    }

    #[test]
    fn replies_nest_under_parents_in_id_order() {
        let thread = ReviewThread::build([
            review(4, Some(1)),
            review(1, None),
            review(2, Some(1)),
            review(3, None),
            review(5, Some(2)),
        ]);

        let roots: Vec<_> = thread.roots().map(|r| r.id).collect();
        assert_eq!(roots, [1, 3]);
        let kids: Vec<_> = thread.children(1).map(|r| r.id).collect();
        assert_eq!(kids, [2, 4]);

        let walk: Vec<_> = thread.walk().into_iter().map(|(d, r)| (d, r.id)).collect();
        assert_eq!(walk, [(0, 1), (1, 2), (2, 5), (1, 4), (0, 3)]);
    }

    #[test]
    fn orphans_become_roots() {
        let thread = ReviewThread::build([review(7, Some(99)), review(8, None)]);
        let roots: Vec<_> = thread.roots().map(|r| r.id).collect();
        assert_eq!(roots, [7, 8]);
        assert_eq!(thread.len(), 2);
    }

    #[test]
    fn cycles_do_not_loop_forever() {
        let thread = ReviewThread::build([review(1, Some(2)), review(2, Some(1)), review(3, Some(3))]);
        let walk: Vec<_> = thread.walk().into_iter().map(|(_, r)| r.id).collect();
        assert_eq!(walk, [3]);
        assert_eq!(thread.children(1).count(), 1);
    }
}
