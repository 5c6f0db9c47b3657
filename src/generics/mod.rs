//! A Module for generic implementations.
//!
//! This Module is the Backend for the Grid functions in [`grid`](crate::grid).
//! The search itself knows nothing about levels: any Graph can be searched, as long as its
//! Nodes can be compared, hashed and copied, and its Edges can be listed on demand.

mod path;
pub use self::path::Path;

mod dijkstra;
pub use self::dijkstra::{dijkstra_search, dijkstra_search_all};

use std::cmp::Ordering;

/// a Type to represent the Cost of traversing an Edge
pub type Cost = f64;

/// An entry of the frontier: a Node and the Cost it was reached with.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest Cost first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Element<Id>(pub Id, pub Cost);
impl<Id> PartialEq for Element<Id> {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl<Id> Eq for Element<Id> {}
impl<Id> PartialOrd for Element<Id> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl<Id> Ord for Element<Id> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Element;
    use std::collections::BinaryHeap;

    #[test]
    fn element_pops_cheapest() {
        let mut heap = BinaryHeap::new();
        heap.push(Element('b', 2.5));
        heap.push(Element('a', 0.5));
        heap.push(Element('c', 7.0));
        heap.push(Element('d', 1.0));

        let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|e| e.0)).collect();
        assert_eq!(order, vec!['a', 'd', 'b', 'c']);
    }
}
