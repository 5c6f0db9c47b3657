use super::{Cost, Element, Path};
use hashbrown::HashMap;
use log::{debug, trace};
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

/// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The Generic type Parameter `Id` is supposed to uniquely identify a Node in the Graph.
/// This may be a Number, a char, a Grid position, ... as long as it can be compared, hashed and copied.
///
/// The search stops as soon as the shortest Path to `goal` is known, or when all reachable Nodes
/// have been expanded.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::generics::dijkstra_search;
/// // A     B--2--E
/// // |\
/// // | \
/// // 1  9
/// // |   \
/// // |    \
/// // C--6--D
/// let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// let cost_matrix: [[f64; 5]; 5] = [
/// //    A,    B,    C,    D,    E
///     [-1.0, -1.0,  1.0,  9.0, -1.0], // A
///     [-1.0, -1.0, -1.0, -1.0,  2.0], // B
///     [ 1.0, -1.0, -1.0,  6.0, -1.0], // C
///     [ 9.0, -1.0,  6.0, -1.0, -1.0], // D
///     [-1.0,  2.0, -1.0, -1.0, -1.0], // E
/// ];
///
/// let get_all_neighbors = |point: usize| {
///     cost_matrix[point]
///         .iter()
///         .enumerate()
///         .filter(|&(_, cost)| *cost >= 0.0)
///         .map(|(id, cost)| (id, *cost))
///         .collect::<Vec<_>>()
/// };
///
/// let path = dijkstra_search(get_all_neighbors, A, D).unwrap();
/// assert_eq!(path.path, vec![A, C, D]);
/// assert_eq!(path.cost, 7.0);
///
/// // if the Goal is not reachable, there is no Path
/// assert!(dijkstra_search(get_all_neighbors, A, E).is_none());
/// ```
///
/// ## Arguments
/// - `get_all_neighbors` - a Function that takes a Node and returns all other Nodes reachable from that Node.
///     The returned value is a Tuple of the `Id` of the neighbor and the Cost to get there.
///     Costs must not be negative.
/// - `start` - the starting Node
/// - `goal` - the Node to search for
///
/// ## Returns
/// the shortest Path to `goal`, if it is reachable.
/// The first Node in the Path is always `start` and the last is `goal`.
pub fn dijkstra_search<Id, NeighborIter>(
    mut get_all_neighbors: impl FnMut(Id) -> NeighborIter,
    start: Id,
    goal: Id,
) -> Option<Path<Id>>
where
    Id: Copy + Eq + Hash + Debug,
    NeighborIter: IntoIterator<Item = (Id, Cost)>,
{
    let mut search = Search::new(start);
    let result = search
        .run(&mut get_all_neighbors, Some(goal))
        .map(|cost| Path::new(search.steps_to(goal), cost));

    debug!(
        "search {:?} -> {:?}: {} after expanding {} nodes",
        start,
        goal,
        match &result {
            Some(path) => format!("cost {}", path.cost),
            None => "unreachable".to_string(),
        },
        search.expanded,
    );
    result
}

/// Calculates the minimum Cost from `start` to every reachable Node of a Graph using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// Works like [`dijkstra_search`], but never stops early.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use level_pathfinding::generics::dijkstra_search_all;
/// // 'a' --1.5--> 'b' --2.0--> 'c'    'd'
/// let get_all_neighbors = |node: char| match node {
///     'a' => vec![('b', 1.5)],
///     'b' => vec![('c', 2.0)],
///     _ => vec![],
/// };
///
/// let costs = dijkstra_search_all(get_all_neighbors, 'a');
///
/// assert_eq!(costs[&'a'], 0.0);
/// assert_eq!(costs[&'c'], 3.5);
/// // unreachable Nodes have no entry
/// assert!(!costs.contains_key(&'d'));
/// ```
///
/// ## Returns
/// a HashMap with every reachable Node as the Key and the Cost of the shortest Path to it as Value.
pub fn dijkstra_search_all<Id, NeighborIter>(
    mut get_all_neighbors: impl FnMut(Id) -> NeighborIter,
    start: Id,
) -> HashMap<Id, Cost>
where
    Id: Copy + Eq + Hash + Debug,
    NeighborIter: IntoIterator<Item = (Id, Cost)>,
{
    let mut search = Search::new(start);
    search.run(&mut get_all_neighbors, None);

    debug!(
        "search {:?} -> all: {} nodes reachable after expanding {} nodes",
        start,
        search.dist.len(),
        search.expanded,
    );
    search.dist
}

/// The state of a single search. Created fresh for every invocation.
struct Search<Id> {
    start: Id,
    dist: HashMap<Id, Cost>,
    prev: HashMap<Id, Id>,
    next: BinaryHeap<Element<Id>>,
    expanded: usize,
}

impl<Id: Copy + Eq + Hash + Debug> Search<Id> {
    fn new(start: Id) -> Search<Id> {
        let mut dist = HashMap::new();
        dist.insert(start, 0.0);
        let mut next = BinaryHeap::new();
        next.push(Element(start, 0.0));
        Search {
            start,
            dist,
            prev: HashMap::new(),
            next,
            expanded: 0,
        }
    }

    /// Expands Nodes in order of their Cost until `goal` is popped or the frontier is empty.
    ///
    /// Returns the Cost of `goal` if it was reached.
    fn run<NeighborIter>(
        &mut self,
        get_all_neighbors: &mut impl FnMut(Id) -> NeighborIter,
        goal: Option<Id>,
    ) -> Option<Cost>
    where
        NeighborIter: IntoIterator<Item = (Id, Cost)>,
    {
        while let Some(Element(current_id, current_cost)) = self.next.pop() {
            // stale entry, a cheaper one was already expanded
            if current_cost > self.dist[&current_id] {
                continue;
            }
            self.expanded += 1;
            trace!("expanding {:?} at cost {}", current_id, current_cost);

            if goal == Some(current_id) {
                return Some(current_cost);
            }

            for (other_id, delta_cost) in get_all_neighbors(current_id) {
                debug_assert!(
                    delta_cost >= 0.0,
                    "negative edge cost {} from {:?} to {:?}",
                    delta_cost,
                    current_id,
                    other_id,
                );
                let other_cost = current_cost + delta_cost;

                let improves = match self.dist.get(&other_id) {
                    Some(&prev_cost) => other_cost < prev_cost,
                    None => true,
                };
                if improves {
                    self.dist.insert(other_id, other_cost);
                    self.prev.insert(other_id, current_id);
                    self.next.push(Element(other_id, other_cost));
                }
            }
        }
        None
    }

    /// Walks the predecessors back from `goal` to `start`.
    fn steps_to(&self, goal: Id) -> Vec<Id> {
        let mut steps = vec![];
        let mut current = goal;

        while current != self.start {
            steps.push(current);
            current = self.prev[&current];
        }
        steps.push(self.start);
        steps.reverse();
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 --1--> 1 --1--> 2
    //  \               ^
    //   -------5-------|
    fn line(node: u32) -> Vec<(u32, Cost)> {
        match node {
            0 => vec![(2, 5.0), (1, 1.0)],
            1 => vec![(2, 1.0), (0, 1.0)],
            2 => vec![(1, 1.0)],
            _ => vec![],
        }
    }

    #[test]
    fn prefers_cheaper_detour() {
        let path = dijkstra_search(line, 0, 2).unwrap();
        assert_eq!(path.path, vec![0, 1, 2]);
        assert_eq!(path.cost, 2.0);
    }

    #[test]
    fn start_is_goal() {
        let path = dijkstra_search(line, 1, 1).unwrap();
        assert_eq!(path.path, vec![1]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn unreachable_goal() {
        assert!(dijkstra_search(line, 0, 7).is_none());
    }

    #[test]
    fn all_costs() {
        let costs = dijkstra_search_all(line, 0);
        assert_eq!(costs.len(), 3);
        assert_eq!(costs[&0], 0.0);
        assert_eq!(costs[&1], 1.0);
        assert_eq!(costs[&2], 2.0);
    }

    #[test]
    fn finalized_nodes_are_expanded_once() {
        use std::cell::RefCell;

        let calls = RefCell::new(Vec::new());
        let costs = dijkstra_search_all(
            |node| {
                calls.borrow_mut().push(node);
                line(node)
            },
            0,
        );
        assert_eq!(costs.len(), 3);

        let mut calls = calls.into_inner();
        calls.sort_unstable();
        assert_eq!(calls, vec![0, 1, 2]);
    }

    #[test]
    fn zero_cost_edges() {
        let get_all_neighbors = |node: u8| match node {
            0 => vec![(1, 0.0)],
            1 => vec![(0, 0.0), (2, 0.0)],
            _ => vec![],
        };
        let path = dijkstra_search(get_all_neighbors, 0, 2).unwrap();
        assert_eq!(path.path, vec![0, 1, 2]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    #[should_panic(expected = "negative edge cost")]
    #[cfg(debug_assertions)]
    fn negative_cost_is_rejected() {
        let get_all_neighbors = |node: u8| match node {
            0 => vec![(1, -1.0)],
            _ => vec![],
        };
        dijkstra_search_all(get_all_neighbors, 0);
    }
}
