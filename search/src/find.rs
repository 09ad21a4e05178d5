use std::{
    collections::VecDeque,
    fmt::{Debug, Display},
    ops::Deref,
};

/// Supertrait that collects all the requirements on the NodeReference values
/// Must be copy, comparable and not references (hence 'static)
pub trait NodeReference: Copy + Eq + Debug + 'static {}

pub trait MapTrait {
    /// The type that can be used to reference nodes in the map
    type Reference: NodeReference;

    /// The type that the map uses for storage
    type Storage<T: Default + Copy + 'static>: MapStorage<T, Reference = Self::Reference>;

    /// Check if the provided node reference is valid
    fn is_valid(&self, node: Self::Reference) -> bool;

    /// Return an iterator over the neighbors of the provided node.
    /// The order must be the same every time, it decides which of several equally short paths is
    /// returned.
    fn neighbors_of(&self, node: Self::Reference) -> impl Iterator<Item = Self::Reference>;

    /// Create a storage for values of type T
    fn create_storage<T: Default + Copy + 'static>(&self) -> Self::Storage<T>;
}

pub trait MapStorage<T> {
    type Reference: NodeReference;

    fn get(&self, node: Self::Reference) -> T;
    fn get_mut(&mut self, node: Self::Reference) -> &mut T;
}

#[derive(Clone, Copy, Debug)]
pub struct VisitedItem<R> {
    /// number of moves from the start
    pub moves: usize,
    pub from: Option<R>,
}

#[derive(Clone, Copy, Debug)]
pub struct Visited<R>(Option<VisitedItem<R>>);

impl<R> Default for Visited<R> {
    fn default() -> Self {
        Visited(None)
    }
}
impl<R> Deref for Visited<R> {
    type Target = Option<VisitedItem<R>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<R> Display for Visited<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(item) => write!(f, "{:02} ", item.moves),
            None => write!(f, " . "),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult<R> {
    pub path: Vec<R>,
    pub start: R,
    pub goal: R,
    pub moves: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathFinderState<R> {
    Computing,
    NoPathFound,
    PathFound(PathResult<R>),
}

impl<R> PathFinderState<R> {
    pub fn is_done(&self) -> bool {
        !matches!(self, PathFinderState::Computing)
    }
}

/// Breadth-first search from `start` to `goal` that can be advanced one node at a time.
///
/// Every edge has the same cost, so the first time the goal leaves the frontier its parent chain
/// is a shortest path. Nodes are marked as visited when they are first discovered, so each node
/// enters the frontier at most once.
#[derive(Debug)]
pub struct PathFinder<
    R: NodeReference,
    S: MapStorage<Visited<R>, Reference = R>,
    M: MapTrait<Reference = R, Storage<Visited<R>> = S>,
> {
    start: R,
    goal: R,
    visited: S,
    frontier: VecDeque<R>,
    state: PathFinderState<R>,
    _map: std::marker::PhantomData<M>,
}

impl<
        R: NodeReference,
        S: MapStorage<Visited<R>, Reference = R>,
        M: MapTrait<Reference = R, Storage<Visited<R>> = S>,
    > PathFinder<R, S, M>
{
    pub fn new(start: R, goal: R, mut visited: S) -> Self {
        *visited.get_mut(start) = Visited(Some(VisitedItem {
            moves: 0,
            from: None,
        }));

        Self {
            start,
            goal,
            visited,
            frontier: VecDeque::from([start]),
            state: PathFinderState::Computing,
            _map: std::marker::PhantomData,
        }
    }

    pub fn finish(mut self, map: &M) -> (PathFinderState<R>, S) {
        loop {
            match self.step(map) {
                PathFinderState::Computing => {}
                s => return (s, self.visited),
            }
        }
    }

    pub fn step(&mut self, map: &M) -> PathFinderState<R> {
        if self.state.is_done() {
            return self.state.clone();
        }

        let Some(current) = self.frontier.pop_front() else {
            self.state = PathFinderState::NoPathFound;
            return self.state.clone();
        };

        let moves = self.visited.get(current).map_or(0, |item| item.moves);

        if current == self.goal {
            log::debug!(
                "found goal {:?} from {:?} in {} moves",
                self.goal,
                self.start,
                moves
            );

            self.state = PathFinderState::PathFound(PathResult {
                path: self.backtrack(),
                start: self.start,
                goal: self.goal,
                moves,
            });
            return self.state.clone();
        }

        for next in map.neighbors_of(current) {
            if self.visited.get(next).is_none() {
                *self.visited.get_mut(next) = Visited(Some(VisitedItem {
                    moves: moves + 1,
                    from: Some(current),
                }));
                self.frontier.push_back(next);
            }
        }

        self.state.clone()
    }

    /// Walk the parent links from the goal back to the start
    fn backtrack(&self) -> Vec<R> {
        let mut path: Vec<R> = vec![self.goal];

        let mut previous_visit = self.visited.get(self.goal);

        loop {
            previous_visit = match previous_visit {
                Visited(Some(VisitedItem { from: None, .. })) => {
                    // only the start has no parent
                    break;
                }
                Visited(Some(VisitedItem {
                    from: Some(from), ..
                })) => {
                    path.push(from);
                    self.visited.get(from)
                }
                Visited(None) => {
                    panic!("Backtracking lead to a node that was never visited")
                }
            }
        }

        path.reverse();
        path
    }

    pub fn state(&self) -> &PathFinderState<R> {
        &self.state
    }

    pub fn get_visited(&self) -> &S {
        &self.visited
    }

    pub fn start(&self) -> R {
        self.start
    }

    pub fn goal(&self) -> R {
        self.goal
    }
}
