//! Maximum independent set via min cut on the grid's checkerboard bipartition.
//!
//! Colour the grid like a checkerboard: U holds cells with even `row + col`,
//! V the rest. No two cells of the same colour are adjacent. Build a network
//!
//! ```text
//! s --value(u)--> u --unbounded--> v --value(v)--> t     (u, v grid-adjacent)
//! ```
//!
//! A finite s–t cut is a vertex cover of the grid graph (every adjacency path
//! must lose its `s→u` or `v→t` edge), so the maximum independent-set value is
//! `total − min cut = total − max flow`.
//!
//! Every augmenting path in the initial network has the shape `s → u → v → t`,
//! three hops. The solver first runs one sweep over U in row-major order that
//! pushes `min(residual(u), residual(v))` along each `u → v` edge (neighbours
//! visited up, left, right, down). On many grids this sweep already saturates
//! a minimum cut. It does not always: on `[[1, 1, 1], [1, 0, 0]]` the sweep
//! routes the top-left cell's unit through its right neighbour, and the only
//! remaining path then has to reverse that choice
//! (`s → u → v ← u' → v' → t`). The sweep is therefore followed by a
//! breadth-first completion over the residual network, where `u → v` edges
//! are unbounded and `v → u` edges carry at most the flow already pushed along
//! `u → v`. When the sweep is maximal the completion finds nothing.
//!
//! This layout (4-neighbour grid, per-cell source and sink capacities, the
//! fixed neighbour order) is the only network this module handles; it is not
//! a general bipartite max-flow routine.
//!
//! The caller's grid is never touched: residual capacities live in a buffer
//! owned by the solve.

use crate::error::GridError;
use crate::grid::Grid;
use crate::selection::Selection;
use crate::utils::is_source_side;
use std::collections::VecDeque;

/// Neighbour directions in sweep order: up, left, right, down.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const UNVISITED: usize = usize::MAX;

/// Everything learned from one flow solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowOutcome {
    /// Sum of all cell values.
    pub total_value: u64,
    /// Flow pushed by the greedy sweep.
    pub sweep_flow: u64,
    /// Additional flow pushed by residual augmenting paths.
    pub completion_flow: u64,
    /// Number of augmenting paths found after the sweep.
    pub augmenting_paths: usize,
    /// Optimal cells, read off the source side of the final residual network.
    pub selection: Selection,
}

impl FlowOutcome {
    /// Total flow, equal to the minimum cut.
    pub fn max_flow(&self) -> u64 {
        self.sweep_flow + self.completion_flow
    }

    /// Maximum independent-set value.
    pub fn max_value(&self) -> u64 {
        self.total_value - self.max_flow()
    }

    /// The value the sweep alone would report; never below [`Self::max_value`].
    pub fn sweep_estimate(&self) -> u64 {
        self.total_value - self.sweep_flow
    }
}

/// Min-cut solver for the grid independent-set problem.
#[derive(Clone, Copy, Debug, Default)]
pub struct BipartiteFlow;

impl BipartiteFlow {
    pub fn new() -> Self {
        Self
    }

    pub fn max_value(&self, grid: &Grid) -> u64 {
        self.solve(grid).max_value()
    }

    pub fn solve(&self, grid: &Grid) -> FlowOutcome {
        let mut net = Residual::new(grid);
        let sweep_flow = {
            #[cfg(feature = "tracing")]
            let _sweep = tracing::trace_span!("flow_sweep", rows = grid.rows(), cols = grid.cols())
                .entered();
            net.sweep()
        };

        let mut completion_flow = 0;
        let mut augmenting_paths = 0;
        let mut parent = vec![UNVISITED; grid.rows() * grid.cols()];
        {
            #[cfg(feature = "tracing")]
            let _complete = tracing::trace_span!("flow_complete", sweep_flow).entered();
            while let Some(sink_side) = net.search(&mut parent) {
                completion_flow += net.augment(&parent, sink_side);
                augmenting_paths += 1;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(completion_flow, augmenting_paths, "grid flow saturated");
        }

        // The failed search left `parent` marking the source side of the cut.
        let selection = net.cut_selection(&parent);
        FlowOutcome {
            total_value: grid.total(),
            sweep_flow,
            completion_flow,
            augmenting_paths,
            selection,
        }
    }
}

/// Residual network state for one solve.
struct Residual {
    rows: usize,
    cols: usize,
    /// Remaining `s → u` capacity for U cells, `v → t` capacity for V cells.
    cap: Vec<u64>,
    /// Flow on `u → v`, indexed `cell(u) * 4 + direction`. Only U slots are used.
    flow: Vec<u64>,
}

impl Residual {
    fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cap: grid.cells().to_vec(),
            flow: vec![0; grid.cells().len() * DIRECTIONS.len()],
        }
    }

    #[inline]
    fn neighbour(&self, cell: usize, dir: usize) -> Option<usize> {
        let (r, c) = ((cell / self.cols) as isize, (cell % self.cols) as isize);
        let (dr, dc) = DIRECTIONS[dir];
        let (nr, nc) = (r + dr, c + dc);
        if nr < 0 || nc < 0 || nr >= self.rows as isize || nc >= self.cols as isize {
            return None;
        }
        Some(nr as usize * self.cols + nc as usize)
    }

    #[inline]
    fn is_u(&self, cell: usize) -> bool {
        is_source_side(cell / self.cols, cell % self.cols)
    }

    /// Direction index of `to` as seen from the adjacent cell `from`.
    fn direction(&self, from: usize, to: usize) -> usize {
        (0..DIRECTIONS.len())
            .find(|&d| self.neighbour(from, d) == Some(to))
            .unwrap_or_else(|| unreachable!("cells {from} and {to} are not adjacent"))
    }

    /// One greedy pass over every `s → u → v → t` path.
    fn sweep(&mut self) -> u64 {
        let mut pushed = 0;
        for r in 0..self.rows {
            for c in (r % 2..self.cols).step_by(2) {
                let u = r * self.cols + c;
                for dir in 0..DIRECTIONS.len() {
                    if let Some(v) = self.neighbour(u, dir) {
                        let f = self.cap[u].min(self.cap[v]);
                        if f > 0 {
                            self.cap[u] -= f;
                            self.cap[v] -= f;
                            self.flow[u * DIRECTIONS.len() + dir] += f;
                            pushed += f;
                        }
                    }
                }
            }
        }
        pushed
    }

    /// Breadth-first search for an augmenting path.
    ///
    /// Returns the V cell with spare sink capacity that ends the path. On
    /// failure every cell reachable from the source is marked in `parent`.
    fn search(&self, parent: &mut [usize]) -> Option<usize> {
        parent.fill(UNVISITED);
        let mut queue = VecDeque::new();
        for cell in 0..self.cap.len() {
            if self.is_u(cell) && self.cap[cell] > 0 {
                parent[cell] = cell;
                queue.push_back(cell);
            }
        }
        while let Some(x) = queue.pop_front() {
            for dir in 0..DIRECTIONS.len() {
                let Some(y) = self.neighbour(x, dir) else {
                    continue;
                };
                if parent[y] != UNVISITED {
                    continue;
                }
                if self.is_u(x) {
                    parent[y] = x;
                    if self.cap[y] > 0 {
                        return Some(y);
                    }
                    queue.push_back(y);
                } else if self.flow[y * DIRECTIONS.len() + self.direction(y, x)] > 0 {
                    parent[y] = x;
                    queue.push_back(y);
                }
            }
        }
        None
    }

    /// Push the bottleneck along the path ending at `last`; returns the amount.
    fn augment(&mut self, parent: &[usize], last: usize) -> u64 {
        let width = DIRECTIONS.len();

        let mut f = self.cap[last];
        let mut v = last;
        let root = loop {
            let u = parent[v];
            if parent[u] == u {
                break u;
            }
            let prev = parent[u];
            f = f.min(self.flow[u * width + self.direction(u, prev)]);
            v = prev;
        };
        f = f.min(self.cap[root]);
        debug_assert!(f > 0, "augmenting path without residual capacity");

        self.cap[last] -= f;
        self.cap[root] -= f;
        let mut v = last;
        loop {
            let u = parent[v];
            let forward = u * width + self.direction(u, v);
            self.flow[forward] += f;
            if parent[u] == u {
                break;
            }
            let prev = parent[u];
            let cancelled = u * width + self.direction(u, prev);
            self.flow[cancelled] -= f;
            v = prev;
        }
        f
    }

    /// Complement of the minimum vertex cover: reachable U plus unreachable V.
    fn cut_selection(&self, reachable: &[usize]) -> Selection {
        let mut sel = Selection::empty(self.rows, self.cols);
        for (cell, &p) in reachable.iter().enumerate() {
            if self.is_u(cell) == (p != UNVISITED) {
                sel.select(cell / self.cols, cell % self.cols);
            }
        }
        sel
    }
}

/// Validate nested rows and run the flow solver on a private copy.
pub(crate) fn solve_rows<R: AsRef<[i64]>>(
    rows: usize,
    cols: usize,
    matrix: &[R],
) -> Result<FlowOutcome, GridError> {
    let grid = Grid::from_shape(rows, cols, matrix)?;
    Ok(BipartiteFlow.solve(&grid))
}
