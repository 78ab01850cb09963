use derive_getters::{Dissolve, Getters};

use super::matrix::TraceMatrix;

/// Matrix cells visited by one traceback, from the bottom-right corner to a border cell.
pub type Path = Vec<(usize, usize)>;

#[derive(Clone, Eq, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct Paths {
    paths: Vec<Path>,
    /// True if the enumeration was stopped by the limit before all paths were found
    truncated: bool,
}

impl Paths {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Enumerate every path through the trace matrix from the bottom-right cell to the border.
///
/// The walk continues in place into the first predecessor (diagonal, left, up) and forks a copy
/// of the current prefix for every other tied predecessor. Forks are kept on an explicit stack,
/// so paths are reported depth-first in the priority order of their branching directions.
/// At most `limit` paths are reported if the limit is set.
pub fn enumerate(trace: &TraceMatrix, limit: Option<usize>) -> Paths {
    let start = (trace.rows() - 1, trace.cols() - 1);
    let capacity = trace.rows() + trace.cols();

    let mut paths = Vec::new();
    let mut stack: Vec<(Path, (usize, usize))> = vec![(Vec::with_capacity(capacity), start)];

    while let Some((mut path, (mut row, mut col))) = stack.pop() {
        if limit.is_some_and(|limit| paths.len() >= limit) {
            return Paths {
                paths,
                truncated: true,
            };
        }

        loop {
            path.push((row, col));

            let mut predecessors = trace.at(row, col).predecessors(row, col);
            let Some(next) = predecessors.next() else {
                break;
            };

            // Reversed to pop the forks in the priority order
            let forks: Vec<_> = predecessors.collect();
            for cell in forks.into_iter().rev() {
                stack.push((path.clone(), cell));
            }
            (row, col) = next;
        }
        paths.push(path);
    }

    Paths {
        paths,
        truncated: false,
    }
}
