pub use engine::{align_global, Engine, EngineBuilder};
pub use matrix::{fill, Matrix, ScoreMatrix, Tables, Trace, TraceMatrix};
pub use traceback::{enumerate, Path, Paths};

// Needleman-Wunsch style global alignment that keeps every co-optimal traceback:
// the matrix is filled row-by-row, then the trace bits are walked back from the
// bottom-right cell, forking the path at every tie.
mod engine;
pub mod matrix;
pub mod traceback;
