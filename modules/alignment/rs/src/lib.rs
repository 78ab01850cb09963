pub use cooptimal_core_rs::num::Score;
pub use cooptimal_core_rs::{Alignable, Alphabet, EncodedSequence};
pub use pairwise::nw::align_global;

pub mod pairwise;
