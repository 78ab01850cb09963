pub use alignable::Alignable;
pub use alphabet::{Alphabet, EncodedSequence};

mod alignable;
pub mod alphabet;
pub mod num;
