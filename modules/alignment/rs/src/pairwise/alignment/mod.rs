pub use alignment::Alignment;
pub use assemble::assemble;
pub use column::Column;
pub use op::Op;
pub use step::Step;

mod alignment;
mod assemble;
mod column;
mod op;
pub mod step;
