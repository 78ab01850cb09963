use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values are signed primitive integers, suitable for alignment scores.
/// Gap penalties are negative, so unsigned types can't be used here.
pub trait Score: PrimInt + ::num::Signed + Send + Sync {}

impl<T: PrimInt + ::num::Signed + Send + Sync> Score for T {}
