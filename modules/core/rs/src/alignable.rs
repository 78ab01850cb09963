use crate::alphabet::EncodedSequence;

/// Indexed access to the symbols of a sequence that takes part in an alignment.
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol;

    /// Returns true if the object is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the object.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        (self as &[Self::Symbol]).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl Alignable for EncodedSequence {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.codes().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.codes()[pos]
    }
}
