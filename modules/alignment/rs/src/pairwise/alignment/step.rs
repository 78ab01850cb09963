use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use cooptimal_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical operations in the alignment
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// A step covering a single alignment column.
    pub fn unit(op: Op) -> Self {
        Self {
            len: Len::one(),
            op,
        }
    }

    /// Collapse identical consecutive operations into a single step.
    /// If the sum of the lengths exceeds the maximum value of the step size, the step is divided accordingly.
    pub fn collapse(steps: &mut Vec<Step<Len>>) {
        if steps.len() < 2 {
            return;
        }

        let (mut writep, mut readp) = (0, 1);

        while readp < steps.len() {
            if steps[writep].op == steps[readp].op {
                match steps[writep].len.checked_add(&steps[readp].len) {
                    Some(x) => steps[writep].len = x,
                    None => {
                        steps[readp].len =
                            steps[readp].len - (Len::max_value() - steps[writep].len);
                        debug_assert!(steps[readp].len > Len::zero());
                        steps[writep].len = Len::max_value();

                        writep += 1;
                        steps[writep] = steps[readp];
                    }
                }
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
            readp += 1;
        }
        steps.truncate(writep + 1);
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // ~3 characters per step on average
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}
