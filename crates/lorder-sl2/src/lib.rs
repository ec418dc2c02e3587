#![deny(missing_docs)]
#![doc = "SL(2,C) matrix representations and the element oracle built on them."]

mod oracle;
mod representation;
pub mod samples;

pub use oracle::{trace, Sl2Oracle, DEFAULT_ACCURACY_BITS, DEFAULT_PRECISION_BITS};
pub use representation::{sl2_inverse, Sl2Matrix, Sl2Representation, DETERMINANT_TOLERANCE};
