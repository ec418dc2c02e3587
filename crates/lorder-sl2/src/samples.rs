//! Known representations.

use lorder_core::{LoError, Presentation};
use nalgebra::Complex;

use crate::representation::{Sl2Matrix, Sl2Representation};

/// Relators of the Weeks manifold group on generators `a` and `b`.
pub const WEEKS_RELATORS: [&str; 2] = ["ababaBaaB", "ababAbbAb"];

/// Fundamental group of the Weeks manifold, `<a, b | ababaBaaB, ababAbbAb>`.
pub fn weeks_presentation() -> Result<Presentation, LoError> {
    let relators: Vec<String> = WEEKS_RELATORS.iter().map(|r| r.to_string()).collect();
    Presentation::parse("a.b", &relators)
}

/// Discrete faithful SL(2,C) lift of the Weeks manifold group.
///
/// Both generators have trace `0.87743883 + 0.74486177i`; `a` is upper
/// triangular and `b` lower triangular with the same diagonal.
pub fn weeks() -> Result<Sl2Representation, LoError> {
    let d0 = Complex::new(0.604_308_297_938_055_4, 1.359_167_785_432_336_7);
    let d1 = Complex::new(0.273_130_535_185_290_95, -0.614_306_018_812_592_5);
    let zero = Complex::new(0.0, 0.0);
    let one = Complex::new(1.0, 0.0);
    let c = Complex::new(1.122_561_166_876_653_6, -0.744_861_766_619_744_2);
    let representation = Sl2Representation::new(
        "weeks",
        weeks_presentation()?,
        vec![Sl2Matrix::new(d0, one, zero, d1), Sl2Matrix::new(d0, zero, c, d1)],
    )?;
    Ok(representation.with_group_args(vec![1.into(), 1.into(), 1.into()]))
}
