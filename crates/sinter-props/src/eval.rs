//! Pure curve evaluation at a temperature.
//!
//! Kernel-callable: both functions take bank views and plain indices so
//! the same code runs against host- or device-resident banks inside
//! elementwise dispatch.

use sinter_block::BlockView;

/// Evaluate a piecewise-linear table curve.
///
/// `tables` is a `(materials, phases, properties, breakpoints, 2)` bank;
/// the last axis holds `[breakpoint, value]`.
///
/// Semantics: at or below the first breakpoint the first value is
/// returned; otherwise an ascending scan finds the first breakpoint
/// strictly above `temperature`. Reaching the last slot (or running off
/// the end) clamps to the last value; anywhere else the two bracketing
/// rows are interpolated linearly. A temperature exactly equal to an
/// interior breakpoint lands in the segment ending there and
/// interpolates to exactly that breakpoint's value, so breakpoints pass
/// through unchanged.
pub fn table_value(
    tables: BlockView<'_>,
    material: usize,
    state: usize,
    property: usize,
    temperature: f64,
) -> f64 {
    if temperature <= tables.get([material, state, property, 0, 0]) {
        return tables.get([material, state, property, 0, 1]);
    }

    let size = tables.extent(3);
    let mut i = 0;
    while i < size {
        if temperature < tables.get([material, state, property, i, 0]) {
            break;
        }
        i += 1;
    }

    if i >= size - 1 {
        tables.get([material, state, property, size - 1, 1])
    } else {
        let t_hi = tables.get([material, state, property, i, 0]);
        let t_lo = tables.get([material, state, property, i - 1, 0]);
        let v_hi = tables.get([material, state, property, i, 1]);
        let v_lo = tables.get([material, state, property, i - 1, 1]);
        v_lo + (temperature - t_lo) * (v_hi - v_lo) / (t_hi - t_lo)
    }
}

/// Evaluate a polynomial curve: `sum(coeff[i] * T^i)`.
///
/// `polynomials` is a `(materials, phases, properties, coefficients)`
/// bank. All coefficient slots participate; unused slots are zero.
pub fn polynomial_value(
    polynomials: BlockView<'_>,
    material: usize,
    state: usize,
    property: usize,
    temperature: f64,
) -> f64 {
    let slots = polynomials.extent(3);
    let mut value = 0.0;
    let mut power = 1.0;
    for i in 0..slots {
        value += polynomials.get([material, state, property, i]) * power;
        power *= temperature;
    }
    value
}
