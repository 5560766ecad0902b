use num::Zero;

use crate::RealScalar;

/// Full discrete convolution, i.e. the coefficients of the product of two
/// polynomials. The output has `input.len() + kernel.len() - 1` elements.
pub(crate) fn convolve_1d<T: RealScalar>(input: &[T], kernel: &[T]) -> Vec<T> {
    let input_len = input.len();
    let kernel_len = kernel.len();

    debug_assert!(input_len > 0 && kernel_len > 0);
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![T::zero(); output_len];
    for (i, &a) in input.iter().enumerate() {
        for (j, &b) in kernel.iter().enumerate() {
            output[i + j] = output[i + j] + a * b;
        }
    }
    output
}
