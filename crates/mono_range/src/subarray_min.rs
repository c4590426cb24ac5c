use crate::index_stack::MonoIndexStack;

/// Modulus for [`sum_subarray_minimums`].
pub const MOD: i64 = 1_000_000_007;

/// Sum of the minimum of every contiguous subarray of `values`, reduced
/// modulo [`MOD`] to the canonical residue in `[0, MOD)`.
///
/// Contribution counting instead of enumeration: a stack of positions with
/// non-decreasing values finds, for each position, the previous
/// smaller-or-equal value and the next strictly-smaller value. The
/// asymmetry is deliberate, so a run of equal minima is counted exactly
/// once, by its leftmost position.
pub fn sum_subarray_minimums(values: &[i64]) -> i64 {
    let mut stack = MonoIndexStack::with_capacity(values.len());
    sum_subarray_minimums_with(values, &mut stack)
}

pub(crate) fn sum_subarray_minimums_with(values: &[i64], stack: &mut MonoIndexStack) -> i64 {
    stack.clear();
    let n = values.len();

    let mut acc = 0_i64;
    // Position `n` acts as the flush boundary: every position still on the
    // stack has its range of influence end at the end of the sequence.
    for i in 0..=n {
        while let Some(top) = stack.last() {
            if i < n && values[top] <= values[i] {
                break;
            }
            stack.pop();
            let left_span = match stack.last() {
                Some(prev) => top - prev,
                None => top + 1,
            };
            let right_span = i - top;
            debug_assert!(left_span >= 1 && right_span >= 1);

            // Each factor is below MOD, so the product stays within i64.
            let count = (left_span as i64 % MOD) * (right_span as i64 % MOD) % MOD;
            acc = (acc + values[top].rem_euclid(MOD) * count) % MOD;
        }
        if i < n {
            stack.push(i);
        }
    }
    acc
}
