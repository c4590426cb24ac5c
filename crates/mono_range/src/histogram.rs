use crate::index_stack::MonoIndexStack;

/// Largest rectangle area over contiguous bars of `heights`.
///
/// Stack of positions with non-decreasing heights; a bar lower than the top
/// closes every taller open rectangle. A virtual zero-height bar at position
/// `n` closes whatever is still open at the end of the scan, so the caller's
/// slice is never copied or touched.
pub fn max_rectangle_area(heights: &[u64]) -> u64 {
    let mut stack = MonoIndexStack::with_capacity(heights.len() + 1);
    max_rectangle_area_with(heights, &mut stack)
}

pub(crate) fn max_rectangle_area_with(heights: &[u64], stack: &mut MonoIndexStack) -> u64 {
    stack.clear();
    let n = heights.len();
    let bar = |i: usize| if i == n { 0 } else { heights[i] };

    let mut best = 0_u64;
    for i in 0..=n {
        let height = bar(i);
        while let Some(top) = stack.last() {
            if heights[top] <= height {
                break;
            }
            stack.pop();
            // With the stack empty the popped bar was the lowest so far and
            // its rectangle spans every position before `i`.
            let width = match stack.last() {
                Some(left) => i - left - 1,
                None => i,
            };
            best = best.max(heights[top] * width as u64);
        }
        stack.push(i);
    }
    best
}
