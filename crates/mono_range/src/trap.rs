use crate::index_stack::MonoIndexStack;

/// Total volume of water trapped between the bars of `heights`.
///
/// Single left-to-right pass over a stack of positions whose heights are
/// non-increasing from the bottom of the stack. A bar strictly taller than
/// the bar at the top of the stack closes one basin per popped position.
/// Fewer than three bars cannot trap anything.
pub fn trap_water(heights: &[u64]) -> u64 {
    let mut stack = MonoIndexStack::with_capacity(heights.len());
    trap_water_with(heights, &mut stack)
}

pub(crate) fn trap_water_with(heights: &[u64], stack: &mut MonoIndexStack) -> u64 {
    stack.clear();
    if heights.len() < 3 {
        return 0;
    }

    let mut trapped = 0_u64;
    for (i, &height) in heights.iter().enumerate() {
        while let Some(top) = stack.last() {
            if heights[top] >= height {
                break;
            }
            let bottom = stack.pop();
            debug_assert_eq!(bottom, Some(top));

            // The popped bar was the basin floor; without a bar left of it
            // there is no left wall, so nothing is held.
            let Some(left) = stack.last() else {
                break;
            };
            let width = (i - left - 1) as u64;
            let depth = heights[left].min(height) - heights[top];
            trapped += depth * width;
        }
        stack.push(i);
    }
    trapped
}
