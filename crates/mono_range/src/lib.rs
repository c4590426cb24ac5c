mod histogram;
mod index_deque;
mod index_stack;
mod sliding_window;
mod subarray_min;
mod trap;

pub use histogram::max_rectangle_area;
pub use index_deque::MonoIndexDeque;
pub use index_stack::MonoIndexStack;
pub use sliding_window::sliding_window_max;
pub use subarray_min::{MOD, sum_subarray_minimums};
pub use trap::trap_water;
