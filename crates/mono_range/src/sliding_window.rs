use crate::index_deque::MonoIndexDeque;

/// Maximum of every length-`k` window of `values`, front to back.
///
/// Returns `None` when `k == 0` or `k > values.len()`; otherwise the result
/// holds `values.len() - k + 1` maxima. The deque keeps positions with
/// strictly decreasing values, so the front is always the current window's
/// maximum; a position is retired from the back as soon as a newer value
/// dominates it, and from the front once it slides out of the window.
pub fn sliding_window_max(values: &[i64], k: usize) -> Option<Vec<i64>> {
    let mut deque = MonoIndexDeque::with_capacity(k);
    sliding_window_max_with(values, k, &mut deque)
}

pub(crate) fn sliding_window_max_with(
    values: &[i64],
    k: usize,
    deque: &mut MonoIndexDeque,
) -> Option<Vec<i64>> {
    deque.clear();
    if k == 0 || k > values.len() {
        return None;
    }

    let mut maxima = Vec::with_capacity(values.len() - k + 1);
    for (i, &value) in values.iter().enumerate() {
        // Equal values keep the older position; strictly-less backs can
        // never be a window maximum again.
        while let Some(back) = deque.back() {
            if values[back] >= value {
                break;
            }
            deque.pop_back();
        }
        deque.push_back(i);

        while let Some(front) = deque.front() {
            if front + k > i {
                break;
            }
            deque.pop_front();
        }

        if i + 1 >= k
            && let Some(front) = deque.front()
        {
            maxima.push(values[front]);
        }
    }
    debug_assert_eq!(maxima.len(), values.len() - k + 1);
    Some(maxima)
}
