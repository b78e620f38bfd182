use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationMode {
    Linear,
    Step,
}

const MAX_SCAN_OFFSET: usize = 3;

/// Per-consumer sampling cursor; remembers the last keyframe interval so
/// sequential playback samples in O(1).
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// A time-ordered keyframe curve for one animated value.
///
/// `times` must be non-decreasing. Tracks with fewer than two keyframes are
/// degenerate but valid: one keyframe samples as a constant, zero keyframes
/// sample as `T::default()`.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Stateless sampling via binary search.
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        if self.times.is_empty() {
            return T::default();
        }

        // partition_point finds the first index with t > time, i.e. next_index
        let next_idx = self.times.partition_point(|&t| t <= time);
        let idx = if next_idx > 0 { next_idx - 1 } else { 0 };

        self.sample_at_frame(idx, time)
    }

    /// Cursor-accelerated sampling.
    ///
    /// Tries a short linear scan from the cursor's last interval (forward
    /// for normal playback, backward for loop resets), falling back to a
    /// global binary search on large jumps such as scrubbing.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> T {
        if self.times.is_empty() {
            return T::default();
        }

        let len = self.times.len();
        // Fast path: static data (single keyframe)
        if len == 1 {
            return self.values[0];
        }

        let i = cursor.last_index;

        // Cursor may be stale (e.g. clip switched); treat out-of-bounds as 0.
        let t_curr = *self.times.get(i).unwrap_or(&self.times[0]);

        let found_index = if time >= t_curr {
            // Normal playback or fast-forward: scan forward a few intervals.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.times[len - 1] {
                        res = Some(len - 1); // clamp to end
                    }
                    break;
                }

                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Reverse playback or loop reset: scan backward.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;

                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = if let Some(idx) = found_index {
            cursor.last_index = idx;
            idx
        } else {
            // Large jump (scrub / loop reset): O(log N) fallback.
            let next_idx = self.times.partition_point(|&t| t <= time);
            let idx = if next_idx > 0 { next_idx - 1 } else { 0 };
            cursor.last_index = idx;
            idx
        };

        self.sample_at_frame(final_index, time)
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        // Boundary: no next frame available, clamp to the last value.
        if index >= len - 1 {
            return self.values[len - 1];
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        // Guard zero-length intervals.
        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                T::interpolate_linear(self.values[index], self.values[next_idx], t)
            }
        }
    }
}
