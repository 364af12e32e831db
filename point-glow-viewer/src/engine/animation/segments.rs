use bevy::prelude::*;

/// Which segment an elapsed time falls into, and how far through it we are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSample {
    pub index: usize,
    /// Normalized local progress, clamped to `[0, 1]`. Only the final segment
    /// can saturate at 1.0; earlier segments hand over to their successor.
    pub progress: f32,
}

/// Ordered fixed-duration animation segments. Elapsed time is consumed
/// segment by segment; once the timeline is exhausted the final segment stays
/// selected with progress pinned at 1.0.
#[derive(Resource, Debug, Clone)]
pub struct SegmentTimeline {
    durations: Vec<f32>,
}

impl SegmentTimeline {
    /// `durations` must be non-empty with strictly positive entries.
    pub fn new(durations: Vec<f32>) -> Self {
        debug_assert!(!durations.is_empty());
        debug_assert!(durations.iter().all(|&d| d > 0.0));
        Self { durations }
    }

    pub fn segment_count(&self) -> usize {
        self.durations.len()
    }

    pub fn total_duration(&self) -> f32 {
        self.durations.iter().sum()
    }

    pub fn sample(&self, elapsed: f32) -> SegmentSample {
        let mut index = 0;
        let mut local = elapsed.max(0.0);
        while local > self.durations[index] && index < self.durations.len() - 1 {
            local -= self.durations[index];
            index += 1;
        }

        SegmentSample {
            index,
            progress: (local / self.durations[index]).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn timeline() -> SegmentTimeline {
        SegmentTimeline::new(vec![10.0, 10.0, 10.0])
    }

    #[test]
    fn elapsed_within_a_segment_yields_local_progress() {
        let sample = timeline().sample(25.0);
        assert_eq!(sample.index, 2);
        assert_relative_eq!(sample.progress, 0.5);
    }

    #[test]
    fn elapsed_beyond_the_timeline_clamps_to_the_final_segment() {
        let sample = timeline().sample(35.0);
        assert_eq!(sample.index, 2);
        assert_relative_eq!(sample.progress, 1.0);
    }

    #[test]
    fn progress_never_exceeds_one() {
        let timeline = SegmentTimeline::new(vec![5.0]);
        for elapsed in [0.0, 2.5, 5.0, 5.0001, 50.0, 5.0e8] {
            let sample = timeline.sample(elapsed);
            assert!(sample.progress <= 1.0, "progress > 1 at {elapsed}");
            assert_eq!(sample.index, 0);
        }
    }

    #[test]
    fn negative_elapsed_pins_to_the_start() {
        let sample = timeline().sample(-3.0);
        assert_eq!(sample.index, 0);
        assert_relative_eq!(sample.progress, 0.0);
    }

    #[test]
    fn segment_boundaries_prefer_the_finishing_segment() {
        // Exactly 10.0 elapsed is progress 1.0 of segment 0, not 0.0 of
        // segment 1; the hand-over happens strictly after the boundary.
        let sample = timeline().sample(10.0);
        assert_eq!(sample.index, 0);
        assert_relative_eq!(sample.progress, 1.0);
    }

    #[test]
    fn reports_count_and_total() {
        assert_eq!(timeline().segment_count(), 3);
        assert_relative_eq!(timeline().total_duration(), 30.0);
    }
}
