//! Multi-action sequences: split a frame budget over parsed segments, synthesize each
//! one, decorate it and concatenate.

use image::RgbaImage;

use crate::{
    animation::timeline::FrameClock,
    detect::locator::SubjectLayout,
    foundation::{
        core::FrameSequence,
        error::{ToonError, ToonResult},
    },
    motion::synthesizer::Animator,
    narrative::{parser::AnimationSegment, props},
};

/// Smallest share a segment gets before the remainder is settled.
const MIN_SEGMENT_FRAMES: i64 = 5;

/// How the frame budget is split across segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllocationPolicy {
    /// At least five frames each; the whole rounding remainder goes to the largest share.
    #[default]
    LargestSegment,
    /// Hamilton apportionment with a floor of one frame.
    LargestRemainder,
}

/// Frames per segment. Always sums to `total`; a segment only gets zero frames when
/// `total` is smaller than the number of segments.
pub fn allocate_frames(weights: &[f64], total: u32, policy: AllocationPolicy) -> Vec<u32> {
    if weights.is_empty() {
        return Vec::new();
    }
    let sum: f64 = weights.iter().copied().filter(|w| *w > 0.0).sum();
    let shares: Vec<f64> = if sum > 0.0 {
        weights.iter().map(|w| w.max(0.0) / sum).collect()
    } else {
        vec![1.0 / weights.len() as f64; weights.len()]
    };
    match policy {
        AllocationPolicy::LargestSegment => largest_segment(&shares, total),
        AllocationPolicy::LargestRemainder => largest_remainder(&shares, total),
    }
}

fn first_max(values: &[i64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

fn largest_segment(shares: &[f64], total: u32) -> Vec<u32> {
    let total = i64::from(total);
    let mut alloc: Vec<i64> = shares
        .iter()
        .map(|s| ((total as f64 * s).floor() as i64).max(MIN_SEGMENT_FRAMES))
        .collect();

    let idx = first_max(&alloc);
    alloc[idx] += total - alloc.iter().sum::<i64>();

    if alloc[idx] < 1 {
        let mut deficit = 1 - alloc[idx];
        alloc[idx] = 1;
        while deficit > 0 {
            let donor = first_max(&alloc);
            if alloc[donor] > 1 {
                alloc[donor] -= 1;
            } else if let Some(last) = alloc.iter().rposition(|a| *a == 1) {
                alloc[last] = 0;
            } else {
                break;
            }
            deficit -= 1;
        }
    }
    tracing::debug!(?alloc, "largest-segment allocation");
    alloc.into_iter().map(|a| a.max(0) as u32).collect()
}

fn largest_remainder(shares: &[f64], total: u32) -> Vec<u32> {
    let n = shares.len();
    let mut order: Vec<usize> = (0..n).collect();
    if (total as usize) < n {
        order.sort_by(|&a, &b| shares[b].total_cmp(&shares[a]));
        let mut alloc = vec![0; n];
        for &i in order.iter().take(total as usize) {
            alloc[i] = 1;
        }
        return alloc;
    }

    let spare = f64::from(total - n as u32);
    let quotas: Vec<f64> = shares.iter().map(|s| s * spare).collect();
    let mut alloc: Vec<u32> = quotas.iter().map(|q| 1 + q.floor() as u32).collect();
    let given: u32 = alloc.iter().sum();
    order.sort_by(|&a, &b| (quotas[b].fract()).total_cmp(&quotas[a].fract()));
    for &i in order.iter().take(total.saturating_sub(given) as usize) {
        alloc[i] += 1;
    }
    tracing::debug!(?alloc, "largest-remainder allocation");
    alloc
}

#[derive(Clone, Copy, Debug)]
pub struct SequenceComposer {
    total_frames: u32,
    policy: AllocationPolicy,
}

impl SequenceComposer {
    pub fn new(total_frames: u32) -> Self {
        Self {
            total_frames,
            policy: AllocationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AllocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn allocations(&self, segments: &[AnimationSegment]) -> Vec<u32> {
        let weights: Vec<f64> = segments.iter().map(|s| s.duration_weight).collect();
        allocate_frames(&weights, self.total_frames, self.policy)
    }

    #[tracing::instrument(
        skip(self, image, layout, segments, animator),
        fields(total = self.total_frames, segments = segments.len())
    )]
    pub fn compose<A: Animator + ?Sized>(
        &self,
        image: &RgbaImage,
        layout: &SubjectLayout,
        segments: &[AnimationSegment],
        animator: &mut A,
    ) -> ToonResult<FrameSequence> {
        if self.total_frames == 0 {
            return Err(ToonError::validation("total frame count must be at least 1"));
        }
        if segments.is_empty() {
            return Err(ToonError::validation("no segments to compose"));
        }

        let allocations = self.allocations(segments);
        let mut out = FrameSequence::with_capacity(self.total_frames as usize);
        for (segment, &count) in segments.iter().zip(&allocations) {
            if count == 0 {
                tracing::warn!(action = %segment.action, "segment received no frames, skipping");
                continue;
            }
            let mut frames = animator.animate(image, layout, segment.action, count)?;
            for (index, frame) in frames.frames_mut().iter_mut().enumerate() {
                props::decorate_frame(frame, segment, FrameClock::new(index as u32, count))?;
            }
            out.append(frames)?;
        }
        tracing::info!(frames = out.len(), "sequence composed");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/composer.rs"]
mod tests;
