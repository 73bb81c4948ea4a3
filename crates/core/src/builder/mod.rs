use crate::{
    skeleton::{CHANNEL_GROUPS, GROUP_COUNT},
    Frame, GeneratorConfig, MotionClip, CHANNELS_PER_FRAME,
};

/// One rotation triple per entry of [`CHANNEL_GROUPS`], in the same order.
pub type GroupValues = [[f64; 3]; GROUP_COUNT];

/// Lays out a frame: root position, zeros up to the first channel group,
/// then each group's triple at its fixed indices.
pub fn build_frame(root_position: [f64; 3], groups: &GroupValues) -> Frame {
    let mut frame = vec![0.0; CHANNELS_PER_FRAME];
    frame[..3].copy_from_slice(&root_position);

    for (group, values) in CHANNEL_GROUPS.iter().zip(groups) {
        for (&channel, &value) in group.indices.iter().zip(values) {
            frame[channel] = value;
        }
    }
    frame
}

/// Assembles a new clip from a skeleton template and per-frame group values.
pub fn build_new(template: &str, config: &GeneratorConfig, frames: &[GroupValues]) -> MotionClip {
    let skeleton = template.trim().lines().map(str::to_string).collect();
    let frames = frames
        .iter()
        .map(|groups| build_frame(config.root_position, groups))
        .collect();
    tracing::debug!(groups = CHANNEL_GROUPS.len(), "built new motion clip");
    MotionClip::new(skeleton, frames, config.frame_time)
}
