use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{skeleton::find_group, BvhError, MotionClip, Result};

/// Replacement values for one channel group in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelEdit {
    /// 1-based frame number.
    pub frame: usize,
    /// Joint name from the channel group table, e.g. `LeftArm`.
    pub group: String,
    pub values: [f64; 3],
}

impl ChannelEdit {
    pub fn new(frame: usize, group: impl Into<String>, values: [f64; 3]) -> Self {
        Self {
            frame,
            group: group.into(),
            values,
        }
    }
}

/// Applies one edit and returns the values it replaced.
pub fn apply_edit(clip: &mut MotionClip, edit: &ChannelEdit) -> Result<[f64; 3]> {
    let group = find_group(&edit.group)?;
    let frame_count = clip.frame_count();
    if edit.frame == 0 || edit.frame > frame_count {
        return Err(BvhError::FrameOutOfRange {
            frame: edit.frame,
            frames: frame_count,
        });
    }

    let index = edit.frame - 1;
    let previous = clip.channel_group(index, group.indices)?;
    clip.set_channel_group(index, group.indices, edit.values)?;
    tracing::debug!(
        frame = edit.frame,
        group = group.name,
        ?previous,
        values = ?edit.values,
        "applied channel edit"
    );
    Ok(previous)
}

/// Applies edits in order, stopping at the first invalid one. Edits before
/// the failure stay applied.
pub fn apply_edits(clip: &mut MotionClip, edits: &[ChannelEdit]) -> Result<()> {
    for edit in edits {
        apply_edit(clip, edit)?;
    }
    Ok(())
}

/// Reads a JSON array of [`ChannelEdit`] values.
pub fn load_edits(path: impl AsRef<Path>) -> Result<Vec<ChannelEdit>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CHANNELS_PER_FRAME;

    fn clip(frames: usize) -> MotionClip {
        MotionClip::new(
            vec!["HIERARCHY".into()],
            vec![vec![0.0; CHANNELS_PER_FRAME]; frames],
            0.1,
        )
    }

    #[test]
    fn edit_returns_previous_values() {
        let mut clip = clip(2);
        let edit = ChannelEdit::new(2, "LeftForeArm", [10.0, 20.0, 30.0]);

        let previous = apply_edit(&mut clip, &edit).unwrap();
        assert_eq!(previous, [0.0; 3]);
        assert_eq!(&clip.frames[1][60..63], &[10.0, 20.0, 30.0]);
        assert!(clip.frames[0].iter().all(|v| *v == 0.0));

        let again = apply_edit(&mut clip, &ChannelEdit::new(2, "leftforearm", [0.0; 3])).unwrap();
        assert_eq!(again, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn rejects_unknown_group_and_frame() {
        let mut clip = clip(1);
        let err = apply_edit(&mut clip, &ChannelEdit::new(1, "Tail", [0.0; 3])).unwrap_err();
        assert!(matches!(err, BvhError::UnknownGroup(name) if name == "Tail"));

        let err = apply_edit(&mut clip, &ChannelEdit::new(0, "LeftArm", [0.0; 3])).unwrap_err();
        assert!(matches!(err, BvhError::FrameOutOfRange { frame: 0, frames: 1 }));
        let err = apply_edit(&mut clip, &ChannelEdit::new(2, "LeftArm", [0.0; 3])).unwrap_err();
        assert!(matches!(err, BvhError::FrameOutOfRange { frame: 2, frames: 1 }));
    }

    #[test]
    fn batch_stops_at_first_failure() {
        let mut clip = clip(1);
        let edits = vec![
            ChannelEdit::new(1, "RThumb", [1.0, 2.0, 3.0]),
            ChannelEdit::new(5, "RThumb", [9.0, 9.0, 9.0]),
        ];
        assert!(apply_edits(&mut clip, &edits).is_err());
        assert_eq!(&clip.frames[0][93..], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn edits_deserialize_from_json() {
        let json = r#"[{ "frame": 1, "group": "LeftArm", "values": [1, 2.5, -3] }]"#;
        let edits: Vec<ChannelEdit> = serde_json::from_str(json).unwrap();
        assert_eq!(edits, vec![ChannelEdit::new(1, "LeftArm", [1.0, 2.5, -3.0])]);
    }
}
