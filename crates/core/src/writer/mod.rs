use std::{io, path::Path};

use crate::{
    format::{format_channel_value, format_frame_time},
    motion::validate_frames,
    Frame, MotionClip, Result,
};

/// Renders a complete BVH document.
///
/// Every frame is checked for the expected channel count before any text
/// is produced. `MOTION` is appended after the skeleton unless the last
/// skeleton line already is that marker.
pub fn serialize(skeleton: &[String], frames: &[Frame], frame_time: f64) -> Result<String> {
    validate_frames(frames)?;

    let mut out = String::new();
    for line in skeleton {
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let ends_with_marker = skeleton
        .last()
        .map(|line| line.trim().eq_ignore_ascii_case("MOTION"))
        .unwrap_or(false);
    if !ends_with_marker {
        out.push_str("MOTION\n");
    }

    out.push_str(&format!("Frames: {}\n", frames.len()));
    out.push_str(&format!("Frame Time: {}\n", format_frame_time(frame_time)));

    for frame in frames {
        let channels: Vec<String> = frame.iter().copied().map(format_channel_value).collect();
        out.push_str(&channels.join(" "));
        out.push('\n');
    }

    Ok(out)
}

/// Streams a serialized document into `writer`.
pub fn write_to<W: io::Write>(
    mut writer: W,
    skeleton: &[String],
    frames: &[Frame],
    frame_time: f64,
) -> Result<()> {
    let text = serialize(skeleton, frames, frame_time)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Serializes `clip` and writes it to `path`, replacing any existing file.
///
/// The document is rendered in memory first, so a shape error leaves an
/// existing file untouched.
pub fn write_file(path: impl AsRef<Path>, clip: &MotionClip) -> Result<()> {
    let path = path.as_ref();
    let text = clip.to_bvh_string()?;
    std::fs::write(path, text)?;
    tracing::debug!(path = %path.display(), frames = clip.frame_count(), "wrote BVH file");
    Ok(())
}

impl MotionClip {
    pub fn to_bvh_string(&self) -> Result<String> {
        serialize(&self.skeleton, &self.frames, self.frame_time)
    }
}
