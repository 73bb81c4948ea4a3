use std::{path::Path, str::FromStr};

use crate::{BvhError, Frame, MotionClip, Result, CHANNELS_PER_FRAME};

const MOTION_MARKER: &str = "MOTION";
const FRAMES_PREFIX: &str = "FRAMES:";
const FRAME_TIME_PREFIX: &str = "FRAME TIME:";

/// Reads a BVH file from disk and parses it.
pub fn load_existing(path: impl AsRef<Path>) -> Result<MotionClip> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let clip = parse(&text)?;
    tracing::debug!(path = %path.display(), frames = clip.frame_count(), "loaded BVH file");
    Ok(clip)
}

/// Parses the full text of a BVH file.
///
/// Everything before the first `MOTION` line becomes the skeleton. The
/// `MOTION` line itself is not kept. Blank lines after the marker are
/// ignored; the first two remaining lines must be the `Frames:` and
/// `Frame Time:` headers and every line after them is a frame.
pub fn parse(text: &str) -> Result<MotionClip> {
    let lines: Vec<&str> = text.lines().collect();

    let motion_index = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case(MOTION_MARKER))
        .ok_or(BvhError::MissingMotion)?;

    let skeleton = lines[..motion_index]
        .iter()
        .map(|line| line.to_string())
        .collect();

    // (1-based line number, trimmed content)
    let mut section = lines
        .iter()
        .enumerate()
        .skip(motion_index + 1)
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let declared: usize = parse_header(section.next(), FRAMES_PREFIX, "Frames: <num>")?;
    let frame_time: f64 = parse_header(section.next(), FRAME_TIME_PREFIX, "Frame Time: <value>")?;

    let frame_lines: Vec<(usize, &str)> = section.collect();
    if frame_lines.len() != declared {
        return Err(BvhError::FrameCountMismatch {
            declared,
            found: frame_lines.len(),
        });
    }

    let frames = frame_lines
        .into_iter()
        .enumerate()
        .map(|(frame_index, (line_no, line))| parse_frame_line(line, frame_index + 1, line_no))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(frames = frames.len(), frame_time, "parsed motion section");
    Ok(MotionClip::new(skeleton, frames, frame_time))
}

/// Splits one frame line on whitespace into exactly
/// [`CHANNELS_PER_FRAME`] values. `frame` and `line_no` are 1-based and
/// only used for diagnostics.
pub fn parse_frame_line(line: &str, frame: usize, line_no: usize) -> Result<Frame> {
    let values = line
        .split_whitespace()
        .map(|token| parse_number::<f64>(token, line_no))
        .collect::<Result<Frame>>()?;

    if values.len() != CHANNELS_PER_FRAME {
        return Err(BvhError::ChannelCount {
            frame,
            found: values.len(),
        });
    }
    Ok(values)
}

fn parse_header<T: FromStr>(
    line: Option<(usize, &str)>,
    prefix: &str,
    expected: &'static str,
) -> Result<T> {
    let (line_no, content) = line.ok_or(BvhError::MissingHeader {
        expected,
        line: None,
    })?;

    if !content.to_ascii_uppercase().starts_with(prefix) {
        return Err(BvhError::MissingHeader {
            expected,
            line: Some(line_no),
        });
    }

    let value = content
        .split_once(':')
        .map(|(_, value)| value.trim())
        .unwrap_or_default();
    parse_number(value, line_no)
}

fn parse_number<T: FromStr>(token: &str, line_no: usize) -> Result<T> {
    token.parse().map_err(|_| BvhError::InvalidNumber {
        line: line_no,
        token: token.to_string(),
    })
}
