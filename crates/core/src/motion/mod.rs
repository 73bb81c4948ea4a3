use crate::{BvhError, Result};

/// Every frame in a supported file carries exactly this many channels.
pub const CHANNELS_PER_FRAME: usize = 96;

/// Channel values for one frame, in file order.
pub type Frame = Vec<f64>;

/// A parsed or freshly built BVH file.
///
/// `skeleton` holds the raw hierarchy lines preceding `MOTION`. They are
/// never interpreted, only replayed by the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionClip {
    pub skeleton: Vec<String>,
    pub frames: Vec<Frame>,
    /// Seconds per frame.
    pub frame_time: f64,
}

impl MotionClip {
    pub fn new(skeleton: Vec<String>, frames: Vec<Frame>, frame_time: f64) -> Self {
        Self {
            skeleton,
            frames,
            frame_time,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Fails on the first frame whose length is not [`CHANNELS_PER_FRAME`].
    pub fn validate_shape(&self) -> Result<()> {
        validate_frames(&self.frames)
    }

    /// Reads the three values of a channel group. `frame_index` is 0-based.
    pub fn channel_group(&self, frame_index: usize, indices: [usize; 3]) -> Result<[f64; 3]> {
        channel_group(&self.frames, frame_index, indices)
    }

    /// Overwrites the three values of a channel group in place.
    pub fn set_channel_group(
        &mut self,
        frame_index: usize,
        indices: [usize; 3],
        values: [f64; 3],
    ) -> Result<()> {
        set_channel_group(&mut self.frames, frame_index, indices, values)
    }
}

pub(crate) fn validate_frames(frames: &[Frame]) -> Result<()> {
    match frames
        .iter()
        .position(|frame| frame.len() != CHANNELS_PER_FRAME)
    {
        Some(index) => Err(BvhError::ChannelCount {
            frame: index + 1,
            found: frames[index].len(),
        }),
        None => Ok(()),
    }
}

/// Returns the values stored at `indices` in frame `frame_index` (0-based).
pub fn channel_group(frames: &[Frame], frame_index: usize, indices: [usize; 3]) -> Result<[f64; 3]> {
    let frame = frame_at(frames, frame_index)?;
    check_indices(frame_index, frame.len(), indices)?;
    Ok(indices.map(|channel| frame[channel]))
}

/// Writes `values` to `indices` in frame `frame_index` (0-based). No other
/// frame or channel is touched.
pub fn set_channel_group(
    frames: &mut [Frame],
    frame_index: usize,
    indices: [usize; 3],
    values: [f64; 3],
) -> Result<()> {
    let frame_count = frames.len();
    let frame = frames
        .get_mut(frame_index)
        .ok_or(BvhError::FrameOutOfRange {
            frame: frame_index + 1,
            frames: frame_count,
        })?;
    check_indices(frame_index, frame.len(), indices)?;

    for (channel, value) in indices.into_iter().zip(values) {
        frame[channel] = value;
    }
    Ok(())
}

fn frame_at(frames: &[Frame], frame_index: usize) -> Result<&Frame> {
    frames.get(frame_index).ok_or(BvhError::FrameOutOfRange {
        frame: frame_index + 1,
        frames: frames.len(),
    })
}

fn check_indices(frame_index: usize, len: usize, indices: [usize; 3]) -> Result<()> {
    if indices.iter().all(|&channel| channel < len) {
        Ok(())
    } else {
        Err(BvhError::ChannelCount {
            frame: frame_index + 1,
            found: len,
        })
    }
}
