use crate::{BvhError, Result};

/// Built-in hierarchy used when a new file is generated from scratch.
///
/// Hips carries six channels (position then rotation); each of the thirty
/// other joints carries three rotation channels, giving 96 per frame.
pub const DEFAULT_HIERARCHY: &str = "\
HIERARCHY
ROOT Hips
{
    OFFSET 0.00000 0.00000 0.00000
    CHANNELS 6 Xposition Yposition Zposition Zrotation Yrotation Xrotation
    JOINT LHipJoint
    {
        OFFSET 0 0 0
        CHANNELS 3 Zrotation Yrotation Xrotation
        JOINT LeftUpLeg
        {
            OFFSET 1.85590 -1.73949 0.84976
            CHANNELS 3 Zrotation Yrotation Xrotation
            JOINT LeftLeg
            {
                OFFSET 2.36836 -6.50702 0.00000
                CHANNELS 3 Zrotation Yrotation Xrotation
                JOINT LeftFoot
                {
                    OFFSET 2.53268 -6.95849 0.00000
                    CHANNELS 3 Zrotation Yrotation Xrotation
                    JOINT LeftToeBase
                    {
                        OFFSET 0.15935 -0.43781 1.94506
                        CHANNELS 3 Zrotation Yrotation Xrotation
                        End Site
                        {
                            OFFSET 0.00000 0.00000 1.00661
                        }
                    }
                }
            }
        }
    }
    JOINT RHipJoint
    {
        OFFSET 0 0 0
        CHANNELS 3 Zrotation Yrotation Xrotation
        JOINT RightUpLeg
        {
            OFFSET -1.68297 -1.73949 0.84976
            CHANNELS 3 Zrotation Yrotation Xrotation
            JOINT RightLeg
            {
                OFFSET -2.44709 -6.72334 0.00000
                CHANNELS 3 Zrotation Yrotation Xrotation
                JOINT RightFoot
                {
                    OFFSET -2.43843 -6.69953 0.00000
                    CHANNELS 3 Zrotation Yrotation Xrotation
                    JOINT RightToeBase
                    {
                        OFFSET -0.20854 -0.57295 2.02172
                        CHANNELS 3 Zrotation Yrotation Xrotation
                        End Site
                        {
                            OFFSET -0.00000 0.00000 1.05594
                        }
                    }
                }
            }
        }
    }
    JOINT LowerBack
    {
        OFFSET 0 0 0
        CHANNELS 3 Zrotation Yrotation Xrotation
        JOINT Spine
        {
            OFFSET -0.01560 2.23971 -0.03712
            CHANNELS 3 Zrotation Yrotation Xrotation
            JOINT Spine1
            {
                OFFSET 0.05490 2.19225 -0.19086
                CHANNELS 3 Zrotation Yrotation Xrotation
                JOINT Neck
                {
                    OFFSET 0 0 0
                    CHANNELS 3 Zrotation Yrotation Xrotation
                    JOINT Neck1
                    {
                        OFFSET -0.12403 1.43168 0.27585
                        CHANNELS 3 Zrotation Yrotation Xrotation
                        JOINT Head
                        {
                            OFFSET 0.17855 1.46173 -0.32578
                            CHANNELS 3 Zrotation Yrotation Xrotation
                            End Site
                            {
                                OFFSET 0.07217 1.51590 -0.14537
                            }
                        }
                    }
                }
                JOINT LeftShoulder
                {
                    OFFSET 0 0 0
                    CHANNELS 3 Zrotation Yrotation Xrotation
                    JOINT LeftArm
                    {
                        OFFSET 3.27650 0.85634 0.05396
                        CHANNELS 3 Zrotation Yrotation Xrotation
                        JOINT LeftForeArm
                        {
                            OFFSET 4.96755 0.00000 0.00000
                            CHANNELS 3 Zrotation Yrotation Xrotation
                            JOINT LeftHand
                            {
                                OFFSET 3.35751 0.00000 0.00000
                                CHANNELS 3 Zrotation Yrotation Xrotation
                                JOINT LeftFingerBase
                                {
                                    OFFSET 0 0 0
                                    CHANNELS 3 Zrotation Yrotation Xrotation
                                    JOINT LeftHandIndex1
                                    {
                                        OFFSET 0.79697 0.00000 0.00000
                                        CHANNELS 3 Zrotation Yrotation Xrotation
                                        End Site
                                        {
                                            OFFSET 0.64254 0.00000 0.00000
                                        }
                                    }
                                }
                                JOINT LThumb
                                {
                                    OFFSET 0 0 0
                                    CHANNELS 3 Zrotation Yrotation Xrotation
                                    End Site
                                    {
                                        OFFSET 0.65235 0.00000 0.65235
                                    }
                                }
                            }
                        }
                    }
                }
                JOINT RightShoulder
                {
                    OFFSET 0 0 0
                    CHANNELS 3 Zrotation Yrotation Xrotation
                    JOINT RightArm
                    {
                        OFFSET -3.24434 1.02034 0.34688
                        CHANNELS 3 Zrotation Yrotation Xrotation
                        JOINT RightForeArm
                        {
                            OFFSET -5.21859 0.00000 0.00000
                            CHANNELS 3 Zrotation Yrotation Xrotation
                            JOINT RightHand
                            {
                                OFFSET -3.36504 0.00000 0.00000
                                CHANNELS 3 Zrotation Yrotation Xrotation
                                JOINT RightFingerBase
                                {
                                    OFFSET 0 0 0
                                    CHANNELS 3 Zrotation Yrotation Xrotation
                                    JOINT RightHandIndex1
                                    {
                                        OFFSET -0.62044 0.00000 0.00000
                                        CHANNELS 3 Zrotation Yrotation Xrotation
                                        End Site
                                        {
                                            OFFSET -0.50022 0.00000 0.00000
                                        }
                                    }
                                }
                                JOINT RThumb
                                {
                                    OFFSET 0 0 0
                                    CHANNELS 3 Zrotation Yrotation Xrotation
                                    End Site
                                    {
                                        OFFSET -0.50786 0.00000 0.50786
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
";

/// A named joint whose three rotation channels can be edited together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelGroup {
    pub name: &'static str,
    /// 0-based channel indices within a frame.
    pub indices: [usize; 3],
}

impl ChannelGroup {
    const fn new(name: &'static str, first: usize) -> Self {
        Self {
            name,
            indices: [first, first + 1, first + 2],
        }
    }

    /// 1-based channel range, as shown to users.
    pub fn display_range(&self) -> (usize, usize) {
        (self.indices[0] + 1, self.indices[2] + 1)
    }
}

pub const GROUP_COUNT: usize = 14;

/// Upper-limb joints, left side then right side, in frame order.
pub static CHANNEL_GROUPS: [ChannelGroup; GROUP_COUNT] = [
    ChannelGroup::new("LeftShoulder", 54),
    ChannelGroup::new("LeftArm", 57),
    ChannelGroup::new("LeftForeArm", 60),
    ChannelGroup::new("LeftHand", 63),
    ChannelGroup::new("LeftFingerBase", 66),
    ChannelGroup::new("LeftHandIndex1", 69),
    ChannelGroup::new("LThumb", 72),
    ChannelGroup::new("RightShoulder", 75),
    ChannelGroup::new("RightArm", 78),
    ChannelGroup::new("RightForeArm", 81),
    ChannelGroup::new("RightHand", 84),
    ChannelGroup::new("RightFingerBase", 87),
    ChannelGroup::new("RightHandIndex1", 90),
    ChannelGroup::new("RThumb", 93),
];

/// Looks up a group by joint name, ignoring ASCII case.
pub fn find_group(name: &str) -> Result<&'static ChannelGroup> {
    let name = name.trim();
    CHANNEL_GROUPS
        .iter()
        .find(|group| group.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| BvhError::UnknownGroup(name.to_string()))
}

/// Looks up a group by its 1-based menu number.
pub fn group_by_number(number: usize) -> Option<&'static ChannelGroup> {
    number.checked_sub(1).and_then(|index| CHANNEL_GROUPS.get(index))
}

/// The built-in hierarchy as owned lines, ready for the writer.
pub fn default_skeleton_lines() -> Vec<String> {
    DEFAULT_HIERARCHY.lines().map(str::to_string).collect()
}
