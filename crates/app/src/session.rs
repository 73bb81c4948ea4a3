use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use bvh_motion_core::{
    apply_edit, apply_edits, build_new, format_channel_value, load_edits, load_existing,
    skeleton::{group_by_number, GROUP_COUNT},
    write_file, BvhError, ChannelEdit, GeneratorConfig, GroupValues, MotionClip, Result,
    CHANNEL_GROUPS, DEFAULT_HIERARCHY,
};

use crate::prompt::{ExistingFile, Prompter};

const DEFAULT_FRAME_COUNT: usize = 2;

/// Inputs for generating a new file from the built-in hierarchy.
#[derive(Debug, Default)]
pub struct NewOptions {
    pub output: PathBuf,
    pub frames: Option<usize>,
    pub config: Option<PathBuf>,
    pub values: Option<PathBuf>,
    pub force: bool,
}

/// Appends `.bvh` unless the name already ends with it.
pub fn with_bvh_extension(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(".bvh") {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".bvh");
    PathBuf::from(name)
}

pub fn run_new<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &NewOptions,
) -> Result<()> {
    let output = with_bvh_extension(&options.output);

    if output.exists() && !options.force {
        match prompter.choose_existing(&output.display().to_string())? {
            ExistingFile::Modify => return run_edit(prompter, &output, None),
            ExistingFile::Overwrite => prompter.say("Overwriting the file...")?,
        }
    }

    let config = match &options.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let values = match &options.values {
        Some(path) => load_group_values(path, options.frames)?,
        None => {
            let count = match options.frames {
                Some(count) => count,
                None => ask_frame_count(prompter)?,
            };
            prompt_group_values(prompter, count)?
        }
    };

    let clip = build_new(DEFAULT_HIERARCHY, &config, &values);
    write_file(&output, &clip)?;
    tracing::info!(path = %output.display(), frames = clip.frame_count(), "generated BVH file");
    prompter.say(format_args!(
        "\nBVH file '{}' successfully written with {} frame(s).",
        output.display(),
        clip.frame_count()
    ))
}

pub fn run_edit<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    path: &Path,
    edits: Option<&Path>,
) -> Result<()> {
    let mut clip = load_existing(path)?;

    let applied = match edits {
        Some(edits_path) => {
            let edits = load_edits(edits_path)?;
            apply_edits(&mut clip, &edits)?;
            edits.len()
        }
        None => interactive_edit(prompter, &mut clip, &path.display().to_string())?,
    };

    write_file(path, &clip)?;
    tracing::info!(path = %path.display(), edits = applied, "updated BVH file");
    prompter.say(format_args!(
        "\nBVH file '{}' updated successfully.",
        path.display()
    ))
}

/// Menu-driven editing of one channel group at a time until the user
/// enters frame 0. Returns the number of edits applied.
pub fn interactive_edit<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    clip: &mut MotionClip,
    name: &str,
) -> Result<usize> {
    let frame_count = clip.frame_count();
    prompter.say(format_args!(
        "\nThere are {frame_count} frames in '{name}'."
    ))?;

    let mut applied = 0;
    loop {
        let question = format!("\nEnter frame number to modify (1..{frame_count}, or 0 to finish): ");
        let Some(frame) = prompter.ask_number(&question)? else {
            prompter.say("Please enter a valid integer.")?;
            continue;
        };
        if frame == 0 {
            break;
        }
        let frame = match usize::try_from(frame) {
            Ok(frame) if frame <= frame_count => frame,
            _ => {
                prompter.say(format_args!("Frame must be in [1..{frame_count}]."))?;
                continue;
            }
        };

        prompter.say("\nWhich 3-channel group do you want to modify?\n")?;
        for (number, group) in CHANNEL_GROUPS.iter().enumerate() {
            prompter.say(format_args!(" {}) {}", number + 1, group.name))?;
        }
        prompter.say(" 0) Cancel this modification")?;

        let Some(choice) = prompter.ask_number("\nEnter the group number: ")? else {
            prompter.say("Please enter a valid integer.")?;
            continue;
        };
        if choice == 0 {
            continue;
        }
        let Some(group) = usize::try_from(choice).ok().and_then(group_by_number) else {
            prompter.say("Invalid group choice.")?;
            continue;
        };

        let current = clip.channel_group(frame - 1, group.indices)?;
        let current = join_values(&current);
        prompter.say(format_args!("Current {} values: {current}", group.name))?;

        let values = prompter.read_three_floats(group.name)?;
        apply_edit(clip, &ChannelEdit::new(frame, group.name, values))?;
        applied += 1;

        prompter.say(format_args!(
            "Frame {frame}, group '{}' updated from '{current}' to '{}'.",
            group.name,
            join_values(&values)
        ))?;
    }

    Ok(applied)
}

fn ask_frame_count<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<usize> {
    match prompter.ask_number("Enter number of frames: ")? {
        // A negative count generates no frames.
        Some(count) => Ok(usize::try_from(count).unwrap_or(0)),
        None => {
            prompter.say(format_args!(
                "Invalid number of frames. Defaulting to {DEFAULT_FRAME_COUNT}."
            ))?;
            Ok(DEFAULT_FRAME_COUNT)
        }
    }
}

/// Prompts for every group of every frame, in channel order.
pub fn prompt_group_values<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    frames: usize,
) -> Result<Vec<GroupValues>> {
    let mut all = Vec::with_capacity(frames);
    for frame in 1..=frames {
        prompter.say(format_args!("\n--- Creating frame {frame}/{frames} ---"))?;

        let mut values: GroupValues = [[0.0; 3]; GROUP_COUNT];
        for (group, slot) in CHANNEL_GROUPS.iter().zip(values.iter_mut()) {
            let (first, last) = group.display_range();
            *slot = prompter.read_three_floats(&format!(
                "{} (channels {first}-{last})",
                group.name
            ))?;
        }
        all.push(values);
    }
    Ok(all)
}

/// Reads per-frame group values from a JSON array. When `expected` is set
/// the array length must match it.
fn load_group_values(path: &Path, expected: Option<usize>) -> Result<Vec<GroupValues>> {
    let text = std::fs::read_to_string(path)?;
    let values: Vec<GroupValues> = serde_json::from_str(&text)?;
    match expected {
        Some(count) if count != values.len() => Err(BvhError::InvalidInput(format!(
            "--frames is {count} but {} holds {} frame(s)",
            path.display(),
            values.len()
        ))),
        _ => Ok(values),
    }
}

fn join_values(values: &[f64; 3]) -> String {
    values
        .iter()
        .map(|value| format_channel_value(*value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bvh_motion_core::CHANNELS_PER_FRAME;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn triples(frames: usize) -> String {
        "1 2 3\n".repeat(frames * GROUP_COUNT)
    }

    #[test]
    fn appends_extension_when_missing() {
        assert_eq!(with_bvh_extension(Path::new("walk")), PathBuf::from("walk.bvh"));
        assert_eq!(with_bvh_extension(Path::new("walk.bvh")), PathBuf::from("walk.bvh"));
        assert_eq!(with_bvh_extension(Path::new("a.txt")), PathBuf::from("a.txt.bvh"));
    }

    #[test]
    fn generates_file_from_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let options = NewOptions {
            output: dir.path().join("wave"),
            ..Default::default()
        };
        let input = format!("1\n{}", triples(1));
        let mut prompter = prompter(&input);
        run_new(&mut prompter, &options).unwrap();

        let clip = load_existing(dir.path().join("wave.bvh")).unwrap();
        assert_eq!(clip.frame_count(), 1);
        assert_eq!(&clip.frames[0][54..57], &[1.0, 2.0, 3.0]);
        assert_eq!(&clip.frames[0][93..96], &[1.0, 2.0, 3.0]);
        assert_eq!(clip.frame_time, 0.0083333);
    }

    #[test]
    fn invalid_frame_count_defaults_to_two() {
        let mut prompter = prompter("lots\n");
        assert_eq!(ask_frame_count(&mut prompter).unwrap(), DEFAULT_FRAME_COUNT);
    }

    #[test]
    fn negative_frame_count_generates_no_frames() {
        let mut prompter = prompter("-4\n");
        assert_eq!(ask_frame_count(&mut prompter).unwrap(), 0);
    }

    #[test]
    fn negative_frame_and_group_numbers_are_out_of_range() {
        let mut clip = build_new(
            DEFAULT_HIERARCHY,
            &GeneratorConfig::default(),
            &[[[0.0; 3]; GROUP_COUNT]],
        );
        let before = clip.clone();
        let mut prompter = prompter("-1\n1\n-2\n0\n");

        let applied = interactive_edit(&mut prompter, &mut clip, "pose.bvh").unwrap();
        assert_eq!(applied, 0);
        assert_eq!(clip, before);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("Frame must be in [1..1]."));
        assert!(output.contains("Invalid group choice."));
        assert!(!output.contains("Please enter a valid integer."));
    }

    #[test]
    fn generates_file_from_json_values() {
        let dir = tempfile::tempdir().unwrap();
        let values_path = dir.path().join("values.json");
        let frame: Vec<[f64; 3]> = vec![[0.5, 0.0, -0.5]; GROUP_COUNT];
        std::fs::write(&values_path, serde_json::to_string(&vec![frame; 3]).unwrap()).unwrap();

        let options = NewOptions {
            output: dir.path().join("batch.bvh"),
            values: Some(values_path.clone()),
            ..Default::default()
        };
        run_new(&mut prompter(""), &options).unwrap();
        let clip = load_existing(&options.output).unwrap();
        assert_eq!(clip.frame_count(), 3);
        assert_eq!(&clip.frames[2][75..78], &[0.5, 0.0, -0.5]);

        let mismatched = NewOptions {
            frames: Some(2),
            ..options
        };
        let err = run_new(&mut prompter(""), &NewOptions { force: true, ..mismatched }).unwrap_err();
        assert!(matches!(err, BvhError::InvalidInput(_)));
    }

    #[test]
    fn interactive_edit_updates_one_group() {
        let mut clip = build_new(
            DEFAULT_HIERARCHY,
            &GeneratorConfig::default(),
            &[[[0.0; 3]; GROUP_COUNT]; 2],
        );
        let before = clip.clone();
        let input = "abc\n3\n2\n0\n2\n99\n2\n9\n4 5 6\n0\n";
        let mut prompter = prompter(input);

        let applied = interactive_edit(&mut prompter, &mut clip, "pose.bvh").unwrap();
        assert_eq!(applied, 1);
        assert_eq!(&clip.frames[1][78..81], &[4.0, 5.0, 6.0]);
        assert_eq!(clip.frames[0], before.frames[0]);
        for channel in (0..CHANNELS_PER_FRAME).filter(|c| !(78..81).contains(c)) {
            assert_eq!(clip.frames[1][channel], before.frames[1][channel]);
        }

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("Please enter a valid integer."));
        assert!(output.contains("Frame must be in [1..2]."));
        assert!(output.contains("Invalid group choice."));
        assert!(output.contains("Current RightArm values: 0 0 0"));
    }

    #[test]
    fn existing_output_can_switch_to_modify() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pose.bvh");
        let clip = build_new(
            DEFAULT_HIERARCHY,
            &GeneratorConfig::default(),
            &[[[0.0; 3]; GROUP_COUNT]],
        );
        write_file(&path, &clip).unwrap();

        let options = NewOptions {
            output: path.clone(),
            ..Default::default()
        };
        let mut prompter = prompter("m\n1\n1\n10 20 30\n0\n");
        run_new(&mut prompter, &options).unwrap();

        let edited = load_existing(&path).unwrap();
        assert_eq!(&edited.frames[0][54..57], &[10.0, 20.0, 30.0]);
        assert_eq!(edited.frames[0][..54], clip.frames[0][..54]);
    }

    #[test]
    fn batch_edits_are_applied_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pose.bvh");
        let edits_path = dir.path().join("edits.json");
        let clip = build_new(
            DEFAULT_HIERARCHY,
            &GeneratorConfig::default(),
            &[[[0.0; 3]; GROUP_COUNT]; 2],
        );
        write_file(&path, &clip).unwrap();
        std::fs::write(
            &edits_path,
            r#"[{ "frame": 2, "group": "LThumb", "values": [1.5, 2.5, 3.5] }]"#,
        )
        .unwrap();

        run_edit(&mut prompter(""), &path, Some(&edits_path)).unwrap();
        let edited = load_existing(&path).unwrap();
        assert_eq!(&edited.frames[1][72..75], &[1.5, 2.5, 3.5]);
    }
}
