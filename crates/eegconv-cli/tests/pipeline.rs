//! Integration tests for the pipeline module, using an in-memory backend.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use eegconv_channels::{AliasSource, AliasTable, apply_channel_types};
use eegconv_cli::pipeline::{PipelineRequest, RecordingBackend, convert_bdf_to_fiff};
use eegconv_model::{ChannelInfo, ChannelType, Recording};

/// Backend whose handle is an in-memory recording; it records what it was
/// asked to read and write.
struct FakeBackend {
    seen_landmarks: RefCell<Option<PathBuf>>,
    written: RefCell<Option<(Recording, PathBuf, bool)>>,
}

impl FakeBackend {
    fn new() -> Self {
        Self {
            seen_landmarks: RefCell::new(None),
            written: RefCell::new(None),
        }
    }
}

impl RecordingBackend for FakeBackend {
    type Handle = Recording;

    fn read(&self, raw_path: &Path, landmarks: Option<&Path>) -> anyhow::Result<Recording> {
        *self.seen_landmarks.borrow_mut() = landmarks.map(Path::to_path_buf);
        let mut channels = vec![ChannelInfo::eeg("Fp1"), ChannelInfo::eeg("Cz")];
        for name in [
            "EXG1", "EXG2", "EXG3", "GSR1", "GSR2", "Erg1", "Erg2", "Resp", "Plet", "Temp",
        ] {
            channels.push(ChannelInfo::eeg(name));
        }
        Ok(Recording::new(channels).with_source(raw_path))
    }

    fn apply_aliases(&self, recording: &mut Recording, aliases: &AliasTable) -> anyhow::Result<()> {
        apply_channel_types(recording, &AliasSource::Table(aliases.clone()))?;
        Ok(())
    }

    fn write(&self, recording: &Recording, output: &Path, overwrite: bool) -> anyhow::Result<()> {
        *self.written.borrow_mut() = Some((recording.clone(), output.to_path_buf(), overwrite));
        Ok(())
    }
}

const POS_SAMPLE: &str = "header\nNA\t1.0\t2.0\t3.0\nLPA\t-1.0\t2.0\t3.0\nRPA\t1.5\t2.0\t3.0\n";

#[test]
fn pipeline_with_digitizer_produces_landmarks_and_retypes_channels() {
    let dir = tempfile::tempdir().unwrap();
    let digitizer = dir.path().join("subject01.pos");
    fs::write(&digitizer, POS_SAMPLE).unwrap();

    let request = PipelineRequest {
        raw_input: dir.path().join("subject01.bdf"),
        output: dir.path().join("subject01.fif"),
        digitizer: Some(digitizer.clone()),
        overwrite: false,
    };

    let backend = FakeBackend::new();
    let summary = convert_bdf_to_fiff(&backend, &request).unwrap();

    // Landmark path is derived by extension substitution and handed to the reader.
    let expected_landmarks = dir.path().join("subject01.hpts");
    assert_eq!(summary.landmarks.as_deref(), Some(expected_landmarks.as_path()));
    assert_eq!(
        backend.seen_landmarks.borrow().as_deref(),
        Some(expected_landmarks.as_path())
    );
    assert!(expected_landmarks.exists());

    let written = backend.written.borrow();
    let (recording, output, overwrite) = written.as_ref().unwrap();
    assert_eq!(output, &request.output);
    assert!(!overwrite);
    assert_eq!(
        recording.channel("cEXG1").map(|c| c.channel_type),
        Some(ChannelType::Eog)
    );
    assert_eq!(
        recording.channel("cResp").map(|c| c.channel_type),
        Some(ChannelType::Misc)
    );
    assert_eq!(
        recording.channel("Cz").map(|c| c.channel_type),
        Some(ChannelType::Eeg)
    );
    assert_eq!(summary.channels_remapped, 10);
}

#[test]
fn pipeline_without_digitizer_skips_landmarks() {
    let dir = tempfile::tempdir().unwrap();
    let request = PipelineRequest {
        raw_input: dir.path().join("subject01.bdf"),
        output: dir.path().join("subject01.fif"),
        digitizer: None,
        overwrite: true,
    };

    let backend = FakeBackend::new();
    let summary = convert_bdf_to_fiff(&backend, &request).unwrap();

    assert!(summary.landmarks.is_none());
    assert!(backend.seen_landmarks.borrow().is_none());
    let written = backend.written.borrow();
    assert!(written.as_ref().unwrap().2);
}

#[test]
fn pipeline_propagates_position_errors_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let digitizer = dir.path().join("subject01.pos");
    fs::write(&digitizer, "header\nNA\t1.0\t2.0\n").unwrap();

    let request = PipelineRequest {
        raw_input: dir.path().join("subject01.bdf"),
        output: dir.path().join("subject01.fif"),
        digitizer: Some(digitizer),
        overwrite: false,
    };

    let backend = FakeBackend::new();
    let err = convert_bdf_to_fiff(&backend, &request).unwrap_err();
    assert!(format!("{err:#}").contains("malformed record"));
    assert!(backend.written.borrow().is_none());
}
