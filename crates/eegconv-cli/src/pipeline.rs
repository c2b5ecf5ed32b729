//! BDF-to-FIFF pipeline orchestration.
//!
//! The pipeline is a linear sequence owned by [`convert_bdf_to_fiff`]:
//! convert the digitizer export (when supplied), construct the recording
//! through the backend, apply the default channel table, persist. The
//! backend is a trait with an opaque recording handle, so tests run against
//! an in-memory implementation while the shipped [`MneTools`] backend
//! drives the external MNE command-line tools on files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use eegconv_channels::AliasTable;
use eegconv_model::PositionOptions;
use eegconv_positions::convert_positions;

/// External collaborator surface for one recording conversion.
///
/// The handle stands in for whatever the backend reads into: an in-memory
/// recording for library-level backends, a scratch file for the external
/// tools. Each method maps to one collaborator interface: the raw reader,
/// the channel rename operation, the recording writer.
pub trait RecordingBackend {
    type Handle;

    /// Construct the recording from the raw file, embedding digitizer info
    /// when a landmark file is supplied.
    fn read(&self, raw_path: &Path, landmarks: Option<&Path>) -> Result<Self::Handle>;

    /// Rename and retype the recording's channels per the alias table.
    fn apply_aliases(&self, handle: &mut Self::Handle, aliases: &AliasTable) -> Result<()>;

    /// Persist the recording, honoring the overwrite flag.
    fn write(&self, handle: &Self::Handle, output: &Path, overwrite: bool) -> Result<()>;
}

/// A single pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub raw_input: PathBuf,
    pub output: PathBuf,
    /// Optional digitizer export; when present a landmark file is produced
    /// next to it and embedded in the recording.
    pub digitizer: Option<PathBuf>,
    pub overwrite: bool,
}

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub output: PathBuf,
    pub landmarks: Option<PathBuf>,
    pub channels_remapped: usize,
}

/// Derive the landmark output path from a digitizer path (`.pos` -> `.hpts`).
pub fn landmark_path_for(digitizer: &Path) -> PathBuf {
    digitizer.with_extension("hpts")
}

/// Run the position converter for the request's digitizer file, if any.
fn prepare_landmarks(request: &PipelineRequest) -> Result<Option<PathBuf>> {
    let Some(digitizer) = &request.digitizer else {
        return Ok(None);
    };
    let landmark_path = landmark_path_for(digitizer);
    let options = PositionOptions::default().with_overwrite(request.overwrite);
    convert_positions(digitizer, &landmark_path, &options)
        .with_context(|| format!("convert digitizer file {}", digitizer.display()))?;
    Ok(Some(landmark_path))
}

/// Convert a raw BDF recording to FIFF with channel types restored.
pub fn convert_bdf_to_fiff<B: RecordingBackend>(
    backend: &B,
    request: &PipelineRequest,
) -> Result<PipelineSummary> {
    let span = info_span!("pipeline", raw = %request.raw_input.display());
    let _guard = span.enter();

    let landmarks = prepare_landmarks(request)?;

    let mut handle = backend
        .read(&request.raw_input, landmarks.as_deref())
        .with_context(|| format!("read raw recording {}", request.raw_input.display()))?;

    let table = AliasTable::default_montage();
    backend
        .apply_aliases(&mut handle, &table)
        .context("apply default channel types")?;

    backend
        .write(&handle, &request.output, request.overwrite)
        .with_context(|| format!("write recording {}", request.output.display()))?;

    info!(output = %request.output.display(), "pipeline complete");
    Ok(PipelineSummary {
        output: request.output.clone(),
        landmarks,
        channels_remapped: table.rules.len(),
    })
}

/// Backend that drives the external MNE command-line tools.
///
/// Invocations are built as argument lists; nothing is passed through a
/// shell, so paths with spaces or metacharacters need no quoting.
#[derive(Debug, Clone)]
pub struct MneTools {
    /// Raw-to-FIFF converter executable.
    pub converter: PathBuf,
    /// Channel rename/retype executable.
    pub renamer: PathBuf,
}

impl Default for MneTools {
    fn default() -> Self {
        Self {
            converter: PathBuf::from("mne_edf2fiff"),
            renamer: PathBuf::from("mne_rename_channels"),
        }
    }
}

/// Scratch state for an in-flight external conversion. The converted file
/// lives in a temporary directory that is removed when the handle drops,
/// on success and error paths alike.
pub struct MneHandle {
    scratch: tempfile::TempDir,
}

impl MneHandle {
    fn converted(&self) -> PathBuf {
        self.scratch.path().join("converted.fif")
    }
}

impl RecordingBackend for MneTools {
    type Handle = MneHandle;

    fn read(&self, raw_path: &Path, landmarks: Option<&Path>) -> Result<MneHandle> {
        let handle = MneHandle {
            scratch: tempfile::tempdir().context("create scratch directory")?,
        };
        let mut convert = Command::new(&self.converter);
        convert
            .arg("--edf")
            .arg(raw_path)
            .arg("--fif")
            .arg(handle.converted());
        if let Some(landmark_path) = landmarks {
            convert.arg("--hpts").arg(landmark_path);
        }
        run_tool(&mut convert)?;
        Ok(handle)
    }

    fn apply_aliases(&self, handle: &mut MneHandle, aliases: &AliasTable) -> Result<()> {
        // Transient alias file, removed when the guard drops.
        let alias_file = aliases.materialize().context("materialize alias table")?;
        let mut rename = Command::new(&self.renamer);
        rename
            .arg("--fif")
            .arg(handle.converted())
            .arg("--alias")
            .arg(alias_file.path());
        run_tool(&mut rename)
    }

    fn write(&self, handle: &MneHandle, output: &Path, overwrite: bool) -> Result<()> {
        if output.exists() && !overwrite {
            bail!(
                "destination already exists: {} (pass --overwrite to replace it)",
                output.display()
            );
        }
        fs::copy(handle.converted(), output)
            .with_context(|| format!("copy converted recording to {}", output.display()))?;
        Ok(())
    }
}

/// Run an external tool, failing on a non-zero exit status.
fn run_tool(command: &mut Command) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(tool = %program, "invoking external tool");
    let output = command
        .output()
        .with_context(|| format!("launch {program}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{program} failed ({}): {}", output.status, stderr.trim());
    }
    Ok(())
}
