//! Upload/analyze interaction state machine.
//!
//! DESIGN
//! ======
//! `AnalyzerState` is the single source of truth for what the analysis
//! surface is doing; button enablement and pane content are derived from it,
//! never stored separately. Network calls happen in the page layer — this
//! model only sequences them: callers take an [`AnalyzeTicket`] before
//! touching the network and apply the outcome through [`finish`], which
//! drops responses from superseded runs via a generation counter.
//!
//! [`finish`]: AnalyzerState::finish

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod analyzer_test;

use crate::net::types::VehicleRecord;
use crate::util::media::is_image_media_type;

/// What the analysis surface is currently showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    /// Nothing staged; the result pane shows the ready placeholder.
    #[default]
    Empty,
    /// An image is staged and ready to analyze.
    Staged,
    /// Upload and/or analysis is in flight.
    Busy,
    /// Analysis completed; the pane shows per-plate result tabs.
    Rendered(Vec<VehicleRecord>),
    /// Upload or analysis failed with this reason.
    Failed(String),
}

/// The image currently prepared for submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedImage {
    /// File name as reported by the browser.
    pub file_name: String,
    /// Browser-reported MIME type.
    pub media_type: String,
    /// Whether this file has reached the server under its current name.
    pub uploaded: bool,
}

/// Why a `stage` call was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageError {
    /// The selected file does not have an image media type.
    NotAnImage,
}

/// Why a `begin_analyze` call was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyzeRejection {
    /// No image is staged.
    NothingStaged,
    /// An analysis run is already in flight.
    AlreadyRunning,
}

/// Permission to run one upload/analyze cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzeTicket {
    /// Generation id of this run; outcomes for older ids are dropped.
    pub generation: u64,
    /// Whether the staged file must be uploaded before analysis.
    pub needs_upload: bool,
    /// Name of the staged file at the time the ticket was issued.
    pub file_name: String,
}

/// Terminal outcome of an upload/analyze cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalyzeOutcome {
    /// Analysis succeeded with these per-plate records.
    Success(Vec<VehicleRecord>),
    /// Upload or analysis failed with this reason.
    Failure(String),
}

/// Owner of the staged image, view state, and run sequencing.
#[derive(Clone, Debug, Default)]
pub struct AnalyzerState {
    /// Current view state.
    pub view: ViewState,
    /// Image prepared for submission, if any.
    pub staged: Option<StagedImage>,
    /// Name of the last file the server acknowledged an upload for.
    pub last_uploaded_name: Option<String>,
    /// Latest issued run generation; bumped by `begin_analyze` and `reset`.
    generation: u64,
}

impl AnalyzerState {
    /// Stage a newly selected file.
    ///
    /// Rejects non-image media types without touching any state. A valid
    /// selection always clears the uploaded flag, even when the previous
    /// staged file had already been uploaded.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::NotAnImage`] for non-image media types.
    pub fn stage(&mut self, file_name: &str, media_type: &str) -> Result<(), StageError> {
        if !is_image_media_type(media_type) {
            return Err(StageError::NotAnImage);
        }
        self.staged = Some(StagedImage {
            file_name: file_name.to_owned(),
            media_type: media_type.to_owned(),
            uploaded: false,
        });
        self.view = ViewState::Staged;
        Ok(())
    }

    /// Start an upload/analyze cycle.
    ///
    /// Enters `Busy`, clears previously rendered output, and issues a fresh
    /// generation. The ticket says whether the staged file still needs to be
    /// uploaded: a completed upload is skipped only when the staged name
    /// matches the last acknowledged upload.
    ///
    /// # Errors
    ///
    /// Rejected from `Empty` (nothing staged) and from `Busy` (re-entrancy
    /// guard; button disablement is presentation only).
    pub fn begin_analyze(&mut self) -> Result<AnalyzeTicket, AnalyzeRejection> {
        if self.view == ViewState::Busy {
            return Err(AnalyzeRejection::AlreadyRunning);
        }
        let Some(staged) = &self.staged else {
            return Err(AnalyzeRejection::NothingStaged);
        };

        let needs_upload =
            !staged.uploaded || self.last_uploaded_name.as_deref() != Some(staged.file_name.as_str());
        let ticket = AnalyzeTicket {
            generation: self.generation + 1,
            needs_upload,
            file_name: staged.file_name.clone(),
        };
        self.generation += 1;
        self.view = ViewState::Busy;
        Ok(ticket)
    }

    /// Record that the ticket's upload was acknowledged by the server.
    ///
    /// Applies only while the ticket is still current: its generation must
    /// be the latest issued and the staged file must still be the one the
    /// ticket was taken for. A late acknowledgment after a reset, a newer
    /// run, or a mid-flight reselect is dropped — it vouches for a file
    /// that is no longer staged. Returns `true` when applied.
    pub fn mark_uploaded(&mut self, ticket: &AnalyzeTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match &mut self.staged {
            Some(staged) if staged.file_name == ticket.file_name => {
                staged.uploaded = true;
                self.last_uploaded_name = Some(staged.file_name.clone());
                true
            }
            _ => false,
        }
    }

    /// Apply the terminal outcome of the run identified by `generation`.
    ///
    /// Returns `true` when applied. Outcomes from superseded runs — an older
    /// generation after a `reset` or a newer `begin_analyze` — are dropped so
    /// a stale response never overwrites newer state.
    pub fn finish(&mut self, generation: u64, outcome: AnalyzeOutcome) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view = match outcome {
            AnalyzeOutcome::Success(records) => ViewState::Rendered(records),
            AnalyzeOutcome::Failure(reason) => ViewState::Failed(reason),
        };
        true
    }

    /// Return to `Empty`, discarding the staged image and any results.
    ///
    /// Safe from any state, including `Busy`: the generation bump guarantees
    /// a still-in-flight outcome is dropped when it lands.
    pub fn reset(&mut self) {
        self.view = ViewState::Empty;
        self.staged = None;
        self.last_uploaded_name = None;
        self.generation += 1;
    }

    /// Whether the analyze trigger should be enabled.
    pub fn can_analyze(&self) -> bool {
        self.staged.is_some() && self.view != ViewState::Busy
    }

    /// Whether the clear trigger should be enabled.
    pub fn can_clear(&self) -> bool {
        self.view != ViewState::Busy
    }

    /// Whether the busy overlay should be shown.
    pub fn is_busy(&self) -> bool {
        self.view == ViewState::Busy
    }

    /// Latest issued run generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
