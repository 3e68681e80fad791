// ABOUTME: Viewer state and navigation controller for the pitchdeck application
// ABOUTME: Owns the current slide index, export status and copy acknowledgement

use std::time::{Duration, Instant};

/// How long the "copied" acknowledgement stays visible.
pub const COPY_ACK_MS: u64 = 2000;

/// Whether an export is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Exporting,
}

/// Navigation command derived from a key press. Keys that are not bound map
/// to nothing and are ignored by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
}

impl NavCommand {
    /// Map a DOM-style key name to a navigation command. Right arrow and
    /// space advance, left arrow retreats, everything else is unbound.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "Space" | " " => Some(NavCommand::Next),
            "ArrowLeft" => Some(NavCommand::Previous),
            _ => None,
        }
    }
}

/// Mutable, process-local viewer state. Created once at startup and mutated
/// only by the navigation controller and the export pipeline; it is never
/// persisted.
#[derive(Debug)]
pub struct ViewerState {
    current_index: usize,
    slide_count: usize,
    pub is_fullscreen: bool,
    export_status: ExportStatus,
    /// Deadline after which the "copied" acknowledgement expires.
    copy_ack_until: Option<Instant>,
    /// Bumped whenever the displayed slide changes, so a pending ack timer
    /// for a previous slide can recognize it has been superseded.
    copy_generation: u64,
}

impl ViewerState {
    pub fn new(slide_count: usize) -> Self {
        assert!(slide_count > 0, "catalog must not be empty");
        Self {
            current_index: 0,
            slide_count,
            is_fullscreen: false,
            export_status: ExportStatus::Idle,
            copy_ack_until: None,
            copy_generation: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn export_status(&self) -> ExportStatus {
        self.export_status
    }

    /// Advance to the next slide. A no-op at the last slide; never wraps.
    /// Returns true if the index changed.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.slide_count {
            self.set_index(self.current_index + 1);
            true
        } else {
            false
        }
    }

    /// Go back one slide. A no-op at the first slide; never wraps.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.set_index(self.current_index - 1);
            true
        } else {
            false
        }
    }

    /// Jump to an arbitrary index, clamped to the valid range.
    pub fn jump(&mut self, index: usize) -> bool {
        let clamped = index.min(self.slide_count - 1);
        if clamped != self.current_index {
            self.set_index(clamped);
            true
        } else {
            false
        }
    }

    /// Apply a navigation command. Returns true if the index changed.
    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
        }
    }

    fn set_index(&mut self, index: usize) {
        self.current_index = index;
        // Any pending "copied" acknowledgement belongs to the old slide.
        self.copy_ack_until = None;
        self.copy_generation += 1;
    }

    /// Claim the single export slot. Fails if an export is already running.
    pub fn try_begin_export(&mut self) -> bool {
        if self.export_status == ExportStatus::Exporting {
            false
        } else {
            self.export_status = ExportStatus::Exporting;
            true
        }
    }

    /// Release the export slot. Runs on both success and failure paths.
    pub fn finish_export(&mut self) {
        self.export_status = ExportStatus::Idle;
    }

    /// Record a successful clipboard copy for the current slide. Returns the
    /// generation token the expiry timer must present to clear the flag.
    pub fn acknowledge_copy(&mut self, now: Instant) -> u64 {
        self.copy_ack_until = Some(now + Duration::from_millis(COPY_ACK_MS));
        self.copy_generation
    }

    /// Clear the acknowledgement if it still belongs to the same slide.
    /// A stale generation means the slide changed and the ack is already gone.
    pub fn expire_copy_ack(&mut self, generation: u64) {
        if generation == self.copy_generation {
            self.copy_ack_until = None;
        }
    }

    pub fn copy_generation(&self) -> u64 {
        self.copy_generation
    }

    pub fn is_copy_acknowledged(&self, now: Instant) -> bool {
        matches!(self.copy_ack_until, Some(deadline) if now < deadline)
    }
}

/// Progress indicator text, e.g. "3 / 12" for index 2 of a 12-slide deck.
pub fn progress_label(index: usize, slide_count: usize) -> String {
    format!("{} / {}", index + 1, slide_count)
}

/// Fractional completion in (0, 1], used for the progress bar width.
pub fn progress_ratio(index: usize, slide_count: usize) -> f64 {
    (index + 1) as f64 / slide_count as f64
}
