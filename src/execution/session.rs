use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{PreviewError, PreviewResult};
use crate::ingestion::{PreviewOptions, parse_preview};
use crate::types::{ParseResult, SourceFile};

/// A pending parse for one selected file.
///
/// Tickets are handed out by [`PreviewSession::select`]. [`Self::parse`] is pure and may run on
/// any thread; its result only lands in the session if the ticket is still the latest one.
#[derive(Clone)]
pub struct ParseTicket {
    generation: u64,
    file: Arc<SourceFile>,
    options: PreviewOptions,
}

impl ParseTicket {
    /// Generation this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The file being parsed.
    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    /// Build the preview for this ticket's file.
    pub fn parse(&self) -> ParseResult {
        parse_preview(&self.file, &self.options)
    }
}

impl fmt::Debug for ParseTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseTicket")
            .field("generation", &self.generation)
            .field("file", &self.file.name)
            .finish()
    }
}

#[derive(Default)]
struct SessionState {
    generation: u64,
    file: Option<Arc<SourceFile>>,
    preview: ParseResult,
}

/// Current file selection and its preview.
///
/// Each [`Self::select`] supersedes every earlier ticket, so a slow parse of a previously
/// selected file can never overwrite the preview of the current one.
pub struct PreviewSession {
    options: PreviewOptions,
    state: Mutex<SessionState>,
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self::new(PreviewOptions::default())
    }
}

impl fmt::Debug for PreviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("PreviewSession")
            .field("generation", &state.generation)
            .field("file", &state.file.as_ref().map(|file| file.name.clone()))
            .field("preview_rows", &state.preview.row_count())
            .finish()
    }
}

impl PreviewSession {
    /// Create a session whose parses use `options`.
    pub fn new(options: PreviewOptions) -> Self {
        Self {
            options,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select `file`, replacing any previous selection and clearing the preview.
    ///
    /// Returns the ticket whose result [`Self::complete`] will accept.
    pub fn select(&self, file: SourceFile) -> ParseTicket {
        let file = Arc::new(file);
        let mut state = self.lock();
        state.generation += 1;
        state.file = Some(Arc::clone(&file));
        state.preview = ParseResult::empty();
        ParseTicket {
            generation: state.generation,
            file,
            options: self.options.clone(),
        }
    }

    /// Apply `result` if `ticket` is still current. Returns whether it was applied.
    pub fn complete(&self, ticket: &ParseTicket, result: ParseResult) -> bool {
        let mut state = self.lock();
        if state.generation != ticket.generation {
            return false;
        }
        state.preview = result;
        true
    }

    /// Select `file` and parse it on the calling thread.
    pub fn select_and_parse(&self, file: SourceFile) -> ParseResult {
        let ticket = self.select(file);
        let result = ticket.parse();
        self.complete(&ticket, result.clone());
        result
    }

    /// Whether `ticket` would still be accepted by [`Self::complete`].
    pub fn is_current(&self, ticket: &ParseTicket) -> bool {
        self.lock().generation == ticket.generation
    }

    /// Invalidate every outstanding ticket. The selection and preview are kept.
    pub fn cancel(&self) {
        self.lock().generation += 1;
    }

    /// Drop the selection and preview, invalidating every outstanding ticket.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.file = None;
        state.preview = ParseResult::empty();
    }

    /// Snapshot of the current preview.
    pub fn preview(&self) -> ParseResult {
        self.lock().preview.clone()
    }

    /// The currently selected file, if any.
    pub fn selected(&self) -> Option<Arc<SourceFile>> {
        self.lock().file.clone()
    }

    /// Whether [`Self::confirm`] would succeed. The preview content does not matter.
    pub fn can_confirm(&self) -> bool {
        self.lock().file.is_some()
    }

    /// Hand over the selected file, unchanged, and reset the session.
    ///
    /// A file whose preview came out empty can still be confirmed; the import service decides.
    pub fn confirm(&self) -> PreviewResult<Arc<SourceFile>> {
        let mut state = self.lock();
        let file = state.file.take().ok_or(PreviewError::NoFileSelected)?;
        state.generation += 1;
        state.preview = ParseResult::empty();
        Ok(file)
    }
}
