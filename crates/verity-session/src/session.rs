//! One user's analysis session.

use std::sync::{Mutex, MutexGuard, PoisonError};

use verity_client::{AnalysisBackend, ClientError, ImageUpload};
use verity_core::validation;
use verity_core::{AnalysisResult, ValidationError};
use verity_share::DecodeError;
use verity_store::{KeyValueStore, ResultStore};

use crate::clipboard::Clipboard;
use crate::display::DisplayState;
use crate::error::ShareError;
use crate::notification::Notification;
use crate::sequencer::{RequestSequencer, Ticket};

/// How a submitted analysis ended.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Input rejected locally; nothing was sent.
    Invalid(ValidationError),
    /// Displayed and added to history.
    Completed(AnalysisResult),
    /// Backend or transport failure; display cleared.
    Failed(ClientError),
    /// A newer request was dispatched before this one returned.
    Superseded,
}

/// How opening a share link ended.
#[derive(Debug)]
pub enum LinkOutcome {
    /// The input carried no share token.
    NoToken,
    /// Displayed; not added to history.
    Opened(AnalysisResult),
    /// Token rejected; display unchanged.
    Invalid(DecodeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutcome {
    pub url: String,
    /// `false` when the clipboard was unavailable and the URL must be copied
    /// by hand.
    pub copied: bool,
}

struct State<K: KeyValueStore> {
    display: DisplayState,
    history: ResultStore<K>,
    notifications: Vec<Notification>,
}

impl<K: KeyValueStore> State<K> {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(kind = %notification.kind, title = %notification.title, "notification");
        self.notifications.push(notification);
    }
}

/// Ties the backend, the history store and the share codec together.
///
/// All methods take `&self`, so analyses can overlap. The display only ever
/// reflects the most recently dispatched request.
pub struct Session<B: AnalysisBackend, K: KeyValueStore> {
    backend: B,
    page_url: String,
    sequencer: RequestSequencer,
    state: Mutex<State<K>>,
}

impl<B: AnalysisBackend, K: KeyValueStore> Session<B, K> {
    /// Start a session. `page_url` is the page share links point at.
    pub fn new(backend: B, history: ResultStore<K>, page_url: impl Into<String>) -> Self {
        Self {
            backend,
            page_url: page_url.into(),
            sequencer: RequestSequencer::new(),
            state: Mutex::new(State {
                display: DisplayState::Empty,
                history,
                notifications: Vec::new(),
            }),
        }
    }

    /// Validate `text`, send it for analysis and display the outcome.
    pub async fn analyze_text(&self, text: &str) -> AnalysisOutcome {
        if let Err(error) = validation::validate(text) {
            return AnalysisOutcome::Invalid(error);
        }
        let ticket = self.dispatch("text");
        let response = self.backend.analyze_text(text).await;
        self.complete(
            ticket,
            response,
            Notification::success("Analysis Complete", "The content has been fact-checked."),
        )
    }

    /// Send an image for analysis and display the outcome.
    pub async fn analyze_image(&self, upload: ImageUpload) -> AnalysisOutcome {
        let ticket = self.dispatch("image");
        let response = self.backend.analyze_image(upload).await;
        self.complete(
            ticket,
            response,
            Notification::success(
                "Image Analysis Complete",
                "The image has been processed and its claims verified.",
            ),
        )
    }

    /// Display the result carried by a page URL's `result` parameter.
    ///
    /// Opened results are not added to history. On a bad token the display
    /// is left as it was and an error notification is queued.
    pub fn load_from_url(&self, url: &str) -> LinkOutcome {
        verity_share::token_from_url(url).map_or(LinkOutcome::NoToken, |token| {
            self.load_token(&token)
        })
    }

    /// Like [`Self::load_from_url`], but also accepts a bare token.
    pub fn open_link(&self, input: &str) -> LinkOutcome {
        let input = input.trim();
        if input.contains('?') || input.contains("://") {
            self.load_from_url(input)
        } else if input.is_empty() {
            LinkOutcome::NoToken
        } else {
            self.load_token(input)
        }
    }

    /// Display a stored result again without re-adding it to history.
    pub fn show_from_history(&self, id: &str) -> Option<AnalysisResult> {
        let mut state = self.state();
        let result = state.history.get(id)?;
        self.sequencer.begin();
        state.display = DisplayState::Showing(result.clone());
        Some(result)
    }

    /// Share URL for the displayed result, without touching the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::NothingToShare`] when no result is displayed and
    /// [`ShareError::Encode`] if the result cannot be encoded.
    pub fn share_link(&self) -> Result<String, ShareError> {
        let result = self.current_result().ok_or(ShareError::NothingToShare)?;
        Ok(verity_share::share_url(&self.page_url, &result)?)
    }

    /// Build the share URL for the displayed result and copy it.
    ///
    /// A clipboard failure is not an error: the URL is still returned with
    /// `copied: false` and a warning is queued.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] when there is nothing to share or encoding
    /// fails; the latter also queues a "Share Failed" notification.
    pub fn share(&self, clipboard: &impl Clipboard) -> Result<ShareOutcome, ShareError> {
        let url = match self.share_link() {
            Ok(url) => url,
            Err(ShareError::NothingToShare) => return Err(ShareError::NothingToShare),
            Err(error) => {
                tracing::warn!(%error, "share link generation failed");
                self.state()
                    .notify(Notification::error("Share Failed", "Could not generate share link."));
                return Err(error);
            }
        };

        match clipboard.copy(&url) {
            Ok(()) => {
                self.state().notify(Notification::success(
                    "Link Copied!",
                    "Share this analysis result with others.",
                ));
                Ok(ShareOutcome { url, copied: true })
            }
            Err(error) => {
                tracing::warn!(%error, "clipboard copy failed");
                self.state().notify(Notification::warning(
                    "Copy Failed",
                    "Could not copy to the clipboard; copy the link manually.",
                ));
                Ok(ShareOutcome { url, copied: false })
            }
        }
    }

    /// Empty the history. Returns how many entries were removed.
    pub fn clear_history(&self) -> usize {
        let mut state = self.state();
        let removed = state.history.len();
        match state.history.clear() {
            Ok(()) => state.notify(Notification::success(
                "History Cleared",
                "Analysis history has been cleared.",
            )),
            Err(error) => state.notify(Notification::warning(
                "History Not Saved",
                format!("History was cleared for this session only: {error}"),
            )),
        }
        removed
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.state().display.clone()
    }

    #[must_use]
    pub fn current_result(&self) -> Option<AnalysisResult> {
        self.state().display.result().cloned()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().display.is_loading()
    }

    /// History snapshot, most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<AnalysisResult> {
        self.state().history.list()
    }

    #[must_use]
    pub fn history_entry(&self, id: &str) -> Option<AnalysisResult> {
        self.state().history.get(id)
    }

    /// Most recently stored result.
    #[must_use]
    pub fn latest_entry(&self) -> Option<AnalysisResult> {
        self.state().history.latest()
    }

    /// Drain queued notifications, oldest first.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state().notifications)
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    fn state(&self) -> MutexGuard<'_, State<K>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, kind: &'static str) -> Ticket {
        let mut state = self.state();
        let ticket = self.sequencer.begin();
        state.display = DisplayState::Loading;
        tracing::debug!(kind, ticket = ticket.get(), "analysis dispatched");
        ticket
    }

    fn complete(
        &self,
        ticket: Ticket,
        response: Result<AnalysisResult, ClientError>,
        done: Notification,
    ) -> AnalysisOutcome {
        let mut state = self.state();
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(ticket = ticket.get(), "discarding stale analysis response");
            return AnalysisOutcome::Superseded;
        }

        match response {
            Ok(result) => {
                state.display = DisplayState::Showing(result.clone());
                if let Err(error) = state.history.append(result.clone()) {
                    state.notify(Notification::warning(
                        "History Not Saved",
                        format!("This result is kept for this session only: {error}"),
                    ));
                }
                state.notify(done);
                AnalysisOutcome::Completed(result)
            }
            Err(error) => {
                tracing::warn!(%error, ticket = ticket.get(), "analysis failed");
                state.display = DisplayState::Empty;
                state.notify(Notification::error("Analysis Failed", error.user_message()));
                AnalysisOutcome::Failed(error)
            }
        }
    }

    fn load_token(&self, token: &str) -> LinkOutcome {
        match verity_share::decode(token) {
            Ok(result) => {
                let mut state = self.state();
                self.sequencer.begin();
                state.display = DisplayState::Showing(result.clone());
                tracing::debug!(id = %result.id, "opened shared result");
                LinkOutcome::Opened(result)
            }
            Err(error) => {
                tracing::warn!(%error, "ignoring invalid share link");
                self.state()
                    .notify(Notification::error("Error", "Invalid shared link."));
                LinkOutcome::Invalid(error)
            }
        }
    }
}
