use crate::domain::model::{Language, RecognitionOutcome};
use serde::Serialize;

/// Which microphone a session belongs to. Each surface owns one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    CartCommand,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening { language: Language },
    Completed(String),
    Failed(String),
    Cancelled,
}

/// Identifies one started session. A result carrying a stale ticket belongs
/// to a session that was cancelled or superseded and is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket {
    surface: Surface,
    generation: u64,
}

impl SessionTicket {
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

/// Terminal result handed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Transcript(String),
    Failed(String),
    Ended,
}

/// `Idle -> Listening -> {Completed | Failed | Cancelled} -> Idle`.
///
/// Terminal states are observable until the next `start`, `finish` or
/// `reset`; callers usually `reset` right after consuming the outcome.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    surface: Surface,
    state: SessionState,
    generation: u64,
}

impl CaptureSession {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, SessionState::Listening { .. })
    }

    /// Starts listening, cancelling a session that is still in flight.
    pub fn start(&mut self, language: Language) -> SessionTicket {
        if self.is_listening() {
            tracing::debug!("🎙️ {:?} session superseded before it produced a result", self.surface);
            self.cancel();
        }

        self.generation += 1;
        self.state = SessionState::Listening { language };
        tracing::info!("🎙️ {:?} listening ({})", self.surface, language);

        SessionTicket {
            surface: self.surface,
            generation: self.generation,
        }
    }

    /// Drops any in-flight result. Does nothing unless listening.
    pub fn cancel(&mut self) {
        if self.is_listening() {
            self.generation += 1;
            self.state = SessionState::Cancelled;
            tracing::info!("🎙️ {:?} cancelled", self.surface);
        }
    }

    /// Records the recognizer's result. Returns `None` when the ticket is
    /// stale or the session is no longer listening.
    pub fn finish(&mut self, ticket: SessionTicket, outcome: RecognitionOutcome) -> Option<SessionOutcome> {
        if ticket.surface != self.surface || ticket.generation != self.generation || !self.is_listening() {
            tracing::debug!("🎙️ Discarding stale {:?} result", ticket.surface);
            return None;
        }

        let result = match outcome {
            RecognitionOutcome::Transcript(text) => {
                self.state = SessionState::Completed(text.clone());
                SessionOutcome::Transcript(text)
            }
            RecognitionOutcome::Failed(reason) => {
                self.state = SessionState::Failed(reason.clone());
                SessionOutcome::Failed(reason)
            }
            RecognitionOutcome::NoResult => {
                self.state = SessionState::Idle;
                SessionOutcome::Ended
            }
        };
        Some(result)
    }

    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_completes_session() {
        let mut session = CaptureSession::new(Surface::CartCommand);
        let ticket = session.start(Language::EnglishUs);
        assert!(session.is_listening());

        let outcome = session.finish(ticket, RecognitionOutcome::Transcript("add milk".to_string()));
        assert_eq!(outcome, Some(SessionOutcome::Transcript("add milk".to_string())));
        assert_eq!(session.state(), &SessionState::Completed("add milk".to_string()));

        session.reset();
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn test_restart_discards_previous_result() {
        let mut session = CaptureSession::new(Surface::Search);
        let first = session.start(Language::EnglishUs);
        let second = session.start(Language::HindiIndia);

        assert_eq!(session.finish(first, RecognitionOutcome::Transcript("old".to_string())), None);
        assert!(session.is_listening());
        assert_eq!(
            session.finish(second, RecognitionOutcome::Transcript("new".to_string())),
            Some(SessionOutcome::Transcript("new".to_string()))
        );
    }

    #[test]
    fn test_cancel_discards_in_flight_result() {
        let mut session = CaptureSession::new(Surface::CartCommand);
        let ticket = session.start(Language::EnglishUs);
        session.cancel();
        assert_eq!(session.state(), &SessionState::Cancelled);
        assert_eq!(session.finish(ticket, RecognitionOutcome::Transcript("add milk".to_string())), None);
    }

    #[test]
    fn test_failure_and_no_result() {
        let mut session = CaptureSession::new(Surface::CartCommand);
        let ticket = session.start(Language::EnglishUs);
        assert_eq!(
            session.finish(ticket, RecognitionOutcome::Failed("network".to_string())),
            Some(SessionOutcome::Failed("network".to_string()))
        );
        assert_eq!(session.state(), &SessionState::Failed("network".to_string()));

        let ticket = session.start(Language::EnglishUs);
        assert_eq!(session.finish(ticket, RecognitionOutcome::NoResult), Some(SessionOutcome::Ended));
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn test_ticket_from_other_surface_is_rejected() {
        let mut cart_mic = CaptureSession::new(Surface::CartCommand);
        let mut search_mic = CaptureSession::new(Surface::Search);
        let search_ticket = search_mic.start(Language::EnglishUs);
        cart_mic.start(Language::EnglishUs);

        assert_eq!(search_ticket.surface(), Surface::Search);
        assert_eq!(cart_mic.finish(search_ticket, RecognitionOutcome::NoResult), None);
        assert!(cart_mic.is_listening());
    }
}
