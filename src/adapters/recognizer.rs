use crate::domain::model::{Language, RecognitionOutcome};
use crate::domain::ports::SpeechRecognizer;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Treats the next line typed on stdin as the transcript. The CLI reads its
/// own commands through [`StdinRecognizer::next_line`] so both share one
/// buffered reader.
pub struct StdinRecognizer {
    lines: tokio::sync::Mutex<Lines<BufReader<Stdin>>>,
}

impl StdinRecognizer {
    pub fn new() -> Self {
        Self {
            lines: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

impl Default for StdinRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechRecognizer for StdinRecognizer {
    async fn recognize(&self, language: Language) -> RecognitionOutcome {
        tracing::debug!("Waiting for a {} transcript on stdin", language);
        match self.next_line().await {
            Ok(Some(line)) if !line.trim().is_empty() => RecognitionOutcome::Transcript(line),
            Ok(_) => RecognitionOutcome::NoResult,
            Err(e) => RecognitionOutcome::Failed(e.to_string()),
        }
    }
}

/// Replays queued outcomes in order; yields `NoResult` once drained.
#[derive(Default)]
pub struct ScriptedRecognizer {
    outcomes: Mutex<VecDeque<RecognitionOutcome>>,
    requested: Mutex<Vec<Language>>,
}

impl ScriptedRecognizer {
    pub fn new(outcomes: impl IntoIterator<Item = RecognitionOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn transcripts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(texts.into_iter().map(|t| RecognitionOutcome::Transcript(t.to_string())))
    }

    /// Languages passed to each `recognize` call, oldest first.
    pub fn requested_languages(&self) -> Vec<Language> {
        self.requested.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    async fn recognize(&self, language: Language) -> RecognitionOutcome {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(language);
        }
        self.outcomes
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(RecognitionOutcome::NoResult)
    }
}

/// A device without speech recognition.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedRecognizer;

#[async_trait]
impl SpeechRecognizer for UnsupportedRecognizer {
    fn is_supported(&self) -> bool {
        false
    }

    async fn recognize(&self, _language: Language) -> RecognitionOutcome {
        RecognitionOutcome::Failed("speech recognition is not supported".to_string())
    }
}
