use super::types::{Emotion, Intensity, Judgment, Page};
use crate::error::{Result, SurveyError};

/// User actions the presentation layer forwards to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyEvent {
    SelectEmotion(Emotion),
    Advance,
    SelectIntensity(Intensity),
    Back,
    Confirm,
}

/// What the presentation layer should show after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same page; at most a pending selection changed.
    Stayed,
    ShowIntensity,
    ShowEmotion,
    /// A judgment was appended. `next` is Emotion for the next word or Done.
    Recorded { next: Page },
}

/// Walks a fixed word list one word at a time, two pages per word.
///
/// Invariants held after every call:
/// - `judgments.len() == cursor <= words.len()`
/// - `page == Intensity` implies a pending emotion
/// - `page == Done` iff every word has a judgment
pub struct Session {
    words: Vec<String>,
    judgments: Vec<Judgment>,
    cursor: usize,
    pending_emotion: Option<Emotion>,
    pending_intensity: Option<Intensity>,
    page: Page,
}

impl Session {
    pub fn new(words: Vec<String>) -> Self {
        let page = if words.is_empty() { Page::Done } else { Page::Emotion };
        Self {
            judgments: Vec::with_capacity(words.len()),
            words,
            cursor: 0,
            pending_emotion: None,
            pending_intensity: None,
            page,
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        match self.page {
            Page::Done => None,
            _ => self.words.get(self.cursor).map(String::as_str),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.page == Page::Emotion && self.pending_emotion.is_some()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_done(&self) -> bool {
        self.page == Page::Done
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pending_emotion(&self) -> Option<Emotion> {
        self.pending_emotion
    }

    pub fn pending_intensity(&self) -> Option<Intensity> {
        self.pending_intensity
    }

    pub fn judgments(&self) -> &[Judgment] {
        &self.judgments
    }

    pub fn into_judgments(self) -> Vec<Judgment> {
        self.judgments
    }

    /// (answered, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.judgments.len(), self.words.len())
    }

    pub fn apply(&mut self, event: SurveyEvent) -> Result<Transition> {
        match event {
            SurveyEvent::SelectEmotion(emotion) => Ok(self.select_emotion(emotion)),
            SurveyEvent::Advance => Ok(self.on_advance()),
            SurveyEvent::SelectIntensity(intensity) => Ok(self.select_intensity(intensity)),
            SurveyEvent::Back => Ok(self.on_back()),
            SurveyEvent::Confirm => self.on_confirm(),
        }
    }

    pub fn select_emotion(&mut self, emotion: Emotion) -> Transition {
        if self.page == Page::Emotion {
            tracing::debug!(cursor = self.cursor, %emotion, "emotion selected");
            self.pending_emotion = Some(emotion);
        }
        Transition::Stayed
    }

    pub fn on_advance(&mut self) -> Transition {
        if !self.can_advance() {
            return Transition::Stayed;
        }
        self.page = Page::Intensity;
        // The intensity page always opens with nothing chosen.
        self.pending_intensity = None;
        tracing::debug!(cursor = self.cursor, "show intensity page");
        Transition::ShowIntensity
    }

    pub fn select_intensity(&mut self, intensity: Intensity) -> Transition {
        if self.page == Page::Intensity {
            tracing::debug!(cursor = self.cursor, %intensity, "intensity selected");
            self.pending_intensity = Some(intensity);
        }
        Transition::Stayed
    }

    pub fn on_back(&mut self) -> Transition {
        if self.page != Page::Intensity {
            return Transition::Stayed;
        }
        self.page = Page::Emotion;
        tracing::debug!(cursor = self.cursor, "back to emotion page");
        Transition::ShowEmotion
    }

    pub fn on_confirm(&mut self) -> Result<Transition> {
        if self.page != Page::Intensity {
            return Ok(Transition::Stayed);
        }
        let Some(intensity) = self.pending_intensity else {
            return Err(SurveyError::IntensityNotSelected);
        };
        let Some(emotion) = self.pending_emotion else {
            // Unreachable while the page invariant holds; treat as not advanced.
            self.page = Page::Emotion;
            return Ok(Transition::ShowEmotion);
        };

        let judgment = Judgment {
            word: self.words[self.cursor].clone(),
            emotion,
            intensity,
        };
        tracing::info!(
            index = self.cursor,
            word = %judgment.word,
            %emotion,
            %intensity,
            "judgment recorded"
        );
        self.judgments.push(judgment);
        self.cursor += 1;
        self.pending_emotion = None;
        self.pending_intensity = None;

        self.page = if self.cursor == self.words.len() {
            tracing::info!(total = self.judgments.len(), "survey complete");
            Page::Done
        } else {
            Page::Emotion
        };
        Ok(Transition::Recorded { next: self.page })
    }
}
