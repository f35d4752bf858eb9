use crate::error::SurveyError;
use crate::export::ResultExporter;
use crate::survey::{Emotion, Intensity, Page, Session, SurveyEvent, Transition};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::path::PathBuf;

const MAX_LOGS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Info,
    Error,
}

/// What happens once the respondent dismisses a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterModal {
    Nothing,
    ShowCompletion,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
    pub after: AfterModal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Pending,
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub message: String,
}

/// Presentation state around a [`Session`]. Everything the renderer needs
/// is read from here; only `handle_key` mutates it.
pub struct App {
    pub title: String,
    pub session: Session,
    pub modal: Option<Modal>,
    pub export_status: ExportStatus,
    pub logs: VecDeque<LogEntry>,
    pub should_quit: bool,
    exporter: ResultExporter,
}

impl App {
    pub fn new(title: String, session: Session, exporter: ResultExporter) -> Self {
        Self {
            title,
            session,
            modal: None,
            export_status: ExportStatus::Pending,
            logs: VecDeque::with_capacity(MAX_LOGS),
            should_quit: false,
            exporter,
        }
    }

    /// Call once before the first draw. An empty word list finishes at once.
    pub fn start(&mut self) {
        let (_, total) = self.session.progress();
        self.push_log("INFO", format!("Survey started with {} words", total));
        if self.session.is_done() {
            self.finish();
        }
    }

    pub fn push_log(&mut self, level: &str, message: String) {
        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        if self.logs.len() >= MAX_LOGS {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            time,
            level: level.to_string(),
            message,
        });
    }

    pub fn is_saved(&self) -> bool {
        matches!(self.export_status, ExportStatus::Saved(_))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if let Some(modal) = &self.modal {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                let after = modal.after;
                self.modal = None;
                self.after_modal(after);
            }
            return;
        }

        match self.session.page() {
            Page::Emotion => self.handle_emotion_key(key.code),
            Page::Intensity => self.handle_intensity_key(key.code),
            Page::Done => self.handle_done_key(key.code),
        }
    }

    fn handle_emotion_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(emotion) = Emotion::from_option(c as u8 - b'0') {
                    self.dispatch(SurveyEvent::SelectEmotion(emotion));
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let idx = step(
                    self.session.pending_emotion().map(|e| e.index()),
                    Emotion::ALL.len(),
                    code == KeyCode::Right,
                );
                self.dispatch(SurveyEvent::SelectEmotion(Emotion::ALL[idx]));
            }
            // Disabled until an emotion is chosen; the session ignores it.
            KeyCode::Enter => self.dispatch(SurveyEvent::Advance),
            _ => {}
        }
    }

    fn handle_intensity_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char(c @ '1'..='5') => {
                if let Ok(intensity) = Intensity::new(c as u8 - b'0') {
                    self.dispatch(SurveyEvent::SelectIntensity(intensity));
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let count = (Intensity::MAX - Intensity::MIN + 1) as usize;
                let current = self
                    .session
                    .pending_intensity()
                    .map(|i| (i.get() - Intensity::MIN) as usize);
                let idx = step(current, count, code == KeyCode::Right);
                if let Ok(intensity) = Intensity::new(Intensity::MIN + idx as u8) {
                    self.dispatch(SurveyEvent::SelectIntensity(intensity));
                }
            }
            KeyCode::Enter => self.dispatch(SurveyEvent::Confirm),
            KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('b') => {
                self.dispatch(SurveyEvent::Back)
            }
            _ => {}
        }
    }

    fn handle_done_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') if !self.is_saved() => self.finish(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn dispatch(&mut self, event: SurveyEvent) {
        match self.session.apply(event) {
            Ok(Transition::Recorded { next }) => {
                let (answered, total) = self.session.progress();
                if let Some(j) = self.session.judgments().last() {
                    let msg = format!(
                        "Recorded {} / {}: {} {} {}",
                        answered, total, j.word, j.emotion, j.intensity
                    );
                    self.push_log("INFO", msg);
                }
                if next == Page::Done {
                    self.finish();
                }
            }
            Ok(_) => {}
            Err(SurveyError::IntensityNotSelected) => {
                self.modal = Some(Modal {
                    kind: ModalKind::Error,
                    title: "错误".to_string(),
                    message: "请选择情感程度".to_string(),
                    after: AfterModal::Nothing,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "survey event rejected");
                self.push_log("WARN", e.to_string());
            }
        }
    }

    /// Export the collected judgments. Safe to call again after a failure.
    fn finish(&mut self) {
        match self.exporter.export(self.session.judgments()) {
            Ok(path) => {
                self.push_log("INFO", format!("Saved to {}", path.display()));
                self.modal = Some(Modal {
                    kind: ModalKind::Info,
                    title: "保存成功".to_string(),
                    message: format!("结果已保存到 {}", path.display()),
                    after: AfterModal::ShowCompletion,
                });
                self.export_status = ExportStatus::Saved(path);
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.push_log("ERROR", e.to_string());
                self.modal = Some(Modal {
                    kind: ModalKind::Error,
                    title: "保存失败".to_string(),
                    message: format!("{}\n\n按 r 重试, q 退出 (r: retry, q: quit)", e),
                    after: AfterModal::Nothing,
                });
                self.export_status = ExportStatus::Failed(e.to_string());
            }
        }
    }

    fn after_modal(&mut self, after: AfterModal) {
        match after {
            AfterModal::Nothing => {}
            AfterModal::ShowCompletion => {
                self.modal = Some(Modal {
                    kind: ModalKind::Info,
                    title: "完成".to_string(),
                    message: "调查已完成！感谢参与。".to_string(),
                    after: AfterModal::Quit,
                });
            }
            AfterModal::Quit => self.should_quit = true,
        }
    }

    fn quit(&mut self) {
        let (answered, total) = self.session.progress();
        if !self.is_saved() {
            tracing::warn!(answered, total, "quit before results were saved");
        }
        self.should_quit = true;
    }
}

/// Move a radio-style selection one option left or right, clamped at the ends.
/// With nothing selected, the first press lands on the first option.
fn step(current: Option<usize>, count: usize, forward: bool) -> usize {
    match current {
        None => 0,
        Some(i) if forward => (i + 1).min(count - 1),
        Some(i) => i.saturating_sub(1),
    }
}
