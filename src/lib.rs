pub mod config;
pub mod error;
pub mod export;
pub mod survey;
pub mod tui;
pub mod words;

pub use error::{Result, SurveyError};
pub use export::ResultExporter;
pub use survey::{Emotion, Intensity, Judgment, Page, Session, SurveyEvent, Transition};
