pub mod session;
pub mod types;

pub use session::{Session, SurveyEvent, Transition};
pub use types::{Emotion, Intensity, Judgment, Page};
