// End-to-end runs through the session controller and the exporter

#[cfg(test)]
mod tests {
    use valence_survey::{
        Emotion, Intensity, Page, ResultExporter, Session, SurveyError, SurveyEvent, Transition,
    };

    fn answer(session: &mut Session, emotion: Emotion, intensity: u8) -> Transition {
        session.apply(SurveyEvent::SelectEmotion(emotion)).unwrap();
        session.apply(SurveyEvent::Advance).unwrap();
        session
            .apply(SurveyEvent::SelectIntensity(Intensity::new(intensity).unwrap()))
            .unwrap();
        session.apply(SurveyEvent::Confirm).unwrap()
    }

    #[test]
    fn test_every_word_gets_one_judgment_in_order() {
        let words: Vec<String> = ["光荣", "愤怒", "说明", "愤怒"].iter().map(|w| w.to_string()).collect();
        let mut session = Session::new(words.clone());

        let emotions = [Emotion::Positive, Emotion::Negative, Emotion::Neutral, Emotion::Negative];
        for (i, emotion) in emotions.iter().enumerate() {
            assert_eq!(session.current_word(), Some(words[i].as_str()));
            assert_eq!(session.judgments().len(), session.cursor());
            answer(&mut session, *emotion, (i % 5) as u8 + 1);
        }

        assert_eq!(session.page(), Page::Done);
        assert_eq!(session.judgments().len(), words.len());
        for (j, w) in session.judgments().iter().zip(&words) {
            assert_eq!(&j.word, w);
        }
    }

    #[test]
    fn test_validation_error_keeps_state() {
        let mut session = Session::new(vec!["a".to_string(), "b".to_string()]);
        answer(&mut session, Emotion::Positive, 2);

        session.apply(SurveyEvent::SelectEmotion(Emotion::Neutral)).unwrap();
        session.apply(SurveyEvent::Advance).unwrap();
        let err = session.apply(SurveyEvent::Confirm).unwrap_err();
        assert!(matches!(err, SurveyError::IntensityNotSelected));
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.judgments().len(), 1);
        assert_eq!(session.page(), Page::Intensity);
    }

    #[test]
    fn test_back_then_change_emotion_scenario() {
        let mut session = Session::new(vec!["a".to_string()]);
        session.apply(SurveyEvent::SelectEmotion(Emotion::Neutral)).unwrap();
        session.apply(SurveyEvent::Advance).unwrap();
        assert_eq!(session.apply(SurveyEvent::Back).unwrap(), Transition::ShowEmotion);
        assert!(session.judgments().is_empty());
        assert_eq!(answer(&mut session, Emotion::Negative, 5), Transition::Recorded { next: Page::Done });

        let j = &session.judgments()[0];
        assert_eq!(j.emotion, Emotion::Negative);
        assert_eq!(j.intensity.get(), 5);
    }

    #[test]
    fn test_single_word_session_exports_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(vec!["苹果".to_string()]);
        answer(&mut session, Emotion::Positive, 3);
        assert!(session.is_done());

        let exporter = ResultExporter::new(dir.path().join("results").join("survey_results.csv"));
        let path = exporter.export(session.judgments()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "word,emotion,intensity\n苹果,positive,3\n");
    }

    #[test]
    fn test_export_line_count_and_retry_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let words: Vec<String> = (0..7).map(|i| format!("w{}", i)).collect();
        let mut session = Session::new(words);
        for _ in 0..7 {
            answer(&mut session, Emotion::Neutral, 4);
        }

        let blocker = dir.path().join("results");
        std::fs::write(&blocker, "").unwrap();
        let exporter = ResultExporter::new(blocker.join("survey_results.csv"));
        assert!(exporter.export(session.judgments()).is_err());
        assert_eq!(session.judgments().len(), 7);

        std::fs::remove_file(&blocker).unwrap();
        let path = exporter.export(session.judgments()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "word,emotion,intensity");
        assert_eq!(lines[1], "w0,neutral,4");
        assert_eq!(lines[7], "w6,neutral,4");
    }
}
