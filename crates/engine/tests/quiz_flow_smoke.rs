use chrono::Duration;
use engine::{Clock, QuestionBank, QuizSession, ResultsView, all_incorrect, summarize};
use quiz_core::model::Difficulty;
use quiz_core::scoring::ScoringWeights;
use quiz_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn full_quiz_flow_over_the_reference_catalog() {
    let bank = QuestionBank::reference_catalog();
    let weights = ScoringWeights::default();
    let mut session = QuizSession::new(weights.clone(), Clock::fixed(fixed_now()));
    let mut rng = StdRng::seed_from_u64(2024);

    session.start(&bank, &mut rng);
    assert_eq!(session.total_questions(), 6);
    assert_eq!(session.progress_fraction(), 0.0);

    // Answer every question correctly, taking a little longer each time.
    let mut step = 1;
    while !session.is_complete() {
        session.clock_mut().advance(Duration::seconds(step));
        let correct = session
            .current_question()
            .unwrap()
            .correct_option()
            .to_owned();
        let response = session.submit_answer(&correct).unwrap().clone();
        assert!(response.is_correct);
        assert_eq!(response.elapsed_seconds, step as f64);
        step += 1;
    }

    // Two questions per difficulty: 2*1 + 2*2 + 2*3.
    assert_eq!(session.score(), 12);
    assert_eq!(session.progress_fraction(), 1.0);
    assert_eq!(session.responses().len(), 6);
    assert!(session.completed_at().is_some());

    let summary = summarize(session.responses());
    for difficulty in Difficulty::ALL {
        let stats = summary.stats(difficulty);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.accuracy_percent, 100.0);
        assert!(stats.average_time_secs > 0.0);
    }
    assert!(!all_incorrect(session.responses()));

    let view = ResultsView::from_session(&session);
    assert_eq!(view.score, 12);
    assert!(view.is_complete);
    assert_eq!(view.review.len(), 6);

    // Retake: the session resets and runs again from scratch.
    session.start(&bank, &mut rng);
    assert_eq!(session.score(), 0);
    assert_eq!(session.answered_count(), 0);
    assert!(!session.is_complete());
}
