use super::*;
use crate::embedding::{EmbeddingError, MockEmbeddingProvider};
use crate::records::{HistoricalResponse, Response, ResponseField};
use crate::similarity::SimilarityError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-5
}

fn alice_and_bob() -> Vec<Response> {
    vec![
        Response::new("alice", "What is 6*7?", "The result is 42.", 8.0, 9.0)
            .with_name("Alice", "Adams"),
        Response::new("bob", "Explain recursion", "The result is 42.", 6.0, 7.0)
            .with_name("Bob", "Brown"),
    ]
}

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_identical_answers_are_flagged_and_normalised() {
        let pipeline = ReviewPipeline::new(MockEmbeddingProvider::new(64));
        let outcome = pipeline.run(&alice_and_bob(), &[]).unwrap();

        assert!(outcome.question.alerts.is_empty());
        assert_eq!(outcome.answer.alerts.len(), 1);
        let alert = &outcome.answer.alerts[0];
        assert_eq!(alert.field, ResponseField::Answer);
        assert_eq!((alert.row, alert.column), (0, 1));
        assert_eq!(outcome.alert_count(), 1);

        for id in ["alice", "bob"] {
            let record = outcome.ledger.get(id).unwrap();
            assert!(approx(record.answer_similarity_sum, 1.0));
        }
        assert_eq!(outcome.ledger.len(), 2);
    }

    #[test]
    fn test_one_provider_call_per_field() {
        let mock = MockEmbeddingProvider::new(16);
        let pipeline = ReviewPipeline::new(&mock);
        let historical = vec![HistoricalResponse::new("old", "Old question", "Old answer")];

        pipeline.run(&alice_and_bob(), &historical).unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), 3);
        assert_eq!(calls[0][0].0, "what is 6 7 ");
        assert_eq!(calls[1][2].0, "old answer");
    }

    #[test]
    fn test_formality_is_folded_per_response() {
        let current = vec![Response::new("s", "a_b + 2", "x == 1", 1.0, 1.0)];
        let pipeline = ReviewPipeline::new(MockEmbeddingProvider::new(8));

        let outcome = pipeline.run(&current, &[]).unwrap();
        let record = outcome.ledger.get("s").unwrap();
        assert_eq!(record.question_formality_total, 3);
        assert_eq!(record.answer_formality_total, 2);
    }

    #[test]
    fn test_single_response_without_history() {
        let current = vec![Response::new("solo", "Why?", "Because.", 5.0, 5.0)];
        let pipeline = ReviewPipeline::new(MockEmbeddingProvider::new(8));

        let outcome = pipeline.run(&current, &[]).unwrap();
        let record = outcome.ledger.get("solo").unwrap();
        assert_eq!(record.question_similarity_sum, 0.0);
        assert_eq!(record.answer_similarity_sum, 0.0);
        assert_eq!(outcome.alert_count(), 0);
    }

    #[test]
    fn test_historical_texts_count_towards_the_divisor() {
        let mock = MockEmbeddingProvider::new(2)
            .with_vector("mine", vec![1.0, 0.0])
            .with_vector("theirs", vec![0.0, 1.0])
            .with_vector("old", vec![1.0, 0.0]);
        let current = vec![
            Response::new("a", "mine", "mine", 1.0, 1.0),
            Response::new("b", "theirs", "theirs", 1.0, 1.0),
        ];
        let historical = vec![HistoricalResponse::new("prev", "old", "old")];

        let outcome = ReviewPipeline::new(&mock).run(&current, &historical).unwrap();

        // "a" matches the historical text exactly; divisor is N + M - 1 = 2.
        assert!(approx(outcome.ledger.get("a").unwrap().answer_similarity_sum, 0.5));
        assert!(approx(outcome.ledger.get("b").unwrap().answer_similarity_sum, 0.0));

        let alerts: Vec<_> = outcome.alerts().collect();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].field, ResponseField::Question);
        assert!(alerts.iter().all(|a| a.right.historical && a.column == 2));
    }

    #[test]
    fn test_alert_names_match_report_names() {
        let current = vec![
            Response::new("sam", "Q1", "The answer", 1.0, 1.0).with_name("Sam", "Smith"),
            Response::new("sam", "Q2", "the ANSWER", 1.0, 1.0).with_name("Samuel", "Smythe"),
        ];
        let outcome = ReviewPipeline::new(MockEmbeddingProvider::new(64))
            .run(&current, &[])
            .unwrap();

        let record = outcome.ledger.get("sam").unwrap();
        let alert = &outcome.answer.alerts[0];
        for participant in [&alert.left, &alert.right] {
            assert_eq!(participant.firstname, record.firstname);
            assert_eq!(participant.lastname, record.lastname);
        }
    }

    #[test]
    fn test_empty_batch_fails_before_embedding() {
        let mock = MockEmbeddingProvider::new(8);
        let err = ReviewPipeline::new(&mock).run(&[], &[]).unwrap_err();

        assert!(matches!(err, ReviewError::EmptyBatch));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_provider_failure_aborts_run() {
        let pipeline = ReviewPipeline::new(MockEmbeddingProvider::new(8).failing("offline"));
        let err = pipeline.run(&alice_and_bob(), &[]).unwrap_err();

        assert!(matches!(
            err,
            ReviewError::Similarity(SimilarityError::Embedding(
                EmbeddingError::InferenceFailed { .. }
            ))
        ));
    }
}

mod summary_tests {
    use super::*;
    use crate::aggregate::StudentLedger;

    #[test]
    fn test_averages_are_per_student() {
        let mut ledger = StudentLedger::new();
        ledger.fold(&Response::new("a", "abcd", "ef", 1.0, 1.0), 2, 4);
        ledger.fold(&Response::new("a", "gh", "ijkl", 1.0, 1.0), 0, 2);
        ledger.fold(&Response::new("b", "mn", "op", 1.0, 1.0), 1, 0);

        let summary = BatchSummary::from_ledger(&ledger);
        assert_eq!(summary.students, 2);
        assert_eq!(summary.total_qas, 3);
        assert_eq!(summary.average_qa_count, 1.5);
        assert_eq!(summary.average_question_length, 4.0);
        assert_eq!(summary.average_answer_length, 4.0);
        assert_eq!(summary.average_question_formality, 1.5);
        assert_eq!(summary.average_answer_formality, 3.0);
        assert_eq!(summary.average_combined_length, 8.0);
    }

    #[test]
    fn test_empty_ledger_is_all_zero() {
        assert_eq!(
            BatchSummary::from_ledger(&StudentLedger::new()),
            BatchSummary::default()
        );
    }
}

mod file_tests {
    use super::*;

    const HEADER: &str =
        "Username,Firstname,Lastname,Ask Question,Answer Question,Grade Question,Grade Answer\n";

    #[test]
    fn test_process_files_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let responses = dir.path().join("responses.csv");
        let history = dir.path().join("history.csv");
        let analysis = dir.path().join("analysis.csv");
        std::fs::write(
            &responses,
            format!(
                "{HEADER}alice,Alice,A,Q1,The result is 42.,8,9\n\
                 bob,Bob,B,Q2,the RESULT is 42!,6,7\n"
            ),
        )
        .unwrap();
        std::fs::write(&history, "Username,Ask Question,Answer Question\nold,Q0,A0\n").unwrap();

        let outcome = process_files(
            &responses,
            &[history],
            &analysis,
            MockEmbeddingProvider::new(32),
        )
        .unwrap();

        assert_eq!(outcome.answer.matrix.total_len(), 3);
        assert_eq!(outcome.answer.alerts.len(), 1);
        let report = std::fs::read_to_string(&analysis).unwrap();
        assert_eq!(report.lines().count(), 3);
    }

    #[test]
    fn test_malformed_input_writes_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let responses = dir.path().join("responses.csv");
        let analysis = dir.path().join("analysis.csv");
        std::fs::write(&responses, "Username,Ask Question\nalice,Q1\n").unwrap();

        let err = process_files(&responses, &[], &analysis, MockEmbeddingProvider::new(8))
            .unwrap_err();

        assert!(matches!(err, ReviewError::Record(_)));
        assert!(!analysis.exists());
    }

    #[test]
    fn test_embedding_failure_writes_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let responses = dir.path().join("responses.csv");
        let analysis = dir.path().join("analysis.csv");
        std::fs::write(&responses, format!("{HEADER}alice,Alice,A,Q1,A1,8,9\n")).unwrap();

        let provider = MockEmbeddingProvider::new(8).failing("offline");
        let err = process_files(&responses, &[], &analysis, provider).unwrap_err();

        assert!(matches!(err, ReviewError::Similarity(_)));
        assert!(!analysis.exists());
    }

    #[test]
    fn test_header_only_responses_file_is_an_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let responses = dir.path().join("responses.csv");
        let analysis = dir.path().join("analysis.csv");
        std::fs::write(&responses, HEADER).unwrap();

        let err = process_files(&responses, &[], &analysis, MockEmbeddingProvider::new(8))
            .unwrap_err();

        assert!(matches!(err, ReviewError::EmptyBatch));
        assert!(!analysis.exists());
    }
}
