use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::aggregate::StudentLedger;
use crate::config::Config;
use crate::embedding::{EmbeddingProvider, EncoderConfig, SentenceEncoder};
use crate::formality::formality;
use crate::records::{
    HistoricalResponse, Response, ResponseField, read_historical, read_responses, write_report,
};
use crate::similarity::{FieldReview, ReviewAlert, SimilarityMatrixBuilder};

use super::error::ReviewError;
use super::summary::BatchSummary;

/// Everything a run produces before the report is serialised.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub ledger: StudentLedger,
    pub question: FieldReview,
    pub answer: FieldReview,
    pub summary: BatchSummary,
}

impl ReviewOutcome {
    /// Question alerts followed by answer alerts, each in row-major order.
    pub fn alerts(&self) -> impl Iterator<Item = &ReviewAlert> {
        self.question.alerts.iter().chain(self.answer.alerts.iter())
    }

    pub fn alert_count(&self) -> usize {
        self.question.alerts.len() + self.answer.alerts.len()
    }
}

/// Folds a batch into per-student records and scores it against history.
#[derive(Debug)]
pub struct ReviewPipeline<P> {
    builder: SimilarityMatrixBuilder<P>,
}

impl ReviewPipeline<SentenceEncoder> {
    /// Validates `config` and loads the sentence encoder it describes.
    pub fn from_config(config: &Config) -> Result<Self, ReviewError> {
        config.validate()?;
        let encoder = SentenceEncoder::load(EncoderConfig::from_config(config))?;
        Ok(Self::new(encoder))
    }
}

impl<P: EmbeddingProvider> ReviewPipeline<P> {
    pub fn new(provider: P) -> Self {
        Self {
            builder: SimilarityMatrixBuilder::new(provider),
        }
    }

    pub fn provider(&self) -> &P {
        self.builder.provider()
    }

    /// Runs the whole review over in-memory records.
    ///
    /// The ledger is fresh for every call. Questions are embedded first, then answers; each
    /// field costs exactly one provider call.
    pub fn run(
        &self,
        current: &[Response],
        historical: &[HistoricalResponse],
    ) -> Result<ReviewOutcome, ReviewError> {
        if current.is_empty() {
            return Err(ReviewError::EmptyBatch);
        }

        let mut ledger = StudentLedger::new();
        for response in current {
            ledger.fold(
                response,
                formality(&response.question_text),
                formality(&response.answer_text),
            );
        }
        debug!(
            responses = current.len(),
            students = ledger.len(),
            "Folded current responses"
        );

        let question = self
            .builder
            .review(ResponseField::Question, current, historical)?;
        let answer = self
            .builder
            .review(ResponseField::Answer, current, historical)?;

        let current_ids: Vec<&str> = current.iter().map(|r| r.student_id.as_str()).collect();
        let historical_ids: Vec<&str> = historical.iter().map(|r| r.student_id.as_str()).collect();
        ledger.assign_similarity(
            &current_ids,
            &historical_ids,
            &question.matrix,
            &answer.matrix,
        )?;

        let summary = BatchSummary::from_ledger(&ledger);
        summary.log();

        Ok(ReviewOutcome {
            ledger,
            question,
            answer,
            summary,
        })
    }

    /// Reads the input files, runs the review and writes the analysis report.
    ///
    /// Every input is read and scored before `analysis_path` is touched, so a failing run
    /// leaves no report behind.
    pub fn process_files(
        &self,
        responses_path: &Path,
        historical_paths: &[PathBuf],
        analysis_path: &Path,
    ) -> Result<ReviewOutcome, ReviewError> {
        let current = read_responses(responses_path)?;
        let historical = read_historical(historical_paths)?;
        info!(
            responses = current.len(),
            historical = historical.len(),
            path = %responses_path.display(),
            "Loaded responses"
        );

        let outcome = self.run(&current, &historical)?;
        write_report(analysis_path, &outcome.ledger)?;
        Ok(outcome)
    }
}

/// Shorthand for [`ReviewPipeline::process_files`] with a one-off pipeline.
pub fn process_files<P: EmbeddingProvider>(
    responses_path: &Path,
    historical_paths: &[PathBuf],
    analysis_path: &Path,
    provider: P,
) -> Result<ReviewOutcome, ReviewError> {
    ReviewPipeline::new(provider).process_files(responses_path, historical_paths, analysis_path)
}
