use super::output::LexicalOutput;
use crate::lexical::LexicalMetrics;
use crate::symbols::InferenceSummary;
use std::time::Duration;

/// Complete pipeline result: output plus what it took to produce it
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub output: LexicalOutput,
    pub lexical_metrics: LexicalMetrics,
    pub inference: InferenceSummary,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        output: LexicalOutput,
        lexical_metrics: LexicalMetrics,
        inference: InferenceSummary,
        processing_duration: Duration,
    ) -> Self {
        Self {
            output,
            lexical_metrics,
            inference,
            processing_duration,
        }
    }

    pub fn token_count(&self) -> usize {
        self.output.tokens.len()
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "Lexical pipeline succeeded",
            "tokens" => self.token_count(),
            "symbols" => self.output.symbols.len(),
            "typed_assignments" => self.inference.types_assigned,
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
