use crate::{
    config::Config,
    error::Result,
    scheduler,
    services::{accept_generated, generate_itinerary_prompt, TextGenerator},
    types::{Forecast, PlanRequest},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Where the returned itinerary text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Generated,
    Scheduled,
}

/// Itinerary text plus its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub text: String,
    pub source: PlanSource,
}

/// Day planner: asks the text generator first and falls back to the
/// deterministic scheduler whenever generation is unavailable, fails, or
/// produces text that does not look like an itinerary.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl Planner {
    /// Planner that only uses the scheduler
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        let generator: Arc<dyn TextGenerator> = Arc::new(generator);
        Self {
            generator: Some(generator),
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Use the configured chat service when a key is present
    pub fn from_config(config: &Config) -> Self {
        match config.chat_client() {
            Ok(client) => Self::new(client),
            Err(err) => {
                info!(target: "daytrip::planner", error = %err, "text generation disabled");
                Self::offline()
            }
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Produce itinerary text. Never fails: every problem ends in the scheduler.
    pub async fn plan(&self, request: &PlanRequest, weather: Option<&Forecast>) -> Plan {
        if let Some(generator) = &self.generator {
            match self.try_generate(generator.as_ref(), request, weather).await {
                Ok(text) => {
                    info!(target: "daytrip::planner", chars = text.len(), "using generated itinerary");
                    return Plan {
                        text,
                        source: PlanSource::Generated,
                    };
                }
                Err(err) => {
                    warn!(
                        target: "daytrip::planner",
                        code = err.error_code(),
                        error = %err,
                        "generation failed, using scheduled itinerary"
                    );
                }
            }
        }

        Plan {
            text: scheduler::fallback_itinerary(
                &request.attractions,
                &request.preferences,
                weather.and_then(Forecast::today),
            ),
            source: PlanSource::Scheduled,
        }
    }

    async fn try_generate(
        &self,
        generator: &dyn TextGenerator,
        request: &PlanRequest,
        weather: Option<&Forecast>,
    ) -> Result<String> {
        let prompt = generate_itinerary_prompt(&request.attractions, &request.preferences, weather);
        let generated = generator.generate(&prompt).await?;
        accept_generated(&prompt, &generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::types::{Attraction, Preferences};
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Canned(std::result::Result<String, String>);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.0.clone().map_err(PlannerError::Unknown)
        }
    }

    fn request() -> PlanRequest {
        PlanRequest::new(
            vec![Attraction::new("1", "City Museum")],
            Preferences::default(),
        )
    }

    #[tokio::test]
    async fn test_offline_uses_scheduler() {
        let plan = Planner::offline().plan(&request(), None).await;
        assert_eq!(plan.source, PlanSource::Scheduled);
        assert!(plan.text.contains("⏰ 9:00 AM - CITY MUSEUM"));
    }

    #[tokio::test]
    async fn test_generated_text_is_used_when_valid() {
        let text = "9:00 AM - City Museum: start with the main gallery and the special exhibition.\n\
                    11:00 AM - Coffee on the square before heading on.";
        let plan = Planner::new(Canned(Ok(text.to_string())))
            .plan(&request(), None)
            .await;
        assert_eq!(plan.source, PlanSource::Generated);
        assert_eq!(plan.text, text);
    }

    #[tokio::test]
    async fn test_failures_fall_back() {
        for canned in [
            Canned(Err("connection reset".to_string())),
            Canned(Ok("Have fun!".to_string())),
        ] {
            let plan = Planner::new(canned).plan(&request(), None).await;
            assert_eq!(plan.source, PlanSource::Scheduled);
            assert!(plan.text.starts_with("📋 Your Customized Itinerary"));
        }
    }
}
