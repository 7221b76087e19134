use crate::core::{Section, Transcript};
use crate::utils::error::Result;
use std::time::Instant;

pub struct TourEngine {
    sections: Vec<Box<dyn Section>>,
}

impl TourEngine {
    pub fn new(sections: Vec<Box<dyn Section>>) -> Self {
        Self { sections }
    }

    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.name()).collect()
    }

    /// 依序執行每個章節，遇到第一個錯誤就停止
    pub async fn run(&self) -> Result<Vec<Transcript>> {
        tracing::info!("🚀 Starting tour with {} sections", self.sections.len());
        let started = Instant::now();
        let mut transcripts = Vec::with_capacity(self.sections.len());

        for section in &self.sections {
            let mut transcript = Transcript::new(section.name());
            tracing::info!("▶ {}", section.name());

            if let Err(e) = section.run(&mut transcript).await {
                tracing::error!("❌ Section '{}' failed: {}", section.name(), e);
                return Err(e);
            }

            tracing::debug!(
                "Section '{}' produced {} lines",
                section.name(),
                transcript.lines.len()
            );
            transcripts.push(transcript);
        }

        tracing::info!("✅ Tour finished in {:?}", started.elapsed());
        Ok(transcripts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TourError;
    use async_trait::async_trait;

    struct Echo(&'static str);

    #[async_trait]
    impl Section for Echo {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn run(&self, transcript: &mut Transcript) -> Result<()> {
            transcript.say(format!("hello from {}", self.0));
            Ok(())
        }
    }

    struct Broken;

    #[async_trait]
    impl Section for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn run(&self, _transcript: &mut Transcript) -> Result<()> {
            Err(TourError::ConfigError {
                message: "broken section".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_runs_sections_in_order() {
        let sections: Vec<Box<dyn Section>> = vec![Box::new(Echo("first")), Box::new(Echo("second"))];
        let engine = TourEngine::new(sections);
        assert_eq!(engine.section_names(), vec!["first", "second"]);

        let transcripts = engine.run().await.unwrap();
        assert_eq!(transcripts.len(), 2);
        assert_eq!(transcripts[0].section, "first");
        assert_eq!(transcripts[1].lines, vec!["hello from second".to_string()]);
    }

    #[tokio::test]
    async fn test_stops_on_first_error() {
        let sections: Vec<Box<dyn Section>> = vec![
            Box::new(Echo("first")),
            Box::new(Broken),
            Box::new(Echo("never")),
        ];
        let engine = TourEngine::new(sections);
        let result = engine.run().await;
        assert!(matches!(result, Err(TourError::ConfigError { .. })));
    }
}
