use crate::core::functions as func;
use crate::core::{Result, Section, Transcript};
use async_trait::async_trait;

pub struct FunctionsSection;

#[async_trait]
impl Section for FunctionsSection {
    fn name(&self) -> &'static str {
        "functions"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        transcript.say(func::greet("Bob", "Tuesday"));
        transcript.say(func::greet_on("John", "Wednesday"));

        match func::calculate_statistics(&[5, 3, 100, 3, 9]) {
            Some(stats) => {
                transcript.say(format!("sum: {}", stats.sum));
                transcript.say(format!("min: {}, max: {}", stats.min, stats.max));
            }
            None => transcript.say("No scores"),
        }

        transcript.say(func::return_fifteen().to_string());

        let increment = func::make_increment();
        transcript.say(increment(7).to_string());

        let numbers = [20, 19, 7, 12];
        transcript.say(format!(
            "Any less than ten: {}",
            func::has_any_matches(&numbers, func::less_than_ten)
        ));
        transcript.say(format!("{:?}", func::triple_all(&numbers)));
        transcript.say(format!("{:?}", func::sorted_descending(&numbers)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_functions_transcript() {
        let mut transcript = Transcript::new("functions");
        FunctionsSection.run(&mut transcript).await.unwrap();

        assert_eq!(
            transcript.lines,
            vec![
                "Hello Bob, today is Tuesday.",
                "Hello, John, today is Wednesday.",
                "sum: 120",
                "min: 3, max: 100",
                "15",
                "8",
                "Any less than ten: true",
                "[60, 57, 21, 36]",
                "[20, 19, 12, 7]",
            ]
        );
    }
}
