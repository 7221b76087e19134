use crate::core::control_flow as flow;
use crate::core::{OptionalValue, Result, Section, Transcript};
use async_trait::async_trait;

pub struct ControlFlowSection;

#[async_trait]
impl Section for ControlFlowSection {
    fn name(&self) -> &'static str {
        "control_flow"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let team_score = flow::team_score(&[75, 43, 103, 87, 12]);
        transcript.say(format!(
            "Score: {} {}",
            team_score,
            flow::score_decoration(team_score)
        ));

        let optional_string: OptionalValue<&str> = OptionalValue::some("Hello");
        transcript.say(format!("optionalString is nil: {}", optional_string.is_none()));

        transcript.say(flow::greeting(OptionalValue::some("John Appleseed")));
        transcript.say(flow::informal_greeting(OptionalValue::none(), "John Appleseed"));

        let nickname: OptionalValue<&str> = OptionalValue::none();
        nickname.if_some(|nickname| transcript.say(format!("Hey, {}", nickname)));

        transcript.say(flow::describe_vegetable("red pepper"));

        let largest = flow::largest_interesting(&flow::interesting_numbers()).match_with(
            |(kind, largest)| format!("Largest: {} ({})", largest, kind),
            || "No interesting numbers".to_string(),
        );
        transcript.say(largest);

        transcript.say(flow::double_until(2, 100).to_string());
        transcript.say(flow::double_at_least_once(2, 100).to_string());
        transcript.say(flow::sum_range(4).to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_control_flow_transcript() {
        let mut transcript = Transcript::new("control_flow");
        ControlFlowSection.run(&mut transcript).await.unwrap();

        assert_eq!(transcript.lines[0], "Score: 11 🎉");
        assert!(transcript.lines.contains(&"Hello, John Appleseed".to_string()));
        assert!(transcript.lines.contains(&"Hi John Appleseed".to_string()));
        assert!(!transcript.lines.iter().any(|line| line.starts_with("Hey,")));
        assert!(transcript.lines.contains(&"Largest: 25 (Square)".to_string()));
        assert_eq!(transcript.lines.last().map(String::as_str), Some("6"));
    }
}
