use crate::core::{Result, Section, Transcript};
use crate::domain::model::{Card, Rank, ServerResponse, Suit};
use async_trait::async_trait;

pub struct EnumsStructsSection;

#[async_trait]
impl Section for EnumsStructsSection {
    fn name(&self) -> &'static str {
        "enums_structs"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let ace = Rank::Ace;
        transcript.say(format!("{} has raw value {}", ace.simple_description(), ace.raw_value()));

        let three = Rank::from_raw(3)
            .if_some(|rank| rank.simple_description())
            .unwrap_or_else(|| "no such rank".to_string());
        transcript.say(format!("Rank 3 is {}", three));
        transcript.say(format!("Rank 14 exists: {}", Rank::from_raw(14).is_some()));

        let hearts = Suit::Hearts;
        transcript.say(hearts.simple_description());

        let success = ServerResponse::Result {
            sunrise: "6:00 am".to_string(),
            sunset: "8:09 pm".to_string(),
        };
        let failure = ServerResponse::Failure("Out of cheese.".to_string());
        transcript.say(success.describe());
        transcript.say(failure.describe());

        let three_of_spades = Card::new(Rank::Three, Suit::Spades);
        transcript.say(three_of_spades.simple_description());
        Ok(())
    }
}
