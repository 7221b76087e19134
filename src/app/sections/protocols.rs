use crate::core::protocols::{describe_all, SimpleClass, SimpleStructure, Squared};
use crate::core::{ExampleProtocol, Result, Section, Transcript};
use async_trait::async_trait;

pub struct ProtocolsSection;

#[async_trait]
impl Section for ProtocolsSection {
    fn name(&self) -> &'static str {
        "protocols"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let mut a = SimpleClass::new();
        a.adjust();
        transcript.say(a.simple_description());

        let mut b = SimpleStructure::default();
        b.adjust();
        transcript.say(b.simple_description());

        transcript.say(7_i64.simple_description());
        let mut seven: i64 = 7;
        seven.adjust();
        transcript.say(seven.simple_description());

        let mut squared = Squared(7);
        squared.adjust();
        transcript.say(squared.simple_description());

        // 透過 trait object 只能用到協定內的方法
        let protocol_value: &dyn ExampleProtocol = &a;
        transcript.say(protocol_value.simple_description());

        let values: [&dyn ExampleProtocol; 3] = [&a, &b, &seven];
        transcript.say(format!("{} conforming values", describe_all(&values).len()));
        Ok(())
    }
}
