use crate::core::generics::{any_common_elements, common_elements, make_array};
use crate::core::{OptionalValue, Result, Section, Transcript};
use async_trait::async_trait;

pub struct GenericsSection;

#[async_trait]
impl Section for GenericsSection {
    fn name(&self) -> &'static str {
        "generics"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        transcript.say(format!("{:?}", make_array("knock", 4)));

        let mut possible_integer: OptionalValue<i32> = OptionalValue::none();
        transcript.say(format!("possibleInteger: {}", possible_integer));
        possible_integer = OptionalValue::some(100);
        transcript.say(format!("possibleInteger: {}", possible_integer));

        transcript.say(format!(
            "Common elements: {}",
            any_common_elements([1, 2, 3], [3])
        ));
        transcript.say(format!("{:?}", common_elements(&[1, 2, 3], &[3, 1])));
        Ok(())
    }
}
