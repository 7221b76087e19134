use crate::core::values;
use crate::core::{Result, Section, Transcript};
use async_trait::async_trait;

pub struct SimpleValuesSection;

#[async_trait]
impl Section for SimpleValuesSection {
    fn name(&self) -> &'static str {
        "simple_values"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        transcript.say("Hello, world!");

        let mut my_variable = 42;
        my_variable = my_variable + 8;
        let my_constant = 42;
        transcript.say(format!("myVariable = {}, myConstant = {}", my_variable, my_constant));

        let implicit_double = 70.0;
        let explicit_double = f64::from(70_i32);
        transcript.say(format!(
            "{} == {}: {}",
            implicit_double,
            explicit_double,
            implicit_double == explicit_double
        ));

        transcript.say(values::width_label("The width is ", 94));
        transcript.say(values::apple_summary(3));
        transcript.say(values::fruit_summary(3, 5));
        for line in values::quotation(3, 5).lines() {
            transcript.say(line);
        }

        let fruits = values::fruits();
        transcript.say(format!("{:?}", fruits));

        for (name, job) in values::occupations() {
            transcript.say(format!("{}: {}", name, job));
        }

        let empty: Vec<String> = Vec::new();
        transcript.say(format!("Empty array has {} items", empty.len()));
        Ok(())
    }
}
