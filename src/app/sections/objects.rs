use crate::core::{OptionalValue, Result, Section, Transcript};
use crate::domain::shapes::{
    optional_side_length, Describe, EquilateralTriangle, Shape, Square, TriangleAndSquare,
};
use async_trait::async_trait;

pub struct ObjectsSection;

#[async_trait]
impl Section for ObjectsSection {
    fn name(&self) -> &'static str {
        "objects"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let mut shape = Shape::default();
        shape.number_of_sides = 7;
        transcript.say(shape.simple_description());

        let test = Square::new(5.2, "my test square");
        transcript.say(format!("{} has area {:.2}", test.base.name, test.area()));
        transcript.say(test.simple_description());

        let mut triangle = EquilateralTriangle::new(3.1, "a triangle");
        transcript.say(format!("{:.1}", triangle.perimeter()));
        triangle.set_perimeter(9.9);
        transcript.say(format!("{:.1}", triangle.side_length));
        transcript.say(triangle.simple_description());

        let mut pair = TriangleAndSquare::new(10.0, "another test shape");
        transcript.say(pair.square().side_length.to_string());
        transcript.say(pair.triangle().side_length.to_string());
        pair.set_square(Square::new(50.0, "larger square"));
        transcript.say(pair.triangle().side_length.to_string());

        let optional_square = Square::new(2.5, "optional square");
        let side_length = optional_side_length(OptionalValue::some(&optional_square));
        transcript.say(format!("Optional side length: {}", side_length));
        transcript.say(format!(
            "Missing side length: {}",
            optional_side_length(OptionalValue::none())
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_objects_transcript() {
        let mut transcript = Transcript::new("objects");
        ObjectsSection.run(&mut transcript).await.unwrap();

        assert_eq!(transcript.lines[0], "A shape with 7 sides.");
        assert_eq!(transcript.lines[1], "my test square has area 27.04");
        assert_eq!(transcript.lines[3], "9.3");
        assert_eq!(transcript.lines[4], "3.3");
        assert_eq!(&transcript.lines[6..9], ["10", "10", "50"]);
        assert!(transcript.lines.contains(&"Optional side length: 2.5".to_string()));
        assert!(transcript.lines.contains(&"Missing side length: nil".to_string()));
    }
}
