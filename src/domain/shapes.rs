//! 形狀範例：以組合加 trait 取代類別繼承。

use crate::domain::optional::OptionalValue;

pub trait Describe {
    fn simple_description(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub number_of_sides: u32,
}

impl Describe for Shape {
    fn simple_description(&self) -> String {
        format!("A shape with {} sides.", self.number_of_sides)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedShape {
    pub number_of_sides: u32,
    pub name: String,
}

impl NamedShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            number_of_sides: 0,
            name: name.into(),
        }
    }
}

impl Describe for NamedShape {
    fn simple_description(&self) -> String {
        format!("A shape with {} sides.", self.number_of_sides)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub base: NamedShape,
    pub side_length: f64,
}

impl Square {
    pub fn new(side_length: f64, name: impl Into<String>) -> Self {
        let mut base = NamedShape::new(name);
        base.number_of_sides = 4;
        Self { base, side_length }
    }

    pub fn area(&self) -> f64 {
        self.side_length * self.side_length
    }
}

impl Describe for Square {
    fn simple_description(&self) -> String {
        format!("A square with sides of length {}.", self.side_length)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquilateralTriangle {
    pub base: NamedShape,
    pub side_length: f64,
}

impl EquilateralTriangle {
    pub fn new(side_length: f64, name: impl Into<String>) -> Self {
        let mut base = NamedShape::new(name);
        base.number_of_sides = 3;
        Self { base, side_length }
    }

    pub fn perimeter(&self) -> f64 {
        3.0 * self.side_length
    }

    pub fn set_perimeter(&mut self, perimeter: f64) {
        self.side_length = perimeter / 3.0;
    }
}

impl Describe for EquilateralTriangle {
    fn simple_description(&self) -> String {
        format!(
            "An equilateral triangle with sides of length {}.",
            self.side_length
        )
    }
}

/// 兩個形狀的邊長保持一致；替換其中一個時先同步另一個
#[derive(Debug, Clone)]
pub struct TriangleAndSquare {
    triangle: EquilateralTriangle,
    square: Square,
}

impl TriangleAndSquare {
    pub fn new(size: f64, name: &str) -> Self {
        Self {
            square: Square::new(size, name),
            triangle: EquilateralTriangle::new(size, name),
        }
    }

    pub fn triangle(&self) -> &EquilateralTriangle {
        &self.triangle
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    pub fn set_triangle(&mut self, triangle: EquilateralTriangle) {
        self.square.side_length = triangle.side_length;
        self.triangle = triangle;
    }

    pub fn set_square(&mut self, square: Square) {
        self.triangle.side_length = square.side_length;
        self.square = square;
    }
}

/// `optionalSquare?.sideLength`
pub fn optional_side_length(square: OptionalValue<&Square>) -> OptionalValue<f64> {
    square.map(|s| s.side_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_area_and_description() {
        let test = Square::new(5.2, "my test square");
        assert!((test.area() - 27.04).abs() < 1e-9);
        assert_eq!(test.base.number_of_sides, 4);
        assert_eq!(test.simple_description(), "A square with sides of length 5.2.");
    }

    #[test]
    fn test_triangle_perimeter_setter() {
        let mut triangle = EquilateralTriangle::new(3.1, "a triangle");
        assert!((triangle.perimeter() - 9.3).abs() < 1e-9);
        triangle.set_perimeter(9.9);
        assert!((triangle.side_length - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_and_square_stay_in_sync() {
        let mut pair = TriangleAndSquare::new(10.0, "another test shape");
        assert_eq!(pair.square().side_length, 10.0);
        assert_eq!(pair.triangle().side_length, 10.0);

        pair.set_square(Square::new(50.0, "larger square"));
        assert_eq!(pair.triangle().side_length, 50.0);

        pair.set_triangle(EquilateralTriangle::new(7.0, "smaller triangle"));
        assert_eq!(pair.square().side_length, 7.0);
    }

    #[test]
    fn test_optional_side_length() {
        let square = Square::new(2.5, "optional square");
        assert_eq!(
            optional_side_length(OptionalValue::some(&square)),
            OptionalValue::some(2.5)
        );
        assert!(optional_side_length(OptionalValue::none()).is_none());
    }
}
