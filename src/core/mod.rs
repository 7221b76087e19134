pub mod concurrency;
pub mod control_flow;
pub mod fridge;
pub mod functions;
pub mod generics;
pub mod printer;
pub mod protocols;
pub mod tour;
pub mod values;

pub use crate::domain::model::Transcript;
pub use crate::domain::optional::OptionalValue;
pub use crate::domain::ports::{ConfigProvider, ExampleProtocol, Section};
pub use crate::utils::error::Result;
