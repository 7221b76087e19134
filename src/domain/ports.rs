use crate::domain::model::Transcript;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 能力集合：可描述自己，並能就地調整
pub trait ExampleProtocol {
    fn simple_description(&self) -> String;
    fn adjust(&mut self);
}

pub trait ConfigProvider: Send + Sync {
    fn sections(&self) -> &[String];
    fn printer_names(&self) -> &[String];
    fn first_job(&self) -> u32;
    fn fridge_contents(&self) -> &[String];
    fn fridge_lookup(&self) -> &str;
    fn server(&self) -> &str;
}

#[async_trait]
pub trait Section: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, transcript: &mut Transcript) -> Result<()>;
}
