use crate::core::concurrency::{connect_user, fetch_user_id, fetch_username, spawn_detached};
use crate::core::{Result, Section, Transcript};
use async_trait::async_trait;
use tokio::sync::oneshot;

pub struct ConcurrencySection {
    server: String,
}

impl ConcurrencySection {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }
}

#[async_trait]
impl Section for ConcurrencySection {
    fn name(&self) -> &'static str {
        "concurrency"
    }

    async fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let user_id = fetch_user_id(&self.server).await;
        transcript.say(format!("User ID from {}: {}", self.server, user_id));

        let username = fetch_username(&self.server).await;
        transcript.say(format!("Username from {}: {}", self.server, username));

        transcript.say(connect_user(&self.server).await);

        // 啟動後不等待任務本身，只從 channel 收結果
        let (done, finished) = oneshot::channel();
        spawn_detached(self.server.clone(), done);
        let greeting = finished.await?;
        transcript.say(format!("Background task said: {}", greeting));
        Ok(())
    }
}
