use tokio::sync::oneshot;

pub const PRIMARY_SERVER: &str = "primary";

pub async fn fetch_user_id(server: &str) -> i64 {
    tokio::task::yield_now().await;
    if server == PRIMARY_SERVER {
        return 97;
    }
    501
}

pub async fn fetch_username(server: &str) -> String {
    let user_id = fetch_user_id(server).await;
    if user_id == 501 {
        return "John Appleseed".to_string();
    }
    "Guest".to_string()
}

/// 兩個查詢同時進行，兩個結果都到齊後才組合
pub async fn connect_user(server: &str) -> String {
    let (user_id, username) = tokio::join!(fetch_user_id(server), fetch_username(server));
    let greeting = format!("Hello {}, user ID {}", username, user_id);
    tracing::debug!("{}", greeting);
    greeting
}

/// 不保留 handle 的背景任務，完成時透過 `done` 回報結果
pub fn spawn_detached(server: impl Into<String>, done: oneshot::Sender<String>) {
    let server = server.into();
    tokio::spawn(async move {
        let greeting = connect_user(&server).await;
        if done.send(greeting).is_err() {
            tracing::debug!("Nobody is waiting for the greeting from {}", server);
        }
    });
}
