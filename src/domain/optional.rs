//! 明確的「有值 / 無值」和型別。
//!
//! 只提供安全的取值方式：`unwrap_or`、`match_with`、`if_some` 等，
//! 不提供未檢查的 unwrap。

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<T>", into = "Option<T>")]
#[serde(bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de>"))]
pub enum OptionalValue<T> {
    None,
    Some(T),
}

impl<T> OptionalValue<T> {
    pub fn none() -> Self {
        OptionalValue::None
    }

    pub fn some(value: T) -> Self {
        OptionalValue::Some(value)
    }

    /// `try?`：成功時保留值，失敗時丟棄錯誤細節
    pub fn from_result<E>(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => OptionalValue::Some(value),
            Err(_) => OptionalValue::None,
        }
    }

    pub fn is_some(&self) -> bool {
        matches!(self, OptionalValue::Some(_))
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            OptionalValue::Some(value) => value,
            OptionalValue::None => default,
        }
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            OptionalValue::Some(value) => value,
            OptionalValue::None => default(),
        }
    }

    /// 結構化檢查：恰好執行其中一個分支
    pub fn match_with<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
        match self {
            OptionalValue::Some(value) => on_some(value),
            OptionalValue::None => on_none(),
        }
    }

    /// 條件綁定：只有在有值時才進入 `body`
    pub fn if_some<R>(self, body: impl FnOnce(T) -> R) -> OptionalValue<R> {
        match self {
            OptionalValue::Some(value) => OptionalValue::Some(body(value)),
            OptionalValue::None => OptionalValue::None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OptionalValue<U> {
        self.if_some(f)
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> OptionalValue<U>) -> OptionalValue<U> {
        match self {
            OptionalValue::Some(value) => f(value),
            OptionalValue::None => OptionalValue::None,
        }
    }

    pub fn as_ref(&self) -> OptionalValue<&T> {
        match self {
            OptionalValue::Some(value) => OptionalValue::Some(value),
            OptionalValue::None => OptionalValue::None,
        }
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        OptionalValue::None
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => OptionalValue::Some(value),
            None => OptionalValue::None,
        }
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        match value {
            OptionalValue::Some(value) => Some(value),
            OptionalValue::None => None,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for OptionalValue<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        OptionalValue::from_result(result)
    }
}

impl<T: fmt::Display> fmt::Display for OptionalValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionalValue::Some(value) => write!(f, "{}", value),
            OptionalValue::None => write!(f, "nil"),
        }
    }
}
