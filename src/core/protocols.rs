use crate::domain::ports::ExampleProtocol;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
struct SimpleClassState {
    simple_description: String,
    another_property: i64,
}

/// 參考語意：clone 之後共用同一份狀態
#[derive(Debug, Clone)]
pub struct SimpleClass {
    state: Arc<Mutex<SimpleClassState>>,
}

impl SimpleClass {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimpleClassState {
                simple_description: "A very simple class.".to_string(),
                another_property: 69105,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SimpleClassState> {
        // 持鎖期間不會 panic，poison 時直接沿用內部狀態
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn another_property(&self) -> i64 {
        self.lock().another_property
    }

    /// 是否與另一個 handle 指向同一個實例
    pub fn same_instance(&self, other: &SimpleClass) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for SimpleClass {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleProtocol for SimpleClass {
    fn simple_description(&self) -> String {
        self.lock().simple_description.clone()
    }

    fn adjust(&mut self) {
        self.lock().simple_description.push_str("  Now 100% adjusted.");
    }
}

/// 值語意：clone 之後各自獨立
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleStructure {
    pub simple_description: String,
}

impl Default for SimpleStructure {
    fn default() -> Self {
        Self {
            simple_description: "A simple structure".to_string(),
        }
    }
}

impl ExampleProtocol for SimpleStructure {
    fn simple_description(&self) -> String {
        self.simple_description.clone()
    }

    fn adjust(&mut self) {
        self.simple_description.push_str(" (adjusted)");
    }
}

impl ExampleProtocol for i64 {
    fn simple_description(&self) -> String {
        format!("The number {}", self)
    }

    /// 飽和加法，不會溢位
    fn adjust(&mut self) {
        *self = self.saturating_add(42);
    }
}

/// 包裝整數，adjust 時平方（飽和於 i64 範圍）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Squared(pub i64);

impl ExampleProtocol for Squared {
    fn simple_description(&self) -> String {
        self.0.simple_description()
    }

    fn adjust(&mut self) {
        self.0 = self.0.saturating_mul(self.0);
    }
}

pub fn describe_all(values: &[&dyn ExampleProtocol]) -> Vec<String> {
    values.iter().map(|value| value.simple_description()).collect()
}

pub fn adjust_all(values: &mut [&mut dyn ExampleProtocol]) {
    for value in values.iter_mut() {
        value.adjust();
    }
}
