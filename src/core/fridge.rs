use std::cell::Cell;

#[derive(Debug)]
pub struct Fridge {
    contents: Vec<String>,
    is_open: Cell<bool>,
}

/// 離開作用域時一定關門，包含提早返回與 panic
struct DoorGuard<'a> {
    is_open: &'a Cell<bool>,
}

impl<'a> DoorGuard<'a> {
    fn open(is_open: &'a Cell<bool>) -> Self {
        is_open.set(true);
        Self { is_open }
    }
}

impl Drop for DoorGuard<'_> {
    fn drop(&mut self) {
        self.is_open.set(false);
    }
}

impl Fridge {
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            contents: contents.into_iter().map(Into::into).collect(),
            is_open: Cell::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub fn contains(&self, food: &str) -> bool {
        let _door = DoorGuard::open(&self.is_open);
        tracing::debug!("Fridge open, looking for {}", food);
        self.contents.iter().any(|item| item == food)
    }

    /// 在開門狀態下執行 `inspect`
    pub fn with_door_open<R>(&self, inspect: impl FnOnce(&[String], bool) -> R) -> R {
        let _door = DoorGuard::open(&self.is_open);
        inspect(&self.contents, self.is_open.get())
    }
}

impl Default for Fridge {
    fn default() -> Self {
        Self::new(["milk", "eggs", "leftovers"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_contains_closes_door() {
        let fridge = Fridge::default();
        assert!(!fridge.contains("banana"));
        assert!(!fridge.is_open());
        assert!(fridge.contains("eggs"));
        assert!(!fridge.is_open());
    }

    #[test]
    fn test_door_is_open_during_lookup() {
        let fridge = Fridge::default();
        let seen_open = fridge.with_door_open(|_, open| open);
        assert!(seen_open);
        assert!(!fridge.is_open());
    }

    #[test]
    fn test_door_closes_on_panic() {
        let fridge = Fridge::default();
        let result = catch_unwind(AssertUnwindSafe(|| {
            fridge.with_door_open(|_, _| -> bool { panic!("dropped the eggs") })
        }));
        assert!(result.is_err());
        assert!(!fridge.is_open());
    }
}
