/// Holds the one live instance for the page. Once the page asks for an
/// instance explicitly, the deferred auto-start no longer installs one.
pub struct Slot<T> {
    live: Option<T>,
    claimed: bool,
}

impl<T> Slot<T> {
    pub const fn new() -> Self {
        Self {
            live: None,
            claimed: false,
        }
    }

    /// Auto-start path. Builds and installs only while the slot is unclaimed
    /// and empty; returns whether `make` ran.
    pub fn install_default(&mut self, make: impl FnOnce() -> Option<T>) -> bool {
        if self.claimed || self.live.is_some() {
            return false;
        }
        self.live = make();
        true
    }

    /// Explicit path. The previous instance is dropped before `make` runs,
    /// so its listeners are gone by the time new ones attach.
    pub fn replace_with<E>(&mut self, make: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        self.claimed = true;
        drop(self.live.take());
        let value = make()?;
        Ok(self.live.insert(value))
    }

    /// Drops the live instance; the auto-start stays cancelled.
    pub fn clear(&mut self) -> bool {
        self.claimed = true;
        self.live.take().is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.live.as_ref()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Tracked {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Tracked {
        fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
            log.borrow_mut().push(format!("attach {}", name));
            Self {
                name,
                log: log.clone(),
            }
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("detach {}", self.name));
        }
    }

    #[test]
    fn explicit_install_cancels_deferred_auto_start() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = Slot::new();

        slot.replace_with(|| Ok::<_, ()>(Tracked::new("explicit", &log)))
            .unwrap();
        let ran = slot.install_default(|| Some(Tracked::new("auto", &log)));

        assert!(!ran);
        assert_eq!(slot.get().map(|t| t.name), Some("explicit"));
        assert_eq!(*log.borrow(), vec!["attach explicit"]);
    }

    #[test]
    fn second_install_replaces_the_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = Slot::new();

        slot.replace_with(|| Ok::<_, ()>(Tracked::new("first", &log)))
            .unwrap();
        slot.replace_with(|| Ok::<_, ()>(Tracked::new("second", &log)))
            .unwrap();

        assert_eq!(slot.get().map(|t| t.name), Some("second"));
        assert_eq!(
            *log.borrow(),
            vec!["attach first", "detach first", "attach second"]
        );
    }

    #[test]
    fn explicit_install_replaces_the_auto_started_instance() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = Slot::new();

        assert!(slot.install_default(|| Some(Tracked::new("auto", &log))));
        slot.replace_with(|| Ok::<_, ()>(Tracked::new("explicit", &log)))
            .unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["attach auto", "detach auto", "attach explicit"]
        );
    }

    #[test]
    fn failed_install_leaves_the_slot_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = Slot::new();

        slot.replace_with(|| Ok::<_, &str>(Tracked::new("first", &log)))
            .unwrap();
        let result = slot.replace_with(|| Err::<Tracked, _>("bad selector"));

        assert!(matches!(result, Err("bad selector")));
        assert!(slot.get().is_none());
        assert!(!slot.install_default(|| Some(Tracked::new("auto", &log))));
    }

    #[test]
    fn clear_detaches_and_keeps_auto_start_off() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = Slot::new();

        assert!(slot.install_default(|| Some(Tracked::new("auto", &log))));
        assert!(slot.clear());
        assert!(!slot.clear());
        assert!(!slot.install_default(|| Some(Tracked::new("again", &log))));
        assert_eq!(*log.borrow(), vec!["attach auto", "detach auto"]);
    }
}
