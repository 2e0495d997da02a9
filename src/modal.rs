/// Something that can stop the page behind a dialog from scrolling.
pub trait ScrollLock {
    fn lock(&mut self);
    fn unlock(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Explicit,
    Escape,
    OutsideClick,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn max_width(&self) -> &'static str {
        match self {
            Self::Sm => "max-w-md",
            Self::Md => "max-w-2xl",
            Self::Lg => "max-w-4xl",
            Self::Xl => "max-w-6xl",
        }
    }
}

/// Open/closed state of one dialog. The lock is held for exactly as long as it is open.
#[derive(Debug)]
pub struct ModalState<L: ScrollLock> {
    open: bool,
    lock: L,
}

impl<L: ScrollLock> ModalState<L> {
    pub fn new(lock: L) -> Self {
        Self { open: false, lock }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.lock.lock();
        }
    }

    /// Returns true if the dialog was open.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.open {
            return false;
        }
        log::debug!("modal closed via {trigger:?}");
        self.open = false;
        self.lock.unlock();
        true
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close(CloseTrigger::Explicit);
        } else {
            self.open();
        }
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close(CloseTrigger::Escape)
    }
}

impl<L: ScrollLock> Drop for ModalState<L> {
    fn drop(&mut self) {
        if self.open {
            self.lock.unlock();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Debug, Default, Clone)]
    struct FakeBody {
        locked: Rc<RefCell<bool>>,
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ScrollLock for FakeBody {
        fn lock(&mut self) {
            *self.locked.borrow_mut() = true;
            self.calls.borrow_mut().push("lock");
        }

        fn unlock(&mut self) {
            *self.locked.borrow_mut() = false;
            self.calls.borrow_mut().push("unlock");
        }
    }

    #[test]
    fn test_open_locks_scroll() {
        let body = FakeBody::default();
        let mut modal = ModalState::new(body.clone());
        assert!(!modal.is_open());

        modal.open();
        assert!(modal.is_open());
        assert!(*body.locked.borrow());

        // opening twice keeps a single lock
        modal.open();
        assert_eq!(*body.calls.borrow(), vec!["lock"]);
    }

    #[test]
    fn test_every_close_trigger_restores_scroll() {
        for trigger in [
            CloseTrigger::Explicit,
            CloseTrigger::Escape,
            CloseTrigger::OutsideClick,
        ] {
            let body = FakeBody::default();
            let mut modal = ModalState::new(body.clone());
            modal.open();
            assert!(modal.close(trigger));
            assert!(!modal.is_open());
            assert!(!*body.locked.borrow(), "{trigger:?}");
        }
    }

    #[test]
    fn test_escape_key() {
        let body = FakeBody::default();
        let mut modal = ModalState::new(body.clone());
        assert!(!modal.handle_key("Escape"));

        modal.open();
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
        assert_eq!(*body.calls.borrow(), vec!["lock", "unlock"]);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let body = FakeBody::default();
        let mut modal = ModalState::new(body.clone());
        assert!(!modal.close(CloseTrigger::OutsideClick));
        assert!(body.calls.borrow().is_empty());
    }

    #[test]
    fn test_toggle() {
        let body = FakeBody::default();
        let mut modal = ModalState::new(body.clone());
        modal.toggle();
        assert!(*body.locked.borrow());
        modal.toggle();
        assert!(!*body.locked.borrow());
    }

    #[test]
    fn test_drop_while_open_unlocks() {
        let body = FakeBody::default();
        {
            let mut modal = ModalState::new(body.clone());
            modal.open();
        }
        assert!(!*body.locked.borrow());
    }
}
