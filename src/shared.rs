//! Critical-section guarded storage for state shared with interrupt handlers.

use core::cell::RefCell;
use critical_section::Mutex;

/// A late-initialized value that both the main loop and interrupt handlers use.
///
/// Every access runs inside `critical_section::with`, so on a single core an
/// interrupt can never observe (or produce) a half-finished update. Keep the
/// closures short: interrupts are masked while they run.
///
/// ```ignore
/// static DISPLAY: Shared<Oled> = Shared::new();
///
/// DISPLAY.install(oled);
/// DISPLAY.with(|oled| frame.render(oled));
/// ```
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Shared<T> {
    /// Empty storage, suitable for a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores `value`, returning whatever was installed before.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(value)))
    }

    /// Removes and returns the stored value.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Runs `f` on the stored value with interrupts masked.
    ///
    /// Returns `None` if nothing is installed yet, or if the value is already
    /// borrowed further up the call stack.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        })
    }

    /// Whether a value has been installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow()
                .map(|slot| slot.is_some())
                .unwrap_or(true)
        })
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}
