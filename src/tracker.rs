use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

/// A global pointer movement, in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f64, y: f64 },
}

/// Process-wide source of pointer movement events, delivered regardless of
/// window focus.
///
/// Sessions receive the backend as a trait object so tests can drive a
/// [`MockPointerBackend`] and platforms without a global listener can fail
/// `install` cleanly (the session then degrades to static rendering).
pub trait PointerBackend: Send {
    fn install(&mut self, sender: Sender<PointerEvent>) -> anyhow::Result<()>;
    fn uninstall(&mut self) -> anyhow::Result<()>;
    fn is_installed(&self) -> bool;
}

/// Backend for the current platform.
pub fn default_backend() -> Box<dyn PointerBackend> {
    Box::new(DefaultPointerBackend::default())
}

#[cfg(windows)]
pub use self::rdev_backend::DefaultPointerBackend;

#[cfg(windows)]
mod rdev_backend {
    use std::sync::mpsc::Sender;
    use std::sync::Mutex;
    use std::thread;
    use std::time::Duration;

    use once_cell::sync::OnceCell;

    use super::{PointerBackend, PointerEvent};

    struct PointerDispatch {
        sender: Mutex<Option<Sender<PointerEvent>>>,
    }

    impl PointerDispatch {
        fn set_sender(&self, sender: Option<Sender<PointerEvent>>) {
            if let Ok(mut guard) = self.sender.lock() {
                *guard = sender;
            }
        }

        fn forward(&self, event: PointerEvent) {
            if let Ok(guard) = self.sender.try_lock() {
                if let Some(sender) = guard.as_ref() {
                    let _ = sender.send(event);
                }
            }
        }
    }

    static DISPATCH: OnceCell<PointerDispatch> = OnceCell::new();
    static LISTENER: OnceCell<()> = OnceCell::new();

    fn dispatch() -> &'static PointerDispatch {
        DISPATCH.get_or_init(|| PointerDispatch {
            sender: Mutex::new(None),
        })
    }

    /// Global mouse listener backed by `rdev::listen`.
    ///
    /// The OS-level listener thread is spawned once per process and cannot
    /// be stopped, so install/uninstall swap the dispatch sender instead:
    /// an uninstalled backend delivers no events.
    #[derive(Default)]
    pub struct DefaultPointerBackend {
        installed: bool,
    }

    impl PointerBackend for DefaultPointerBackend {
        fn install(&mut self, sender: Sender<PointerEvent>) -> anyhow::Result<()> {
            dispatch().set_sender(Some(sender));
            LISTENER.get_or_init(|| spawn_listener());
            self.installed = true;
            Ok(())
        }

        fn uninstall(&mut self) -> anyhow::Result<()> {
            dispatch().set_sender(None);
            self.installed = false;
            Ok(())
        }

        fn is_installed(&self) -> bool {
            self.installed
        }
    }

    fn spawn_listener() {
        thread::spawn(|| loop {
            let result = rdev::listen(|event| {
                if let rdev::EventType::MouseMove { x, y } = event.event_type {
                    dispatch().forward(PointerEvent::Moved { x, y });
                }
            });
            match result {
                Ok(()) => tracing::warn!("pointer listener exited unexpectedly. Restarting shortly"),
                Err(e) => tracing::warn!("pointer listener failed: {:?}. Retrying shortly", e),
            }
            thread::sleep(Duration::from_millis(500));
        });
    }
}

#[cfg(not(windows))]
#[derive(Default)]
pub struct DefaultPointerBackend;

#[cfg(not(windows))]
impl PointerBackend for DefaultPointerBackend {
    fn install(&mut self, _sender: Sender<PointerEvent>) -> anyhow::Result<()> {
        Err(anyhow!("global pointer listening is not supported on this platform"))
    }

    fn uninstall(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn is_installed(&self) -> bool {
        false
    }
}

#[derive(Clone)]
pub struct MockPointerBackend {
    state: Arc<MockPointerState>,
}

#[derive(Default)]
struct MockPointerState {
    install_count: AtomicUsize,
    uninstall_count: AtomicUsize,
    sender: Mutex<Option<Sender<PointerEvent>>>,
}

impl MockPointerBackend {
    pub fn new() -> (Self, MockPointerHandle) {
        let state = Arc::new(MockPointerState::default());
        (
            Self {
                state: Arc::clone(&state),
            },
            MockPointerHandle { state },
        )
    }
}

impl PointerBackend for MockPointerBackend {
    fn install(&mut self, sender: Sender<PointerEvent>) -> anyhow::Result<()> {
        let mut guard = self.state.sender.lock().map_err(|_| anyhow!("lock"))?;
        if guard.is_none() {
            self.state.install_count.fetch_add(1, Ordering::SeqCst);
            *guard = Some(sender);
        }
        Ok(())
    }

    fn uninstall(&mut self) -> anyhow::Result<()> {
        let mut guard = self.state.sender.lock().map_err(|_| anyhow!("lock"))?;
        if guard.is_some() {
            self.state.uninstall_count.fetch_add(1, Ordering::SeqCst);
        }
        *guard = None;
        Ok(())
    }

    fn is_installed(&self) -> bool {
        match self.state.sender.lock() {
            Ok(guard) => guard.is_some(),
            Err(_) => false,
        }
    }
}

pub struct MockPointerHandle {
    state: Arc<MockPointerState>,
}

impl MockPointerHandle {
    pub fn install_count(&self) -> usize {
        self.state.install_count.load(Ordering::SeqCst)
    }

    pub fn uninstall_count(&self) -> usize {
        self.state.uninstall_count.load(Ordering::SeqCst)
    }

    pub fn is_installed(&self) -> bool {
        match self.state.sender.lock() {
            Ok(guard) => guard.is_some(),
            Err(_) => false,
        }
    }

    pub fn emit(&self, event: PointerEvent) -> bool {
        match self.state.sender.lock() {
            Ok(guard) => guard
                .as_ref()
                .map(|sender| sender.send(event).is_ok())
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn mock_counts_one_install_and_one_uninstall() {
        let (mut backend, handle) = MockPointerBackend::new();
        let (tx, _rx) = mpsc::channel();
        backend.install(tx.clone()).unwrap();
        backend.install(tx).unwrap();
        assert_eq!(handle.install_count(), 1);

        backend.uninstall().unwrap();
        backend.uninstall().unwrap();
        assert_eq!(handle.uninstall_count(), 1);
    }

    #[test]
    fn mock_emit_fails_without_an_installed_sender() {
        let (_backend, handle) = MockPointerBackend::new();
        assert!(!handle.emit(PointerEvent::Moved { x: 1.0, y: 2.0 }));
    }
}
