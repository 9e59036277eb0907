use futures_channel::mpsc::UnboundedSender;
use inputscope_core::{GlobalShortcut, HostError, Locale, MemoryThemeHost, ThemeHost};
use std::rc::Rc;
use std::time::Duration;

/// Outside the browser the preference lives for the process only.
pub fn platform_theme_host() -> Rc<dyn ThemeHost> {
    Rc::new(MemoryThemeHost::new())
}

pub fn browser_locale() -> Locale {
    Locale::default()
}

pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Inert off the web: there is no page to listen on. The sender is held so the receiving
/// coroutine stays parked rather than finishing.
#[derive(Debug)]
pub struct GlobalKeySubscription {
    _shortcuts: UnboundedSender<GlobalShortcut>,
}

impl GlobalKeySubscription {
    pub fn register(shortcuts: UnboundedSender<GlobalShortcut>) -> Result<Self, HostError> {
        tracing::debug!("page-wide shortcuts are only captured in the browser");
        Ok(Self {
            _shortcuts: shortcuts,
        })
    }
}
