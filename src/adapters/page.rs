use crate::domain::model::{PlayerElement, ScriptRequest};
use crate::domain::ports::{HostPage, ResourceLoader};
use crate::utils::error::{GlueError, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use url::Url;

/// In-memory host page: element list, custom-element registry, readiness
/// latch and a log of injected scripts. Clones share state, so one instance
/// can serve as both the `HostPage` and the `ResourceLoader` of an activator.
#[derive(Clone)]
pub struct SimulatedPage {
    inner: Arc<PageInner>,
}

struct PageInner {
    base_url: Url,
    loading: AtomicBool,
    loaded: Notify,
    registry: Mutex<HashSet<String>>,
    elements: Mutex<Vec<PlayerElement>>,
    head_scripts: Mutex<Vec<ScriptRequest>>,
    next_node: AtomicU64,
}

impl SimulatedPage {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::build(base_url, false)
    }

    /// A page still parsing its content; `finish_loading` releases waiters.
    pub fn loading(base_url: &str) -> Result<Self> {
        Self::build(base_url, true)
    }

    fn build(base_url: &str, loading: bool) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(PageInner {
                base_url: Url::parse(base_url)?,
                loading: AtomicBool::new(loading),
                loaded: Notify::new(),
                registry: Mutex::new(HashSet::new()),
                elements: Mutex::new(Vec::new()),
                head_scripts: Mutex::new(Vec::new()),
                next_node: AtomicU64::new(1),
            }),
        })
    }

    pub fn add_player(&self, src: &str) -> PlayerElement {
        let element = PlayerElement {
            node: self.inner.next_node.fetch_add(1, Ordering::SeqCst),
            src: src.to_string(),
        };
        if let Ok(mut elements) = self.inner.elements.lock() {
            elements.push(element.clone());
        }
        element
    }

    pub fn register(&self, tag: &str) {
        if let Ok(mut registry) = self.inner.registry.lock() {
            registry.insert(tag.to_string());
        }
    }

    pub fn finish_loading(&self) {
        self.inner.loading.store(false, Ordering::SeqCst);
        self.inner.loaded.notify_waiters();
    }

    pub fn head_scripts(&self) -> Vec<ScriptRequest> {
        self.inner
            .head_scripts
            .lock()
            .map(|scripts| scripts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HostPage for SimulatedPage {
    fn element_registered(&self, tag: &str) -> Result<bool> {
        self.inner
            .registry
            .lock()
            .map(|registry| registry.contains(tag))
            .map_err(|_| GlueError::RegistryError {
                message: "registry lock poisoned".to_string(),
            })
    }

    fn player_elements(&self, _tag: &str) -> Vec<PlayerElement> {
        self.inner
            .elements
            .lock()
            .map(|elements| elements.clone())
            .unwrap_or_default()
    }

    fn base_url(&self) -> Result<Url> {
        Ok(self.inner.base_url.clone())
    }

    fn is_loading(&self) -> bool {
        self.inner.loading.load(Ordering::SeqCst)
    }

    async fn content_loaded(&self) {
        loop {
            if !self.is_loading() {
                return;
            }
            let notified = self.inner.loaded.notified();
            // Re-check after registering the waiter so a notify between the
            // two loads cannot be missed.
            if !self.is_loading() {
                return;
            }
            notified.await;
        }
    }
}

impl ResourceLoader for SimulatedPage {
    fn inject_script(&self, request: &ScriptRequest) -> Result<()> {
        self.inner
            .head_scripts
            .lock()
            .map(|mut scripts| scripts.push(request.clone()))
            .map_err(|_| GlueError::InjectionError {
                message: "document head lock poisoned".to_string(),
            })
    }
}
