use crate::config::ActivatorConfig;
use crate::core::{Activation, BundleInterpreter, Factory, GlobalScope, HostPage, ResourceLoader, Strategy};
use crate::domain::model::{CreateOptions, PlayerElement, ScriptRequest};
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Orchestrates the fallback cascade that mounts the player widget when the
/// bundle did not auto-register its custom element.
pub struct Activator<P: HostPage, G: GlobalScope, I: BundleInterpreter, L: ResourceLoader> {
    page: P,
    globals: G,
    interpreter: I,
    loader: L,
    config: ActivatorConfig,
    client: Client,
}

impl<P: HostPage, G: GlobalScope, I: BundleInterpreter, L: ResourceLoader> Activator<P, G, I, L> {
    pub fn new(page: P, globals: G, interpreter: I, loader: L, config: ActivatorConfig) -> Self {
        Self {
            page,
            globals,
            interpreter,
            loader,
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ActivatorConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Registry query. A failing registry is indistinguishable from an
    /// unregistered element.
    pub fn widget_registered(&self) -> bool {
        match self.page.element_registered(&self.config.tag_name) {
            Ok(registered) => registered,
            Err(e) => {
                tracing::debug!("Registry query failed, assuming unregistered: {}", e);
                false
            }
        }
    }

    /// First element of the tag carrying a non-empty source attribute.
    pub fn find_target_element(&self) -> Option<PlayerElement> {
        self.page
            .player_elements(&self.config.tag_name)
            .into_iter()
            .find(|element| !element.src.is_empty())
    }

    /// Probes the well-known global names in order, then scans all bindings.
    /// Probe errors skip that entry; the scan itself never fails.
    pub fn find_global_factory(&self) -> Option<Arc<dyn Factory>> {
        for name in &self.config.factory_globals {
            if let Some(factory) = self.probe_binding(name) {
                tracing::debug!("Found player factory at global '{}'", name);
                return Some(factory);
            }
        }

        for name in self.globals.binding_names() {
            if let Some(factory) = self.probe_binding(&name) {
                tracing::debug!("Found player factory via scan at '{}'", name);
                return Some(factory);
            }
        }

        None
    }

    fn probe_binding(&self, name: &str) -> Option<Arc<dyn Factory>> {
        match self.globals.probe(name) {
            Ok(found) => found,
            Err(e) => {
                tracing::debug!("Probe of global '{}' failed: {}", name, e);
                None
            }
        }
    }

    /// Fetches the local bundle and tries to interpret it as a factory
    /// expression, then as a side-effecting program. Every failure means
    /// "local factory unavailable".
    pub async fn load_local_factory(&self) -> Option<Arc<dyn Factory>> {
        let bundle_url = match self.bundle_url() {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Cannot resolve bundle path: {}", e);
                return None;
            }
        };

        tracing::debug!("Fetching player bundle from {}", bundle_url);
        let response = match self.client.get(bundle_url.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Bundle fetch failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Bundle fetch returned {}", response.status());
            return None;
        }

        let code = match response.text().await {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!("Could not read bundle body: {}", e);
                return None;
            }
        };

        match self.interpreter.eval_expression(&code) {
            Ok(factory) => Some(factory),
            Err(e) => {
                tracing::debug!("Bundle is not a factory expression: {}", e);
                // Best-effort second reading: the bundle may register the
                // factory as a global on its own.
                if let Err(e) = self.interpreter.eval_program(&code) {
                    tracing::debug!("Bundle execution failed: {}", e);
                }
                None
            }
        }
    }

    fn bundle_url(&self) -> Result<Url> {
        let base = self.page.base_url()?;
        Ok(base.join(&self.config.bundle_path)?)
    }

    /// Fire-and-forget load of the pinned remote bundle. Setup errors are
    /// logged; there is no further fallback behind this.
    pub fn inject_remote_script(&self) {
        let request = ScriptRequest::remote(&self.config.cdn_url);
        if let Err(e) = self.loader.inject_script(&request) {
            tracing::error!("Failed to inject remote player script: {}", e);
        }
    }

    fn mount(&self, factory: &Arc<dyn Factory>, target: &PlayerElement) -> bool {
        let options = CreateOptions {
            preload: self.config.preload,
        };
        match factory.create(&target.src, target, &options) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Player factory construction failed: {}", e);
                false
            }
        }
    }

    /// Entry point of the cascade. Never fails; the outcome is diagnostic.
    pub async fn instantiate(&self) -> Activation {
        if self.widget_registered() {
            tracing::debug!("'{}' already registered, nothing to do", self.config.tag_name);
            return Activation::AlreadyRegistered;
        }

        let target = match self.find_target_element() {
            Some(element) => element,
            None => {
                tracing::debug!("No '{}' element with a source attribute", self.config.tag_name);
                return Activation::NoTarget;
            }
        };

        if let Some(factory) = self.find_global_factory() {
            if self.mount(&factory, &target) {
                return Activation::Mounted(Strategy::GlobalFactory);
            }
        }

        if let Some(factory) = self.load_local_factory().await {
            if self.mount(&factory, &target) {
                return Activation::Mounted(Strategy::LocalBundle);
            }
        }

        self.inject_remote_script();
        Activation::RemoteRequested
    }
}
