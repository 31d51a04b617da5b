use crate::core::activator::Activator;
use crate::core::{BundleInterpreter, GlobalScope, HostPage, ResourceLoader};
use std::time::Duration;
use tokio::time::sleep;

/// Runs the cascade with the trigger scheme that tolerates uncertain host
/// initialization order: a loaded page gets one immediate run; a loading page
/// gets a run shortly after the content-loaded event plus an unconditional
/// delayed run. Both scheduled runs may execute the full cascade; only the
/// registration check keeps the second one a no-op.
pub async fn activate_when_ready<P, G, I, L>(activator: &Activator<P, G, I, L>)
where
    P: HostPage,
    G: GlobalScope,
    I: BundleInterpreter,
    L: ResourceLoader,
{
    if !activator.page().is_loading() {
        activator.instantiate().await;
        return;
    }

    let ready_delay = Duration::from_millis(activator.config().ready_delay_ms);
    let fallback_delay = Duration::from_millis(activator.config().fallback_delay_ms);

    tokio::join!(
        async {
            activator.page().content_loaded().await;
            sleep(ready_delay).await;
            activator.instantiate().await;
        },
        async {
            sleep(fallback_delay).await;
            activator.instantiate().await;
        },
    );
}
