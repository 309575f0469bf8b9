use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};
use tokio::sync::Mutex;

use swipeback_policy::SwipeBackPolicy;

mod commands;
mod dto;
mod error;
mod events;

pub use dto::{BackNavigationCheck, EdgeSwipeRequest, EnableSwipeBackRequest};
pub use error::SwipeBackError;
pub use events::*;

const PLUGIN_NAME: &str = "swipeback";

pub type SharedState = Mutex<SwipeBackPolicy>;

pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![
            commands::enable_swipe_back,
            commands::disable_swipe_back,
            commands::check_back_navigation,
            commands::handle_edge_swipe,
        ])
        .setup(move |app, _api| {
            app.manage(SharedState::default());
            Ok(())
        })
        .build()
}
