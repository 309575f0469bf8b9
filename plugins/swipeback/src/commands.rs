use tauri::{command, AppHandle, Emitter, Runtime, State, Webview};

use swipeback_policy::{BackDecision, CorrectiveAction, EdgeSwipeOutcome, PageKey, SwipeSample};

use crate::dto::{BackNavigationCheck, EdgeSwipeRequest, EnableSwipeBackRequest};
use crate::error::SwipeBackError;
use crate::events::{BackSuppressedEvent, SUPPRESSED_EVENT};
use crate::SharedState;

#[command]
pub async fn enable_swipe_back<R: Runtime>(
    _app: AppHandle<R>,
    state: State<'_, SharedState>,
    request: EnableSwipeBackRequest,
) -> Result<(), SwipeBackError> {
    let mut policy = state.lock().await;
    policy.set_enabled(&request.current_page, request.enabled);
    tracing::debug!(
        page = request.current_page.as_str(),
        enabled = request.enabled,
        disabled_pages = policy.disabled_count(),
        "swipe back policy updated"
    );
    Ok(())
}

#[command]
pub async fn disable_swipe_back<R: Runtime>(
    webview: Webview<R>,
    state: State<'_, SharedState>,
) -> Result<(), SwipeBackError> {
    let page = current_page(&webview)?;

    let mut policy = state.lock().await;
    policy.disable(&page);
    tracing::debug!(
        page = page.as_str(),
        disabled_pages = policy.disabled_count(),
        "swipe back disabled for current page"
    );
    Ok(())
}

/// Web-fallback entry point: the frontend's `popstate` handler asks
/// whether the back step it just observed may proceed.
#[command]
pub async fn check_back_navigation<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, SharedState>,
    current_page: String,
) -> Result<BackNavigationCheck, SwipeBackError> {
    let decision = {
        let policy = state.lock().await;
        policy.decide(&current_page)
    };

    if let BackDecision::Suppress { action } = decision {
        emit_suppressed(&app, &current_page, action);
    }

    Ok(BackNavigationCheck::from(decision))
}

/// Resolve a completed edge swipe reported by the host gesture source.
#[command]
pub async fn handle_edge_swipe<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, SharedState>,
    request: EdgeSwipeRequest,
) -> Result<EdgeSwipeOutcome, SwipeBackError> {
    let sample = SwipeSample {
        translation_x: request.translation_x,
        velocity_x: request.velocity_x,
    };

    let outcome = {
        let policy = state.lock().await;
        policy.resolve_edge_swipe(&request.current_page, sample)
    };

    if let EdgeSwipeOutcome::Suppressed { action } = outcome {
        emit_suppressed(&app, &request.current_page, action);
    }

    Ok(outcome)
}

/// Path of the URL currently loaded in the calling webview.
///
/// The policy only ever sees this opaque string; how it was derived
/// stays here.
fn current_page<R: Runtime>(webview: &Webview<R>) -> Result<String, SwipeBackError> {
    let url = webview.url().map_err(|_| SwipeBackError::NoCurrentUrl)?;
    Ok(url.path().to_string())
}

fn emit_suppressed<R: Runtime>(app: &AppHandle<R>, page: &str, action: CorrectiveAction) {
    let event = BackSuppressedEvent {
        page: PageKey::normalize(page),
        action,
    };
    if let Err(e) = app.emit(SUPPRESSED_EVENT, &event) {
        tracing::error!("failed to emit suppressed event: {:?}", e);
    }
}
