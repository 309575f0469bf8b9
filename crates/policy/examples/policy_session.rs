//! Example: Walk a policy through a navigation session.
//!
//! Run with: cargo run -p swipeback-policy --example policy_session

use swipeback_policy::{BackDecision, SwipeBackPolicy, SwipeSample};

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter("swipeback_policy=debug")
        .init();

    println!("=== Swipe-back policy example ===\n");

    let mut policy = SwipeBackPolicy::new();

    // The app locks the user into a checkout flow.
    policy.set_enabled("/checkout/", false);

    for page in ["/home", "/checkout", "checkout"] {
        let verdict = match policy.decide(page) {
            BackDecision::Allow => "allowed".to_string(),
            BackDecision::Suppress { action } => format!("suppressed ({action:?})"),
        };
        println!("back on {page:10} -> {verdict}");
    }

    // A strong edge swipe on an ordinary page navigates back.
    let swipe = SwipeSample {
        translation_x: 120.0,
        velocity_x: 80.0,
    };
    println!(
        "edge swipe on /home   -> {:?}",
        policy.resolve_edge_swipe("/home", swipe)
    );
    println!(
        "edge swipe on /checkout -> {:?}",
        policy.resolve_edge_swipe("/checkout", swipe)
    );

    // Checkout finished; the page goes back to normal.
    policy.set_enabled("/checkout", true);
    println!(
        "after re-enable, back on /checkout -> {:?}",
        policy.decide("/checkout")
    );
}
