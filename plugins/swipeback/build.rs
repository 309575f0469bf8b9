fn main() {
    tauri_plugin::Builder::new(&[
        "enable_swipe_back",
        "disable_swipe_back",
        "check_back_navigation",
        "handle_edge_swipe",
    ])
    .build();
}
