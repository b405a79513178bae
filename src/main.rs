//! Browser entry point — installs logging and mounts the application.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(salescope::app::App);
    }

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("salescope is a browser application; build and serve it with trunk");
}
