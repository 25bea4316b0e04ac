//! Kaomoji Picker Backend
//!
//! Native side of the picker:
//! - paste: clipboard write + paste keystroke into the focused app
//! - uinput: kernel-level virtual keyboard for the keystroke on Linux
//! - commands: Tauri command handlers (paste, drag, window controls)

use tauri::Manager;

mod commands;
mod paste;
#[cfg(target_os = "linux")]
mod uinput;

use paste::ClipboardState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Bring the existing picker back instead of opening a second one
                #[cfg(desktop)]
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.show();
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(
                app_handle.path().app_log_dir().expect("failed to get log dir"),
                "KaomojiPicker"
            ).expect("failed to init rolling logger");

            eprintln!("[{}] App setup starting", chrono::Local::now().format("%H:%M:%S%.3f"));

            app.manage(ClipboardState::new());

            let _ = rolling_logger::info("Picker ready");
            eprintln!("[{}] Clipboard state managed", chrono::Local::now().format("%H:%M:%S%.3f"));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Paste
            commands::paste_text,
            // Window
            commands::start_dragging,
            commands::set_pinned,
            commands::minimize_window,
            commands::hide_window,
            commands::close_window,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
