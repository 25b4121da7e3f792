fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start casebook widgets");
    if let Err(err) = casebook::run() {
        log::error!("Unable to start: {err}");
    }
}
