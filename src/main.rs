mod app;
mod config;
mod constants;
mod frame_loop;
mod page;
mod rng;
mod scheduler;
mod starfield;
mod surface;

fn main() {
    console_error_panic_hook::set_once();
    app::boot();
}
