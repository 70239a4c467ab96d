mod app;
mod shutdown;

pub use app::create_app;
pub use shutdown::shutdown_signal;
