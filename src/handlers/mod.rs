pub mod app_shell;
pub mod health;
pub mod href;
pub mod list;
pub mod resolve;

pub use app_shell::app_shell_handler;
pub use health::health_handler;
pub use href::href_handler;
pub use list::list_handler;
pub use resolve::resolve_handler;
