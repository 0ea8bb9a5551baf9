mod loader;
mod schema;

pub use loader::{find_and_load_config, load_config, resolve_config};
pub use schema::Config;
