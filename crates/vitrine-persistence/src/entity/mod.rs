//! SeaORM entity definitions

pub mod prelude;
pub mod site_config;
