pub mod schema;

pub use schema::{ApiConfig, Config, DEV_URL, PROD_URL};
