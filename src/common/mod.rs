pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod logging;
pub mod utils;

// Re-export
pub use api::ApiTrait;
pub use client::{API_KEY_HEADER, create_http_client};
pub use config::{ApiConfig, LatencyBudget, load_dotenv};
pub use errors::ApiTestError;
pub use logging::init_tracing;
pub use utils::{
    AddressFamily, address_family, addresses_match, amounts_ordered, get_timestamp_millis,
    is_positive_amount, is_valid_evm_address, is_valid_solana_address, normalize_address,
    usd_value,
};
