pub mod get_forecast;
pub mod manage_webhooks;
pub mod record_temperature;
