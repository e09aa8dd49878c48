pub mod cities;
pub mod health;
pub mod temperatures;
pub mod webhooks;
