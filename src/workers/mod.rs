pub mod notifier;
pub mod webhook_actor;
pub mod webhook_restorer;
