mod helpers;
mod test_cities;
mod test_webhooks;
