use validator::Validate;
use weather_hooks::{
    application::manage_webhooks::dto::CreateWebhookRequest,
    domain::{
        city::entity::NewCity,
        temperature::entity::{Forecast, Temperature},
        webhook::entity::Webhook,
    },
};

#[test]
fn webhook_completeness_requires_every_field() {
    assert!(Webhook::new(1, 2, "https://x").is_complete());
    assert!(!Webhook::new(0, 2, "https://x").is_complete());
    assert!(!Webhook::new(1, 0, "https://x").is_complete());
    assert!(!Webhook::new(1, 2, "").is_complete());
}

#[test]
fn webhook_request_needs_city_and_url() {
    let ok = CreateWebhookRequest {
        city_id: 1,
        callback_url: "https://example.com/hook".to_string(),
    };
    assert!(ok.validate().is_ok());

    let no_city = CreateWebhookRequest {
        city_id: 0,
        ..ok.clone()
    };
    assert!(no_city.validate().is_err());

    let bad_url = CreateWebhookRequest {
        callback_url: String::new(),
        ..ok
    };
    assert!(bad_url.validate().is_err());
}

#[test]
fn city_rejects_zero_coordinates() {
    let city = NewCity {
        name: "Lagos".to_string(),
        latitude: 6.5244,
        longitude: 3.3792,
    };
    assert!(city.check().is_ok());

    assert!(NewCity { latitude: 0.0, ..city.clone() }.check().is_err());
    assert!(NewCity { longitude: 0.0, ..city.clone() }.check().is_err());
    assert!(NewCity { name: "  ".to_string(), ..city }.check().is_err());
}

#[test]
fn forecast_uses_integer_sums() {
    let readings: Vec<Temperature> = (0..3)
        .map(|i| Temperature {
            id: i + 1,
            city_id: 2,
            max: i32::MAX,
            min: 1,
            timestamp: 100 + i,
        })
        .collect();
    let forecast = Forecast::from_readings(2, &readings);
    assert_eq!(forecast.sample, 3);
    assert_eq!(forecast.max, f64::from(i32::MAX));
    assert_eq!(forecast.min, 1.0);
}
