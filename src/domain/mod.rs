//! Domain layer: request, response and value types (no I/O).

mod request;
mod response;
mod value;

pub use request::{SendCampaign, SendOptions, SendSms};
pub use response::{Envelope, EnvelopeError};
pub use value::{ApiToken, CampaignId, ContactListId, Recipient, ScheduleTime, SenderId, SmsId};

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use serde_json::json;

    use super::*;

    #[test]
    fn api_token_debug_is_redacted() {
        let token = ApiToken::new("super-secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(token.bearer_header(), "Bearer super-secret");
    }

    #[test]
    fn schedule_time_uses_gateway_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap();
        assert_eq!(ScheduleTime::new(at).to_wire(), "2024-03-07 09:05:00");
    }

    #[test]
    fn schedule_time_keeps_local_reading_of_zoned_time() {
        let athens = FixedOffset::east_opt(3 * 3600).unwrap();
        let at = athens.with_ymd_and_hms(2024, 12, 31, 23, 30, 15).unwrap();
        assert_eq!(ScheduleTime::from(at).to_wire(), "2024-12-31 23:30:15");
    }

    #[test]
    fn recipient_serializes_as_string_or_array() {
        assert_eq!(
            serde_json::to_value(Recipient::from("306900000000")).unwrap(),
            json!("306900000000")
        );
        assert_eq!(
            serde_json::to_value(Recipient::from(vec!["3069000000001", "3069000000002"])).unwrap(),
            json!(["3069000000001", "3069000000002"])
        );
    }

    #[test]
    fn contact_list_ids_keep_their_json_kind() {
        let request = SendCampaign::new(vec![ContactListId::from(7_i64), "vip".into()], "hi");
        assert_eq!(
            serde_json::to_value(request.contact_list_ids()).unwrap(),
            json!([7, "vip"])
        );
    }

    #[test]
    fn send_sms_builder_collects_options() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        let request = SendSms::new("306900000000", "hello")
            .sender_id("Shop")
            .schedule_time(at);

        assert_eq!(request.message(), "hello");
        assert_eq!(request.options().sender_id, Some(SenderId::new("Shop")));
        assert_eq!(request.options().schedule_time, Some(ScheduleTime::new(at)));
    }

    #[test]
    fn with_options_replaces_per_call_overrides() {
        let at = NaiveDate::from_ymd_opt(2025, 5, 9)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let options = SendOptions {
            sender_id: Some(SenderId::new("Alerts")),
            schedule_time: Some(ScheduleTime::new(at)),
        };

        let sms = SendSms::new("306900000000", "hi")
            .sender_id("Ignored")
            .with_options(options.clone());
        assert_eq!(sms.options(), &options);

        let campaign = SendCampaign::new([4_i64], "promo").with_options(options.clone());
        assert_eq!(campaign.options(), &options);

        let cleared = sms.with_options(SendOptions::default());
        assert_eq!(cleared.options().sender_id, None);
        assert_eq!(cleared.options().schedule_time, None);
    }

    #[test]
    fn envelope_serializes_with_status_tag() {
        let ok = Envelope::success("12.50".to_owned());
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"status": "success", "data": "12.50"})
        );

        let err: Envelope<String> = Envelope::error("invalid token");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"status": "error", "message": "invalid token"})
        );
    }

    #[test]
    fn envelope_accessors_and_conversion() {
        let ok = Envelope::success(3);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&3));
        assert_eq!(ok.message(), None);
        assert_eq!(ok.map(|n| n * 2).into_result(), Ok(6));

        let err: Envelope<i32> = Envelope::error("boom");
        assert!(err.is_error());
        assert_eq!(err.message(), Some("boom"));
        let failure = err.into_result().unwrap_err();
        assert_eq!(failure.to_string(), "boom");
    }
}
