use serde::Serialize;

use crate::domain::{ContactListId, Recipient, ScheduleTime, SendCampaign, SendSms, SenderId};

#[derive(Debug, Serialize)]
struct SendSmsJsonRequest<'a> {
    recipient: &'a Recipient,
    message: &'a str,
    sender_id: &'a SenderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_time: Option<ScheduleTime>,
}

#[derive(Debug, Serialize)]
struct SendCampaignJsonRequest<'a> {
    contact_list_ids: &'a [ContactListId],
    message: &'a str,
    sender_id: &'a SenderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_time: Option<ScheduleTime>,
}

/// Build the `sms/send` body; `default_sender` applies when the request has no override.
pub fn encode_send_sms_json(
    request: &SendSms,
    default_sender: &SenderId,
) -> Result<serde_json::Value, serde_json::Error> {
    let options = request.options();
    serde_json::to_value(SendSmsJsonRequest {
        recipient: request.recipient(),
        message: request.message(),
        sender_id: options.sender_id.as_ref().unwrap_or(default_sender),
        schedule_time: options.schedule_time,
    })
}

/// Build the `campaign/send` body; `default_sender` applies when the request has no override.
pub fn encode_send_campaign_json(
    request: &SendCampaign,
    default_sender: &SenderId,
) -> Result<serde_json::Value, serde_json::Error> {
    let options = request.options();
    serde_json::to_value(SendCampaignJsonRequest {
        contact_list_ids: request.contact_list_ids(),
        message: request.message(),
        sender_id: options.sender_id.as_ref().unwrap_or(default_sender),
        schedule_time: options.schedule_time,
    })
}
