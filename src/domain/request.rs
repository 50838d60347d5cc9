use crate::domain::value::{ContactListId, Recipient, ScheduleTime, SenderId};

/// Per-call overrides shared by [`SendSms`] and [`SendCampaign`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Overrides the client's default sender id.
    pub sender_id: Option<SenderId>,
    /// Deferred delivery; omitted from the payload when `None`.
    pub schedule_time: Option<ScheduleTime>,
}

/// `POST /api/v3/sms/send` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    recipient: Recipient,
    message: String,
    options: SendOptions,
}

impl SendSms {
    pub fn new(recipient: impl Into<Recipient>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
            options: SendOptions::default(),
        }
    }

    pub fn sender_id(mut self, sender_id: impl Into<SenderId>) -> Self {
        self.options.sender_id = Some(sender_id.into());
        self
    }

    pub fn schedule_time(mut self, schedule_time: impl Into<ScheduleTime>) -> Self {
        self.options.schedule_time = Some(schedule_time.into());
        self
    }

    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// `POST /api/v3/campaign/send` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCampaign {
    contact_list_ids: Vec<ContactListId>,
    message: String,
    options: SendOptions,
}

impl SendCampaign {
    pub fn new<I, T>(contact_list_ids: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ContactListId>,
    {
        Self {
            contact_list_ids: contact_list_ids.into_iter().map(Into::into).collect(),
            message: message.into(),
            options: SendOptions::default(),
        }
    }

    pub fn sender_id(mut self, sender_id: impl Into<SenderId>) -> Self {
        self.options.sender_id = Some(sender_id.into());
        self
    }

    pub fn schedule_time(mut self, schedule_time: impl Into<ScheduleTime>) -> Self {
        self.options.schedule_time = Some(schedule_time.into());
        self
    }

    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }

    pub fn contact_list_ids(&self) -> &[ContactListId] {
        &self.contact_list_ids
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
