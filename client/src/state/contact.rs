//! Contact form state and the artwork inquiry prefill.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use studio::catalog::ArtworkRecord;

/// Inquiry category sent with every message.
pub const INQUIRY_KIND: &str = "포트폴리오 고객 문의";

pub const SEND_SUCCEEDED_ALERT: &str = "메시지가 성공적으로 전송되었습니다.";

pub const SEND_FAILED_ALERT: &str = "전송 중 오류가 발생했습니다.";

/// Element id the inquiry flow scrolls to.
pub const CONTACT_FORM_ID: &str = "contact-form";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Replace the message with an acquisition inquiry for `record`, keeping
    /// whatever contact details were already typed.
    pub fn prefill_inquiry(&mut self, record: &ArtworkRecord) {
        self.message = inquiry_message(record);
    }
}

#[must_use]
pub fn inquiry_message(record: &ArtworkRecord) -> String {
    format!(
        "안녕하세요. [{}] 작품에 대한 소장 문의드립니다.\n(사이즈: {} / 제작년도: {})",
        record.title, record.size_label, record.year
    )
}

/// Form plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub sending: bool,
}

impl ContactState {
    /// Enter the sending state. Returns `false` if a send is already running.
    pub fn begin_send(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    /// Leave the sending state; a successful send clears the form.
    pub fn finish_send(&mut self, succeeded: bool) {
        self.sending = false;
        if succeeded {
            self.form = ContactForm::default();
        }
    }
}
