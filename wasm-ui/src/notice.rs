//! Blocking notices as browser alerts.

use claims_desk::Notice;
use yew::prelude::*;

/// Latest notice raised by a screen. The sequence number makes a repeated
/// notice a new value, so the alert shows again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    notice: Option<Notice>,
    seq: u32,
}

impl NoticeSlot {
    pub fn raise(self, notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            seq: self.seq.wrapping_add(1),
        }
    }

    /// Raise `notice` if there is one, otherwise keep the slot as is.
    pub fn raise_opt(self, notice: Option<Notice>) -> Self {
        match notice {
            Some(notice) => self.raise(notice),
            None => self,
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.notice
    }
}

/// Show an `alert()` every time `slot` receives a notice.
#[hook]
pub fn use_notice_alert(slot: NoticeSlot) {
    use_effect_with(slot, |slot| {
        if let Some(notice) = slot.current() {
            gloo::dialogs::alert(&notice.to_string());
        }
    });
}
