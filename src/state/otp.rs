//! One-time-code entry model shared by email verification and password reset.
//!
//! The code is six single-digit boxes. Typing a digit advances focus,
//! Backspace in an empty box steps back, and submission needs all six. The
//! resend control is throttled by a 60-second [`ResendCooldown`].

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

pub const OTP_LENGTH: usize = 6;
pub const RESEND_COOLDOWN_SECS: u32 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OtpCode {
    digits: [Option<char>; OTP_LENGTH],
    focus: usize,
}

impl OtpCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the box that should hold keyboard focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn digit(&self, index: usize) -> Option<char> {
        self.digits.get(index).copied().flatten()
    }

    /// Apply the new text of box `index`.
    ///
    /// Returns `false` (state unchanged) if `value` contains anything but
    /// ASCII digits. An empty value clears the box. When several digits
    /// arrive, the last one typed wins.
    pub fn input(&mut self, index: usize, value: &str) -> bool {
        if index >= OTP_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        let digit = value.chars().last();
        self.digits[index] = digit;
        self.focus = if digit.is_some() && index < OTP_LENGTH - 1 {
            index + 1
        } else {
            index
        };
        true
    }

    /// Handle Backspace in box `index` and return the new focus.
    ///
    /// A filled box is cleared in place; an empty box moves focus left.
    pub fn backspace(&mut self, index: usize) -> usize {
        if index >= OTP_LENGTH {
            return self.focus;
        }
        if self.digits[index].is_some() {
            self.digits[index] = None;
            self.focus = index;
        } else if index > 0 {
            self.focus = index - 1;
        }
        self.focus
    }

    /// Digits entered so far, in order, skipping empty boxes.
    pub fn code(&self) -> String {
        self.digits.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    pub fn can_submit(&self, busy: bool) -> bool {
        !busy && self.is_complete()
    }

    /// Empty every box and focus the first.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Countdown that blocks resending a code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining: u32,
}

impl ResendCooldown {
    pub fn start(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
    }

    /// Advance one second; returns the seconds left.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(self) -> u32 {
        self.remaining
    }

    pub fn can_resend(self) -> bool {
        self.remaining == 0
    }
}
