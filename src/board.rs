//! Board I/O - two buttons and four indicator LEDs.
//!
//! Buttons (active-low with internal pull-up):
//!   - RAISE - drives the target positive while held
//!   - LOWER - drives the target negative while held
//!
//! LEDs:
//!   - STATUS - blinks while advertising, off while connected
//!   - LINK   - on while a central is connected
//!   - RAISE / LOWER - sign of the current target
//!
//! The buttons are sampled from the run loop rather than edge-waited in
//! their own tasks; debouncing happens in `sensor::edge`.

use c1_emulator::config;
use c1_emulator::sensor::indicator::Indicators;
use c1_emulator::Levels;
use embedded_hal::digital::{InputPin, OutputPin};

pub struct Board<I, O> {
    raise_btn: I,
    lower_btn: I,
    status_led: O,
    link_led: O,
    raise_led: O,
    lower_led: O,
    leds_active_low: bool,
}

impl<I, O> Board<I, O>
where
    I: InputPin,
    O: OutputPin,
{
    pub fn new(
        raise_btn: I,
        lower_btn: I,
        status_led: O,
        link_led: O,
        raise_led: O,
        lower_led: O,
        leds_active_low: bool,
    ) -> Self {
        Self {
            raise_btn,
            lower_btn,
            status_led,
            link_led,
            raise_led,
            lower_led,
            leds_active_low,
        }
    }

    /// Sample both button lines.  A failed read counts as released.
    pub fn levels(&mut self) -> Levels {
        let idle = Levels::idle(config::BUTTONS_ACTIVE_LOW);
        Levels {
            raise: self.raise_btn.is_high().unwrap_or(idle.raise),
            lower: self.lower_btn.is_high().unwrap_or(idle.lower),
        }
    }

    pub fn show(&mut self, indicators: Indicators) {
        let active_low = self.leds_active_low;
        drive(&mut self.status_led, indicators.status, active_low);
        drive(&mut self.link_led, indicators.link, active_low);
        drive(&mut self.raise_led, indicators.raise, active_low);
        drive(&mut self.lower_led, indicators.lower, active_low);
    }
}

fn drive<O: OutputPin>(pin: &mut O, lit: bool, active_low: bool) {
    if lit != active_low {
        pin.set_high().ok();
    } else {
        pin.set_low().ok();
    }
}
