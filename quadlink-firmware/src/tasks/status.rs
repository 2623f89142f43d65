//! Status LED task
//!
//! Slow blink while calibrating, solid once ready, fast blink on a fault.

use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Timer};

use quadlink_core::control::LoopStatus;
use quadlink_hal::{OutputPin, Polarity};
use quadlink_hal_rp2040::GpioOutput;

use crate::channels::LINK_STATUS;

const SLOW_BLINK: Duration = Duration::from_millis(500);
const FAST_BLINK: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Blink(Duration),
    Solid,
}

impl Pattern {
    fn for_status(status: &LoopStatus) -> Self {
        if status.fault.is_some() {
            Pattern::Blink(FAST_BLINK)
        } else if status.phase.is_calibrating() {
            Pattern::Blink(SLOW_BLINK)
        } else {
            Pattern::Solid
        }
    }
}

#[embassy_executor::task]
pub async fn status_led_task(mut led: GpioOutput<'static>, polarity: Polarity) {
    let mut pattern = Pattern::Blink(SLOW_BLINK);
    let mut lit = false;

    loop {
        match pattern {
            Pattern::Solid => {
                led.set_state(polarity.level_for(true));
                pattern = Pattern::for_status(&LINK_STATUS.wait().await);
            }
            Pattern::Blink(period) => match select(LINK_STATUS.wait(), Timer::after(period)).await {
                Either::First(status) => pattern = Pattern::for_status(&status),
                Either::Second(()) => {
                    lit = !lit;
                    led.set_state(polarity.level_for(lit));
                }
            },
        }
    }
}
