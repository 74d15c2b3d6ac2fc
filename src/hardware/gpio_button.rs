use super::traits::Button;
use core::convert::Infallible;
use embedded_hal::digital::InputPin;

/// Active-high push button.
///
/// Wired between the pin and VCC with the pin's pull-down enabled, so an open
/// contact reads low (released).
pub struct GpioButton<P> {
    pin: P,
}

impl<P> GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> Button for GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    fn is_pressed(&mut self) -> bool {
        let Ok(high) = self.pin.is_high();
        high
    }
}
