use super::traits::Led;
use core::convert::Infallible;
use embedded_hal::digital::StatefulOutputPin;

pub struct GpioLed<P> {
    pin: P,
}

impl<P> GpioLed<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> Led for GpioLed<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn toggle(&mut self) {
        let Ok(()) = self.pin.toggle();
    }
}
