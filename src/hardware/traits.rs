pub trait Led {
    fn toggle(&mut self);
}

pub trait Button {
    /// Raw, undebounced level: `true` while the contact is closed.
    fn is_pressed(&mut self) -> bool;
}
