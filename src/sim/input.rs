use bitflags::bitflags;

bitflags! {
    /// Commands held during one tick.
    ///
    /// [`Player::apply`](super::Player::apply) runs them in declaration order.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Commands: u8 {
        /// Counter-clockwise by one turn step.
        const TURN_LEFT  = 0b0001;
        /// Clockwise by one turn step.
        const TURN_RIGHT = 0b0010;
        const FORWARD    = 0b0100;
        const BACKWARD   = 0b1000;
    }
}
