//! Frame style constants

/// Frame metrics the state machine needs to know about
pub struct FrameStyle {
    /// Height of the header bar; also the height of a minimized window
    pub header_height: f32,
    /// Width of a minimized window
    pub minimized_width: f32,
    /// Left inset of a minimized window from its dock bounds
    pub minimized_inset: f32,
}

/// Default frame style matching `web/wingman.css`
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    header_height: 32.0,
    minimized_width: 250.0,
    minimized_inset: 40.0,
};
