use super::ctx::FrameCtx;

/// Control directive returned from the frame callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Control {
    Continue,
    Exit,
}

/// Application contract.
///
/// The runtime calls [`on_frame`] once per presented frame with the
/// sampled input state and frame timing; everything the app does — input
/// handling, simulation, drawing — happens inside that call.
///
/// [`on_frame`]: App::on_frame
pub trait App {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Control;
}
