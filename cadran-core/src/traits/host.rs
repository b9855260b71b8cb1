//! Host callback trait
//!
//! The host owns the engine and drives its lifecycle; this trait covers the
//! few calls that go the other way: style configuration, redraw requests,
//! and timezone broadcast subscription.

/// How notifications overlay the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeekMode {
    /// Brief, single-line peek card shown only for interruptive events
    Short,
    /// Peek card may take as much vertical space as it needs
    Variable,
}

/// When the face background stays visible behind a peek card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackgroundVisibility {
    /// Background briefly replaced for interruptive notifications
    Interruptive,
    /// Background always kept
    Persistent,
}

/// System chrome configuration requested by the engine at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceStyle {
    pub peek_mode: PeekMode,
    pub background_visibility: BackgroundVisibility,
    /// Whether the host draws its own time overlay on top of the face
    pub show_system_time: bool,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            peek_mode: PeekMode::Short,
            background_visibility: BackgroundVisibility::Interruptive,
            show_system_time: false,
        }
    }
}

/// Trait for engine-to-host callbacks
///
/// All methods are synchronous and infallible; the host decides how (and
/// when) to honor them. Subscription calls are paired and never nested:
/// the engine guards against double subscribe/unsubscribe itself.
pub trait WatchHost {
    /// Request the system chrome configuration for this face
    fn configure_style(&mut self, style: FaceStyle);

    /// Request a repaint
    ///
    /// The host answers with a `Engine::on_draw` call at its own pace.
    fn request_redraw(&mut self);

    /// Start delivering timezone-change broadcasts to the engine
    fn subscribe_timezone(&mut self);

    /// Stop delivering timezone-change broadcasts
    fn unsubscribe_timezone(&mut self);
}
