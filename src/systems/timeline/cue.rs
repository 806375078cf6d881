use serde::Serialize;

/// One step of the intro sequence, emitted exactly once
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Cue {
    /// Logo letter `index` slams in
    LetterEntered { index: u32 },
    TaglineVisible,
    /// Tagline typed up to and including this prefix
    Typed { text: String },
    SubtitleVisible,
    CtaVisible,
    EnterButtonVisible,
    /// Measure floating elements and start the stepper
    Antigravity,
    /// Remove the activation flash
    FlashDone,
    /// Visitor entered: start the overlay exit transition
    Exiting,
    /// Exit transition done: hide overlay, reveal the page
    Hidden,
}
