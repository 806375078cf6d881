//! Intro Timeline - the entrance choreography as a pollable schedule
//!
//! The host calls `poll` from its frame loop with the elapsed time and
//! applies each due cue (class toggles, typed text, antigravity start).

mod cue;
mod schedule;

pub use cue::Cue;
pub use schedule::IntroTimeline;
