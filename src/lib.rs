//! # `flipbook`
//!
//! `flipbook` is a tiny frame-timing and animation-sequencing engine.
//!
//! The core type, [`animation::Animation`], owns a sequence of image handles
//! with individual display durations and resolves elapsed wall-clock time to
//! the frame that should currently be shown, looping indefinitely. Around it
//! sit a fixed-rate [`game_loop::GameLoop`], keyboard [`event::Input`]
//! mapping and toy [`kinematics`] for terminal games.
pub mod animation;
pub mod event;
pub mod game_loop;
pub mod kinematics;
