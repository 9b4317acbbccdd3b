//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the keyboard side of the hardware boundary.
//!
//! ## Philosophy
//!
//! **The shell never sees a scancode.**
//!
//! Keyboards deliver raw PS/2 codes through `KeyboardDevice`; the translation
//! layer turns them into `input_types::KeyEvent` and exposes the result as an
//! `InputSource`. Port I/O lives in the architecture crate that implements
//! `KeyboardDevice`, never here.
//!
//! ## Design Principles
//!
//! 1. **No x86-specific assumptions**: Only the scancode set is fixed (Set 1)
//! 2. **Trait-based**: Devices are polled through a trait
//! 3. **Testable**: Devices can be faked with a queue of events

#![cfg_attr(not(test), no_std)]

pub mod keyboard;
pub mod keyboard_translation;

pub use keyboard::{HalKeyEvent, HalScancode, KeyboardDevice};
pub use keyboard_translation::{scancode_to_ascii, KeyboardInput, ScancodeDecoder};
