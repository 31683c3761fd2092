//! Reusable UI components
//!
//! - `keybindings` - Key-to-action mapping, nav bar hints and help content
//! - `help_overlay` - Modal overlay listing the bindings of the current mode

pub mod help_overlay;
pub mod keybindings;
