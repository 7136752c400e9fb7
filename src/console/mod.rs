// src/console/mod.rs
//
// Console session layer - the UI boundary
//
// Line-oriented prompts over injected input/output handles. Nothing in
// here touches process-wide streams directly; main wires stdin/stdout
// in, tests wire cursors and buffers.

pub mod input;
pub mod menu;

pub use input::Console;
pub use menu::MenuSession;
