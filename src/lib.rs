// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run the demonstration query
// sequence; the same functions can be imported into another crate to
// script the MGP API directly.
//
// Module responsibilities:
// - `api`: the blocking HTTP client (login, authenticated queries).
// - `ui`: the interactive credential prompt.
pub mod api;
pub mod ui;
