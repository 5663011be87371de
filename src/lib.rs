// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the `kap` command.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the kaptaind broker
//   (cluster/task reads, task create and delete).
// - `cli`: Declares the two-level command grammar.
// - `config`: Loads the broker endpoint from `~/.kap/config`.
// - `error`: Error taxonomy for broker calls.
// - `models`: Wire types for the broker's JSON envelope protocol.
// - `ui`: Renders results as tables or status lines and maps commands
//   to `api` calls.
//
// Keeping this separation makes it easier to test the API logic against
// a mock broker without going through the binary.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;
