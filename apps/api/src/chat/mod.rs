// Chat API: a single stateless endpoint.
// The caller replays the full history on every request.

pub mod assembly;
pub mod handlers;
pub mod models;
