/// Decode and re-encode command.
pub mod decode;
/// Descriptor tree command.
pub mod describe;
/// Logger setup.
pub mod logging;
/// Registered type listing command.
pub mod types;
