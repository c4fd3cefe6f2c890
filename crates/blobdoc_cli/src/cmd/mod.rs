/// Hex dump command.
pub mod dump;
/// Blob size and shape statistics command.
pub mod info;
/// Structural inspection command.
pub mod inspect;
/// JSON node tree for `--json` output.
pub mod json;
/// Encode/decode round-trip demo command.
pub mod roundtrip;
/// Sample value trees used by the demo commands.
pub mod sample;
/// Sample session writer command.
pub mod session;
/// Shared CLI helpers.
pub mod util;
