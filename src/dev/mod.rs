/// Development utilities module
///
/// Fixture-backed stand-ins for the remote API, for running the TUI
/// offline with `--mock`.

pub mod mock_client;
