//! Integration tests: wizards and the HTTP API driven end to end against
//! an in-memory inquiry sender.

mod api_flow;
mod mock_sender;
mod wizard_flow;
