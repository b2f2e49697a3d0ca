/// Screen-building module
///
/// Each submodule builds one screen of the workflow as an
/// `Element<Message>`:
/// - `login.rs` - credential form shown while unauthenticated
/// - `dashboard.rs` - header plus uploader / preview body
/// - `results.rs` - diagnosis report with confidence and recommendations

pub mod dashboard;
pub mod login;
pub mod results;
