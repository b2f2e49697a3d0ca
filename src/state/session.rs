/// In-memory session state and its transitions
///
/// One interactive session per process. All fields start empty and are
/// mutated only by the transition methods below; nothing is persisted.
/// The active screen is derived from the flags, which keeps the view
/// states mutually exclusive by construction.

use thiserror::Error;

use super::diagnosis::Diagnosis;
use crate::scan::loader::ScanImage;

/// Error returned by a failed login attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter an email and a password.")]
    EmptyCredentials,
}

/// The screen the UI should be showing, derived from the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Not authenticated: login form
    Login,
    /// Authenticated, no scan loaded: uploader
    Upload,
    /// Scan loaded, not yet analyzed: preview with Analyze/Cancel
    Preview,
    /// Scan analyzed: diagnosis report
    Report,
}

/// State for one user session
#[derive(Debug, Clone, Default)]
pub struct Session {
    is_authenticated: bool,
    scan: Option<ScanImage>,
    diagnosis: Option<Diagnosis>,
}

impl Session {
    /// Create a fresh, unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to log in. Any non-empty credential pair is accepted;
    /// whitespace-only input counts as empty.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), LoginError> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(LoginError::EmptyCredentials);
        }
        self.is_authenticated = true;
        Ok(())
    }

    /// Log out. Only the authentication flag is cleared; a loaded scan
    /// and diagnosis survive until the session is reset or re-used.
    pub fn logout(&mut self) {
        self.is_authenticated = false;
    }

    /// Store an uploaded scan, moving the view to the preview screen
    pub fn attach_scan(&mut self, scan: ScanImage) {
        self.scan = Some(scan);
    }

    /// Store an analysis result, moving the view to the report screen
    pub fn record_diagnosis(&mut self, diagnosis: Diagnosis) {
        self.diagnosis = Some(diagnosis);
    }

    /// Clear both the scan and the diagnosis, returning to the uploader
    pub fn reset_analysis(&mut self) {
        self.scan = None;
        self.diagnosis = None;
    }

    /// Which screen should be visible right now
    pub fn screen(&self) -> Screen {
        if !self.is_authenticated {
            Screen::Login
        } else if self.diagnosis.is_some() {
            Screen::Report
        } else if self.scan.is_some() {
            Screen::Preview
        } else {
            Screen::Upload
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn scan(&self) -> Option<&ScanImage> {
        self.scan.as_ref()
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::diagnosis::DIAGNOSIS_CONDITIONS;

    fn test_scan() -> ScanImage {
        ScanImage::from_decoded("xray.png".to_string(), 64, 64, Vec::new())
    }

    #[test]
    fn test_fresh_session_shows_login() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.screen(), Screen::Login);
    }

    #[test]
    fn test_login_with_credentials_succeeds() {
        let mut session = Session::new();
        assert!(session.login("doctor@hospital.com", "secret").is_ok());
        assert!(session.is_authenticated());
        assert_eq!(session.screen(), Screen::Upload);
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        for (email, password) in [("", "secret"), ("doctor@hospital.com", ""), ("", ""), ("  ", "secret"), ("doctor@hospital.com", "\t")] {
            let mut session = Session::new();
            assert_eq!(
                session.login(email, password),
                Err(LoginError::EmptyCredentials),
                "accepted blank credentials: {:?}",
                (email, password)
            );
            assert!(!session.is_authenticated());
            assert_eq!(session.screen(), Screen::Login);
        }
    }

    #[test]
    fn test_attach_scan_moves_to_preview() {
        let mut session = Session::new();
        session.login("a", "b").unwrap();
        session.attach_scan(test_scan());
        assert_eq!(session.screen(), Screen::Preview);
        assert!(session.scan().is_some());
        assert!(session.diagnosis().is_none());
    }

    #[test]
    fn test_record_diagnosis_moves_to_report() {
        let mut session = Session::new();
        session.login("a", "b").unwrap();
        session.attach_scan(test_scan());
        session.record_diagnosis(DIAGNOSIS_CONDITIONS[0]);
        assert_eq!(session.screen(), Screen::Report);
    }

    #[test]
    fn test_reset_clears_scan_and_diagnosis() {
        let mut session = Session::new();
        session.login("a", "b").unwrap();
        session.attach_scan(test_scan());
        session.record_diagnosis(DIAGNOSIS_CONDITIONS[1]);

        session.reset_analysis();

        assert!(session.scan().is_none());
        assert!(session.diagnosis().is_none());
        assert_eq!(session.screen(), Screen::Upload);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_returns_to_login_from_any_state() {
        let mut session = Session::new();
        session.login("a", "b").unwrap();
        session.attach_scan(test_scan());
        session.record_diagnosis(DIAGNOSIS_CONDITIONS[2]);

        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.screen(), Screen::Login);
    }
}
