use iced::{Element, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

// Declare the application modules
mod report;
mod scan;
mod state;
mod ui;

use scan::loader::{LoadError, ScanImage};
use state::diagnosis::Diagnosis;
use state::session::{Screen, Session};

/// Main application state
struct MediScan {
    /// The single in-memory user session
    session: Session,
    /// Login form fields
    email: String,
    password: String,
    /// Inline error shown on a failed login attempt
    login_error: Option<String>,
    /// True while the simulated analysis task is running
    analyzing: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Login form edits
    EmailChanged(String),
    PasswordChanged(String),
    /// User submitted the login form
    LoginSubmitted,
    /// User clicked "Sign out"
    Logout,
    /// User clicked "Choose image"
    PickScan,
    /// Background image load completed
    ScanLoaded(Result<ScanImage, LoadError>),
    /// User clicked "Analyze image"
    Analyze,
    /// Simulated analysis completed with a result
    AnalysisComplete(Diagnosis),
    /// User clicked "Cancel" or "Analyze another image"
    ResetAnalysis,
    /// User clicked "Save report"
    ExportReport,
    /// Background report export completed
    ReportExported(Result<PathBuf, report::ReportError>),
}

impl MediScan {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🩺 MediScan AI started");

        (
            MediScan {
                session: Session::new(),
                email: String::new(),
                password: String::new(),
                login_error: None,
                analyzing: false,
                status: String::from("Please sign in."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                Task::none()
            }
            Message::PasswordChanged(password) => {
                self.password = password;
                Task::none()
            }
            Message::LoginSubmitted => {
                match self.session.login(&self.email, &self.password) {
                    Ok(()) => {
                        println!("🔐 Signed in as {}", self.email);
                        self.login_error = None;
                        self.password.clear();
                        self.status = String::from("Signed in. Load a chest X-ray to begin.");
                    }
                    Err(e) => {
                        self.login_error = Some(e.to_string());
                    }
                }
                Task::none()
            }
            Message::Logout => {
                self.session.logout();
                self.email.clear();
                self.password.clear();
                self.login_error = None;
                self.status = String::from("Please sign in.");
                Task::none()
            }
            Message::PickScan => {
                // Show the native file picker, restricted to image files
                let file = FileDialog::new()
                    .set_title("Select a chest X-ray image")
                    .add_filter("Images", &["png", "jpg", "jpeg"])
                    .pick_file();

                if let Some(path) = file {
                    self.status = format!("Loading {}...", path.display());
                    return Task::perform(
                        scan::loader::load_scan_image(path),
                        Message::ScanLoaded,
                    );
                }

                Task::none()
            }
            Message::ScanLoaded(Ok(scan)) => {
                self.status = format!("Loaded {}. Ready to analyze.", scan.filename);
                self.session.attach_scan(scan);
                Task::none()
            }
            Message::ScanLoaded(Err(e)) => {
                eprintln!("⚠️  Failed to load scan: {}", e);
                self.status = e.to_string();
                Task::none()
            }
            Message::Analyze => {
                self.analyzing = true;
                self.status = String::from("Analyzing image...");
                Task::perform(scan::analyzer::analyze(), Message::AnalysisComplete)
            }
            Message::AnalysisComplete(diagnosis) => {
                // A cancel during the simulated delay drops the result
                if self.analyzing && self.session.scan().is_some() {
                    self.analyzing = false;
                    self.status = format!(
                        "Analysis complete: {} ({}% confidence)",
                        diagnosis.condition, diagnosis.confidence
                    );
                    self.session.record_diagnosis(diagnosis);
                }
                Task::none()
            }
            Message::ResetAnalysis => {
                self.analyzing = false;
                self.session.reset_analysis();
                self.status = String::from("Load a chest X-ray to begin.");
                Task::none()
            }
            Message::ExportReport => {
                let (Some(diagnosis), Some(scan)) =
                    (self.session.diagnosis(), self.session.scan())
                else {
                    return Task::none();
                };

                let report = report::Report::new(diagnosis, &scan.filename);

                let dest = FileDialog::new()
                    .set_title("Save diagnosis report")
                    .set_file_name("diagnosis-report.json")
                    .add_filter("JSON", &["json"])
                    .save_file();

                if let Some(path) = dest {
                    return Task::perform(
                        report::export_report(report, path),
                        Message::ReportExported,
                    );
                }

                Task::none()
            }
            Message::ReportExported(Ok(path)) => {
                self.status = format!("Report saved to {}", path.display());
                Task::none()
            }
            Message::ReportExported(Err(e)) => {
                eprintln!("⚠️  Failed to save report: {}", e);
                self.status = e.to_string();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.session.screen() {
            Screen::Login => {
                ui::login::view(&self.email, &self.password, self.login_error.as_deref())
            }
            _ => ui::dashboard::view(&self.session, self.analyzing, &self.status),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "MediScan AI",
        MediScan::update,
        MediScan::view,
    )
    .theme(MediScan::theme)
    .centered()
    .run_with(MediScan::new)
}
