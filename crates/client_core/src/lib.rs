//! Client side of the document trustworthiness service: validates a selected
//! document, uploads it, and renders the returned analysis into a view.

pub mod controller;
pub mod error;
pub mod transport;
pub mod types;
pub mod view;

pub use controller::UploadController;
pub use error::{RequestError, UploadError};
pub use transport::{AnalysisTransport, HttpAnalysisClient};
pub use types::{AnalysisRequest, DocumentSource, SelectedDocument, SubmitEvent, SubmitOutcome};
pub use view::{AnalysisView, Notifier, ViewRegion};
