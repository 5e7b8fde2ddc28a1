//! Commands queued from the UI to the image worker.

pub enum BackendCommand {
    FetchImage { reference: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchImage { .. } => "fetch_image",
        }
    }
}
