//! Backend commands queued from UI to backend worker.

use shared::domain::SubmissionId;

pub enum BackendCommand {
    ProcessTask {
        submission: SubmissionId,
        text: String,
    },
}
