// Resume generation orchestrator.
// Two-request flow: POST /api/v1/resumes stages generated prose (and the
// optional profile image) under a session id; the later download request runs
// the rendering pipeline, persists one record, and returns the PDF attachment.

pub mod form;
pub mod handlers;
pub mod prompts;
