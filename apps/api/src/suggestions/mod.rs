// Placement-advice feature: prompt construction, provider seam, HTTP
// handler. The provider trait keeps handlers unaware of whether a real
// model or the keyless fallback answers.

pub mod handlers;
pub mod prompts;
pub mod provider;
