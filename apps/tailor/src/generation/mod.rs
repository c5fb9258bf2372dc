// Resume tailoring pipeline: job-context extraction, summary, skill selection and
// approval, word budget, experience tailoring.
// All LLM calls go through llm_client; no direct HTTP calls to the provider here.

pub mod approval;
pub mod budget;
pub mod experience;
pub mod generator;
pub mod jd_parser;
pub mod prompts;
pub mod skills;
pub mod summary;
