// Shared prompt fragments used by every generation call.
// Each call's task-specific scaffold lives in generation::prompts.

/// System message sent with every chat-completion request.
pub const RESUME_WRITER_SYSTEM: &str = "You are an expert resume writer with 20+ years of \
    experience helping professionals break into the tech industry.";

/// Output contract appended to every prompt that expects a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON in the exact format below. \
    Do not include commentary, explanations, markdown, or headings. \
    Do not wrap the output in code blocks. \
    Output must begin with a { and end with a }.";
