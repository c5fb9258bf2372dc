// All LLM prompt scaffolds for the generation pipeline.
// Placeholders are written as `{name}` and filled with `str::replace` by the
// builder function that sits next to each call.

/// Job-context extraction prompt.
/// Replace: {json_only}, {job_description}
pub const JOB_CONTEXT_PROMPT_TEMPLATE: &str = r#"From the job description below:
1. Identify and briefly describe the 3 most important responsibilities a successful candidate must demonstrate.
2. Extract a list of up to 20 key skills, technologies, and keywords mentioned by name in the job description.
3. Identify the job title and company name the description is advertising.
4. Provide a 1–2 sentence summary of the job description that highlights its focus and context.

{json_only}

{
  "responsibilities": [
    "Responsibility 1",
    "Responsibility 2",
    "Responsibility 3"
  ],
  "keywords": [
    "Keyword 1", "Keyword 2", "Keyword 3"
  ],
  "target_job_title": "Job Title",
  "target_company": "Company Name",
  "job_summary": "A concise summary of the job's key themes and requirements."
}

Job Description:
{job_description}"#;

/// Work-experience tailoring prompt.
/// Replace: {role}, {company}, {prune_rule}, {ordering_rule}, {max_words}, {json_only},
///          {keywords}, {job_summary}, {responsibilities}, {experience_json}
pub const TAILOR_EXPERIENCE_PROMPT_TEMPLATE: &str = r#"Based on the 3 key responsibilities below, tailor the following resume work experience section to better align with a {role} position at {company}.

- Use only the real content provided.
- Do NOT fabricate accomplishments.
- Use Action + Project/Problem + Result (APR) format where appropriate, emphasizing numeric value.
- Naturally include relevant keywords from the job description.
- 3 - 6 bullets per job
- {prune_rule}
- {ordering_rule}
- The total length of "bullets" content across "work_experience" should be approximately {max_words} words. This is extremely important. More recent experience should have more content.

{json_only}

Format:
{
  "work_experience": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "start_date": "YYYY-MM",
      "end_date": "YYYY-MM",
      "bullets": ["Actionable bullet 1", "Bullet 2", "Bullet 3"]
    }
  ]
}

Try to naturally integrate the following keywords when relevant:
{keywords}

### Role Summary
{job_summary}

### Key Responsibilities:
{responsibilities}

### Original Work Experience:
{experience_json}"#;

pub const PRUNE_IRRELEVANT_RULE: &str = "You may remove experiences that are clearly unrelated \
    to the role. However, keep at least 3 jobs if 3 or more are provided.";
pub const KEEP_ALL_JOBS_RULE: &str = "Do not remove any jobs, even if they are unrelated.";
pub const RELEVANCE_ORDER_RULE: &str =
    "Organize the work experience by relevance to the job rather than chronological order.";
pub const CHRONOLOGICAL_ORDER_RULE: &str = "Maintain chronological ordering of job experience.";

/// Professional summary prompt. The response is plain text, not JSON.
/// Replace: {role}, {responsibilities}, {keywords}, {experience_json}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Using the following work experience and job context, please generate a concise 50-70 word professional summary for a resume tailored to a {role} role.

- Focus on years of experience, strengths, specialization, and value-add
- Avoid overused phrases and passive voice
- Write for a non-technical hiring manager
- Use third-person and active language
- Naturally integrate some of the keywords below when appropriate
- Calculate years of experience from relevant work experience dates
- Return only the summary text, with no heading or quotation marks

### Key Responsibilities:
{responsibilities}

### Keywords:
{keywords}

### Work Experience:
{experience_json}"#;

/// Skill filtering and suggestion prompt.
/// Replace: {existing_skills}, {job_summary}, {responsibilities}, {keywords}, {json_only}
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Here is a list of skills from a candidate's bio:
{existing_skills}

Here is information about the job they are applying for:
Job Summary:
{job_summary}

Key Responsibilities:
{responsibilities}

Relevant Keywords:
{keywords}

- Identify which existing candidate bio skills are relevant and should be included in the resume.
- Then, suggest up to 5 **new** skills or tools that are not currently listed in the candidate's bio but would significantly improve the resume for this job.
- If there are no skills or tools that are not currently listed but would significantly improve the resume for this job, do not list any.
- There should be 4-7 categories with at least 3 items each in the selected_skills list.
- There should be no category in suggested_skills that does not exist in selected_skills.
- Ensure no suggested_skills already exist in the list of skills from a candidate's resume.

{json_only}

{
  "selected_skills": {
    "Category Name": ["Skill 1", "Skill 2"]
  },
  "suggested_skills": {
    "Category Name": ["Skill 1", "Skill 2"]
  }
}"#;
