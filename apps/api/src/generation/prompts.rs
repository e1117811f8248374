// All prompt constants for the Question Generation module.

/// Fixed system instruction for the 15-question interview brief.
pub const QUESTIONS_SYSTEM: &str = "Create a list of 15 interview questions for candidate, consisting of:
- 5 multiple-choice questions to evaluate job-specific skills, problem-solving, decision-making, and role-specific knowledge.
- 10 open-ended descriptive questions to assess communication, critical thinking, past experiences, cultural fit, and alignment with company values.

Multiple-choice questions should cover:
1. Domain-specific knowledge
2. Role-specific scenarios
3. Situational judgement
4. Professional competencies

Descriptive questions should be open-ended, asking candidates to:
1. Describe their relevant skills and experiences
2. Provide examples from their past
3. Analyze situations and think critically
4. Communicate their thoughts effectively
5. Demonstrate cultural fit and value alignment

Ensure the questions cover a range of topics relevant to the job and accurately assess the candidate's suitability and qualifications.";

/// Human turn template. Replace `{JD}` and `{CV}` (already token-trimmed)
/// before sending.
pub const QUESTIONS_HUMAN_TEMPLATE: &str = "@Job Description\n{JD}\n\n@Candidate Resume\n{CV}";
