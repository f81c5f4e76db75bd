/// Marker separating the summary, question and answer sections of a quiz document.
/// The prompt template and the parser must agree on it.
pub const QUIZ_SECTION_DELIMITER: &str = "---";

pub const QUIZ_SYSTEM_PROMPT: &str = "You are a study partner that helps students memorise material. You follow output formats exactly and never add commentary outside of them.";

/// Placeholders: `{delimiter}`, `{quiz_type}`, `{context}`. `{context}` is substituted last.
pub const QUIZ_PROMPT_TEMPLATE: &str = "Analyse the flow of the provided text and complete the following tasks.

1. [Overview summary]: In ONE line, summarise what background or need this concept was devised for and how the material is structured.
2. [Key keywords]: Pick exactly 5 core keywords that run through the whole text.
3. [5-question quiz]: Write exactly 5 questions of the {quiz_type} type. Do NOT include the answers in this section.
4. [Sources]: For every question give the answer, then cite the page number and the key phrase of the supporting sentence, kept small and unobtrusive, as Page N: \"phrase\".

Rules for the output:
- Use the line {delimiter} exactly twice, as shown in the format below, and nowhere else.
- Do not use {delimiter} as a horizontal rule, table separator or decoration anywhere.
- Keep the section headings exactly as written.

Text content:
{context}

Format:
### 1. Overview summary
(content)
### 2. Key keywords
(content)
{delimiter}
### 3. Quiz questions (answers excluded)
Q1... Q5...
{delimiter}
### 4. Answers and explanations (with sources)
(detailed explanation for each question, each with a 'Page N: phrase' citation)
";
