// Prompt template for biosketch generation, rendered with minijinja.
// Variables are `resume`, `scientific_contributions` and `personal_statement`.

use minijinja::Environment;
use serde::Serialize;

/// NIH biosketch prompt. The model is asked to analyze and plan inside tagged sections
/// and then to return only the finished biosketch.
pub const BIOSKETCH_PROMPT_TEMPLATE: &str = r#"You are an expert grant writer tasked with creating a professional biosketch for a team member. This biosketch will be used in grant applications, so it's crucial that it highlights the individual's expertise and relevance to the proposed project. Your task is to create a biosketch in the NIH format using the provided information.

I will provide you with three pieces of information:
1. A resume
2. A list of scientific contributions
3. A personal statement

Please analyze each piece of information carefully and use it to create a comprehensive yet concise biosketch. Follow these steps:

1. Analyze the resume:
   <document_analysis>
   - Extract key information about education and training
   - Identify relevant positions, scientific appointments, and honors
   - Note any other significant achievements or skills
   - Write down relevant quotes or information, numbered for easy reference
   </document_analysis>

2. Analyze the scientific contributions:
   <document_analysis>
   - Identify the most significant contributions, focusing on those most relevant to potential grant proposals
   - Note any patents, publications, or other notable achievements
   - Consider how these contributions demonstrate the individual's expertise and potential impact in the field
   - Write down relevant quotes or information, numbered for easy reference
   </document_analysis>

3. Analyze the personal statement:
   <document_analysis>
   - Identify key expertise and how it relates to potential grant proposals
   - Note any specific research interests or goals mentioned
   - Extract information about the individual's commitment to the field
   - Write down relevant quotes or information, numbered for easy reference
   </document_analysis>

4. Plan the biosketch:
   <biosketch_planning>
   - Outline how you will use the extracted information to create each section of the NIH biosketch:
     a. Name, eRA Commons Username, Position Title
     b. Education/Training (in reverse chronological order)
     c. Personal Statement (tailored to highlight relevance to potential grant proposals)
     d. Positions, Scientific Appointments, and Honors
     e. Contributions to Science (focus on the most significant and relevant contributions)
   - For each section, note which numbered items from the document analysis you will use
   </biosketch_planning>

5. Using the analyzed information and your plan, create a biosketch following the NIH format.

Remember to keep the biosketch concise yet comprehensive, highlighting the most relevant qualifications and achievements for potential grant proposals. The final biosketch should not exceed five pages.

Here is the resume:

<resume>
{{ resume }}
</resume>

Here are the scientific contributions:

<scientific_contributions>
{{ scientific_contributions }}
</scientific_contributions>

Here is the personal statement:

<personal_statement>
{{ personal_statement }}
</personal_statement>

Please provide the completed biosketch in the NIH format. Skip the document_analysis and biosketch_planning sections in your response - I only want the final NIH format biosketch."#;

/// Renders the biosketch prompt. Values are emitted as-is and never re-parsed, so user
/// text that happens to contain `{{ resume }}` stays literal. No auto-escaping applies.
pub fn render_prompt(ctx: &impl Serialize) -> Result<String, minijinja::Error> {
    Environment::new().render_str(BIOSKETCH_PROMPT_TEMPLATE, ctx)
}
