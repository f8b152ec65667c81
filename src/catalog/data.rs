//! The curated prompt dataset.

use chrono::NaiveDate;

use crate::models::Prompt;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalog date")
}

/// The full catalog, in insertion order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn all_prompts() -> Vec<Prompt> {
    vec![
        Prompt {
            id: "1".to_string(),
            title: "Meeting Summary Generator".to_string(),
            description: "Transform your meeting notes into clear, actionable summaries with key takeaways and next steps.".to_string(),
            category: "Productivity".to_string(),
            author: "Sarah Chen".to_string(),
            downloads: 2847,
            date_created: date(2024, 1, 15),
            prompt: r"Please analyze the following meeting notes and create a structured summary with:

1. **Key Topics Discussed:**
   - List the main topics covered

2. **Decisions Made:**
   - List any decisions that were finalized

3. **Action Items:**
   - Who is responsible for what
   - Deadlines if mentioned

4. **Next Steps:**
   - What needs to happen before the next meeting

5. **Questions/Concerns Raised:**
   - Any unresolved issues or questions

Meeting Notes:
[PASTE YOUR MEETING NOTES HERE]

Format the response in a clear, professional manner suitable for sharing with stakeholders.".to_string(),
        },
        Prompt {
            id: "2".to_string(),
            title: "Email Campaign Copy Generator".to_string(),
            description: "Create compelling email marketing copy that converts, with subject lines and CTAs optimized for engagement.".to_string(),
            category: "Marketing & Sales".to_string(),
            author: "Marcus Rodriguez".to_string(),
            downloads: 1923,
            date_created: date(2024, 1, 10),
            prompt: r"Create a compelling email marketing campaign with the following structure:

**Product/Service:** [DESCRIBE YOUR PRODUCT/SERVICE]
**Target Audience:** [DESCRIBE YOUR AUDIENCE]
**Campaign Goal:** [WHAT ACTION DO YOU WANT THEM TO TAKE]

Please provide:

1. **Subject Line Options (3 variations):**
   - One curiosity-driven
   - One benefit-focused
   - One urgency-based

2. **Email Body:**
   - Attention-grabbing opening
   - Clear value proposition
   - Social proof or testimonial
   - Strong call-to-action

3. **Alternative CTAs:**
   - Primary button text
   - Secondary option
   - Urgency variant

Make the tone [SPECIFY TONE: professional/casual/friendly/urgent] and keep it under 200 words for the body.".to_string(),
        },
        Prompt {
            id: "3".to_string(),
            title: "Code Review Assistant".to_string(),
            description: "Get detailed code reviews with suggestions for improvements, security issues, and best practices.".to_string(),
            category: "Development & Programming".to_string(),
            author: "Alex Kumar".to_string(),
            downloads: 3156,
            date_created: date(2024, 1, 8),
            prompt: r"Please review the following code and provide a comprehensive analysis:

**Programming Language:** [SPECIFY LANGUAGE]
**Code Purpose:** [BRIEF DESCRIPTION]

Code to review:
```
[PASTE YOUR CODE HERE]
```

Please provide feedback on:

1. **Code Quality:**
   - Readability and structure
   - Naming conventions
   - Code organization

2. **Performance:**
   - Potential bottlenecks
   - Optimization opportunities
   - Memory usage concerns

3. **Security:**
   - Potential vulnerabilities
   - Input validation issues
   - Security best practices

4. **Best Practices:**
   - Language-specific conventions
   - Design patterns used/missed
   - Maintainability suggestions

5. **Specific Improvements:**
   - Line-by-line suggestions where helpful".to_string(),
        },
        Prompt {
            id: "4".to_string(),
            title: "Blog Post Outline Creator".to_string(),
            description: "Generate comprehensive blog post outlines with SEO-optimized headings and content suggestions.".to_string(),
            category: "Creative Writing".to_string(),
            author: "Emma Thompson".to_string(),
            downloads: 2341,
            date_created: date(2024, 1, 12),
            prompt: r"Create a comprehensive blog post outline for the following topic:

**Topic:** [YOUR BLOG TOPIC]
**Target Audience:** [WHO IS YOUR AUDIENCE]
**Desired Word Count:** [APPROXIMATE LENGTH]
**SEO Keywords:** [LIST 3-5 KEYWORDS TO INCLUDE]

Please provide:

1. **SEO-Optimized Title Options (3 variations)**
2. **Meta Description (150-160 characters)**
3. **Introduction Hook Ideas**
4. **Main Section Structure:**
   - H2 headings with brief descriptions
   - H3 subheadings where appropriate
   - Key points to cover in each section

5. **Content Enhancement Suggestions:**
   - Where to include statistics/data
   - Potential case studies or examples
   - Images or media recommendations

6. **Call-to-Action Ideas**
7. **Internal/External Linking Opportunities**

Make sure the outline follows SEO best practices and provides clear value to readers.".to_string(),
        },
        Prompt {
            id: "5".to_string(),
            title: "Data Analysis Report Generator".to_string(),
            description: "Transform raw data into insightful reports with key findings, trends, and actionable recommendations.".to_string(),
            category: "Data Analysis".to_string(),
            author: "Dr. Michael Foster".to_string(),
            downloads: 1687,
            date_created: date(2024, 1, 5),
            prompt: r"Analyze the following data and create a comprehensive report:

**Data Context:** [DESCRIBE WHAT THE DATA REPRESENTS]
**Analysis Goal:** [WHAT QUESTIONS SHOULD THE ANALYSIS ANSWER]

Data:
[PASTE YOUR DATA HERE]

Please provide:

1. **Executive Summary** — key findings in 2-3 sentences
2. **Notable Trends** — patterns, outliers, and anomalies
3. **Segment Breakdown** — how the findings differ across groups
4. **Actionable Recommendations** — prioritized next steps
5. **Caveats** — data quality issues or limits of the analysis

Present numbers with appropriate precision and call out any figure that needs more context to interpret safely.".to_string(),
        },
        Prompt {
            id: "6".to_string(),
            title: "Learning Path Creator".to_string(),
            description: "Design personalized learning curricula with resources, milestones, and skill assessments.".to_string(),
            category: "Education".to_string(),
            author: "Prof. Lisa Wang".to_string(),
            downloads: 2093,
            date_created: date(2024, 1, 14),
            prompt: r"Create a comprehensive learning path for the following:

**Subject/Skill:** [WHAT DO YOU WANT TO LEARN]
**Current Level:** [BEGINNER/INTERMEDIATE/ADVANCED]
**Time Available:** [HOURS PER WEEK]
**Learning Goal:** [WHAT YOU WANT TO ACHIEVE]

Please provide:

1. **Milestone Plan** — phases with clear completion criteria
2. **Weekly Breakdown** — topics and exercises per week
3. **Resource List** — books, courses, and practice platforms
4. **Skill Checks** — how to self-assess at each milestone
5. **Common Pitfalls** — where learners typically stall and how to avoid it

Adjust the pacing to the stated time budget and keep early wins frequent.".to_string(),
        },
        Prompt {
            id: "7".to_string(),
            title: "UX Research Summary".to_string(),
            description: "Convert user research data into actionable design insights with clear recommendations and next steps.".to_string(),
            category: "Design & UX".to_string(),
            author: "Jordan Kim".to_string(),
            downloads: 1456,
            date_created: date(2024, 1, 6),
            prompt: r"Analyze the following UX research data and create actionable insights:

**Research Method:** [INTERVIEWS/SURVEYS/USABILITY TESTS/ANALYTICS]
**Product Area:** [WHAT WAS STUDIED]

Research Data:
[PASTE FINDINGS, QUOTES, OR METRICS HERE]

Please provide:

1. **Key Insights** — the 3-5 findings that matter most
2. **User Pain Points** — ranked by severity and frequency
3. **Design Recommendations** — concrete changes tied to each insight
4. **Open Questions** — what needs further research
5. **Suggested Next Steps** — for the design and product team

Quote supporting evidence for each insight where the data allows.".to_string(),
        },
        Prompt {
            id: "8".to_string(),
            title: "Social Media Content Planner".to_string(),
            description: "Generate a month's worth of engaging social media content with optimal posting schedules.".to_string(),
            category: "Marketing & Sales".to_string(),
            author: "Taylor Swift".to_string(),
            downloads: 3421,
            date_created: date(2024, 1, 20),
            prompt: r"Create a comprehensive social media content plan:

**Brand/Business:** [DESCRIBE YOUR BRAND]
**Platforms:** [WHICH PLATFORMS]
**Target Audience:** [WHO ARE YOU REACHING]
**Monthly Goal:** [AWARENESS/ENGAGEMENT/CONVERSIONS]

Please provide:

1. **Content Pillars** — 3-4 recurring themes with rationale
2. **Four-Week Calendar** — post ideas per week per platform
3. **Posting Schedule** — best days and times per platform
4. **Caption Templates** — reusable openings and CTAs
5. **Hashtag Sets** — grouped by theme
6. **Engagement Tactics** — prompts, polls, and reply strategies

Keep the mix varied: educational, entertaining, and promotional in roughly a 3:2:1 ratio.".to_string(),
        },
        Prompt {
            id: "9".to_string(),
            title: "Smart Text Summarizer".to_string(),
            description: "Extract facts from any text and create structured bulletpoint summaries with relevant emoji indicators.".to_string(),
            category: "Data Analysis".to_string(),
            author: "David Park".to_string(),
            downloads: 1867,
            date_created: date(2024, 1, 18),
            prompt: r"Extract all facts from the text and summarize it in all relevant aspects in up to seven bulletpoints and a 1-liner summary. Pick a good matching emoji for every bullet point.

Text: {selection}

Summary:".to_string(),
        },
    ]
}
