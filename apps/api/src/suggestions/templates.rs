// Canned suggestion text. Kept in one place so wording changes never touch
// rule logic.

// ── messages ────────────────────────────────────────────────────────────────

pub const SUMMARY_MESSAGE: &str =
    "Add a compelling professional summary that highlights your key achievements and career goals.";

pub const KEYWORDS_MESSAGE: &str =
    "Add industry-relevant keywords to improve ATS (Applicant Tracking System) compatibility.";

pub const KEYWORDS_IMPROVED: &str = "Consider adding keywords like: \"project management\", \"cross-functional collaboration\", \"data analysis\", \"process optimization\"";

pub const CONTENT_LENGTH_MESSAGE: &str = "Your resume appears to be quite brief. Consider adding more details about your achievements and responsibilities.";

pub const ACTION_VERBS_MESSAGE: &str = "Use strong action verbs like \"Led,\" \"Developed,\" \"Implemented,\" or \"Optimized\" to make your achievements more impactful.";

pub const SKILLS_MESSAGE: &str =
    "Consider adding more relevant technical skills and soft skills to showcase your expertise.";

pub const ACHIEVEMENTS_MESSAGE: &str = "Add specific numbers and metrics to quantify your achievements (e.g., \"increased sales by 25%\", \"managed team of 10\").";

pub const ACHIEVEMENTS_IMPROVED: &str = "Examples: \"Increased team productivity by 30%\", \"Reduced processing time by 2 hours daily\", \"Managed budget of $500K\"";

pub const EDUCATION_MESSAGE: &str = "Include your educational background, certifications, or relevant coursework to strengthen your profile.";

pub const ATS_MESSAGE: &str = "Use standard section headings like \"Work Experience\", \"Education\", \"Skills\" for better ATS parsing.";

pub const ATS_IMPROVED: &str =
    "Recommended headings: Professional Experience, Education, Technical Skills, Core Competencies";

pub fn experience_depth_message(position: &str) -> String {
    format!(
        "Expand the description for {position} to include specific achievements and quantifiable results."
    )
}

pub fn industry_message(industry: &str) -> String {
    format!("Add {industry} industry keywords to improve relevance for recruiters and ATS systems.")
}

// ── generated replacements ──────────────────────────────────────────────────

pub const GENERIC_SUMMARY: &str = "Motivated professional with strong analytical skills and a passion for continuous learning. Committed to delivering exceptional results and contributing to team success through dedication and innovative thinking.";

pub fn experienced_summary(years: &str, primary_skill: &str) -> String {
    format!(
        "Results-driven professional with {years} years of experience in {primary_skill} and related technologies. Proven track record of delivering high-quality solutions and driving business growth through innovative problem-solving and collaborative leadership."
    )
}

/// Replacement bullet lists for a thin experience description.
pub const EXPERIENCE_BULLETS: [&str; 3] = [
    "• Spearheaded development of key features that improved user engagement by 35%\n• Collaborated with cross-functional teams to deliver projects ahead of schedule\n• Implemented best practices that reduced development time by 25%",
    "• Led strategic initiatives that resulted in 40% increase in operational efficiency\n• Managed stakeholder relationships and facilitated communication across departments\n• Developed and executed plans that exceeded quarterly targets by 20%",
    "• Designed and implemented solutions that enhanced system performance by 50%\n• Mentored junior team members and established coding standards\n• Optimized workflows that saved 15 hours per week in manual processes",
];

/// Skill lists offered when fewer than five skills are present.
pub const SKILL_SETS: [&str; 4] = [
    "Project Management, Team Leadership, Problem Solving, Communication",
    "Data Analysis, Process Optimization, Strategic Planning, Client Relations",
    "JavaScript, Python, SQL, Cloud Computing, Agile Methodology",
    "Digital Marketing, Content Creation, Analytics, Social Media Management",
];

pub const SKILLS_IMPROVED_PREFIX: &str = "Consider adding: ";

pub const INDUSTRY_IMPROVED_PREFIX: &str = "Consider incorporating: ";

// ── section rewrites ────────────────────────────────────────────────────────

pub const REWRITTEN_SUMMARY: &str = "Results-driven professional with expertise in developing innovative solutions and leading high-performing teams. Proven ability to drive business growth through strategic thinking and technical excellence.";

pub const REWRITTEN_EXPERIENCE: &str = "• Spearheaded development of enterprise-level applications serving 100K+ users\n• Collaborated with stakeholders to define requirements and deliver solutions exceeding expectations\n• Mentored junior developers and established best practices that improved team productivity by 30%";
