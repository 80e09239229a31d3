/// Resume-keyword and technical-skill generation for a scraped posting.
/// Pure string rules, total over any input including empty strings.
const MAX_TERMS: usize = 5;

const BASE_KEYWORDS: [&str; 5] = [
    "Third Party Risk Management",
    "Vendor Risk Assessment",
    "Supplier Risk Analysis",
    "Risk Mitigation",
    "Compliance Management",
];

const BASE_SKILLS: [&str; 5] = [
    "GRC Tools (Archer, ServiceNow)",
    "Risk Assessment Frameworks",
    "SQL and Data Analysis",
    "Excel/Advanced Analytics",
    "Regulatory Compliance (SOX, GDPR)",
];

/// Role-related keywords for a job title. Title-specific terms come first so
/// they survive the cap at 5 entries.
pub fn generate_keywords(job_title: &str, _query: &str) -> Vec<String> {
    let title = job_title.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();

    if title.contains("senior") {
        keywords.push("Senior Risk Analyst".to_string());
        keywords.push("Risk Leadership".to_string());
    }
    if title.contains("analyst") {
        keywords.push("Risk Analysis".to_string());
        keywords.push("Data Analysis".to_string());
    }
    if title.contains("manager") {
        keywords.push("Risk Management".to_string());
        keywords.push("Team Leadership".to_string());
    }

    keywords.extend(BASE_KEYWORDS.iter().map(|k| k.to_string()));
    keywords.truncate(MAX_TERMS);
    keywords
}

/// Technical skills typically required for the role.
pub fn generate_technical_skills(job_title: &str, _query: &str) -> Vec<String> {
    let title = job_title.to_lowercase();
    let mut skills: Vec<String> = Vec::new();

    if title.contains("senior") {
        skills.push("Risk Modeling".to_string());
        skills.push("Quantitative Analysis".to_string());
    }
    if title.contains("analyst") {
        skills.push("Python/R".to_string());
        skills.push("Business Intelligence".to_string());
    }

    skills.extend(BASE_SKILLS.iter().map(|s| s.to_string()));
    skills.truncate(MAX_TERMS);
    skills
}
