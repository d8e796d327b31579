//! Tier-dependent recommendation sets

const NEEDS_WORK_BELOW: u8 = 60;
const GOOD_BELOW: u8 = 80;

const NEEDS_WORK: [&str; 3] = [
    "Focus on adding more relevant keywords from the job description",
    "Ensure all sections are complete with detailed information",
    "Use standard section headers and a simple, single-column layout",
];

const GOOD: [&str; 3] = [
    "Add more quantifiable achievements to your experience section",
    "Include more industry-specific keywords and skills",
    "Start each bullet point with a strong action verb",
];

const STRONG: [&str; 3] = [
    "Your resume is well optimized for ATS systems",
    "Tailor keywords to each specific job application",
    "Keep your resume updated with recent achievements",
];

/// Pick the recommendation set for an overall score.
pub fn for_score(overall: u8) -> Vec<String> {
    let set = if overall < NEEDS_WORK_BELOW {
        &NEEDS_WORK
    } else if overall < GOOD_BELOW {
        &GOOD
    } else {
        &STRONG
    };
    set.iter().map(|s| s.to_string()).collect()
}
