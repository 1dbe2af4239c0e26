//! Pattern libraries for keyword extraction and scoring
//!
//! All lists are data, not control flow: the extractor iterates the pattern
//! table uniformly, so adding an industry vertical is a new table row. Every
//! set is built once at engine construction and never mutated afterwards.

use regex::Regex;
use std::collections::HashSet;

/// Compile a built-in pattern. All patterns here are static literals, so a
/// compile failure is a programming error.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in pattern")
}

/// Domain-specific keyword families, run in order over lower-cased text.
/// Category names are for diagnostics only.
pub(crate) fn keyword_pattern_table() -> Vec<(&'static str, Regex)> {
    let families: Vec<(&'static str, &'static str)> = vec![
        // Symbol-edged names (c++, c#, .net) sit outside the shared \b
        // anchors: \b next to +, # or . needs an adjacent word character
        // that prose never supplies.
        (
            "languages",
            r"(?:\b(?:python|java|javascript|typescript|golang|rust|ruby|scala|kotlin|swift|perl|cobol|fortran|matlab|objective-c|php|r programming)\b|\bc\+\+|\bc#)",
        ),
        (
            "databases",
            r"\b(?:sql|mysql|postgresql|postgres|mongodb|redis|elasticsearch|cassandra|dynamodb|oracle|sqlite|mariadb|snowflake|databricks)\b",
        ),
        (
            "frameworks",
            r"(?:\b(?:react|angular|vue|svelte|next\.?js|node\.?js|express|django|flask|fastapi|spring boot|rails|laravel|asp\.net|jquery|bootstrap|tailwind|graphql|rest apis?)\b|\.net\b)",
        ),
        (
            "cloud_devops",
            r"\b(?:aws|amazon web services|azure|gcp|google cloud|docker|kubernetes|terraform|ansible|jenkins|circleci|github actions|gitlab|ci/cd|devops|microservices|serverless|cloudformation|linux|bash|git)\b",
        ),
        (
            "data_ml",
            r"\b(?:machine learning|deep learning|data science|data analysis|data engineering|artificial intelligence|nlp|natural language processing|computer vision|etl|data warehouse|data warehousing|big data|data visualization|spark|hadoop|kafka|airflow|dbt|tableau|power bi|looker|pandas|numpy|scikit-learn|tensorflow|pytorch|keras)\b",
        ),
        (
            "healthcare_pharma",
            r"\b(?:clinical trials?|clinical research|clinical data management|regulatory affairs|regulatory submissions?|regulatory strategy|pharmacovigilance|drug safety|drug development|medical devices?|medical writing|biostatistics|good clinical practice|good manufacturing practice|quality systems?|process validation|hipaa|fda|ema|ich guidelines|gxp|gmp|glp|cmc|ctd|ectd|patient care|electronic health records?|ehr|epic|cerner)\b",
        ),
        (
            "finance_accounting",
            r"\b(?:financial analysis|financial modeling|financial reporting|financial planning|accounting|bookkeeping|accounts payable|accounts receivable|general ledger|reconciliations?|forecasting|budgeting|variance analysis|auditing|internal audit|internal controls|gaap|ifrs|sox compliance|sox|treasury|tax preparation|quickbooks|netsuite|hyperion|risk management|portfolio management|equity research|valuation|due diligence)\b",
        ),
        (
            "legal_compliance",
            r"\b(?:legal research|contract management|contract negotiation|contract drafting|litigation|paralegal|intellectual property|corporate governance|regulatory compliance|compliance programs?|anti-money laundering|aml|kyc|gdpr|ccpa|data privacy|e-discovery|legal writing)\b",
        ),
        (
            "marketing_sales",
            r"\b(?:digital marketing|content marketing|email marketing|social media marketing|marketing automation|marketing strategy|brand management|product marketing|growth marketing|demand generation|lead generation|seo|sem|ppc|paid media|google analytics|google ads|facebook ads|salesforce|hubspot|marketo|crm|account management|business development|sales operations|pipeline management|market research|copywriting|a/b testing)\b",
        ),
        (
            "hr_operations",
            r"\b(?:talent acquisition|recruiting|recruitment|onboarding|employee relations|employee engagement|performance management|compensation and benefits|payroll|hris|workday|successfactors|organizational development|workforce planning|supply chain management|supply chain|procurement|sourcing|inventory management|demand planning|logistics management|vendor management|operations management|process improvement|six sigma|lean manufacturing|kaizen|erp|sap)\b",
        ),
        (
            "engineering_manufacturing",
            r"\b(?:autocad|solidworks|cad|catia|revit|plc programming|plc|scada|cnc|gd&t|quality assurance|quality control|root cause analysis|failure analysis|preventive maintenance|hvac|manufacturing processes|injection molding|welding|instrumentation|process engineering|mechanical design|electrical design|circuit design|pcb design|embedded systems|firmware)\b",
        ),
        (
            "business",
            r"\b(?:project management|program management|product management|agile|scrum|kanban|waterfall|jira|confluence|asana|stakeholder management|business analysis|business intelligence|data-driven|kpis?|okrs?|strategic planning|change management|cross-functional collaboration|budget management|roadmap|user research|user experience|ux design|ui design|wireframing|figma|sketch)\b",
        ),
        (
            "interpersonal",
            r"\b(?:public speaking|conflict resolution|client relations|customer success|relationship building|team building|decision making|problem[- ]solving|critical thinking|time management|attention to detail)\b",
        ),
    ];

    families
        .into_iter()
        .map(|(category, pattern)| (category, compile(pattern)))
        .collect()
}

/// Short tokens (<4 chars) allowed through the length filter.
pub(crate) fn short_acronym_whitelist() -> HashSet<&'static str> {
    [
        "sql", "aws", "gcp", "etl", "api", "ml", "ai", "nlp", "rag", "ci", "cd", "css", "php",
        "c++", "c#", "seo", "sem", "ppc", "crm", "erp", "sap", "rpa", "fda", "ema", "ich", "gxp",
        "gmp", "glp", "cmc", "ctd", "pma", "nda", "bla", "ind", "sop", "cad", "plc", "sox", "cpa",
        "cfa", "pmp", "kyc", "aml", "roi", "eoe", "tga", "mdr", "usd", "iso",
    ]
    .into_iter()
    .collect()
}

/// Generic filler and meta words. A keyword containing any of these as a word
/// is noise from sentence fragments, not a skill.
pub(crate) fn filler_words() -> HashSet<&'static str> {
    [
        "what",
        "how",
        "why",
        "when",
        "where",
        "who",
        "company",
        "team",
        "role",
        "position",
        "candidate",
        "candidates",
        "background",
        "qualification",
        "qualifications",
        "requirement",
        "requirements",
        "responsibility",
        "responsibilities",
        "bachelor",
        "bachelors",
        "master",
        "masters",
        "degree",
        "diploma",
        "experience",
        "years",
        "ability",
        "opportunity",
        "opportunities",
        "benefits",
        "salary",
        "equivalent",
        "preferred",
        "required",
        "minimum",
        "applicants",
        "employer",
    ]
    .into_iter()
    .collect()
}

/// Buzzwords and bare soft-skill nouns rejected verbatim. These never help a
/// resume pass screening and pollute prompt interpolation downstream.
pub(crate) fn generic_blacklist() -> HashSet<&'static str> {
    [
        "innovation",
        "innovative",
        "leadership",
        "communication",
        "communications",
        "teamwork",
        "collaboration",
        "excel",
        "word",
        "powerpoint",
        "outlook",
        "office",
        "logistics",
        "safety",
        "organization",
        "organizational",
        "motivated",
        "dynamic",
        "passionate",
        "detail-oriented",
        "self-starter",
        "fast-paced",
        "results-driven",
        "hardworking",
        "flexible",
        "reliable",
        "proactive",
        "interpersonal",
        "multitasking",
    ]
    .into_iter()
    .collect()
}

/// Job-title and seniority words. A keyword containing one of these is a role
/// name, not a competency, unless it is a whitelisted compound.
pub(crate) fn job_title_pattern() -> Regex {
    compile(
        r"\b(?:specialist|manager|director|supervisor|coordinator|administrator|assistant|associate|executive|officer|engineer|developer|analyst|architect|consultant|designer|scientist|intern|recruiter|representative|technician|president)\b",
    )
}

/// Compounds allowed through the job-title filter.
pub(crate) fn title_compound_whitelist() -> HashSet<&'static str> {
    [
        "project management",
        "product management",
        "program management",
        "account management",
    ]
    .into_iter()
    .collect()
}

/// Leading seniority qualifiers that mark a token as a role fragment.
pub(crate) fn seniority_prefix_pattern() -> Regex {
    compile(r"^(?:sr|jr|junior|senior|entry|lead|principal|staff|mid|chief)\b")
}

/// Leading articles and prepositions that mark a sentence fragment.
pub(crate) fn article_prefix_pattern() -> Regex {
    compile(r"^(?:a|an|the|of|in|on|at|to|for|with|and|or|our|your)\b")
}

/// ALL-CAPS tokens that are ordinary words or company boilerplate, not
/// acronyms worth keeping.
pub(crate) fn acronym_stopwords() -> HashSet<&'static str> {
    [
        "and", "the", "for", "you", "our", "are", "all", "new", "not", "can", "who", "will",
        "must", "have", "this", "that", "from", "with", "what", "job", "work", "team", "role",
        "llc", "inc", "pto",
    ]
    .into_iter()
    .collect()
}

/// Years-of-experience requirement fragments ("5+ years", "3-5 yrs").
pub(crate) fn years_of_experience_pattern() -> Regex {
    compile(r"(?i)\d+\s*(?:\+|-\s*\d+)?\s*(?:years?|yrs?)\b")
}

/// Degree requirement fragments inside requirement items.
pub(crate) fn degree_requirement_pattern() -> Regex {
    compile(
        r"(?i)\b(?:bachelor(?:'s)?|master(?:'s)?|phd|ph\.d|doctorate|mba|b\.?s\.?|m\.?s\.?|b\.?a\.?|degree|diploma)\b",
    )
}

/// Headings that open a requirements/qualifications section.
pub(crate) fn requirements_heading_pattern() -> Regex {
    compile(
        r"(?i)(?:requirements|qualifications|must[- ]haves?|what you(?:'|’)ll need|what you will need|what we(?:'|’)re looking for|who you are|required skills|minimum qualifications|preferred qualifications)\s*:?",
    )
}

/// Headings that terminate a requirements section.
pub(crate) fn section_terminator_pattern() -> Regex {
    compile(
        r"(?i)(?:benefits|perks|what we offer|we offer|compensation|salary|about us|about the company|responsibilities|how to apply|equal opportunity)\s*:?",
    )
}

/// Bullet or numbered-list markers splitting requirement items.
pub(crate) fn bullet_split_pattern() -> Regex {
    compile(r"(?:\n|\s)\s*(?:[-•*▪◦‣]|\d+[.)])\s+")
}

/// Strong action verbs opening a high-quality experience bullet.
pub(crate) fn strong_action_verbs() -> HashSet<&'static str> {
    [
        "accelerated",
        "achieved",
        "architected",
        "automated",
        "built",
        "championed",
        "created",
        "decreased",
        "delivered",
        "designed",
        "developed",
        "directed",
        "drove",
        "engineered",
        "established",
        "exceeded",
        "executed",
        "expanded",
        "generated",
        "grew",
        "implemented",
        "improved",
        "increased",
        "initiated",
        "launched",
        "led",
        "managed",
        "mentored",
        "modernized",
        "negotiated",
        "optimized",
        "orchestrated",
        "overhauled",
        "owned",
        "pioneered",
        "produced",
        "redesigned",
        "reduced",
        "resolved",
        "scaled",
        "secured",
        "shipped",
        "spearheaded",
        "streamlined",
        "strengthened",
        "transformed",
    ]
    .into_iter()
    .collect()
}

/// Weak verbs that signal passive, low-impact bullets.
pub(crate) fn weak_verbs() -> HashSet<&'static str> {
    [
        "assisted",
        "helped",
        "worked",
        "was",
        "had",
        "got",
        "did",
        "made",
        "used",
        "tried",
        "participated",
        "involved",
        "responsible",
    ]
    .into_iter()
    .collect()
}

/// Quantifiable-metric patterns. A bullet matching any of these carries a
/// measurable outcome.
pub(crate) fn metric_patterns() -> Vec<Regex> {
    [
        r"\d+(?:\.\d+)?%",
        r"\$\s?\d[\d,]*(?:\.\d+)?\s*(?:k|m|b|million|billion)?",
        r"\b\d+(?:\.\d+)?x\b",
        r"\b\d[\d,]*\+?\s*(?:users|customers|clients|employees|people|members|subscribers)\b",
        r"\b\d[\d,]*\+?\s*(?:requests|transactions|queries|events|records|rows)\b",
        r"\b\d[\d,]*\+?\s*(?:hours|days|weeks|months|minutes)\b",
        r"\b\d[\d,]*\+?\s*(?:projects|products|campaigns|launches|releases)\b",
        r"\b(?:top|#)\s?\d+\b",
        r"\b\d[\d,]*\s*(?:k|m|b|million|billion|thousand)\b",
        r"\bby\s+\d[\d,]*(?:\.\d+)?\b",
        r"\b\d+(?:\.\d+)?\s*(?:percent|points|bps|per\s+(?:day|week|month|year))\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
}

/// Generic terms rejected from suggested competencies. Overlaps with but is
/// distinct from the extractor's blacklist.
pub(crate) fn competency_blacklist() -> HashSet<&'static str> {
    [
        "experience",
        "experienced",
        "work",
        "working",
        "strong",
        "excellent",
        "good",
        "solid",
        "proven",
        "knowledge",
        "understanding",
        "familiarity",
        "proficiency",
        "proficient",
        "skill",
        "skills",
        "ability",
        "abilities",
        "team",
        "environment",
        "company",
        "role",
        "position",
        "candidate",
        "plus",
        "years",
        "background",
        "degree",
        "leadership",
        "communication",
        "teamwork",
        "excel",
        "word",
        "powerpoint",
    ]
    .into_iter()
    .collect()
}

/// Acronyms rendered upper-case when competencies are capitalized for display.
pub(crate) fn display_acronyms() -> HashSet<&'static str> {
    let mut set = short_acronym_whitelist();
    set.extend(["html", "json", "xml", "ci/cd", "ehr", "gaap", "ifrs", "gdpr", "ccpa", "hipaa"]);
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_table_compiles_and_matches_basics() {
        let table = keyword_pattern_table();
        assert!(table.len() >= 12);
        let text = "experience with python, aws and machine learning";
        let hits: Vec<&str> = table
            .iter()
            .flat_map(|(_, re)| re.find_iter(text).map(|m| m.as_str()))
            .collect();
        assert!(hits.contains(&"python"));
        assert!(hits.contains(&"aws"));
        assert!(hits.contains(&"machine learning"));
    }

    #[test]
    fn test_symbol_edged_language_names_match_in_prose() {
        let table = keyword_pattern_table();
        let text = "strong c++ and c# skills, experience with .net and asp.net services";
        let hits: Vec<&str> = table
            .iter()
            .flat_map(|(_, re)| re.find_iter(text).map(|m| m.as_str()))
            .collect();
        for name in ["c++", "c#", ".net", "asp.net"] {
            assert!(hits.contains(&name), "missing {name} in {hits:?}");
        }
    }

    #[test]
    fn test_short_acronym_whitelist_contains_core_entries() {
        let whitelist = short_acronym_whitelist();
        for acronym in ["sql", "aws", "ml", "ai", "c++", "c#", "fda", "sox", "eoe", "iso"] {
            assert!(whitelist.contains(acronym), "missing {acronym}");
        }
    }

    #[test]
    fn test_years_pattern_matches_variants() {
        let re = years_of_experience_pattern();
        assert!(re.is_match("5+ years"));
        assert!(re.is_match("3-5 years"));
        assert!(re.is_match("10 yrs"));
        assert!(!re.is_match("python"));
    }

    #[test]
    fn test_bullet_split_separates_inline_items() {
        let re = bullet_split_pattern();
        let text = "Requirements: - 5+ years Python - Experience with AWS - Strong SQL skills";
        let items: Vec<&str> = re.split(text).collect();
        assert!(items.len() >= 3);
    }

    #[test]
    fn test_metric_patterns_cover_common_forms() {
        let patterns = metric_patterns();
        for sample in [
            "increased revenue 40%",
            "saved $2.5M annually",
            "3x throughput",
            "supported 500+ users",
            "processed 2,000 requests per second",
            "ranked top 5 nationally",
        ] {
            assert!(
                patterns.iter().any(|re| re.is_match(sample)),
                "no metric pattern matched: {sample}"
            );
        }
        assert!(!patterns.iter().any(|re| re.is_match("improved the process")));
    }

    #[test]
    fn test_job_title_pattern_word_boundaries() {
        let re = job_title_pattern();
        assert!(re.is_match("marketing manager"));
        // "management" is not "manager"
        assert!(!re.is_match("project management"));
    }
}
