//! Curated vocabulary tables. Bump `VOCABULARY_VERSION` whenever a table changes:
//! analyses carry the version they were produced with.

use crate::models::SkillCategory;
use crate::parsing::lines::SectionKind;

pub const VOCABULARY_VERSION: &str = "2025.3";

/// A skill with its canonical spelling followed by equivalent surface forms.
/// The forms double as the synonym table used for bullet rewording.
pub struct SkillRow {
    pub category: SkillCategory,
    pub forms: &'static [&'static str],
}

const fn row(category: SkillCategory, forms: &'static [&'static str]) -> SkillRow {
    SkillRow { category, forms }
}

use SkillCategory::{Cloud, Databases, Others, Programming, Tools};

pub const SKILLS: &[SkillRow] = &[
    // Programming
    row(Programming, &["Python"]),
    row(Programming, &["Java"]),
    row(Programming, &["JavaScript", "JS", "ECMAScript"]),
    row(Programming, &["TypeScript"]),
    row(Programming, &["C++", "CPP"]),
    row(Programming, &["C#", "CSharp", "C Sharp"]),
    row(Programming, &["C"]),
    row(Programming, &["Golang", "Go lang"]),
    row(Programming, &["Rust"]),
    row(Programming, &["Ruby"]),
    row(Programming, &["PHP"]),
    row(Programming, &["Swift"]),
    row(Programming, &["Kotlin"]),
    row(Programming, &["Scala"]),
    row(Programming, &["SQL"]),
    row(Programming, &["Perl"]),
    row(Programming, &["MATLAB"]),
    row(Programming, &["Bash", "Shell Scripting"]),
    row(Programming, &["HTML", "HTML5"]),
    row(Programming, &["CSS", "CSS3"]),
    row(Programming, &["Dart"]),
    row(Programming, &["Haskell"]),
    row(Programming, &["Elixir"]),
    row(Programming, &["Objective-C"]),
    // Tools, frameworks and libraries
    row(Tools, &["React", "ReactJS", "React.js"]),
    row(Tools, &["Angular", "AngularJS"]),
    row(Tools, &["Vue.js", "Vue", "VueJS"]),
    row(Tools, &["Next.js", "NextJS"]),
    row(Tools, &["Node.js", "NodeJS", "Node"]),
    row(Tools, &["Express.js", "ExpressJS"]),
    row(Tools, &["Django"]),
    row(Tools, &["Flask"]),
    row(Tools, &["FastAPI"]),
    row(Tools, &["Spring Boot"]),
    row(Tools, &[".NET", "dotnet"]),
    row(Tools, &["Git"]),
    row(Tools, &["GitHub Actions"]),
    row(Tools, &["GitLab CI"]),
    row(Tools, &["Jenkins"]),
    row(Tools, &["Docker"]),
    row(Tools, &["Kubernetes", "K8s"]),
    row(Tools, &["Terraform"]),
    row(Tools, &["Ansible"]),
    row(Tools, &["Jira"]),
    row(Tools, &["Confluence"]),
    row(Tools, &["Figma"]),
    row(Tools, &["Postman"]),
    row(Tools, &["Webpack"]),
    row(Tools, &["Tailwind CSS", "Tailwind", "TailwindCSS"]),
    row(Tools, &["Redux"]),
    row(Tools, &["GraphQL"]),
    row(Tools, &["Pandas"]),
    row(Tools, &["NumPy"]),
    row(Tools, &["scikit-learn", "sklearn"]),
    row(Tools, &["TensorFlow"]),
    row(Tools, &["PyTorch"]),
    row(Tools, &["Keras"]),
    row(Tools, &["Apache Spark", "Spark", "PySpark"]),
    row(Tools, &["Hadoop"]),
    row(Tools, &["Apache Kafka", "Kafka"]),
    row(Tools, &["Apache Airflow", "Airflow"]),
    row(Tools, &["Tableau"]),
    row(Tools, &["Power BI", "PowerBI"]),
    row(Tools, &["Excel", "Microsoft Excel", "MS Excel"]),
    row(Tools, &["Linux"]),
    row(Tools, &["CI/CD", "CICD"]),
    row(Tools, &["Selenium"]),
    row(Tools, &["Jest"]),
    row(Tools, &["Grafana"]),
    row(Tools, &["Prometheus"]),
    // Databases
    row(Databases, &["PostgreSQL", "Postgres", "Postgre SQL", "psql"]),
    row(Databases, &["MySQL"]),
    row(Databases, &["SQLite"]),
    row(Databases, &["MongoDB", "Mongo"]),
    row(Databases, &["Redis"]),
    row(Databases, &["Oracle", "Oracle DB", "Oracle Database"]),
    row(Databases, &["SQL Server", "MS SQL", "MSSQL", "Microsoft SQL Server"]),
    row(Databases, &["Cassandra"]),
    row(Databases, &["DynamoDB"]),
    row(Databases, &["Elasticsearch", "Elastic Search"]),
    row(Databases, &["Firebase", "Firestore"]),
    row(Databases, &["Snowflake"]),
    row(Databases, &["BigQuery"]),
    row(Databases, &["Neo4j"]),
    row(Databases, &["MariaDB"]),
    row(Databases, &["Supabase"]),
    // Cloud
    row(Cloud, &["AWS", "Amazon Web Services"]),
    row(Cloud, &["Azure", "Microsoft Azure"]),
    row(Cloud, &["GCP", "Google Cloud Platform", "Google Cloud"]),
    row(Cloud, &["Heroku"]),
    row(Cloud, &["Vercel"]),
    row(Cloud, &["Netlify"]),
    row(Cloud, &["DigitalOcean", "Digital Ocean"]),
    row(Cloud, &["Cloudflare"]),
    row(Cloud, &["AWS Lambda", "Lambda"]),
    row(Cloud, &["EC2", "Amazon EC2"]),
    row(Cloud, &["S3", "Amazon S3"]),
    row(Cloud, &["OpenShift"]),
    row(Cloud, &["Serverless"]),
    // Others
    row(Others, &["Machine Learning", "ML"]),
    row(Others, &["Deep Learning"]),
    row(Others, &["NLP", "Natural Language Processing"]),
    row(Others, &["Computer Vision"]),
    row(Others, &["Data Analysis", "Data Analytics"]),
    row(Others, &["Data Visualization"]),
    row(Others, &["Statistics"]),
    row(Others, &["Agile"]),
    row(Others, &["Scrum"]),
    row(Others, &["REST APIs", "REST API", "RESTful APIs", "RESTful"]),
    row(Others, &["Microservices"]),
    row(Others, &["System Design"]),
    row(Others, &["Distributed Systems"]),
    row(Others, &["DevOps"]),
    row(Others, &["Unit Testing"]),
    row(Others, &["TDD", "Test-Driven Development"]),
    row(Others, &["OOP", "Object-Oriented Programming"]),
    row(Others, &["Data Structures"]),
    row(Others, &["Algorithms"]),
    row(Others, &["ETL"]),
    row(Others, &["A/B Testing"]),
];

/// Skill forms that are also everyday words (`node`, `excel`, `spark`). They
/// only name the skill when written with exactly this casing.
pub const CASE_SENSITIVE_FORMS: &[&str] = &[
    "C", "Java", "Rust", "Ruby", "Swift", "Dart", "Elixir", "Bash", "Vue", "Node", "Flask",
    "Jest", "Pandas", "Spark", "Airflow", "Tableau", "Excel", "Postman", "Confluence",
    "Mongo", "Oracle", "Snowflake", "Lambda", "ML",
];

/// Section header synonyms, in normalized form (upper-case, `&` spelled `AND`,
/// single spaces, no surrounding punctuation).
pub const SECTION_HEADERS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Summary,
        &[
            "SUMMARY",
            "PROFESSIONAL SUMMARY",
            "CAREER SUMMARY",
            "PROFILE",
            "PROFESSIONAL PROFILE",
            "ABOUT ME",
            "ABOUT",
            "OBJECTIVE",
            "CAREER OBJECTIVE",
        ],
    ),
    (
        SectionKind::Experience,
        &[
            "EXPERIENCE",
            "WORK EXPERIENCE",
            "PROFESSIONAL EXPERIENCE",
            "RELEVANT EXPERIENCE",
            "EMPLOYMENT HISTORY",
            "EMPLOYMENT",
            "WORK HISTORY",
            "INTERNSHIPS",
            "INTERNSHIP EXPERIENCE",
        ],
    ),
    (
        SectionKind::Education,
        &[
            "EDUCATION",
            "ACADEMIC BACKGROUND",
            "ACADEMICS",
            "EDUCATIONAL QUALIFICATIONS",
            "EDUCATION AND TRAINING",
        ],
    ),
    (
        SectionKind::Skills,
        &[
            "SKILLS",
            "TECHNICAL SKILLS",
            "KEY SKILLS",
            "CORE COMPETENCIES",
            "SKILLS AND TOOLS",
            "TECHNOLOGIES",
            "TECH STACK",
        ],
    ),
    (
        SectionKind::Projects,
        &[
            "PROJECTS",
            "PERSONAL PROJECTS",
            "ACADEMIC PROJECTS",
            "KEY PROJECTS",
            "PROJECT EXPERIENCE",
        ],
    ),
    (
        SectionKind::Achievements,
        &[
            "ACHIEVEMENTS",
            "ACCOMPLISHMENTS",
            "AWARDS",
            "HONORS",
            "AWARDS AND ACHIEVEMENTS",
            "HONORS AND AWARDS",
            "AWARDS AND HONORS",
        ],
    ),
    (
        SectionKind::Certifications,
        &[
            "CERTIFICATIONS",
            "CERTIFICATES",
            "LICENSES AND CERTIFICATIONS",
            "COURSES AND CERTIFICATIONS",
            "CERTIFICATIONS AND LICENSES",
        ],
    ),
    (
        SectionKind::Ignored,
        &[
            "INTERESTS",
            "HOBBIES",
            "HOBBIES AND INTERESTS",
            "REFERENCES",
            "VOLUNTEER",
            "VOLUNTEERING",
            "VOLUNTEER EXPERIENCE",
            "PUBLICATIONS",
            "LANGUAGES",
            "EXTRACURRICULAR ACTIVITIES",
            "ACTIVITIES",
            "LEADERSHIP",
            "RELEVANT COURSEWORK",
            "COURSEWORK",
        ],
    ),
];

/// Explicit skill-line labels (lower-case, `&` spelled `and`).
pub const SKILL_LABELS: &[(SkillCategory, &[&str])] = &[
    (
        Programming,
        &[
            "programming",
            "programming languages",
            "languages",
            "language",
            "coding",
        ],
    ),
    (
        Tools,
        &[
            "tools",
            "frameworks",
            "libraries",
            "frameworks and libraries",
            "libraries and frameworks",
            "tools and technologies",
            "tools and frameworks",
            "frameworks and tools",
            "developer tools",
            "technologies",
            "web technologies",
        ],
    ),
    (Databases, &["databases", "database", "db", "data stores"]),
    (
        Cloud,
        &[
            "cloud",
            "cloud platforms",
            "cloud and devops",
            "devops",
            "cloud technologies",
            "platforms",
        ],
    ),
    (
        Others,
        &[
            "others",
            "other",
            "miscellaneous",
            "misc",
            "soft skills",
            "concepts",
            "methodologies",
        ],
    ),
];

/// Nouns that mark a phrase as a job title.
pub const ROLE_NOUNS: &[&str] = &[
    "developer",
    "engineer",
    "analyst",
    "manager",
    "scientist",
    "designer",
    "architect",
    "administrator",
    "consultant",
    "specialist",
    "programmer",
    "intern",
    "lead",
    "director",
    "coordinator",
    "associate",
    "technician",
    "researcher",
    "tester",
    "strategist",
    "officer",
];

/// Phrases that introduce a job title, longest first.
pub const TITLE_LEAD_INS: &[&str] = &[
    "job title",
    "looking for",
    "seeking",
    "hiring",
    "position",
    "title",
    "role",
];

/// Phrases after which the JD lists what it requires.
pub const REQUIREMENT_SIGNALS: &[&str] = &[
    "must have",
    "must-have",
    "experience with",
    "experience in",
    "proficiency in",
    "proficient in",
    "knowledge of",
    "familiarity with",
    "expertise in",
    "requirements",
    "qualifications",
    "required",
    "requires",
    "require",
];

/// Words never promoted into the requirements bucket.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "across", "all", "an", "and", "any", "are", "as", "at", "be", "both", "but",
    "by", "can", "do", "etc", "for", "from", "has", "have", "in", "including", "into", "is",
    "it", "its", "like", "more", "must", "new", "not", "of", "on", "or", "our", "per", "plus",
    "should", "such", "that", "the", "their", "these", "this", "to", "us", "we", "who", "will",
    "with", "within", "you", "your", "ability", "able", "experience", "experienced", "years",
    "year", "strong", "good", "great", "excellent", "solid", "knowledge", "skills", "skill",
    "work", "working", "using", "use", "team", "other", "related", "relevant", "least",
    "minimum", "preferred", "required", "require", "requires", "requirements", "proficiency",
    "proficient", "familiarity", "expertise", "qualifications", "having", "nice", "ideal",
    "candidate", "role", "position", "job", "company", "also", "well",
];
