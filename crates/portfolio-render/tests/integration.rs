//! End-to-end tests over the public API: a realistic resume record flowing
//! through loading, validation, resolution, and population.

use portfolio_render::{populate, resolve_tokens, PortfolioError, ResumeData, Token};

const EXAMPLE_RESUME: &str = r#"{
    "personalInfo": {
        "fullName": "John Doe",
        "firstName": "John",
        "email": "john.doe@example.com",
        "phone": "+1 (555) 123-4567",
        "location": "San Francisco, CA"
    },
    "socialLinks": {
        "linkedin": "https://linkedin.com/in/johndoe",
        "github": "https://github.com/johndoe",
        "twitter": "https://twitter.com/johndoe"
    },
    "professionalInfo": {
        "currentTitle": "Senior Full Stack Developer",
        "currentPosition": "Senior Full Stack Developer at Tech Corp",
        "summary": "Passionate full-stack developer with 5+ years of experience."
    },
    "about": { "description": "I enjoy tackling complex problems." },
    "stats": { "yearsExperience": "5", "projectCount": 25 },
    "skills": {
        "primary": ["JavaScript", "Python", "React", "Node.js"],
        "programmingLanguages": ["JavaScript", "Python", "Java", "TypeScript", "Go"],
        "frameworks": ["React", "Node.js", "Express", "Django", "Vue.js"],
        "databases": ["MySQL", "MongoDB", "PostgreSQL", "Redis"],
        "cloudDevops": ["AWS", "Docker", "Kubernetes", "Git", "Jenkins"]
    },
    "experience": [
        {
            "position": "Senior Full Stack Developer",
            "company": "Tech Corp",
            "startDate": "2022",
            "endDate": "Present",
            "description": "Led development of scalable web applications."
        },
        {
            "position": "Full Stack Developer",
            "company": "StartupXYZ",
            "startDate": "2020",
            "endDate": "2022",
            "description": "Developed and maintained client projects."
        }
    ],
    "education": [
        {
            "degree": "Bachelor of Science in Computer Science",
            "institution": "University of Technology",
            "year": "2020",
            "description": "Graduated Magna Cum Laude."
        }
    ],
    "projects": [
        {
            "name": "E-Commerce Platform",
            "description": "Full-featured e-commerce platform.",
            "technologies": ["React", "Node.js", "MongoDB", "Stripe"],
            "icon": "fas fa-shopping-cart",
            "liveUrl": "https://example-ecommerce.com",
            "githubUrl": "https://github.com/johndoe/ecommerce"
        },
        {
            "name": "Task Management App",
            "description": "Collaborative task management application.",
            "technologies": ["Vue.js", "Express", "Socket.io", "PostgreSQL"]
        }
    ],
    "typewriterTitles": ["Full Stack Developer", "Problem Solver", "Tech Enthusiast", "Team Leader"],
    "contact": { "message": "Feel free to reach out!" },
    "resumeUrl": "./assets/resume.pdf"
}"#;

#[test]
fn full_record_populates_a_page() {
    let data = ResumeData::from_json_str(EXAMPLE_RESUME).unwrap();
    data.validate().unwrap();

    let template = r#"<header>
    <h1>{{FULL_NAME}}</h1>
    <p>{{JOB_TITLE}} / {{LOCATION}}</p>
    <a href="{{GITHUB_URL}}">GitHub</a>
    <a href="{{RESUME_DOWNLOAD_LINK}}">Resume</a>
</header>
<section id="skills">{{PROGRAMMING_LANGUAGES}}</section>
<section id="experience">{{WORK_EXPERIENCE}}</section>
<section id="projects">{{PROJECTS_LIST}}</section>
<footer>{{CONTACT_MESSAGE}}</footer>"#;

    let out = populate(template, &data);

    assert!(out.html.contains("<h1>John Doe</h1>"));
    assert!(out.html.contains("Senior Full Stack Developer / San Francisco, CA"));
    assert!(out.html.contains(r#"href="https://github.com/johndoe""#));
    assert!(out.html.contains(r#"href="./assets/resume.pdf""#));
    assert!(out.html.contains("fab fa-python"));
    assert!(out.html.contains("Tech Corp"));
    assert!(out.html.contains("2022 - Present"));
    assert!(out.html.contains("E-Commerce Platform"));
    assert!(out.html.contains("Feel free to reach out!"));
    assert!(!out.html.contains("{{"));
}

#[test]
fn fourth_typewriter_title_is_ignored() {
    let data = ResumeData::from_json_str(EXAMPLE_RESUME).unwrap();
    let table = resolve_tokens(&data);
    assert_eq!(table.get(Token::SecondaryTitle1), "Full Stack Developer");
    assert_eq!(table.get(Token::SecondaryTitle3), "Tech Enthusiast");
    let out = populate("{{SECONDARY_TITLE_1}}|{{SECONDARY_TITLE_2}}|{{SECONDARY_TITLE_3}}", &data);
    assert!(!out.html.contains("Team Leader"));
}

#[test]
fn skill_count_counts_every_category() {
    let data = ResumeData::from_json_str(EXAMPLE_RESUME).unwrap();
    // 4 primary + 5 languages + 5 frameworks + 4 databases + 5 cloud
    assert_eq!(resolve_tokens(&data).get(Token::SkillCount), "23");
}

#[test]
fn project_without_urls_has_no_links() {
    let data = ResumeData::from_json_str(EXAMPLE_RESUME).unwrap();
    let html = resolve_tokens(&data).get(Token::ProjectsList).to_string();

    // First project carries both links, second carries none; so exactly one
    // of each link kind across the whole fragment.
    assert_eq!(html.matches("Live Demo").count(), 1);
    assert_eq!(html.matches("Source Code").count(), 1);
}

#[test]
fn validation_failure_names_missing_sections() {
    let data = ResumeData::from_json_str(r#"{ "skills": { "primary": ["Rust"] } }"#).unwrap();
    match data.validate() {
        Err(PortfolioError::MissingFields(fields)) => {
            assert_eq!(fields, vec!["personalInfo", "professionalInfo"]);
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[test]
fn yaml_and_json_load_identically() {
    let yaml = r#"
personalInfo:
  firstName: Ana
  email: a@x.com
professionalInfo:
  currentTitle: Systems Engineer
"#;
    let json = r#"{
        "personalInfo": { "firstName": "Ana", "email": "a@x.com" },
        "professionalInfo": { "currentTitle": "Systems Engineer" }
    }"#;
    assert_eq!(
        ResumeData::from_yaml_str(yaml).unwrap(),
        ResumeData::from_json_str(json).unwrap()
    );
}

#[test]
fn hostile_record_is_neutralized() {
    let data = ResumeData::from_json_str(
        r#"{
            "personalInfo": { "fullName": "<img src=x onerror=alert(1)>" },
            "professionalInfo": {},
            "socialLinks": { "github": "javascript:alert(1)" }
        }"#,
    )
    .unwrap();

    let out = populate(r#"<h1>{{FULL_NAME}}</h1><a href="{{GITHUB_URL}}">gh</a>"#, &data);
    assert!(!out.html.contains("<img"));
    assert!(!out.html.contains("javascript:"));
    assert!(out.html.contains("&lt;img"));
    assert!(out.html.contains(r##"href="#""##));
}
