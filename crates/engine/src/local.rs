use crate::briefing::{Briefing, FileNote};
use repobrief_context::BriefingContext;

const MAX_CORE_FILES: usize = 5;
const MAX_SAFE_AREAS: usize = 5;
const MAX_DANGEROUS_KEYWORD_HITS: usize = 4;

/// Derive a briefing from the assembled context using rules only.
///
/// Total and pure: every field is always populated (empty lists allowed)
/// and identical contexts produce byte-identical briefings. No file or
/// network I/O happens here — the context already carries everything.
pub fn infer(context: &BriefingContext) -> Briefing {
    Briefing {
        purpose: guess_purpose(context),
        how_to_run: guess_run_command(context),
        core_files: identify_core_files(context),
        safe_areas: identify_safe_areas(context),
        dangerous_files: identify_dangerous_files(context),
        data_flow: guess_data_flow(context),
        start_steps: generate_start_steps(context),
    }
}

/// First rule whose keyword occurs in the haystack wins.
fn first_match(haystack: &str, rules: &[(&'static str, &'static str)]) -> Option<&'static str> {
    rules
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, result)| *result)
}

/// Framework names looked for in the dependency excerpt, most specific
/// first ("next" must precede "react" so Next.js apps are not reported
/// as plain React).
const PURPOSE_DEPENDENCY_RULES: &[(&str, &str)] = &[
    ("express", "REST API server (Express detected)"),
    ("next", "Web application (Next.js detected)"),
    ("react", "Frontend application (React detected)"),
    ("vue", "Frontend application (Vue detected)"),
    ("flask", "Web service (Flask detected)"),
    ("django", "Web application (Django detected)"),
    ("fastapi", "API service (FastAPI detected)"),
];

const PURPOSE_TYPE_RULES: &[(&str, &str)] = &[
    ("next.js", "Web application"),
    ("flask", "Web service"),
    ("django", "Web application"),
    ("research", "Jupyter notebooks and Python scripts"),
    ("analysis", "Jupyter notebooks and Python scripts"),
    ("rust", "Rust application"),
    ("node", "Node.js application"),
    ("python", "Python application"),
];

fn guess_purpose(context: &BriefingContext) -> String {
    let deps = context
        .dependency_excerpt
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if let Some(purpose) = first_match(&deps, PURPOSE_DEPENDENCY_RULES) {
        return purpose.to_string();
    }

    let type_label = context.type_label.to_lowercase();
    if let Some(purpose) = first_match(&type_label, PURPOSE_TYPE_RULES) {
        return purpose.to_string();
    }

    "Application (specific purpose unclear from structure)".to_string()
}

const RUN_COMMAND_RULES: &[(&str, &str)] = &[
    ("next.js", "npm install && npm run dev"),
    ("vite", "npm install && npm run dev"),
    ("gatsby", "npm install && npm run develop"),
    ("node", "npm install && npm start"),
    ("flask", "pip install -r requirements.txt && flask run"),
    (
        "django",
        "pip install -r requirements.txt && python manage.py runserver",
    ),
    (
        "fastapi",
        "pip install -r requirements.txt && uvicorn main:app",
    ),
    ("research", "Open notebooks with Jupyter (jupyter notebook)"),
    ("analysis", "Open notebooks with Jupyter (jupyter notebook)"),
    ("rust", "cargo build && cargo run"),
    ("python", "pip install -r requirements.txt && python main.py"),
];

fn guess_run_command(context: &BriefingContext) -> String {
    let type_label = context.type_label.to_lowercase();
    first_match(&type_label, RUN_COMMAND_RULES)
        .unwrap_or("Check README or package.json for run command")
        .to_string()
}

fn identify_core_files(context: &BriefingContext) -> Vec<FileNote> {
    let mut files = Vec::new();

    if let Some(entry) = context.entry_point.as_deref() {
        files.push(FileNote::new(entry, "Main entry point"));
    }

    for key_file in &context.key_files {
        let name = key_file.path.to_lowercase();
        if name.contains("config") || name.contains("settings") {
            files.push(FileNote::new(&key_file.path, "Configuration file"));
        } else if name.contains("route") || name.contains("controller") {
            files.push(FileNote::new(&key_file.path, "Request routing"));
        } else if name.contains("api") || name.contains("service") {
            files.push(FileNote::new(&key_file.path, "External service integration"));
        } else if files.len() < 3 {
            files.push(FileNote::new(&key_file.path, "Important source file"));
        }
    }

    files.truncate(MAX_CORE_FILES);
    files
}

/// Directories conventionally safe to touch, in report order
const SAFE_DIRECTORIES: &[&str] = &[
    "components/",
    "styles/",
    "css/",
    "public/",
    "static/",
    "assets/",
    "images/",
    "fonts/",
    "docs/",
    "tests/",
    "__tests__/",
    "spec/",
    "examples/",
];

fn identify_safe_areas(context: &BriefingContext) -> Vec<String> {
    let structure = context.structure_text.to_lowercase();
    SAFE_DIRECTORIES
        .iter()
        .filter(|dir| structure.contains(*dir))
        .take(MAX_SAFE_AREAS)
        .map(|dir| dir.to_string())
        .collect()
}

const DANGEROUS_PATTERNS: &[(&str, &str)] = &[
    ("config", "Configuration affects entire app"),
    ("database", "Data layer changes break features"),
    ("auth", "Security-critical code"),
    ("middleware", "Affects all requests"),
    ("settings", "Global application settings"),
    (".env", "Environment variables"),
    ("package.json", "Dependencies"),
    ("requirements.txt", "Python dependencies"),
];

fn identify_dangerous_files(context: &BriefingContext) -> Vec<FileNote> {
    let structure = context.structure_text.to_lowercase();
    let mut dangerous = Vec::new();

    for (pattern, reason) in DANGEROUS_PATTERNS {
        if structure.contains(pattern) && dangerous.len() < MAX_DANGEROUS_KEYWORD_HITS {
            let file = if pattern.contains('.') {
                pattern.to_string()
            } else {
                format!("{pattern}/")
            };
            dangerous.push(FileNote::new(file, *reason));
        }
    }

    // The entry point is additive on top of the keyword cap. The "already
    // listed" check is a containment test on the collected file fields,
    // kept as-is from the behavior this output was tuned around.
    if let Some(entry) = context.entry_point.as_deref() {
        if !dangerous.iter().any(|note| note.file.contains(entry)) {
            dangerous.push(FileNote::new(
                entry,
                "Main entry point - breaks everything if misconfigured",
            ));
        }
    }

    dangerous
}

const DATA_FLOW_RULES: &[(&str, &str)] = &[
    (
        "next.js",
        "Browser → pages/ → components/ → API routes → external services",
    ),
    (
        "express",
        "HTTP request → routes/ → controllers/ → services/ → database",
    ),
    (
        "node",
        "HTTP request → routes/ → controllers/ → services/ → database",
    ),
    ("flask", "HTTP request → routes/views → models → database"),
    ("django", "HTTP request → routes/views → models → database"),
    ("react", "User interaction → components → state → API calls"),
    ("vue", "User interaction → components → state → API calls"),
    ("research", "Notebooks and scripts; run cells or execute scripts"),
    ("analysis", "Notebooks and scripts; run cells or execute scripts"),
    ("rust", "main.rs or lib.rs → modules → dependencies"),
];

fn guess_data_flow(context: &BriefingContext) -> String {
    let type_label = context.type_label.to_lowercase();
    first_match(&type_label, DATA_FLOW_RULES)
        .unwrap_or("Check entry point and follow imports to understand flow")
        .to_string()
}

fn generate_start_steps(context: &BriefingContext) -> Vec<String> {
    let mut steps = Vec::new();

    match context.entry_point.as_deref() {
        Some(entry) => steps.push(format!("Read {entry} to understand initialization")),
        None => steps.push("Find the entry point (check package.json or main file)".to_string()),
    }

    steps.push("Look at folder structure to understand organization".to_string());
    steps.push("Check configuration files for environment setup".to_string());

    let type_label = context.type_label.to_lowercase();
    if type_label.contains("api") || type_label.contains("server") {
        steps.push("Review routes/endpoints to understand API surface".to_string());
    } else {
        steps.push("Start with safe areas (components, styles) for small changes".to_string());
    }

    steps
}
