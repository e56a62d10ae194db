use crate::classification::ProjectClassification;
use crate::evidence::Evidence;

/// One classification rule: a predicate over the evidence and the
/// resolver to run when it matches.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Evidence) -> bool,
    pub resolve: fn(&Evidence) -> ProjectClassification,
}

/// A priority group of rules. Tiers are evaluated top to bottom and the
/// first matching rule in the first matching tier wins; everything below
/// is skipped.
pub struct Tier {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

/// The canonical rule table.
///
/// Runtime-defining manifests outrank `package.json` deliberately: a Node
/// tooling manifest can coexist with a non-JavaScript project (used only
/// for linting or docs), so runtime evidence is decisive when present.
pub const TIERS: &[Tier] = &[
    Tier {
        name: "runtime-authority",
        rules: &[
            Rule {
                name: "rust-manifest",
                applies: |e| e.has_filename("Cargo.toml"),
                resolve: |_| {
                    ProjectClassification::new(
                        "Rust project",
                        "Rust",
                        &["src/main.rs", "src/lib.rs", "src/bin"],
                    )
                },
            },
            Rule {
                name: "django-manage-script",
                applies: |e| e.any_path_contains("manage.py"),
                resolve: resolve_django,
            },
            Rule {
                name: "python-project-manifest",
                applies: |e| e.has_filename("pyproject.toml"),
                resolve: resolve_python_framework,
            },
            Rule {
                name: "go-module",
                applies: |e| e.has_filename("go.mod"),
                resolve: |_| {
                    ProjectClassification::new("Go project", "Go", &["main.go", "cmd/main.go"])
                },
            },
        ],
    },
    Tier {
        name: "application-manifest",
        rules: &[Rule {
            name: "python-dependency-manifest",
            applies: |e| {
                e.has_filename("requirements.txt")
                    || e.has_filename("Pipfile")
                    || e.has_filename("setup.py")
            },
            resolve: resolve_python_framework,
        }],
    },
    Tier {
        name: "tooling-manifest",
        rules: &[Rule {
            name: "node-package-manifest",
            applies: |e| e.has_filename("package.json"),
            resolve: resolve_node_framework,
        }],
    },
    Tier {
        name: "bare-ecosystem",
        rules: &[Rule {
            name: "ruby-gemfile",
            applies: |e| e.has_filename("Gemfile"),
            resolve: |_| ProjectClassification::new("Ruby project", "Ruby", &["config.ru", "app.rb"]),
        }],
    },
    Tier {
        name: "notebook-heuristic",
        rules: &[Rule {
            name: "notebooks-without-entrypoint",
            applies: |e| e.has_extension(".ipynb") && !has_clear_app_entrypoint(e),
            resolve: |_| {
                ProjectClassification::new("Research / analysis environment", "Python/Jupyter", &[])
            },
        }],
    },
    Tier {
        name: "fallback",
        rules: &[Rule {
            name: "extension-frequency",
            applies: |_| true,
            resolve: resolve_by_extension_frequency,
        }],
    },
];

fn resolve_django(evidence: &Evidence) -> ProjectClassification {
    let manage_path = evidence
        .find_path_suffix("manage.py")
        .map(|r| r.path.as_str())
        .unwrap_or("manage.py");
    ProjectClassification::new(
        "Django application",
        "Python",
        &[manage_path, "wsgi.py", "asgi.py"],
    )
}

/// Python sub-classifier: distinguish Django, Flask, FastAPI, generic.
fn resolve_python_framework(evidence: &Evidence) -> ProjectClassification {
    // Django normally wins in the runtime tier already, but the
    // dependency-manifest route has to re-check before assuming Flask.
    if evidence.any_path_contains("manage.py") {
        return resolve_django(evidence);
    }

    if evidence.has_filename("app.py") || evidence.has_filename("application.py") {
        return ProjectClassification::new(
            "Flask application",
            "Python",
            &["app.py", "application.py", "wsgi.py", "asgi.py"],
        );
    }

    if has_flask_module_layout(evidence) {
        let app_init = evidence
            .records()
            .iter()
            .find(|r| r.path.contains("app/__init__.py"))
            .map(|r| r.path.as_str())
            .unwrap_or("app/__init__.py");
        return ProjectClassification::new(
            "Flask web service",
            "Python",
            &["wsgi.py", "asgi.py", app_init],
        );
    }

    if evidence.has_filename("main.py") {
        return ProjectClassification::new(
            "FastAPI application",
            "Python",
            &["main.py", "wsgi.py", "asgi.py"],
        );
    }

    ProjectClassification::new(
        "Python project",
        "Python",
        &["main.py", "app.py", "__main__.py", "wsgi.py", "asgi.py"],
    )
}

/// Flask module layout: an `app/__init__.py` plus any routes-shaped directory
fn has_flask_module_layout(evidence: &Evidence) -> bool {
    let has_app_init = evidence
        .records()
        .iter()
        .any(|r| r.path.contains("__init__.py") && r.path.contains("app/"));
    if !has_app_init {
        return false;
    }
    const ROUTE_INDICATORS: &[&str] = &["routes", "controllers", "api", "views", "blueprints"];
    evidence.records().iter().any(|r| {
        let lower = r.path.to_lowercase();
        ROUTE_INDICATORS.iter().any(|ind| lower.contains(ind))
    })
}

const NODE_ENTRY_POINTS: &[&str] = &[
    // Next.js app router
    "app/page.tsx",
    "app/page.js",
    "app/layout.tsx",
    "app/layout.js",
    // Pages router / classic SPA layouts
    "pages/index.js",
    "pages/index.tsx",
    "src/pages/index.js",
    "src/main.ts",
    "src/main.js",
    "src/index.ts",
    "src/index.js",
    "index.js",
    "server.js",
    "app.js",
];

/// Node sub-classifier: keyed on framework-config filenames.
fn resolve_node_framework(evidence: &Evidence) -> ProjectClassification {
    let language = "JavaScript/TypeScript";

    if evidence.has_filename("next.config.js") || evidence.has_filename("next.config.mjs") {
        return ProjectClassification::new("Next.js application", language, NODE_ENTRY_POINTS);
    }
    if evidence.any_filename_contains("vite.config") {
        let mut entries = vec!["src/main.js", "src/main.tsx", "src/main.ts", "index.html"];
        entries.extend_from_slice(NODE_ENTRY_POINTS);
        return ProjectClassification::new("Vite application", language, &entries);
    }
    if evidence.has_filename("gatsby-config.js") {
        let mut entries = vec!["gatsby-config.js", "src/pages/index.js"];
        entries.extend_from_slice(NODE_ENTRY_POINTS);
        return ProjectClassification::new("Gatsby site", language, &entries);
    }

    ProjectClassification::new("Node.js project", language, NODE_ENTRY_POINTS)
}

/// Signals that the project has a real application entry point, which
/// disqualifies the notebook heuristic.
fn has_clear_app_entrypoint(evidence: &Evidence) -> bool {
    const APP_SIGNALS: &[&str] = &[
        "manage.py",
        "app.py",
        "main.py",
        "application.py",
        "package.json",
        "Cargo.toml",
        "go.mod",
    ];
    APP_SIGNALS
        .iter()
        .any(|signal| evidence.any_path_contains(signal))
}

fn resolve_by_extension_frequency(evidence: &Evidence) -> ProjectClassification {
    let language = match evidence.most_common_extension() {
        Some(ext) => format!("Files with {ext} extension"),
        None => "Mixed".to_string(),
    };
    ProjectClassification {
        type_label: "Unknown project".to_string(),
        language_label: language,
        entry_candidates: Vec::new(),
    }
}
