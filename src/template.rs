//! # Template Engine
//!
//! Turns a template identifier and a project name into the [`ArtifactSet`]
//! the writer materializes. Rendering is pure: the only input that changes
//! between runs is the date stamp, which callers pass in explicitly.
//!
//! ## Templates
//!
//! - `java-assignment`: README, `.gitignore`, `notes/requirements.md` and a
//!   `src/Main.java` greeting the project.
//! - `swift-assignment`: README, `.gitignore` and `Sources/App/main.swift`.
//! - `web-basic`: `index.html`, `style.css`, `app.js`, README, `.gitignore`
//!   and an empty `assets/` directory. The page head pulls in Bootstrap or
//!   Tailwind from a CDN when requested; Bootstrap wins when both are set.
//!
//! Template bodies live in the repository's `templates/` directory and are
//! embedded at compile time. Placeholders have the form `{{key}}`.

use std::fmt;

use chrono::NaiveDate;

use crate::artifact::ArtifactSet;

const JAVA_README: &str = include_str!("../templates/java/README.md");
const JAVA_REQUIREMENTS: &str = include_str!("../templates/java/requirements.md");
const JAVA_MAIN: &str = include_str!("../templates/java/Main.java");
const SWIFT_README: &str = include_str!("../templates/swift/README.md");
const SWIFT_MAIN: &str = include_str!("../templates/swift/main.swift");
const WEB_INDEX: &str = include_str!("../templates/web/index.html");
const WEB_TAILWIND_HEAD: &str = include_str!("../templates/web/tailwind.html");
const WEB_BOOTSTRAP_HEAD: &str = include_str!("../templates/web/bootstrap.html");
const WEB_STYLE: &str = include_str!("../templates/web/style.css");
const WEB_SCRIPT: &str = include_str!("../templates/web/app.js");
const WEB_README: &str = include_str!("../templates/web/README.md");
const GITPREP_README: &str = include_str!("../templates/gitprep-README.md");

/// `.gitignore` for Java projects, also used by `gitprep`.
pub const JAVA_GITIGNORE: &str = include_str!("../templates/gitignore/java.gitignore");
const SWIFT_GITIGNORE: &str = include_str!("../templates/gitignore/swift.gitignore");
const WEB_GITIGNORE: &str = include_str!("../templates/gitignore/web.gitignore");

/// A project template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    JavaAssignment,
    WebBasic { tailwind: bool, bootstrap: bool },
    SwiftAssignment,
}

/// CSS framework pulled into a web page head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebFramework {
    Bootstrap,
    Tailwind,
    Plain,
}

impl WebFramework {
    /// Bootstrap takes precedence when both are requested.
    pub fn resolve(tailwind: bool, bootstrap: bool) -> Self {
        if bootstrap {
            WebFramework::Bootstrap
        } else if tailwind {
            WebFramework::Tailwind
        } else {
            WebFramework::Plain
        }
    }

    fn head(self) -> &'static str {
        match self {
            WebFramework::Bootstrap => WEB_BOOTSTRAP_HEAD,
            WebFramework::Tailwind => WEB_TAILWIND_HEAD,
            WebFramework::Plain => "",
        }
    }

    fn main_class(self) -> &'static str {
        match self {
            WebFramework::Bootstrap => " class=\"container py-4\"",
            WebFramework::Tailwind => " class=\"p-6 max-w-xl mx-auto\"",
            WebFramework::Plain => "",
        }
    }
}

impl Template {
    /// Look up a template by identifier. Unknown identifiers yield `None`.
    ///
    /// `tailwind` and `bootstrap` only matter for `web-basic`.
    pub fn from_id(id: &str, tailwind: bool, bootstrap: bool) -> Option<Self> {
        match id.trim() {
            "java-assignment" => Some(Template::JavaAssignment),
            "web-basic" => Some(Template::WebBasic {
                tailwind,
                bootstrap,
            }),
            "swift-assignment" => Some(Template::SwiftAssignment),
            _ => None,
        }
    }

    /// Identifier accepted by `--template`.
    pub fn id(&self) -> &'static str {
        match self {
            Template::JavaAssignment => "java-assignment",
            Template::WebBasic { .. } => "web-basic",
            Template::SwiftAssignment => "swift-assignment",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::WebBasic {
                tailwind,
                bootstrap,
            } => match WebFramework::resolve(*tailwind, *bootstrap) {
                WebFramework::Bootstrap => f.write_str("web-basic (bootstrap)"),
                WebFramework::Tailwind => f.write_str("web-basic (tailwind)"),
                WebFramework::Plain => f.write_str("web-basic"),
            },
            other => f.write_str(other.id()),
        }
    }
}

/// Replace every `{{key}}` in `body` with its value in one pass.
///
/// Substituted values are copied verbatim, so a project named `{{date}}`
/// stays `{{date}}`. Unknown placeholders are left as they are.
fn fill(body: &str, vars: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(body.len());
    let mut rest = body;

    while let Some(start) = rest.find("{{") {
        filled.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => filled.push_str(value),
            None => filled.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    filled.push_str(rest);
    filled
}

/// Render the file set for `template`.
pub fn render(template: &Template, name: &str, date: NaiveDate) -> ArtifactSet {
    let date = date.to_string();
    let vars = [("name", name), ("date", date.as_str())];
    let mut set = ArtifactSet::new();

    match *template {
        Template::JavaAssignment => {
            set.add_file_string("README.md", &fill(JAVA_README, &vars));
            set.add_file_string(".gitignore", JAVA_GITIGNORE);
            set.add_file_string("notes/requirements.md", JAVA_REQUIREMENTS);
            set.add_file_string("src/Main.java", &fill(JAVA_MAIN, &vars));
        }
        Template::SwiftAssignment => {
            set.add_file_string("README.md", &fill(SWIFT_README, &vars));
            set.add_file_string(".gitignore", SWIFT_GITIGNORE);
            set.add_file_string("Sources/App/main.swift", &fill(SWIFT_MAIN, &vars));
        }
        Template::WebBasic {
            tailwind,
            bootstrap,
        } => {
            let framework = WebFramework::resolve(tailwind, bootstrap);
            let index = fill(
                WEB_INDEX,
                &[
                    ("framework_head", framework.head()),
                    ("main_class", framework.main_class()),
                    ("name", name),
                    ("date", date.as_str()),
                ],
            );
            set.add_directory("assets");
            set.add_file_string("index.html", &index);
            set.add_file_string("style.css", WEB_STYLE);
            set.add_file_string("app.js", WEB_SCRIPT);
            set.add_file_string("README.md", &fill(WEB_README, &vars));
            set.add_file_string(".gitignore", WEB_GITIGNORE);
        }
    }

    set
}

/// Render by identifier. `None` means "not scaffolded": the identifier is
/// unknown and nothing should be written.
pub fn render_id(
    id: &str,
    name: &str,
    date: NaiveDate,
    tailwind: bool,
    bootstrap: bool,
) -> Option<ArtifactSet> {
    Template::from_id(id, tailwind, bootstrap).map(|template| render(&template, name, date))
}

/// Files `gitprep` adds to an existing directory.
pub fn render_gitprep(dir_name: &str, date: NaiveDate) -> ArtifactSet {
    let date = date.to_string();
    let mut set = ArtifactSet::new();
    set.add_file_string(
        "README.md",
        &fill(GITPREP_README, &[("name", dir_name), ("date", date.as_str())]),
    );
    set.add_file_string(".gitignore", JAVA_GITIGNORE);
    set
}
