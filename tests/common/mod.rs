// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Builds scratch template directories and reads back rendered pages

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pagegen::RenderSettings;

pub const BASE_LAYOUT: &str = "<html><body>{{> @partial-block}}</body></html>";

pub struct TemplateSetBuilder {
    templates: Vec<(String, String)>,
    directories: Vec<String>,
}

impl TemplateSetBuilder {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            directories: Vec::new(),
        }
    }

    pub fn with_template(mut self, name: &str, content: &str) -> Self {
        self.templates.push((name.to_string(), content.to_string()));
        self
    }

    /// `base.html` wrapping its partial block in a minimal page
    pub fn with_base_layout(self) -> Self {
        self.with_template("base.html", BASE_LAYOUT)
    }

    /// A page that extends `base.html` with `body` as its content
    pub fn with_page(self, name: &str, body: &str) -> Self {
        let content = format!("{{{{#> base}}}}{}{{{{/base}}}}", body);
        self.with_template(name, &content)
    }

    pub fn with_directory(mut self, name: &str) -> Self {
        self.directories.push(name.to_string());
        self
    }

    pub fn write_to(&self, dir: &Path) {
        fs::create_dir_all(dir).expect("Failed to create template directory");
        for (name, content) in &self.templates {
            fs::write(dir.join(name), content).expect("Failed to write template");
        }
        for name in &self.directories {
            fs::create_dir_all(dir.join(name)).expect("Failed to create subdirectory");
        }
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let env = Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fs::create_dir_all(env.output_dir()).expect("Failed to create output directory");
        env
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn template_dir(&self) -> PathBuf {
        self.path().join("static").join("templates")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("site")
    }

    pub fn create_templates(&self, builder: &TemplateSetBuilder) -> PathBuf {
        let dir = self.template_dir();
        builder.write_to(&dir);
        dir
    }

    pub fn settings(&self) -> RenderSettings {
        RenderSettings::new(self.template_dir(), self.output_dir())
    }

    /// Rendered pages keyed by file name
    pub fn outputs(&self) -> BTreeMap<String, String> {
        fs::read_dir(self.output_dir())
            .expect("Failed to list output directory")
            .map(|entry| {
                let entry = entry.expect("Failed to read output entry");
                let name = entry.file_name().to_string_lossy().into_owned();
                let content = fs::read_to_string(entry.path()).expect("Failed to read output");
                (name, content)
            })
            .collect()
    }
}

pub fn progress_lines(progress: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(progress)
        .lines()
        .map(str::to_string)
        .collect()
}
