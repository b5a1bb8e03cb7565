// ABOUTME: Template engine capability trait and its Handlebars implementation
// ABOUTME: Loads every template in a root directory so pages can reference each other by name

use handlebars::Handlebars;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::context::RenderContext;
use super::error::{Result, TemplateError};
use super::references::References;

/// What the renderer needs from a template engine: look a template up by
/// name inside its root directory and render it against a variable mapping.
pub trait TemplateEngine {
    fn has_template(&self, name: &str) -> bool;

    fn render(&self, name: &str, context: &RenderContext) -> Result<String>;
}

#[derive(Debug, Clone)]
enum SourceState {
    Ready,
    Broken(String),
    Unreadable,
}

#[derive(Debug, Clone)]
struct TemplateSource {
    file_name: String,
    state: SourceState,
}

pub struct HandlebarsEngine {
    handlebars: Handlebars<'static>,
    sources: HashMap<String, TemplateSource>,
}

impl HandlebarsEngine {
    /// Create an engine rooted at `root`, listing the directory itself.
    pub fn with_root(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut entries = Vec::new();
        for entry in fs::read_dir(root)? {
            entries.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(Self::from_listing(root, &entries))
    }

    /// Create an engine from a listing already taken of `root`.
    ///
    /// Every regular file among `entries` is registered under its file name
    /// (`base.html`) and, when no other file shares it, under its stem
    /// (`base`) as well. A file that cannot be read or compiled does not
    /// fail construction; the error is reported when it is rendered.
    pub fn from_listing(root: impl AsRef<Path>, entries: &[String]) -> Self {
        let root = root.as_ref();
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        let mut file_names: Vec<String> = entries
            .iter()
            .filter(|name| root.join(name.as_str()).is_file())
            .cloned()
            .collect();
        file_names.sort();

        let mut sources = HashMap::new();
        for file_name in &file_names {
            let state = match fs::read_to_string(root.join(file_name)) {
                Ok(content) => match handlebars.register_template_string(file_name, &content) {
                    Ok(()) => SourceState::Ready,
                    Err(e) => {
                        warn!("Template {} failed to compile: {}", file_name, e);
                        SourceState::Broken(e.to_string())
                    }
                },
                Err(e) => {
                    warn!("Template {} could not be read: {}", file_name, e);
                    SourceState::Unreadable
                }
            };
            sources.insert(
                file_name.clone(),
                TemplateSource {
                    file_name: file_name.clone(),
                    state,
                },
            );
        }

        let mut stem_counts: HashMap<String, usize> = HashMap::new();
        for file_name in &file_names {
            *stem_counts.entry(file_stem(file_name)).or_default() += 1;
        }
        for file_name in &file_names {
            let stem = file_stem(file_name);
            if stem == *file_name || stem_counts[&stem] > 1 || sources.contains_key(&stem) {
                continue;
            }
            if let Some(template) = handlebars.get_template(file_name).cloned() {
                handlebars.register_template(&stem, template);
            }
            let source = sources[file_name].clone();
            sources.insert(stem, source);
        }

        debug!(
            "Indexed {} templates under {}",
            file_names.len(),
            root.display()
        );

        Self {
            handlebars,
            sources,
        }
    }

    /// Treat variables missing from the context as render errors
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.handlebars.set_strict_mode(strict);
        self
    }

    /// Registered template names, aliases included
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Ensure `name` and every template it pulls in compiled, and that each
    /// layout it wraps itself in (`{{#> layout}}`) exists as a template or as
    /// an inline partial defined somewhere in the chain. Handlebars would
    /// otherwise render the block body alone. Plain `{{> partial}}` includes
    /// are left to the render itself, so includes in branches that never
    /// render do not fail the page.
    pub fn check_references(&self, name: &str) -> Result<()> {
        let mut visited = BTreeSet::new();
        let mut pending = vec![name.to_string()];
        let mut inline = BTreeSet::new();
        let mut unresolved = Vec::new();

        while let Some(current) = pending.pop() {
            let source = match self.sources.get(&current) {
                Some(source) => source,
                None => continue,
            };
            if !visited.insert(source.file_name.clone()) {
                continue;
            }

            match &source.state {
                SourceState::Ready => {}
                SourceState::Broken(message) => {
                    return Err(TemplateError::Syntax {
                        name: source.file_name.clone(),
                        message: message.clone(),
                    })
                }
                SourceState::Unreadable => {
                    return Err(TemplateError::NotFound(source.file_name.clone()))
                }
            }
            let template = match self.handlebars.get_template(&source.file_name) {
                Some(template) => template,
                None => return Err(TemplateError::NotFound(source.file_name.clone())),
            };
            let refs = References::collect(template);

            inline.extend(refs.inline);
            for parent in refs.parents {
                if self.sources.contains_key(&parent) {
                    pending.push(parent);
                } else {
                    unresolved.push((source.file_name.clone(), parent));
                }
            }
            pending.extend(
                refs.includes
                    .into_iter()
                    .filter(|include| self.sources.contains_key(include)),
            );
        }

        match unresolved
            .into_iter()
            .find(|(_, reference)| !inline.contains(reference))
        {
            Some((name, reference)) => Err(TemplateError::UndefinedReference { name, reference }),
            None => Ok(()),
        }
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn has_template(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        if !self.has_template(name) {
            return Err(TemplateError::NotFound(name.to_string()));
        }
        self.check_references(name)?;

        let json_context = context.to_json()?;
        let rendered = self.handlebars.render(name, &json_context)?;
        Ok(rendered)
    }
}

/// File name without its final extension; dotfiles keep their name
pub fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}
