// ABOUTME: Collects partial references and inline partial definitions from a compiled template
// ABOUTME: Lets the engine reject a page whose parent layout does not exist before rendering

use handlebars::template::{DecoratorTemplate, Parameter, Template, TemplateElement};
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;

/// Partials a template pulls in and inline partials it defines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    /// `{{#> name}}...{{/name}}`, the layout a page wraps itself in
    pub parents: BTreeSet<String>,
    /// `{{> name}}`
    pub includes: BTreeSet<String>,
    /// `{{#*inline "name"}}`
    pub inline: BTreeSet<String>,
}

impl References {
    /// Walk every element of `template`, including the bodies of blocks.
    /// Dynamic partial names and `@`-prefixed names such as `@partial-block`
    /// are not collected.
    pub fn collect(template: &Template) -> Self {
        let mut references = Self::default();
        references.visit(template);
        references
    }

    fn visit(&mut self, template: &Template) {
        for element in &template.elements {
            match element {
                TemplateElement::PartialBlock(decorator) => {
                    if let Some(name) = static_name(&decorator.name) {
                        self.parents.insert(name.to_string());
                    }
                    self.visit_nested(decorator.template.as_ref());
                }
                TemplateElement::PartialExpression(decorator) => {
                    if let Some(name) = static_name(&decorator.name) {
                        self.includes.insert(name.to_string());
                    }
                }
                TemplateElement::DecoratorBlock(decorator) => {
                    if let Some(name) = inline_name(decorator) {
                        self.inline.insert(name.to_string());
                    }
                    self.visit_nested(decorator.template.as_ref());
                }
                TemplateElement::HelperBlock(helper) => {
                    self.visit_nested(helper.template.as_ref());
                    self.visit_nested(helper.inverse.as_ref());
                }
                _ => {}
            }
        }
    }

    fn visit_nested(&mut self, template: Option<&Template>) {
        if let Some(template) = template {
            self.visit(template);
        }
    }
}

fn static_name(parameter: &Parameter) -> Option<&str> {
    match parameter {
        Parameter::Name(name) if !name.starts_with('@') => Some(name.as_str()),
        _ => None,
    }
}

fn inline_name(decorator: &DecoratorTemplate) -> Option<&str> {
    match (&decorator.name, decorator.params.first()) {
        (Parameter::Name(name), Some(Parameter::Literal(JsonValue::String(inline))))
            if name == "inline" =>
        {
            Some(inline.as_str())
        }
        _ => None,
    }
}
